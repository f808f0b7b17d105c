//! Generated primary keys.
//!
//! Most records use a readable prefix followed by a random number. Collisions are
//! possible, so callers check candidates against the table with [`unique_id`].

use std::future::Future;

use rand::Rng;
use sea_orm::DbErr;

use crate::server::error::{internal::InternalError, AppError};

/// Candidates tried before giving up with an internal error.
pub const MAX_ID_ATTEMPTS: usize = 10;

/// `{prefix}{n}` with `n` in `1..=10000`, e.g. `Imovel4821`.
pub fn numbered_id(prefix: &str) -> String {
    let n = rand::rng().random_range(1..=10_000);
    format!("{}{}", prefix, n)
}

/// `{prefix}` followed by four lowercase hex digits, e.g. `Vistoria3fa0`.
pub fn short_hex_id(prefix: &str) -> String {
    let n: u16 = rand::rng().random();
    format!("{}{:04x}", prefix, n)
}

/// Random UUID v4 string, used where ids are never shown to users.
pub fn uuid_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Draws candidates from `generate` until `exists` reports a free one.
///
/// # Arguments
/// - `prefix` - Used in the error when every attempt collides
/// - `generate` - Produces a candidate id
/// - `exists` - Checks whether a candidate is already taken
///
/// # Returns
/// - `Ok(String)` - Id not present in the table
/// - `Err(AppError::DbErr)` - Lookup failed
/// - `Err(AppError::InternalErr)` - All `MAX_ID_ATTEMPTS` candidates were taken
pub async fn unique_id<G, E, Fut>(prefix: &str, generate: G, mut exists: E) -> Result<String, AppError>
where
    G: Fn(&str) -> String,
    E: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, DbErr>>,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = generate(prefix);
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
    }

    Err(InternalError::IdGenerationExhausted {
        prefix: prefix.to_string(),
        attempts: MAX_ID_ATTEMPTS,
    }
    .into())
}
