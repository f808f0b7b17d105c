use crate::server::error::AppError;

/// Name split into the three stored parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NomeCompleto {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

/// Splits a full name into first, middle and last parts.
///
/// The first word is the first name and the last word the last name; everything in
/// between becomes the middle name.
///
/// # Returns
/// - `Some(NomeCompleto)` - At least one word present
/// - `None` - Blank input
pub fn split_full_name(full_name: &str) -> Option<NomeCompleto> {
    let words: Vec<&str> = full_name.split_whitespace().collect();

    match words.as_slice() {
        [] => None,
        [first] => Some(NomeCompleto {
            first_name: first.to_string(),
            middle_name: None,
            last_name: None,
        }),
        [first, last] => Some(NomeCompleto {
            first_name: first.to_string(),
            middle_name: None,
            last_name: Some(last.to_string()),
        }),
        [first, middle @ .., last] => Some(NomeCompleto {
            first_name: first.to_string(),
            middle_name: Some(middle.join(" ")),
            last_name: Some(last.to_string()),
        }),
    }
}

/// Joins the stored name parts back into a single display name.
pub fn join_name(first: &str, middle: Option<&str>, last: Option<&str>) -> String {
    [Some(first), middle, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps only the digits of a phone number, e.g. `(11) 99999-0000` → `11999990000`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Parses the `quantidade` query parameter used by room listings.
///
/// # Returns
/// - `Ok(usize)` - Positive number, or `default` when absent
/// - `Err(AppError::BadRequest)` - Not a positive integer
pub fn parse_quantidade(value: Option<&str>, default: usize) -> Result<usize, AppError> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(AppError::BadRequest(
                "Quantidade inválida. Deve ser um número positivo.".to_string(),
            )),
        },
    }
}
