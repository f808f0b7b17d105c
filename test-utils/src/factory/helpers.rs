//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a property with one inspection and one room.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Returns
/// - `Ok((imovel, vistoria, comodo))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_vistoria_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::imovel::Model,
        entity::vistoria::Model,
        entity::comodo::Model,
    ),
    DbErr,
> {
    let imovel = crate::factory::imovel::create_imovel(db).await?;
    let vistoria = crate::factory::vistoria::create_vistoria(db, &imovel.id).await?;
    let comodo = crate::factory::comodo::create_comodo(db, &imovel.id).await?;

    Ok((imovel, vistoria, comodo))
}
