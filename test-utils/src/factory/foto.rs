//! Photo factory. Stores whatever bytes it is given; callers that render reports
//! should pass a real encoded image.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Inserts a photo attached to an inspection.
///
/// # Arguments
/// - `vistoria_id` - Owning inspection
/// - `mimetype` - Stored content type, e.g. `"image/png"`
/// - `data` - Raw file bytes
pub async fn create_foto_for_vistoria(
    db: &DatabaseConnection,
    vistoria_id: &str,
    mimetype: &str,
    data: Vec<u8>,
) -> Result<entity::foto::Model, DbErr> {
    let id = next_id();
    entity::foto::ActiveModel {
        id: ActiveValue::Set(format!("FotoTeste{}", id)),
        imovel_id: ActiveValue::Set(None),
        vistoria_id: ActiveValue::Set(Some(vistoria_id.to_string())),
        componente_id: ActiveValue::Set(None),
        mimetype: ActiveValue::Set(mimetype.to_string()),
        file_name: ActiveValue::Set(Some(format!("foto{}.bin", id))),
        data: ActiveValue::Set(data),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
