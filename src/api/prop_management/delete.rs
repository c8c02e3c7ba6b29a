use std::path::Path;

use crate::api::prop_management::models::PropChanged;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::models::prop::Prop;
use crate::settings::Settings;
use crate::uploads;
use rocket::serde::json::Json;
use rocket::State;

#[delete("/prop/<prop_id>")]
pub(crate) async fn delete_prop(
    prop_id: i32,
    conn: DbConn,
    settings: &State<Settings>,
) -> Result<Json<PropChanged>, ErrorResponse> {
    let prop = conn.run(move |c| Prop::delete(c, prop_id)).await?;

    uploads::remove_photos(Path::new(&settings.upload_folder), &prop.photo_files()).await;
    log::info!("deleted prop {}", prop_id);

    Ok(Json(PropChanged {
        message: "Prop deleted successfully!",
        id: prop_id,
    }))
}
