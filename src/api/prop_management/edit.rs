use crate::api::prop_management::models::{PropChanged, PropUpdate};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::models::prop::Prop;
use rocket::serde::json::Json;

#[put("/prop/<prop_id>", data = "<update>")]
pub(crate) async fn edit_prop(
    prop_id: i32,
    update: Json<PropUpdate>,
    conn: DbConn,
) -> Result<Json<PropChanged>, ErrorResponse> {
    let changes = update.into_inner().into_changes()?;

    conn.run(move |c| Prop::update(c, prop_id, &changes)).await?;

    Ok(Json(PropChanged {
        message: "Prop updated successfully!",
        id: prop_id,
    }))
}
