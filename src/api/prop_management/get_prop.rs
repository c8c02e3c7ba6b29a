use crate::api::prop_management::models::PropOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::models::prop::Prop;
use rocket::serde::json::Json;

#[get("/prop/<prop_id>")]
pub(crate) async fn get_prop(prop_id: i32, conn: DbConn) -> Result<Json<PropOut>, ErrorResponse> {
    let prop = conn.run(move |c| Prop::get(c, prop_id)).await?;

    Ok(Json(prop.into()))
}
