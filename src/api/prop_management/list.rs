use crate::api::prop_management::models::PropOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::models::prop::Prop;
use rocket::serde::json::Json;

#[get("/props?<search>")]
pub(crate) async fn get_props(
    search: Option<String>,
    conn: DbConn,
) -> Result<Json<Vec<PropOut>>, ErrorResponse> {
    let props = conn
        .run(move |c| Prop::list(c, search.as_deref()))
        .await?;

    Ok(Json(props.into_iter().map(PropOut::from).collect()))
}
