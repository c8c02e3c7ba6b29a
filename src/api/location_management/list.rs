use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::models::location::Location;
use rocket::serde::json::Json;

#[get("/locations")]
pub(crate) async fn get_locations(conn: DbConn) -> Result<Json<Vec<Location>>, ErrorResponse> {
    let locations = conn.run(|c| Location::list(c)).await?;

    Ok(Json(locations))
}
