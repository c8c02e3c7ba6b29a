use crate::api::location_management::models::{LocationCreated, LocationIn};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::models::location::Location;
use rocket::http::Status;
use rocket::serde::json::Json;

#[post("/locations", data = "<location>")]
pub(crate) async fn create_location(
    location: Json<LocationIn>,
    conn: DbConn,
) -> Result<(Status, Json<LocationCreated>), ErrorResponse> {
    let name = location.into_inner().name;

    let location = conn.run(move |c| Location::create(c, &name)).await?;
    log::info!("added location {} ({})", location.name, location.id);

    Ok((
        Status::Created,
        Json(LocationCreated {
            message: "Location added successfully!",
            id: location.id,
            name: location.name,
        }),
    ))
}
