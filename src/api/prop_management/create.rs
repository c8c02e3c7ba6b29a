use std::path::Path;

use crate::api::prop_management::models::{required, PropCreated, PropIn, PropOut, QuantityIn};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::models::prop::{NewProp, Prop};
use crate::settings::Settings;
use crate::uploads;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

const DEFAULT_STATUS: &str = "Available";

#[post("/add_prop", data = "<prop_in>")]
pub(crate) async fn add_prop(
    prop_in: Json<PropIn>,
    conn: DbConn,
    settings: &State<Settings>,
) -> Result<(Status, Json<PropCreated>), ErrorResponse> {
    let prop_in = prop_in.into_inner();
    let storage_id = required("storageId", prop_in.storage_id)?;
    let location = required("location", prop_in.location)?;
    let timestamp = required("timestamp", prop_in.timestamp)?;
    let quantity = prop_in.quantity.map(QuantityIn::parse).transpose()?;

    let upload_folder = Path::new(&settings.upload_folder);
    let mut photos = Vec::with_capacity(prop_in.photos.len());
    for data_url in &prop_in.photos {
        match uploads::save_photo(upload_folder, data_url).await {
            Ok(filename) => photos.push(filename),
            Err(err) => log::warn!("skipping photo: {}", err),
        }
    }

    let file = serde_json::to_string(&photos).map_err(|err| {
        ErrorResponse::new(
            Status { code: 500 },
            format!("Couldn't encode photo list: {}", err),
        )
    })?;

    let new_prop = NewProp {
        location: Some(location),
        storage_id,
        description: prop_in.description,
        keywords: prop_in.keywords,
        category: prop_in.category,
        status: Some(prop_in.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
        quantity,
        file: Some(file),
        timestamp: Some(timestamp),
    };

    let prop = match conn.run(move |c| Prop::create(c, &new_prop)).await {
        Ok(prop) => prop,
        Err(err) => {
            // roll back written photos
            uploads::remove_photos(upload_folder, &photos).await;
            return Err(err.into());
        }
    };
    log::info!("added prop {} with {} photos", prop.id, photos.len());

    Ok((
        Status::Created,
        Json(PropCreated {
            message: "Prop added successfully!",
            prop: PropOut::from(prop),
        }),
    ))
}
