use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::build_rocket;
use crate::settings::Settings;

// "hello" as a PNG data URL
const PHOTO: &str = "data:image/png;base64,aGVsbG8=";

fn client() -> (Client, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        database_url: dir.path().join("props.db").to_string_lossy().into_owned(),
        upload_folder: dir.path().join("uploads").to_string_lossy().into_owned(),
        cors_allowed_origin: "https://props.example".to_string(),
    };

    let client = Client::tracked(build_rocket(settings)).expect("valid rocket instance");
    (client, dir)
}

fn add_prop(client: &Client, body: Value) -> (Status, Value) {
    let response = client.post("/api/add_prop").json(&body).dispatch();
    let status = response.status();
    (status, response.into_json::<Value>().unwrap())
}

#[test]
fn locations_are_created_and_listed() {
    let (client, _dir) = client();

    let response = client
        .post("/api/locations")
        .json(&json!({ "name": "  Wardrobe " }))
        .dispatch();
    assert_eq!(response.status(), Status::Created);
    let body = response.into_json::<Value>().unwrap();
    assert_eq!(body["name"], "Wardrobe");
    assert_eq!(body["message"], "Location added successfully!");

    client
        .post("/api/locations")
        .json(&json!({ "name": "Attic" }))
        .dispatch();

    let list = client
        .get("/api/locations")
        .dispatch()
        .into_json::<Value>()
        .unwrap();
    let names = list
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Attic", "Wardrobe"]);
}

#[test]
fn duplicate_location_conflicts() {
    let (client, _dir) = client();
    client
        .post("/api/locations")
        .json(&json!({ "name": "Attic" }))
        .dispatch();

    let response = client
        .post("/api/locations")
        .json(&json!({ "name": "Attic" }))
        .dispatch();

    assert_eq!(response.status(), Status::Conflict);
    assert_eq!(
        response.into_json::<Value>().unwrap()["error"],
        "Location 'Attic' already exists."
    );
}

#[test]
fn blank_location_is_rejected() {
    let (client, _dir) = client();

    let response = client
        .post("/api/locations")
        .json(&json!({ "name": "   " }))
        .dispatch();

    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn add_prop_requires_storage_id() {
    let (client, _dir) = client();

    let (status, body) = add_prop(
        &client,
        json!({ "location": "Attic", "timestamp": "2024-01-01", "photos": [] }),
    );
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["error"], "Missing or empty field: storageId");

    let (status, _) = add_prop(
        &client,
        json!({ "storageId": "", "location": "Attic", "timestamp": "2024-01-01" }),
    );
    assert_eq!(status, Status::BadRequest);
}

#[test]
fn add_prop_applies_defaults_and_saves_photos() {
    let (client, dir) = client();

    let (status, body) = add_prop(
        &client,
        json!({
            "storageId": "B-12",
            "location": "Attic",
            "timestamp": "2024-01-01T10:00:00",
            "description": "Top hat",
            "photos": [PHOTO, "garbage"],
        }),
    );

    assert_eq!(status, Status::Created);
    let prop = &body["prop"];
    assert_eq!(prop["Storage_id"], "B-12");
    assert_eq!(prop["Quantity"], 1);
    assert_eq!(prop["Status"], "Available");

    let files = prop["file"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    let filename = files[0].as_str().unwrap();
    assert!(dir.path().join("uploads").join(filename).is_file());

    let image = client.get(format!("/uploads/{}", filename)).dispatch();
    assert_eq!(image.status(), Status::Ok);
    assert_eq!(image.content_type(), Some(ContentType::PNG));
    assert_eq!(image.into_bytes().unwrap(), b"hello");
}

#[test]
fn props_are_searched_and_fetched() {
    let (client, _dir) = client();
    add_prop(
        &client,
        json!({
            "storageId": "S-1",
            "location": "Armoury",
            "timestamp": "2024-02-01",
            "category": "Weapons",
        }),
    );
    let (_, hat) = add_prop(
        &client,
        json!({
            "storageId": "H-2",
            "location": "Attic",
            "timestamp": "2024-01-01",
            "keywords": "felt, hat",
            "quantity": 3,
        }),
    );

    let all = client.get("/api/props").dispatch().into_json::<Value>().unwrap();
    let ids = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["Storage_id"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, ["S-1", "H-2"]);

    let found = client
        .get("/api/props?search=felt")
        .dispatch()
        .into_json::<Value>()
        .unwrap();
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["Storage_id"], "H-2");

    let id = hat["prop"]["id"].as_i64().unwrap();
    let fetched = client
        .get(format!("/api/prop/{}", id))
        .dispatch()
        .into_json::<Value>()
        .unwrap();
    assert_eq!(fetched["Quantity"], 3);
    assert_eq!(fetched["file"], json!([]));

    let missing = client.get("/api/prop/999").dispatch();
    assert_eq!(missing.status(), Status::NotFound);
}

#[test]
fn props_are_updated() {
    let (client, _dir) = client();
    let (_, body) = add_prop(
        &client,
        json!({ "storageId": "C-1", "location": "Attic", "timestamp": "2024-01-01" }),
    );
    let id = body["prop"]["id"].as_i64().unwrap();

    let response = client
        .put(format!("/api/prop/{}", id))
        .json(&json!({
            "Location": "Stage left",
            "Storage_id": "C-2",
            "Status": "In use",
            "Quantity": 2,
        }))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let fetched = client
        .get(format!("/api/prop/{}", id))
        .dispatch()
        .into_json::<Value>()
        .unwrap();
    assert_eq!(fetched["Location"], "Stage left");
    assert_eq!(fetched["Storage_id"], "C-2");
    assert_eq!(fetched["Status"], "In use");
    assert_eq!(fetched["Quantity"], 2);
    assert_eq!(fetched["timestamp"], "2024-01-01");

    let missing = client
        .put("/api/prop/999")
        .json(&json!({ "Storage_id": "X" }))
        .dispatch();
    assert_eq!(missing.status(), Status::NotFound);

    let blank = client
        .put(format!("/api/prop/{}", id))
        .json(&json!({ "Storage_id": " " }))
        .dispatch();
    assert_eq!(blank.status(), Status::BadRequest);

    let missing_storage_id = client
        .put(format!("/api/prop/{}", id))
        .json(&json!({ "Location": "Attic" }))
        .dispatch();
    assert_eq!(missing_storage_id.status(), Status::BadRequest);
    assert_eq!(missing_storage_id.content_type(), Some(ContentType::JSON));
    assert_eq!(
        missing_storage_id.into_json::<Value>().unwrap()["error"],
        "Missing or empty field: Storage_id"
    );
}

#[test]
fn rejected_requests_answer_with_json_errors() {
    let (client, _dir) = client();

    let malformed = client
        .post("/api/add_prop")
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch();
    assert_eq!(malformed.status(), Status::BadRequest);
    assert_eq!(malformed.content_type(), Some(ContentType::JSON));
    assert_eq!(malformed.into_json::<Value>().unwrap()["error"], "Bad Request");

    let wrong_type = client
        .post("/api/locations")
        .json(&json!({ "name": 12 }))
        .dispatch();
    assert_eq!(wrong_type.status(), Status::UnprocessableEntity);
    assert!(wrong_type.into_json::<Value>().unwrap()["error"].is_string());

    let unknown = client.get("/api/nothing/here").dispatch();
    assert_eq!(unknown.status(), Status::NotFound);
    assert_eq!(unknown.into_json::<Value>().unwrap()["error"], "Not Found");
}

#[test]
fn quantity_accepts_numeric_strings() {
    let (client, _dir) = client();

    let (status, body) = add_prop(
        &client,
        json!({
            "storageId": "Q-1",
            "location": "Attic",
            "timestamp": "2024-01-01",
            "quantity": "2",
        }),
    );
    assert_eq!(status, Status::Created);
    assert_eq!(body["prop"]["Quantity"], 2);

    let (status, body) = add_prop(
        &client,
        json!({
            "storageId": "Q-2",
            "location": "Attic",
            "timestamp": "2024-01-01",
            "quantity": "lots",
        }),
    );
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["error"], "Invalid quantity: lots");

    let id = client
        .get("/api/props?search=Q-1")
        .dispatch()
        .into_json::<Value>()
        .unwrap()[0]["id"]
        .as_i64()
        .unwrap();
    let response = client
        .put(format!("/api/prop/{}", id))
        .json(&json!({ "Storage_id": "Q-1", "Quantity": " 5 " }))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let fetched = client
        .get(format!("/api/prop/{}", id))
        .dispatch()
        .into_json::<Value>()
        .unwrap();
    assert_eq!(fetched["Quantity"], 5);
}

#[test]
fn deleting_a_prop_removes_its_photos() {
    let (client, dir) = client();
    let (_, body) = add_prop(
        &client,
        json!({
            "storageId": "C-1",
            "location": "Attic",
            "timestamp": "2024-01-01",
            "photos": [PHOTO],
        }),
    );
    let id = body["prop"]["id"].as_i64().unwrap();
    let photo = dir
        .path()
        .join("uploads")
        .join(body["prop"]["file"][0].as_str().unwrap());
    assert!(photo.is_file());

    let response = client.delete(format!("/api/prop/{}", id)).dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert!(!photo.exists());
    assert_eq!(
        client.get(format!("/api/prop/{}", id)).dispatch().status(),
        Status::NotFound
    );
    assert_eq!(
        client.delete(format!("/api/prop/{}", id)).dispatch().status(),
        Status::NotFound
    );
}

#[test]
fn uploads_outside_the_folder_are_not_served() {
    let (client, _dir) = client();

    let response = client.get("/uploads/..%2Fprops.db").dispatch();

    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn responses_carry_cors_headers() {
    let (client, _dir) = client();

    let preflight = client.options("/api/props").dispatch();
    assert_eq!(preflight.status(), Status::NoContent);
    assert_eq!(
        preflight.headers().get_one("Access-Control-Allow-Origin"),
        Some("https://props.example")
    );

    let response = client.get("/api/locations").dispatch();
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("https://props.example")
    );
}
