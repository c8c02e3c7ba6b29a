use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LocationIn {
    pub name: String,
}

#[derive(Serialize)]
pub struct LocationCreated {
    pub message: &'static str,
    pub id: i32,
    pub name: String,
}
