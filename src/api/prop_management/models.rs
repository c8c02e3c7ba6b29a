use crate::error::ErrorResponse;
use crate::models::prop::{Prop, PropChanges};
use rocket::http::Status;
use serde::{Deserialize, Serialize};

/// Rejects a missing or blank field with a 400.
pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, ErrorResponse> {
    value.filter(|v| !v.trim().is_empty()).ok_or_else(|| {
        ErrorResponse::new(
            Status { code: 400 },
            format!("Missing or empty field: {}", field),
        )
    })
}

/// Quantities arrive as numbers or, from form inputs, as numeric strings.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum QuantityIn {
    Number(i32),
    Text(String),
}

impl QuantityIn {
    pub(crate) fn parse(self) -> Result<i32, ErrorResponse> {
        match self {
            QuantityIn::Number(quantity) => Ok(quantity),
            QuantityIn::Text(text) => text.trim().parse().map_err(|_| {
                ErrorResponse::new(
                    Status { code: 400 },
                    format!("Invalid quantity: {}", text),
                )
            }),
        }
    }
}

/// Body of `add_prop`, as sent by the web client.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PropIn {
    pub storage_id: Option<String>,
    pub location: Option<String>,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub quantity: Option<QuantityIn>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct PropUpdate {
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Storage_id")]
    pub storage_id: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Keywords")]
    pub keywords: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: Option<QuantityIn>,
}

impl PropUpdate {
    /// A missing quantity is written as 1.
    pub(crate) fn into_changes(self) -> Result<PropChanges, ErrorResponse> {
        Ok(PropChanges {
            storage_id: required("Storage_id", self.storage_id)?,
            quantity: Some(self.quantity.map_or(Ok(1), QuantityIn::parse)?),
            location: self.location,
            description: self.description,
            keywords: self.keywords,
            category: self.category,
            status: self.status,
        })
    }
}

#[derive(Serialize, Debug)]
pub struct PropOut {
    pub id: i32,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Storage_id")]
    pub storage_id: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Keywords")]
    pub keywords: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: Option<i32>,
    pub file: Vec<String>,
    pub timestamp: Option<String>,
}

impl From<Prop> for PropOut {
    fn from(prop: Prop) -> Self {
        PropOut {
            file: prop.photo_files(),
            id: prop.id,
            location: prop.location,
            storage_id: prop.storage_id,
            description: prop.description,
            keywords: prop.keywords,
            category: prop.category,
            status: prop.status,
            quantity: prop.quantity,
            timestamp: prop.timestamp,
        }
    }
}

#[derive(Serialize)]
pub struct PropCreated {
    pub message: &'static str,
    pub prop: PropOut,
}

#[derive(Serialize)]
pub struct PropChanged {
    pub message: &'static str,
    pub id: i32,
}
