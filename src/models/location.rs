use crate::error::StoreError;
use crate::schema::locations;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use serde::Serialize;

#[derive(Queryable, Selectable, Serialize, Debug, PartialEq)]
#[diesel(table_name = locations)]
pub struct Location {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = locations)]
struct NewLocation<'a> {
    name: &'a str,
}

impl Location {
    pub(crate) fn list(conn: &mut SqliteConnection) -> Result<Vec<Location>, StoreError> {
        Ok(locations::table
            .order(locations::name.asc())
            .select(Location::as_select())
            .load(conn)?)
    }

    /// Registers a location under its trimmed name.
    pub(crate) fn create(conn: &mut SqliteConnection, name: &str) -> Result<Location, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("Location name must not be empty".to_string()));
        }

        diesel::insert_into(locations::table)
            .values(&NewLocation { name })
            .returning(Location::as_returning())
            .get_result(conn)
            .map_err(|err| match StoreError::from(err) {
                StoreError::UniqueViolation(_) => {
                    StoreError::UniqueViolation(format!("Location '{}' already exists.", name))
                }
                other => other,
            })
    }
}
