use crate::error::StoreError;
use crate::schema::props;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = props)]
pub struct Prop {
    pub id: i32,
    pub location: Option<String>,
    pub storage_id: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub quantity: Option<i32>,
    /// JSON array of photo filenames in the upload folder.
    pub file: Option<String>,
    pub timestamp: Option<String>,
}

/// `None` fields are left out of the insert so the column default applies.
#[derive(Insertable, Debug, Default)]
#[diesel(table_name = props)]
pub struct NewProp {
    pub location: Option<String>,
    pub storage_id: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub quantity: Option<i32>,
    pub file: Option<String>,
    pub timestamp: Option<String>,
}

/// Replaces every editable column; `None` writes NULL.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = props, treat_none_as_null = true)]
pub struct PropChanges {
    pub location: Option<String>,
    pub storage_id: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub quantity: Option<i32>,
}

impl Prop {
    pub(crate) fn photo_files(&self) -> Vec<String> {
        self.file
            .as_deref()
            .and_then(|file| serde_json::from_str(file).ok())
            .unwrap_or_default()
    }

    pub(crate) fn create(conn: &mut SqliteConnection, new_prop: &NewProp) -> Result<Prop, StoreError> {
        Ok(diesel::insert_into(props::table)
            .values(new_prop)
            .returning(Prop::as_returning())
            .get_result(conn)?)
    }

    /// Newest first. A search term is matched as a substring of the storage
    /// id, description, keywords, category or location.
    pub(crate) fn list(
        conn: &mut SqliteConnection,
        search: Option<&str>,
    ) -> Result<Vec<Prop>, StoreError> {
        let mut query = props::table
            .select(Prop::as_select())
            .order(props::timestamp.desc())
            .then_order_by(props::id.desc())
            .into_boxed();

        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            let pattern = format!("%{}%", term);
            query = query.filter(
                props::storage_id
                    .nullable()
                    .like(pattern.clone())
                    .or(props::description.like(pattern.clone()))
                    .or(props::keywords.like(pattern.clone()))
                    .or(props::category.like(pattern.clone()))
                    .or(props::location.like(pattern)),
            );
        }

        Ok(query.load(conn)?)
    }

    pub(crate) fn get(conn: &mut SqliteConnection, prop_id: i32) -> Result<Prop, StoreError> {
        Ok(props::table
            .find(prop_id)
            .select(Prop::as_select())
            .first(conn)?)
    }

    pub(crate) fn update(
        conn: &mut SqliteConnection,
        prop_id: i32,
        changes: &PropChanges,
    ) -> Result<(), StoreError> {
        let updated = diesel::update(props::table.find(prop_id))
            .set(changes)
            .execute(conn)?;

        if updated == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    /// Removes the row and hands it back so its photos can be cleaned up.
    pub(crate) fn delete(conn: &mut SqliteConnection, prop_id: i32) -> Result<Prop, StoreError> {
        conn.transaction(|c| {
            let prop = Prop::get(c, prop_id)?;
            diesel::delete(&prop).execute(c)?;
            Ok(prop)
        })
    }
}
