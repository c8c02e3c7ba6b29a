use crate::error::StoreError;
use crate::schema::users;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct NewUser<'a> {
    username: &'a str,
    password: &'a str,
}

impl User {
    /// The password is stored as given.
    pub(crate) fn create(
        conn: &mut SqliteConnection,
        username: &str,
        password: &str,
    ) -> Result<User, StoreError> {
        let new_user = NewUser { username, password };

        diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(conn)
            .map_err(|err| match StoreError::from(err) {
                StoreError::UniqueViolation(_) => {
                    StoreError::UniqueViolation(format!("User {} already exists.", username))
                }
                other => other,
            })
    }

    pub(crate) fn find_by_username(
        conn: &mut SqliteConnection,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        Ok(users::table
            .filter(users::username.eq(username))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }
}
