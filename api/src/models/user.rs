use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use serde::Serialize;

/// Display name substituted when a comment's author no longer resolves.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Queryable, Selectable, Debug, Serialize, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub created_at: chrono::NaiveDateTime,
}

impl User {
    pub fn name_or_unknown(user: Option<&User>) -> String {
        match user {
            Some(user) => user.name.clone(),
            None => UNKNOWN_NAME.to_owned(),
        }
    }
}

pub async fn find(conn: &mut AsyncPgConnection, uid: &str) -> QueryResult<Option<User>> {
    use crate::schema::users;

    users::table
        .filter(users::uid.eq(uid))
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()
}
