use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

// The model that maps to the database table
#[derive(Queryable, Selectable, Debug, Serialize, Clone)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub uid: String,
    pub event_uid: String,
    pub user_uid: String,
    pub parent_uid: Option<String>,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub uid: String,
    pub event_uid: String,
    pub user_uid: String,
    pub parent_uid: Option<String>,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl Comment {
    pub fn new_top_level(event_uid: &str, user_uid: &str, content: String) -> NewComment {
        NewComment {
            uid: uuid::Uuid::new_v4().to_string(),
            event_uid: event_uid.to_owned(),
            user_uid: user_uid.to_owned(),
            parent_uid: None,
            content,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// A reply always inherits the event of its parent, so it is constructed
    /// from the parent row rather than from a caller-supplied event uid.
    pub fn new_reply(parent: &Comment, user_uid: &str, content: String) -> NewComment {
        NewComment {
            uid: uuid::Uuid::new_v4().to_string(),
            event_uid: parent.event_uid.clone(),
            user_uid: user_uid.to_owned(),
            parent_uid: Some(parent.uid.clone()),
            content,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
