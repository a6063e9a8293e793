use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::{
    models::comment::{Comment, NewComment},
    schema::comments,
};

/// Persists a new top-level comment on an event. The uid and creation
/// timestamp are assigned here; callers are responsible for having checked
/// that the event exists.
pub async fn insert_top_level(
    conn: &mut AsyncPgConnection,
    event_uid: &str,
    user_uid: &str,
    content: String,
) -> QueryResult<Comment> {
    insert(conn, Comment::new_top_level(event_uid, user_uid, content)).await
}

/// Persists a reply to an existing comment. Taking the parent row (not just
/// its uid) is what makes a reply inherit its parent's event.
pub async fn insert_reply(
    conn: &mut AsyncPgConnection,
    parent: &Comment,
    user_uid: &str,
    content: String,
) -> QueryResult<Comment> {
    insert(conn, Comment::new_reply(parent, user_uid, content)).await
}

async fn insert(conn: &mut AsyncPgConnection, new_comment: NewComment) -> QueryResult<Comment> {
    diesel::insert_into(comments::table)
        .values(&new_comment)
        .returning(Comment::as_returning())
        .get_result(conn)
        .await
}

pub async fn get(conn: &mut AsyncPgConnection, uid: &str) -> QueryResult<Option<Comment>> {
    comments::table
        .filter(comments::uid.eq(uid))
        .select(Comment::as_select())
        .first::<Comment>(conn)
        .await
        .optional()
}

/// All comments on an event that have no parent, most recent first.
pub async fn list_top_level(
    conn: &mut AsyncPgConnection,
    event_uid: &str,
) -> QueryResult<Vec<Comment>> {
    comments::table
        .filter(comments::event_uid.eq(event_uid))
        .filter(comments::parent_uid.is_null())
        .order(comments::created_at.desc())
        .select(Comment::as_select())
        .load(conn)
        .await
}

/// Direct children of a comment, oldest reply first.
pub async fn list_replies(
    conn: &mut AsyncPgConnection,
    parent_uid: &str,
) -> QueryResult<Vec<Comment>> {
    comments::table
        .filter(comments::parent_uid.eq(parent_uid))
        .order(comments::created_at.asc())
        .select(Comment::as_select())
        .load(conn)
        .await
}
