use axum::{
    Router,
    routing::{get, post},
};

use crate::App;

use super::{create::create_comment, get::get_event_comments, reply::reply_to_comment};

pub fn route() -> Router<App> {
    Router::<App>::new()
        .route("/event/{event_uid}", get(get_event_comments))
        .route("/", post(create_comment))
        .route("/{comment_uid}/reply", post(reply_to_comment))
}
