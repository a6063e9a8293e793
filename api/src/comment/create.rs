use axum::{Json, debug_handler, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{App, error::AppError, identity::AuthUser, models::event};

use super::{CommentError, CommentNode, normalized_content, store};

#[derive(Deserialize)]
pub struct CommentSubmission {
    event_uid: Option<String>,
    content: Option<String>,
}

impl CommentSubmission {
    fn into_fields(self) -> Result<(String, String), CommentError> {
        match (self.event_uid, self.content) {
            (Some(event_uid), Some(content)) => Ok((event_uid, content)),
            _ => Err(CommentError::MissingField(
                "event_uid and content are required",
            )),
        }
    }
}

#[debug_handler]
pub async fn create_comment(
    State(ctx): State<App>,
    AuthUser(auth_user): AuthUser,
    crate::json::Json(submission): crate::json::Json<CommentSubmission>,
) -> Result<(StatusCode, Json<CommentNode>), AppError> {
    let (event_uid, content) = submission.into_fields()?;

    let mut conn = ctx.diesel.get().await?;

    if !event::exists(&mut conn, &event_uid).await? {
        Err(CommentError::EventNotFound)?
    }

    let content = normalized_content(&content)?.to_owned();

    let comment = store::insert_top_level(&mut conn, &event_uid, &auth_user.uid, content).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentNode::childless(comment, auth_user.name)),
    ))
}
