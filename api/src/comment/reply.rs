use axum::{
    Json, debug_handler,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{App, error::AppError, identity::AuthUser};

use super::{CommentError, CommentNode, normalized_content, store};

#[derive(Deserialize)]
pub struct ReplySubmission {
    content: Option<String>,
}

#[debug_handler]
pub async fn reply_to_comment(
    State(ctx): State<App>,
    Path(comment_uid): Path<String>,
    AuthUser(auth_user): AuthUser,
    crate::json::Json(submission): crate::json::Json<ReplySubmission>,
) -> Result<(StatusCode, Json<CommentNode>), AppError> {
    let content = submission
        .content
        .ok_or(CommentError::MissingField("content is required"))?;

    let mut conn = ctx.diesel.get().await?;

    let parent = store::get(&mut conn, &comment_uid)
        .await?
        .ok_or(CommentError::ParentNotFound)?;

    let content = normalized_content(&content)?.to_owned();

    let reply = store::insert_reply(&mut conn, &parent, &auth_user.uid, content).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentNode::childless(reply, auth_user.name)),
    ))
}
