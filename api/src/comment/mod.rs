pub mod create;
pub mod get;
pub mod reply;
pub mod routes;
pub mod store;
pub mod tree;

use axum::http::StatusCode;
use serde::Serialize;

use crate::{
    error::{ApiRequestError, AppError},
    models::comment::Comment,
};

// The model that will be returned to the client
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CommentNode {
    pub uid: String,
    pub content: String,
    pub created_at: chrono::NaiveDateTime,
    pub user_name: String,
    pub user_uid: String,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// View of a freshly inserted comment. New records start childless, so
    /// there is no tree to build.
    pub fn childless(comment: Comment, user_name: String) -> CommentNode {
        CommentNode {
            uid: comment.uid,
            content: comment.content,
            created_at: comment.created_at,
            user_name,
            user_uid: comment.user_uid,
            replies: vec![],
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CommentError {
    #[error("event not found")]
    EventNotFound,

    #[error("parent comment not found")]
    ParentNotFound,

    #[error("{0}")]
    MissingField(&'static str),

    #[error("content cannot be empty")]
    EmptyContent,
}

impl ApiRequestError for CommentError {
    fn status_code(&self) -> StatusCode {
        match self {
            CommentError::EventNotFound | CommentError::ParentNotFound => StatusCode::NOT_FOUND,
            CommentError::MissingField(_) | CommentError::EmptyContent => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            CommentError::EventNotFound | CommentError::ParentNotFound => "NOT_FOUND",
            CommentError::MissingField(_) | CommentError::EmptyContent => "INVALID_ARGUMENT",
        }
    }
}

impl From<CommentError> for AppError {
    fn from(e: CommentError) -> Self {
        AppError::from_request_error(e)
    }
}

/// Comments are stored trimmed. Content that trims down to nothing is
/// rejected, but only after the referenced event or parent has been checked,
/// so a missing target still reports not-found first.
pub(crate) fn normalized_content(content: &str) -> Result<&str, CommentError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CommentError::EmptyContent);
    }
    Ok(content)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_normalized_content_trims_whitespace() {
        assert_eq!(normalized_content("  hello "), Ok("hello"));
    }

    #[test]
    fn test_normalized_content_rejects_whitespace_only() {
        assert_eq!(normalized_content("   "), Err(CommentError::EmptyContent));
        assert_eq!(normalized_content(""), Err(CommentError::EmptyContent));
    }

    #[test]
    fn test_comment_node_serializes_the_response_contract() {
        let node = CommentNode {
            uid: "c-1".into(),
            content: "hello".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, 2)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            user_name: "Ada".into(),
            user_uid: "u-1".into(),
            replies: vec![CommentNode {
                uid: "c-2".into(),
                content: "hi".into(),
                created_at: NaiveDate::from_ymd_opt(2024, 5, 2)
                    .unwrap()
                    .and_hms_opt(10, 31, 0)
                    .unwrap(),
                user_name: "Grace".into(),
                user_uid: "u-2".into(),
                replies: vec![],
            }],
        };

        let value = serde_json::to_value(&node).unwrap();

        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["content", "created_at", "replies", "uid", "user_name", "user_uid"],
            "The response shape is a fixed field set"
        );

        assert_eq!(value["created_at"], "2024-05-02T10:30:00");
        assert_eq!(
            value["replies"][0]["user_name"], "Grace",
            "Replies nest recursively with the same shape"
        );
    }
}
