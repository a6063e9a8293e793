use axum::{
    Json, debug_handler,
    extract::{Path, State},
};

use crate::{App, error::AppError, models::event};

use super::{CommentError, CommentNode, store, tree};

/// Full comment forest of an event: one tree per top-level comment, most
/// recent top-level comment first. No authentication needed to read.
#[debug_handler]
pub async fn get_event_comments(
    State(ctx): State<App>,
    Path(event_uid): Path<String>,
) -> Result<Json<Vec<CommentNode>>, AppError> {
    let mut conn = ctx.diesel.get().await?;

    if !event::exists(&mut conn, &event_uid).await? {
        Err(CommentError::EventNotFound)?
    }

    let roots = store::list_top_level(&mut conn, &event_uid).await?;

    let mut forest = Vec::with_capacity(roots.len());
    for root in roots {
        forest.push(tree::build_tree(&mut conn, root).await?);
    }

    Ok(Json(forest))
}
