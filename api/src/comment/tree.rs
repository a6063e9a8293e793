use std::collections::HashMap;

use diesel_async::AsyncPgConnection;

use crate::{
    error::AppError,
    models::{
        comment::Comment,
        user::{self, User},
    },
};

use super::{CommentNode, store};

/// Builds the full nested view of a top-level comment and all its transitive
/// replies.
///
/// The reply graph is walked with an explicit work stack rather than native
/// recursion, so a pathologically deep thread cannot overflow the call
/// stack. One `list_replies` and one author lookup per comment; authors that
/// no longer resolve get the sentinel name instead of failing the build.
pub async fn build_tree(
    conn: &mut AsyncPgConnection,
    root: Comment,
) -> Result<CommentNode, AppError> {
    let root_uid = root.uid.clone();

    // Flat arena of visited comments plus an index from parent uid to child
    // uids in reply order. Parents always enter the arena before their
    // children.
    let mut visited: Vec<(Comment, String)> = Vec::new();
    let mut children: HashMap<String, Vec<String>> = HashMap::new();

    let mut work = vec![root];
    while let Some(comment) = work.pop() {
        let replies = store::list_replies(conn, &comment.uid).await?;
        children.insert(
            comment.uid.clone(),
            replies.iter().map(|r| r.uid.clone()).collect(),
        );

        let author = user::find(conn, &comment.user_uid).await?;
        visited.push((comment, User::name_or_unknown(author.as_ref())));

        work.extend(replies);
    }

    assemble(visited, children)
        .remove(&root_uid)
        .ok_or_else(|| AppError::from("comment tree assembly lost its root"))
}

/// Materializes nodes children-first: since a comment only ever enters
/// `visited` after its parent, walking the arena in reverse guarantees every
/// reply node exists by the time its parent is assembled. Reply order within
/// a node follows the child index, not the traversal order.
///
/// The returned map holds one entry per comment that has no parent in
/// `children` — for a single-root arena, just the root.
fn assemble(
    visited: Vec<(Comment, String)>,
    mut children: HashMap<String, Vec<String>>,
) -> HashMap<String, CommentNode> {
    let mut built: HashMap<String, CommentNode> = HashMap::with_capacity(visited.len());

    for (comment, user_name) in visited.into_iter().rev() {
        let child_uids = children.remove(&comment.uid).unwrap_or_default();
        let replies = child_uids
            .iter()
            .filter_map(|uid| built.remove(uid))
            .collect();

        built.insert(
            comment.uid.clone(),
            CommentNode {
                uid: comment.uid,
                content: comment.content,
                created_at: comment.created_at,
                user_name,
                user_uid: comment.user_uid,
                replies,
            },
        );
    }

    built
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    // Helper to create a mock comment; `seq` spaces out creation times
    fn mock_comment(uid: &str, parent_uid: Option<&str>, seq: i64) -> Comment {
        Comment {
            uid: uid.into(),
            event_uid: "event-1".into(),
            user_uid: format!("user-{uid}"),
            parent_uid: parent_uid.map(Into::into),
            content: format!("content {uid}"),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
                + chrono::Duration::try_seconds(seq).unwrap(),
        }
    }

    // Builds the (visited, children) pair the collection phase would have
    // produced: parents pushed before children, child order = reply order.
    fn arena(
        comments: Vec<Comment>,
        index: &[(&str, Vec<&str>)],
    ) -> (Vec<(Comment, String)>, HashMap<String, Vec<String>>) {
        let visited = comments
            .into_iter()
            .map(|c| {
                let name = format!("author of {}", c.uid);
                (c, name)
            })
            .collect();
        let children = index
            .iter()
            .map(|(parent, kids)| {
                (
                    (*parent).to_string(),
                    kids.iter().map(|k| (*k).to_string()).collect(),
                )
            })
            .collect();
        (visited, children)
    }

    #[test]
    fn test_assemble_single_comment() {
        let (visited, children) = arena(vec![mock_comment("a", None, 0)], &[("a", vec![])]);

        let mut built = assemble(visited, children);
        assert_eq!(built.len(), 1, "Expected exactly the root to remain");

        let root = built.remove("a").unwrap();
        assert!(root.replies.is_empty());
        assert_eq!(root.user_name, "author of a");
        assert_eq!(root.content, "content a");
    }

    #[test]
    fn test_assemble_orders_replies_by_index_not_traversal() {
        // Stack traversal visits r2 before r1, but reply order must follow
        // the child index (oldest reply first).
        let (visited, children) = arena(
            vec![
                mock_comment("root", None, 0),
                mock_comment("r2", Some("root"), 2),
                mock_comment("r1", Some("root"), 1),
                mock_comment("r1a", Some("r1"), 3),
            ],
            &[
                ("root", vec!["r1", "r2"]),
                ("r1", vec!["r1a"]),
                ("r2", vec![]),
                ("r1a", vec![]),
            ],
        );

        let mut built = assemble(visited, children);
        let root = built.remove("root").unwrap();

        assert_eq!(
            root.replies.iter().map(|r| r.uid.as_str()).collect::<Vec<_>>(),
            ["r1", "r2"],
            "Replies must come back oldest first"
        );
        assert_eq!(root.replies[0].replies.len(), 1);
        assert_eq!(root.replies[0].replies[0].uid, "r1a");
        assert!(root.replies[1].replies.is_empty());
    }

    #[test]
    fn test_assemble_preserves_sibling_order_at_every_level() {
        let (visited, children) = arena(
            vec![
                mock_comment("root", None, 0),
                mock_comment("a", Some("root"), 1),
                mock_comment("b", Some("root"), 2),
                mock_comment("c", Some("root"), 3),
            ],
            &[
                ("root", vec!["a", "b", "c"]),
                ("a", vec![]),
                ("b", vec![]),
                ("c", vec![]),
            ],
        );

        let mut built = assemble(visited, children);
        let root = built.remove("root").unwrap();
        assert_eq!(
            root.replies.iter().map(|r| r.uid.as_str()).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_assemble_deep_reply_chain() {
        // A linear chain of 50 nested replies must come back as a single
        // nested structure of depth 50.
        let mut comments = vec![mock_comment("c0", None, 0)];
        let mut index: Vec<(String, Vec<String>)> = vec![];
        for i in 1..50 {
            comments.push(mock_comment(
                &format!("c{i}"),
                Some(&format!("c{}", i - 1)),
                i as i64,
            ));
            index.push((format!("c{}", i - 1), vec![format!("c{i}")]));
        }
        index.push(("c49".into(), vec![]));

        let index_refs: Vec<(&str, Vec<&str>)> = index
            .iter()
            .map(|(p, kids)| (p.as_str(), kids.iter().map(String::as_str).collect()))
            .collect();
        let (visited, children) = arena(comments, &index_refs);

        let mut built = assemble(visited, children);
        let root = built.remove("c0").unwrap();

        let mut depth = 1;
        let mut node = &root;
        while let [reply] = node.replies.as_slice() {
            depth += 1;
            node = reply;
        }
        assert_eq!(depth, 50, "Expected one linear nested chain of depth 50");
        assert_eq!(node.uid, "c49");
        assert!(node.replies.is_empty());
    }

    #[test]
    fn test_assemble_empty_arena() {
        let built = assemble(vec![], HashMap::new());
        assert!(built.is_empty());
    }
}
