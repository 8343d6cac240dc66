//! Access inference — normalize access tags to the closed set
//! public/protected/private, with a caller-supplied private-name policy.

use crate::model::{Access, Comment};
use crate::pipeline::{Flow, Stage};
use regex::Regex;

/// Build the access stage. When no explicit access tag is present and the
/// record's name matches `infer_private`, the record is marked private.
pub fn stage(infer_private: Option<Regex>) -> Stage {
    Box::new(move |comment| Flow::Continue(infer(comment, infer_private.as_ref())))
}

fn infer(mut comment: Comment, infer_private: Option<&Regex>) -> Comment {
    if comment.access.is_some() {
        return comment;
    }

    if let Some(value) = comment.tag_value("access") {
        comment.access = parse_access(value);
        if comment.access.is_some() {
            return comment;
        }
    }
    for (title, access) in [
        ("public", Access::Public),
        ("protected", Access::Protected),
        ("private", Access::Private),
    ] {
        if comment.tag(title).is_some() {
            comment.access = Some(access);
            return comment;
        }
    }

    if let Some(pattern) = infer_private {
        if pattern.is_match(comment.name_or_empty()) {
            comment.access = Some(Access::Private);
        }
    }

    comment
}

fn parse_access(value: &str) -> Option<Access> {
    match value.trim() {
        "public" => Some(Access::Public),
        "protected" => Some(Access::Protected),
        "private" => Some(Access::Private),
        _ => None,
    }
}
