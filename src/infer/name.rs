//! Name inference — derive a canonical name from explicit tags or the
//! attached code signature.

use crate::model::Comment;

/// Tags whose value names the documented entity directly.
const NAMING_TAGS: &[&str] = &[
    "name", "alias", "class", "function", "func", "method", "event", "module",
    "typedef", "mixin", "member", "property", "constant",
];

/// Set `name` from the first naming tag that carries a value, falling back
/// to the name of the attached code. A record without a derivable name is
/// passed through unchanged; downstream stages tolerate the absence.
pub fn infer(mut comment: Comment) -> Comment {
    if comment.name.is_some() {
        return comment;
    }

    for title in NAMING_TAGS {
        if let Some(value) = comment.tag_value(title) {
            if let Some(word) = value.split_whitespace().next() {
                comment.name = Some(word.to_string());
                return comment;
            }
        }
    }

    if let Some(code) = &comment.context.code {
        if let Some(code_name) = &code.name {
            comment.name = Some(code_name.clone());
        }
    }

    comment
}
