//! Augments inference — collect inheritance/extension references.

use crate::model::Comment;

/// Collect `@augments`/`@extends` reference names in declaration order.
/// These are relationship links only; the hierarchy resolver never treats
/// them as ownership.
pub fn infer(mut comment: Comment) -> Comment {
    for tag in &comment.tags {
        if tag.title != "augments" && tag.title != "extends" {
            continue;
        }
        if let Some(value) = tag.value.as_deref() {
            if let Some(word) = value.split_whitespace().next() {
                comment.augments.push(word.to_string());
            }
        }
    }
    comment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn collects_augments_and_extends() {
        let comment = infer(Comment {
            tags: vec![
                Tag::new("augments", Some("Base")),
                Tag::new("extends", Some("Mixin")),
            ],
            ..Default::default()
        });
        assert_eq!(comment.augments, vec!["Base", "Mixin"]);
    }

    #[test]
    fn valueless_tag_skipped() {
        let comment = infer(Comment {
            tags: vec![Tag::new("augments", None)],
            ..Default::default()
        });
        assert!(comment.augments.is_empty());
    }

    #[test]
    fn order_preserved() {
        let comment = infer(Comment {
            tags: vec![
                Tag::new("extends", Some("First")),
                Tag::new("augments", Some("Second")),
            ],
            ..Default::default()
        });
        assert_eq!(comment.augments, vec!["First", "Second"]);
    }
}
