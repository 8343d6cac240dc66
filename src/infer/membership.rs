//! Membership inference — determine `memberof` and `scope` from explicit
//! tags, or from path syntax embedded in a compound name.
//!
//! Explicit tags are authoritative. The embedded syntax is a best-effort
//! fallback using the conventional separators: `Parent.child` declares a
//! static member, `Parent#child` an instance member, and `Parent~child` an
//! inner entity. The compound name is split at its last separator so that
//! nested prefixes stay intact (`Mod.Class#run` → memberof `Mod.Class`).

use crate::model::{Comment, Scope};

const SEPARATORS: &[(char, Scope)] = &[
    ('.', Scope::Static),
    ('#', Scope::Instance),
    ('~', Scope::Inner),
];

pub fn infer(mut comment: Comment) -> Comment {
    if comment.scope.is_none() {
        comment.scope = explicit_scope(&comment);
    }

    if comment.memberof.is_none() {
        if let Some(value) = comment.tag_value("memberof") {
            if let Some(word) = value.split_whitespace().next() {
                comment.memberof = Some(word.to_string());
            }
        }
    }

    // Embedded path syntax applies only when no explicit memberof exists.
    if comment.memberof.is_none() {
        if let Some((parent, leaf, scope)) = split_compound(comment.name_or_empty()) {
            comment.memberof = Some(parent);
            comment.name = Some(leaf);
            if comment.scope.is_none() {
                comment.scope = Some(scope);
            }
        }
    }

    comment
}

/// Scope from `@scope <value>` or the `@static`/`@instance`/`@inner` markers.
fn explicit_scope(comment: &Comment) -> Option<Scope> {
    if let Some(value) = comment.tag_value("scope") {
        return parse_scope(value);
    }
    for (title, scope) in [
        ("static", Scope::Static),
        ("instance", Scope::Instance),
        ("inner", Scope::Inner),
    ] {
        if comment.tag(title).is_some() {
            return Some(scope);
        }
    }
    None
}

fn parse_scope(value: &str) -> Option<Scope> {
    match value.trim() {
        "static" => Some(Scope::Static),
        "instance" => Some(Scope::Instance),
        "inner" => Some(Scope::Inner),
        _ => None,
    }
}

/// Split a compound name at its last scope separator. Returns `None` for a
/// plain name, a name with no leaf (`Class.`), or a name with no parent
/// (`.child`).
fn split_compound(name: &str) -> Option<(String, String, Scope)> {
    let (pos, scope) = name
        .char_indices()
        .filter_map(|(i, c)| {
            SEPARATORS
                .iter()
                .find(|(sep, _)| *sep == c)
                .map(|(_, scope)| (i, *scope))
        })
        .next_back()?;

    let parent = &name[..pos];
    let leaf = &name[pos + 1..];
    if parent.is_empty() || leaf.is_empty() {
        return None;
    }
    Some((parent.to_string(), leaf.to_string(), scope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    fn named(name: &str, tags: Vec<Tag>) -> Comment {
        Comment {
            name: Some(name.to_string()),
            tags,
            ..Default::default()
        }
    }

    #[test]
    fn explicit_memberof_and_static_marker() {
        let comment = infer(named(
            "isClass",
            vec![Tag::new("memberof", Some("Class")), Tag::new("static", None)],
        ));
        assert_eq!(comment.memberof.as_deref(), Some("Class"));
        assert_eq!(comment.scope, Some(Scope::Static));
        assert_eq!(comment.name.as_deref(), Some("isClass"));
    }

    #[test]
    fn scope_tag_with_value() {
        let comment = infer(named(
            "run",
            vec![
                Tag::new("memberof", Some("Class")),
                Tag::new("scope", Some("inner")),
            ],
        ));
        assert_eq!(comment.scope, Some(Scope::Inner));
    }

    #[test]
    fn embedded_static_syntax() {
        let comment = infer(named("Class.isClass", vec![]));
        assert_eq!(comment.name.as_deref(), Some("isClass"));
        assert_eq!(comment.memberof.as_deref(), Some("Class"));
        assert_eq!(comment.scope, Some(Scope::Static));
    }

    #[test]
    fn embedded_instance_syntax() {
        let comment = infer(named("Class#getFoo", vec![]));
        assert_eq!(comment.name.as_deref(), Some("getFoo"));
        assert_eq!(comment.memberof.as_deref(), Some("Class"));
        assert_eq!(comment.scope, Some(Scope::Instance));
    }

    #[test]
    fn embedded_inner_syntax() {
        let comment = infer(named("Class~helper", vec![]));
        assert_eq!(comment.scope, Some(Scope::Inner));
    }

    #[test]
    fn compound_split_at_last_separator() {
        let comment = infer(named("Mod.Class#run", vec![]));
        assert_eq!(comment.memberof.as_deref(), Some("Mod.Class"));
        assert_eq!(comment.name.as_deref(), Some("run"));
        assert_eq!(comment.scope, Some(Scope::Instance));
    }

    #[test]
    fn explicit_memberof_suppresses_embedded_syntax() {
        let comment = infer(named(
            "Other.leaf",
            vec![Tag::new("memberof", Some("Class"))],
        ));
        assert_eq!(comment.memberof.as_deref(), Some("Class"));
        // Name is left as-is; explicit tags are authoritative.
        assert_eq!(comment.name.as_deref(), Some("Other.leaf"));
    }

    #[test]
    fn explicit_scope_wins_over_separator() {
        let comment = infer(named("Class.member", vec![Tag::new("instance", None)]));
        assert_eq!(comment.memberof.as_deref(), Some("Class"));
        assert_eq!(comment.scope, Some(Scope::Instance));
    }

    #[test]
    fn plain_name_untouched() {
        let comment = infer(named("Class", vec![]));
        assert!(comment.memberof.is_none());
        assert!(comment.scope.is_none());
        assert_eq!(comment.name.as_deref(), Some("Class"));
    }

    #[test]
    fn dangling_separator_not_split() {
        let comment = infer(named("Class.", vec![]));
        assert!(comment.memberof.is_none());
        assert_eq!(comment.name.as_deref(), Some("Class."));
    }

    #[test]
    fn unknown_scope_value_left_unset() {
        let comment = infer(named(
            "run",
            vec![
                Tag::new("memberof", Some("Class")),
                Tag::new("scope", Some("global")),
            ],
        ));
        assert!(comment.scope.is_none());
    }

    #[test]
    fn missing_name_tolerated() {
        let comment = infer(Comment::default());
        assert!(comment.memberof.is_none());
        assert!(comment.name.is_none());
    }
}
