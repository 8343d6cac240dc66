//! Signature inference — parse `@param`, `@property`, and `@returns`
//! annotations into structured descriptors.
//!
//! Annotation values follow the conventional shape `{type} name description`
//! (returns omit the name). Dotted names like `options.timeout` nest under
//! the descriptor for `options`, building a tree of sub-properties. This is
//! a local, single-record concern; the hierarchy resolver treats the
//! resulting descriptors opaquely.

use crate::model::{Comment, Param, ReturnDoc};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\{(?P<type>[^}]*)\}\s*)?(?P<name>[\w$][\w$.]*)?\s*(?:-\s+)?(?P<desc>.*)$")
        .unwrap()
});

static RE_RETURNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\{(?P<type>[^}]*)\}\s*)?(?P<desc>.*)$").unwrap());

pub fn infer(mut comment: Comment) -> Comment {
    let mut params: Vec<Param> = Vec::new();
    let mut properties: Vec<Param> = Vec::new();
    let mut returns: Option<ReturnDoc> = None;

    for tag in &comment.tags {
        let value = tag.value.as_deref().unwrap_or("");
        match tag.title.as_str() {
            "param" | "arg" | "argument" => {
                if let Some(param) = parse_param(value) {
                    insert_nested(&mut params, param);
                }
            }
            "property" | "prop" => {
                if let Some(param) = parse_param(value) {
                    insert_nested(&mut properties, param);
                }
            }
            "returns" | "return" => {
                if returns.is_none() {
                    returns = parse_returns(value);
                }
            }
            _ => {}
        }
    }

    if comment.params.is_empty() {
        comment.params = params;
    }
    if comment.properties.is_empty() {
        comment.properties = properties;
    }
    if comment.returns.is_none() {
        comment.returns = returns;
    }
    comment
}

fn parse_param(value: &str) -> Option<Param> {
    let caps = RE_PARAM.captures(value.trim())?;
    let name = caps.name("name")?.as_str().to_string();
    Some(Param {
        name,
        type_expr: caps.name("type").map(|m| m.as_str().to_string()),
        description: non_empty(caps.name("desc").map(|m| m.as_str())),
        properties: Vec::new(),
    })
}

fn parse_returns(value: &str) -> Option<ReturnDoc> {
    let caps = RE_RETURNS.captures(value.trim())?;
    let type_expr = caps.name("type").map(|m| m.as_str().to_string());
    let description = non_empty(caps.name("desc").map(|m| m.as_str()));
    if type_expr.is_none() && description.is_none() {
        return None;
    }
    Some(ReturnDoc {
        type_expr,
        description,
    })
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Insert a descriptor into the tree, nesting dotted names under their
/// parent descriptor. When no parent exists at some path segment, the
/// descriptor is kept at the current level under its remaining dotted name
/// so the annotation is never silently discarded.
fn insert_nested(list: &mut Vec<Param>, mut param: Param) {
    let segments: Vec<String> = param.name.split('.').map(str::to_string).collect();
    let mut current = list;
    for (i, segment) in segments.iter().enumerate() {
        let is_leaf = i == segments.len() - 1;
        if is_leaf {
            param.name = segment.clone();
            current.push(param);
            return;
        }
        match current.iter().position(|p| &p.name == segment) {
            Some(pos) => current = &mut current[pos].properties,
            None => {
                // Orphaned sub-property: keep the remaining dotted path.
                param.name = segments[i..].join(".");
                current.push(param);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    fn with_tags(tags: Vec<Tag>) -> Comment {
        infer(Comment {
            tags,
            ..Default::default()
        })
    }

    #[test]
    fn param_with_type_and_description() {
        let comment = with_tags(vec![Tag::new("param", Some("{string} needle The text"))]);
        assert_eq!(comment.params.len(), 1);
        let param = &comment.params[0];
        assert_eq!(param.name, "needle");
        assert_eq!(param.type_expr.as_deref(), Some("string"));
        assert_eq!(param.description.as_deref(), Some("The text"));
    }

    #[test]
    fn param_without_type() {
        let comment = with_tags(vec![Tag::new("param", Some("needle The text"))]);
        assert_eq!(comment.params[0].name, "needle");
        assert!(comment.params[0].type_expr.is_none());
    }

    #[test]
    fn param_hyphen_separator_stripped() {
        let comment = with_tags(vec![Tag::new("param", Some("{number} n - The count"))]);
        assert_eq!(comment.params[0].description.as_deref(), Some("The count"));
    }

    #[test]
    fn dotted_param_nests_under_parent() {
        let comment = with_tags(vec![
            Tag::new("param", Some("{Object} options The option bag")),
            Tag::new("param", Some("{number} options.timeout Wait limit")),
            Tag::new("param", Some("{boolean} options.retry.enabled Retry flag")),
            Tag::new("param", Some("{Object} options.retry Retry config")),
        ]);
        assert_eq!(comment.params.len(), 1);
        let options = &comment.params[0];
        assert_eq!(options.name, "options");
        assert_eq!(options.properties.len(), 3);
        assert_eq!(options.properties[0].name, "timeout");
        // No "retry" parent existed yet, so the path is kept dotted.
        assert_eq!(options.properties[1].name, "retry.enabled");
        assert_eq!(options.properties[2].name, "retry");
    }

    #[test]
    fn property_tags_fill_properties() {
        let comment = with_tags(vec![
            Tag::new("property", Some("{string} id Unique id")),
            Tag::new("prop", Some("{string} label Display text")),
        ]);
        assert_eq!(comment.properties.len(), 2);
        assert!(comment.params.is_empty());
    }

    #[test]
    fn returns_with_type() {
        let comment = with_tags(vec![Tag::new("returns", Some("{boolean} True on match"))]);
        let ret = comment.returns.unwrap();
        assert_eq!(ret.type_expr.as_deref(), Some("boolean"));
        assert_eq!(ret.description.as_deref(), Some("True on match"));
    }

    #[test]
    fn first_returns_wins() {
        let comment = with_tags(vec![
            Tag::new("returns", Some("{number} First")),
            Tag::new("return", Some("{string} Second")),
        ]);
        assert_eq!(comment.returns.unwrap().type_expr.as_deref(), Some("number"));
    }

    #[test]
    fn empty_returns_value_ignored() {
        let comment = with_tags(vec![Tag::new("returns", Some(""))]);
        assert!(comment.returns.is_none());
    }

    #[test]
    fn unparseable_param_skipped() {
        let comment = with_tags(vec![Tag::new("param", Some("{string}"))]);
        assert!(comment.params.is_empty());
    }
}
