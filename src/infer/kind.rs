//! Kind inference — entity category from explicit tags or structural
//! heuristics.

use crate::model::{Comment, Kind};

const KIND_TAGS: &[(&str, Kind)] = &[
    ("class", Kind::Class),
    ("function", Kind::Function),
    ("func", Kind::Function),
    ("method", Kind::Function),
    ("member", Kind::Member),
    ("property", Kind::Member),
    ("event", Kind::Event),
    ("module", Kind::Module),
    ("typedef", Kind::Typedef),
    ("mixin", Kind::Mixin),
    ("constant", Kind::Constant),
];

pub fn infer(mut comment: Comment) -> Comment {
    if comment.kind.is_some() {
        return comment;
    }

    if let Some(value) = comment.tag_value("kind") {
        if let Some(kind) = parse_kind(value) {
            comment.kind = Some(kind);
            return comment;
        }
    }

    for (title, kind) in KIND_TAGS {
        if comment.tag(title).is_some() {
            comment.kind = Some(*kind);
            return comment;
        }
    }

    // Structural heuristics: the parser's own classification first, then
    // a parameter list or return annotation implies a function-like kind.
    if let Some(code) = &comment.context.code {
        if let Some(kind) = code.kind.as_deref().and_then(parse_kind) {
            comment.kind = Some(kind);
            return comment;
        }
    }
    if !comment.params.is_empty() || comment.returns.is_some() {
        comment.kind = Some(Kind::Function);
    }

    comment
}

fn parse_kind(value: &str) -> Option<Kind> {
    let kind = match value.trim() {
        "class" => Kind::Class,
        "function" | "method" => Kind::Function,
        "member" | "property" => Kind::Member,
        "event" => Kind::Event,
        "module" => Kind::Module,
        "typedef" => Kind::Typedef,
        "mixin" => Kind::Mixin,
        "constant" => Kind::Constant,
        _ => return None,
    };
    Some(kind)
}
