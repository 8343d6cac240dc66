//! Lint support — a leading validation stage for the longer lint pipeline,
//! plus a report formatter over resolved forests.

use crate::model::{Comment, Diagnostic};
use crate::pipeline::{Flow, Stage};

/// Tag titles the pipeline understands. Anything else is flagged.
const KNOWN_TAGS: &[&str] = &[
    "access", "alias", "arg", "argument", "augments", "class", "constant",
    "deprecated", "description", "event", "example", "extends", "func",
    "function", "inner", "instance", "kind", "member", "memberof", "method",
    "mixin", "module", "name", "param", "private", "prop", "property",
    "protected", "public", "return", "returns", "scope", "see", "since",
    "static", "throws", "todo", "typedef",
];

/// Validation stage: flag unknown tag titles. Runs ahead of the inferers in
/// the lint pipeline; records are never dropped, only annotated.
pub fn stage() -> Stage {
    Box::new(|mut comment: Comment| {
        let line = comment.context.line;
        let unknown: Vec<String> = comment
            .tags
            .iter()
            .filter(|tag| KNOWN_TAGS.binary_search(&tag.title.as_str()).is_err())
            .map(|tag| format!("unknown tag @{}", tag.title))
            .collect();
        for message in unknown {
            comment.errors.push(Diagnostic::new(message, line));
        }
        Flow::Continue(comment)
    })
}

/// Aggregate every diagnostic in the forest into `file:line: message` lines,
/// walking entities depth-first in output order.
pub fn format_report(forest: &[Comment]) -> String {
    let mut lines = Vec::new();
    for root in forest {
        collect(root, &mut lines);
    }
    lines.join("\n")
}

/// Number of diagnostics in the forest.
pub fn finding_count(forest: &[Comment]) -> usize {
    fn count(comment: &Comment) -> usize {
        comment.errors.len()
            + children(comment).map(count).sum::<usize>()
    }
    forest.iter().map(count).sum()
}

fn collect(comment: &Comment, lines: &mut Vec<String>) {
    let file = comment.context.file.as_deref().unwrap_or("<unknown>");
    for error in &comment.errors {
        let line = error.comment_line_number.or(comment.context.line);
        match line {
            Some(n) => lines.push(format!("{}:{}: {}", file, n, error.message)),
            None => lines.push(format!("{}: {}", file, error.message)),
        }
    }
    for child in children(comment) {
        collect(child, lines);
    }
}

fn children(comment: &Comment) -> impl Iterator<Item = &Comment> {
    let buckets = comment.members.iter().flat_map(|m| {
        m.statics
            .iter()
            .chain(m.instance.iter())
            .chain(m.inner.iter())
    });
    buckets.chain(comment.events.iter())
}
