//! Hierarchy resolver — turn the flat, enriched record sequence into a
//! forest of documented entities.
//!
//! Two passes: an index of canonical names over the whole input (so forward
//! references resolve regardless of declaration order), then an in-order
//! attachment pass that nests each record under its resolved parent or
//! demotes it to a root entity with a diagnostic. Resolution never fails;
//! every input record appears exactly once in the output.

use crate::model::{Comment, Diagnostic, Kind, Scope};
use std::collections::{HashMap, HashSet};

/// Where a record ends up in the forest.
#[derive(Debug, Clone, Copy)]
enum Placement {
    Root,
    Member { parent: usize, scope: Scope },
    Event { parent: usize },
}

impl Placement {
    fn parent(&self) -> Option<usize> {
        match self {
            Placement::Root => None,
            Placement::Member { parent, .. } | Placement::Event { parent } => Some(*parent),
        }
    }
}

/// Resolve the enriched record sequence into root entities with nested
/// members and events. Roots are emitted in input order; so are children
/// within each bucket and events list.
pub fn resolve(mut comments: Vec<Comment>) -> Vec<Comment> {
    // Indexing pass. First occurrence wins when names collide, so lookup
    // stays deterministic.
    let mut index: HashMap<String, usize> = HashMap::new();
    for (i, comment) in comments.iter().enumerate() {
        if let Some(name) = &comment.name {
            index.entry(name.clone()).or_insert(i);
        }
    }

    // Attachment pass, in input order.
    let mut placements: Vec<Placement> = Vec::with_capacity(comments.len());
    for i in 0..comments.len() {
        let placement = place(&mut comments[i], &index);
        placements.push(placement);
    }

    demote_cycles(&mut placements);

    // Child lists per parent, preserving input order.
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (i, placement) in placements.iter().enumerate() {
        match placement.parent() {
            None => roots.push(i),
            Some(parent) => children[parent].push(i),
        }
    }

    let mut slots: Vec<Option<Comment>> = comments.into_iter().map(Some).collect();
    roots
        .into_iter()
        .map(|root| attach(root, &[], &mut slots, &children, &placements))
        .collect()
}

/// Decide one record's placement, appending a diagnostic when the memberof
/// reference is unresolvable or the scope declaration is missing.
fn place(comment: &mut Comment, index: &HashMap<String, usize>) -> Placement {
    let Some(target) = comment.memberof.clone() else {
        return Placement::Root;
    };

    let Some(&parent) = index.get(&target) else {
        let line = comment.context.line;
        comment.errors.push(Diagnostic::new(
            format!("memberof reference to {target} not found"),
            line,
        ));
        return Placement::Root;
    };

    // Events attach to the resolved parent unconditionally.
    if comment.kind == Some(Kind::Event) {
        return Placement::Event { parent };
    }

    match comment.scope {
        Some(scope) => Placement::Member { parent, scope },
        None => {
            // The reference itself was valid, so no line number: the defect
            // is the abstract scoping rule, not this record's location.
            comment.errors.push(Diagnostic::new(
                "found memberof but no @scope, @static, or @instance tag".to_string(),
                None,
            ));
            Placement::Root
        }
    }
}

/// Break membership cycles (including self references) by demoting every
/// record that sits on its own parent chain back to root. Without this, a
/// cycle's records would be unreachable from any root and vanish from the
/// output, violating the one-place-per-record guarantee.
fn demote_cycles(placements: &mut [Placement]) {
    for start in 0..placements.len() {
        let mut seen: HashSet<usize> = HashSet::new();
        seen.insert(start);
        let mut current = start;
        while let Some(parent) = placements[current].parent() {
            if parent == start {
                placements[start] = Placement::Root;
                break;
            }
            if !seen.insert(parent) {
                break;
            }
            current = parent;
        }
    }
}

/// Emit one entity: set its path, initialize its buckets, and recursively
/// attach its children in input order.
fn attach(
    idx: usize,
    prefix: &[String],
    slots: &mut Vec<Option<Comment>>,
    children: &[Vec<usize>],
    placements: &[Placement],
) -> Comment {
    let mut comment = slots[idx].take().expect("each record is attached once");

    let mut path = prefix.to_vec();
    path.push(comment.name_or_empty().to_string());

    let mut members = comment.members.take().unwrap_or_default();
    let mut events = std::mem::take(&mut comment.events);
    for &child in &children[idx] {
        let resolved = attach(child, &path, slots, children, placements);
        match placements[child] {
            Placement::Member { scope, .. } => members.bucket_mut(scope).push(resolved),
            Placement::Event { .. } => events.push(resolved),
            Placement::Root => {}
        }
    }

    comment.path = path;
    comment.members = Some(members);
    comment.events = events;
    comment
}
