//! Field inferers — order-sensitive pipeline stages that each populate one
//! structural field of a comment record from raw tags and code context.
//!
//! Inferers never fail: a stage that cannot determine its field leaves it
//! unset and lets the hierarchy resolver report the consequence.

pub mod access;
pub mod augments;
pub mod kind;
pub mod membership;
pub mod name;
pub mod params;

use crate::pipeline::{stage, Stage};
use regex::Regex;

/// Caller-supplied inference policy.
#[derive(Debug, Clone, Default)]
pub struct InferConfig {
    /// Names matching this pattern are treated as private when no explicit
    /// access tag is present (e.g. `^_` for underscore-prefixed names).
    pub infer_private: Option<Regex>,
}

/// The standard inference stage list, in dependency order: membership splits
/// the name produced by name inference, kind inspects the params produced by
/// signature inference, and the access policy matches against the plain name
/// left after the membership split.
pub fn stages(config: &InferConfig) -> Vec<Option<Stage>> {
    vec![
        Some(stage(name::infer)),
        Some(stage(membership::infer)),
        Some(stage(params::infer)),
        Some(stage(kind::infer)),
        Some(stage(augments::infer)),
        Some(access::stage(config.infer_private.clone())),
    ]
}
