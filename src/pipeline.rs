//! Sequential transform pipeline over single comment records.
//!
//! Each stage either continues with an (enriched) record or drops it; a drop
//! short-circuits the remaining stages for that record. The pipeline holds no
//! state of its own, so callers can assemble distinct pipelines — e.g. a
//! build pipeline and a longer lint pipeline — from the same stage list.

use crate::model::Comment;

/// Result of one pipeline stage: keep processing the record, or drop it.
pub enum Flow {
    Continue(Comment),
    Drop,
}

/// A single transform stage.
pub type Stage = Box<dyn Fn(Comment) -> Flow>;

/// Wrap an infallible record transform as a stage.
pub fn stage<F>(f: F) -> Stage
where
    F: Fn(Comment) -> Comment + 'static,
{
    Box::new(move |comment| Flow::Continue(f(comment)))
}

/// An ordered chain of stages applied left to right.
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Build a pipeline from an ordered stage list. `None` entries are
    /// ignored, so callers can include stages conditionally.
    pub fn new(stages: Vec<Option<Stage>>) -> Self {
        Pipeline {
            stages: stages.into_iter().flatten().collect(),
        }
    }

    /// Run one record through every stage. Returns `None` when a stage
    /// dropped the record.
    pub fn run(&self, comment: Comment) -> Option<Comment> {
        let mut current = comment;
        for stage in &self.stages {
            match stage(current) {
                Flow::Continue(next) => current = next,
                Flow::Drop => return None,
            }
        }
        Some(current)
    }

    /// Run a sequence of records, keeping input order for the survivors.
    pub fn run_all(&self, comments: Vec<Comment>) -> Vec<Comment> {
        comments
            .into_iter()
            .filter_map(|comment| self.run(comment))
            .collect()
    }
}
