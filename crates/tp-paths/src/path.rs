//! The unit of the training corpus.

use std::fmt;

use tp_core::NodeKey;

use crate::{PathError, PathResult};

/// An ordered walk of at least two node keys, source first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrainingPath(Vec<NodeKey>);

impl TrainingPath {
    /// Fails with [`PathError::TooShort`] for fewer than two nodes.
    pub fn new(nodes: Vec<NodeKey>) -> PathResult<Self> {
        if nodes.len() < 2 {
            return Err(PathError::TooShort(nodes.len()));
        }
        Ok(Self(nodes))
    }

    pub fn nodes(&self) -> &[NodeKey] {
        &self.0
    }

    /// Number of nodes (always ≥ 2).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    pub fn source(&self) -> &NodeKey {
        &self.0[0]
    }

    pub fn target(&self) -> &NodeKey {
        &self.0[self.0.len() - 1]
    }
}

impl fmt::Display for TrainingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
