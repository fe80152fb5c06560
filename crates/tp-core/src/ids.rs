//! Node identifiers.
//!
//! Two kinds of id coexist:
//!
//! - [`NodeKey`]: the public, persisted identity of a node: either the
//!   upstream node id rendered as a string, or a synthetic split id
//!   `"<origin>-split-<n>"`.
//! - [`NodeIdx`] / [`EdgeIdx`]: dense `u32` positions into a graph's
//!   storage.  They are only meaningful for the graph that issued them and
//!   are never written to disk.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_idx {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid index".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_idx! {
    /// Position of a node in a `TrainingGraph`'s insertion-ordered storage.
    pub struct NodeIdx(u32);
}

typed_idx! {
    /// Position of an undirected edge in a `TrainingGraph`.
    pub struct EdgeIdx(u32);
}

// ── NodeKey ───────────────────────────────────────────────────────────────────

const SPLIT_MARKER: &str = "-split-";

/// String identity of a graph node.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Synthetic key for the `n`-th split node interpolated after `origin`.
    pub fn split(origin: &NodeKey, n: u32) -> Self {
        Self(format!("{}{SPLIT_MARKER}{n}", origin.0))
    }

    /// `true` if this key was produced by [`NodeKey::split`].
    pub fn is_synthetic(&self) -> bool {
        self.0.contains(SPLIT_MARKER)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for NodeKey {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for NodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
