use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Handle of a word sense inside a knowledge-base arena.
///
/// Ids are dense, assigned in insertion order, and only meaningful for the
/// knowledge base that issued them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SenseId(u32);

impl SenseId {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Arena slot of this sense.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sense#{}", self.0)
    }
}
