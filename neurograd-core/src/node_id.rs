//! Node identifiers and the generator that hands them out.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// 128-bit identifier, the sole key for node identity.
///
/// Two handles carrying the same `NodeId` denote the same graph node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u128);

impl NodeId {
    /// Wraps a raw 128-bit value.
    pub const fn from_raw(raw: u128) -> Self {
        NodeId(raw)
    }

    /// Returns the raw 128-bit value.
    pub const fn as_raw(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The low 32 bits are enough to tell nodes apart in logs.
        write!(f, "NodeId({:08x})", self.0 as u32)
    }
}

/// Produces statistically unique identifiers from a seedable generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    /// Creates a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        IdGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic generator. Identical seeds yield identical id sequences.
    pub fn from_seed(seed: u64) -> Self {
        IdGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws the next identifier.
    pub fn next_id(&mut self) -> NodeId {
        NodeId(self.rng.gen::<u128>())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
