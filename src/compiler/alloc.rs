//! Node ID allocation.
//!
//! The consumer's reference documents use non-sequential node IDs, and the
//! compiler must reproduce that rather than emit 1, 2, 3, …. The scheme is
//! pluggable behind [`IdStrategy`] so the permutation can be swapped, or
//! replaced with a fixed sequence in tests, without touching the compiler.

use crate::error::CompileError;
use crate::graph::NodeId;
use ahash::AHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::BuildHasher;

/// Lowest ID ever issued; keeps node IDs visually distinct from the
/// document-local `$id` reference tags.
const ID_MIN: u32 = 100;
/// Size of the ID space. At the supported graph sizes (tens of thousands of
/// nodes) the space stays under 1% occupancy.
const ID_SPAN: u32 = 1_000_000;
/// Collision retries per allocation before giving up. With the occupancy
/// above, exhausting this bound is practically unreachable, but it must be a
/// defined error path rather than an unbounded loop.
const MAX_ATTEMPTS: u32 = 32;

/// A source of candidate node IDs.
///
/// `candidate` is called with the node's ordinal (its position in the
/// caller's declaration order) and the current retry attempt; the allocator
/// handles uniqueness and retry bookkeeping.
pub trait IdStrategy {
    fn candidate(&mut self, ordinal: u32, attempt: u32) -> NodeId;
}

/// Deterministic default strategy: folds a fixed-seed hash of
/// (project name, ordinal, attempt) into the ID range.
///
/// Identical projects allocate identical IDs on every run, which the
/// regression fixtures rely on (compile followed by serialize must be
/// byte-stable).
pub struct FoldedHashStrategy {
    hasher: ahash::RandomState,
    project: String,
}

impl FoldedHashStrategy {
    pub fn new(project: &str) -> Self {
        Self {
            // Fixed keys: the default RandomState is randomly keyed per
            // process, which would break reproducibility.
            hasher: ahash::RandomState::with_seeds(
                0x6f726f67, 0x656e5f69, 0x645f616c, 0x6c6f6331,
            ),
            project: project.to_string(),
        }
    }
}

impl IdStrategy for FoldedHashStrategy {
    fn candidate(&mut self, ordinal: u32, attempt: u32) -> NodeId {
        let h = self
            .hasher
            .hash_one((self.project.as_str(), ordinal, attempt));
        ID_MIN + (h % ID_SPAN as u64) as u32
    }
}

/// Seeded-PRNG strategy for callers that want layouts to vary per seed while
/// staying reproducible for a given seed.
pub struct SeededRandomStrategy {
    rng: StdRng,
}

impl SeededRandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdStrategy for SeededRandomStrategy {
    fn candidate(&mut self, _ordinal: u32, _attempt: u32) -> NodeId {
        self.rng.random_range(ID_MIN..ID_MIN + ID_SPAN)
    }
}

/// Issues project-unique node IDs for one compile call.
///
/// Allocators are per-compile and never shared across concurrent requests;
/// the retry loop reads and extends the same allocation history, so sharing
/// one without synchronization could issue duplicates.
pub struct IdAllocator {
    strategy: Box<dyn IdStrategy>,
    used: AHashSet<NodeId>,
    last: Option<NodeId>,
}

impl IdAllocator {
    pub fn new(strategy: Box<dyn IdStrategy>) -> Self {
        Self {
            strategy,
            used: AHashSet::new(),
            last: None,
        }
    }

    /// Allocates a fresh ID for the node at `ordinal`, retrying on collision
    /// up to the attempt bound.
    ///
    /// A candidate exactly one above the previous allocation is treated as a
    /// collision: the emitted sequence must never look consecutive.
    pub fn allocate(&mut self, ordinal: u32) -> Result<NodeId, CompileError> {
        for attempt in 0..MAX_ATTEMPTS {
            let candidate = self.strategy.candidate(ordinal, attempt);
            if self.last.is_some_and(|last| candidate == last.wrapping_add(1)) {
                continue;
            }
            if self.used.insert(candidate) {
                self.last = Some(candidate);
                return Ok(candidate);
            }
        }
        Err(CompileError::IdSpaceExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    pub fn allocated(&self) -> usize {
        self.used.len()
    }
}
