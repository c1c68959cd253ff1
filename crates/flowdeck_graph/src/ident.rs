// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node identifier allocation.

use crate::canvas::Canvas;
use crate::node::{NodeClass, NodeId};
use rand::Rng;

/// Highest numeric suffix an identifier may carry.
pub const MAX_ID_SUFFIX: u32 = 10_000;

/// Random draws attempted before falling back to a linear scan.
const DRAW_ATTEMPTS: u32 = 64;

/// Allocates node identifiers of the form `<CLASS>_<n>` with `n` in
/// `0..=10000`.
///
/// Draws are checked against the canvas's live ids, so an allocated id is
/// unique on that canvas at the time of the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    /// Create a generator.
    pub fn new() -> Self {
        Self
    }

    /// Allocate an id for `class` that is not present on `canvas`.
    pub fn allocate<C: Canvas>(
        &self,
        class: NodeClass,
        canvas: &C,
    ) -> Result<NodeId, IdSpaceExhausted> {
        let mut rng = rand::rng();
        for _ in 0..DRAW_ATTEMPTS {
            let id = NodeId::new(class, rng.random_range(0..=MAX_ID_SUFFIX));
            if !canvas.contains(&id) {
                return Ok(id);
            }
        }

        // Dense canvases defeat random probing; scan the suffix space instead.
        (0..=MAX_ID_SUFFIX)
            .map(|n| NodeId::new(class, n))
            .find(|id| !canvas.contains(id))
            .ok_or(IdSpaceExhausted(class))
    }
}

/// Every suffix for this class is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no free identifier left for class {0}")]
pub struct IdSpaceExhausted(pub NodeClass);
