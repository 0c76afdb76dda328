//! Host input sampled by the tick driver.
//!
//! Input is sampled, not queued: the host captures pointer movement and
//! fire clicks asynchronously and hands the latest values to each tick.
//! Fire requests arriving while the cooldown is active are dropped.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Input state for one tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Current pointer position in screen pixels.
    pub pointer: Position,
    /// Whether the primary button was pressed since the last tick.
    pub fire: bool,
}
