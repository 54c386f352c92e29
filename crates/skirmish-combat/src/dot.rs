//! Damage over time
//!
//! A DOT deals `tick_damage` once per `tick_rate` seconds. Partial intervals at
//! the end of the duration are dropped.

use serde::{Deserialize, Serialize};
use tracing::warn;

use skirmish_core::CombatError;

/// Outcome of a damage-over-time effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotResult {
    pub tick_damage: f64,
    pub num_ticks: i64,
    /// tick_damage * num_ticks
    pub total_damage: f64,
    /// Duration in seconds
    pub duration: f64,
}

/// Seconds between ticks when the caller does not pick a rate
pub const DEFAULT_TICK_RATE: f64 = 1.0;

/// Total damage of a DOT lasting `duration` seconds, ticking every `tick_rate` seconds.
///
/// Tick count is `duration / tick_rate` truncated toward zero. A `tick_rate`
/// that is zero, negative, or not finite is rejected.
pub fn resolve_dot(
    tick_damage: f64,
    duration: f64,
    tick_rate: f64,
) -> Result<DotResult, CombatError> {
    if !(tick_rate.is_finite() && tick_rate > 0.0) {
        warn!("Rejecting DOT with tick rate {}", tick_rate);
        return Err(CombatError::InvalidTickRate(tick_rate));
    }

    let num_ticks = (duration / tick_rate).trunc() as i64;

    Ok(DotResult {
        tick_damage,
        num_ticks,
        total_damage: tick_damage * num_ticks as f64,
        duration,
    })
}

/// [`resolve_dot`] at [`DEFAULT_TICK_RATE`]
pub fn resolve_dot_per_second(tick_damage: f64, duration: f64) -> DotResult {
    let num_ticks = (duration / DEFAULT_TICK_RATE).trunc() as i64;

    DotResult {
        tick_damage,
        num_ticks,
        total_damage: tick_damage * num_ticks as f64,
        duration,
    }
}
