//! Skirmish Combat - Damage resolution
//!
//! Provides critical hits, type-aware mitigation with diminishing returns,
//! and damage over time.

pub mod damage;
pub mod dot;
pub mod log;
pub mod mitigation;

pub use damage::{compute_hit, DamageResolver, DamageResult};
pub use dot::{resolve_dot, resolve_dot_per_second, DotResult, DEFAULT_TICK_RATE};
pub use log::DamageLog;
pub use mitigation::{reduction_fraction, total_reduction};

pub use skirmish_core::{Attacker, CombatError, DamageType, Defender, Resistances};
