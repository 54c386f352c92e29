//! Skirmish Core - Combatant stats and damage types
//!
//! This crate provides the data model shared by the resolver and its callers:
//! - Damage types and the mitigation source of each
//! - Attacker and defender stats
//! - Common error types

pub mod damage_type;
pub mod error;
pub mod stats;

pub use damage_type::{DamageType, MitigationSource, DAMAGE_TYPE_COUNT};
pub use error::CombatError;
pub use stats::{Attacker, Defender, Resistances};
