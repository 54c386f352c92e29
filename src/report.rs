//! Console damage reports

use std::fmt;

use skirmish_combat::{DamageResult, DotResult};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Boxed breakdown of a single hit
pub struct DamageReport<'a>(pub &'a DamageResult);

impl fmt::Display for DamageReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let rule = rule();

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{} attacks {}", result.attacker, result.defender)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Base Damage: {:.2}", result.base_damage)?;
        if result.is_critical {
            writeln!(f, "⚡ CRITICAL HIT! ⚡")?;
        }
        writeln!(f, "Damage Type: {}", result.damage_type.name().to_uppercase())?;
        writeln!(f, "Reduction: {:.2}", result.reduction)?;
        writeln!(f, "Final Damage: {:.2}", result.final_damage)?;
        writeln!(f, "{rule}")
    }
}

/// Breakdown of a damage-over-time effect under a heading
pub struct DotReport<'a> {
    pub title: &'a str,
    pub dot: &'a DotResult,
}

impl fmt::Display for DotReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = rule();

        writeln!(f)?;
        writeln!(f, "{} (Damage Over Time)", self.title)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Tick Damage: {}", self.dot.tick_damage)?;
        writeln!(f, "Number of Ticks: {}", self.dot.num_ticks)?;
        writeln!(f, "Total Damage: {}", self.dot.total_damage)?;
        writeln!(f, "Duration: {}s", self.dot.duration)?;
        writeln!(f, "{rule}")
    }
}
