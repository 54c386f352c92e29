//! Skirmish - Damage calculation demo
//!
//! Resolves a physical hit, two spells, and a poison effect for the scenario
//! in `scenario.toml` and prints a report for each.

mod report;
mod settings;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skirmish_combat::{DamageLog, DamageResolver, DamageType};

use report::{DamageReport, DotReport};
use settings::ScenarioSettings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let scenario = ScenarioSettings::load();
    let mut resolver = match scenario.seed {
        Some(seed) => {
            info!("Using fixed crit seed {}", seed);
            DamageResolver::seeded(seed)
        }
        None => DamageResolver::new(),
    };
    let mut log = DamageLog::new();

    let attacker = &scenario.attacker;
    let defender = &scenario.defender;

    println!("DAMAGE CALCULATIONS DEMO");

    let attacks = [
        (DamageType::Physical, 1.0),
        (DamageType::Fire, scenario.spells.fire_multiplier),
        (DamageType::Ice, scenario.spells.ice_multiplier),
    ];
    for (damage_type, skill_multiplier) in attacks {
        let result = resolver.resolve_hit(attacker, defender, damage_type, skill_multiplier);
        print!("{}", DamageReport(log.record(result)));
    }

    let poison = &scenario.poison;
    let dot = resolver
        .resolve_dot(poison.tick_damage, poison.duration, poison.tick_rate)
        .context("Invalid poison settings")?;
    print!(
        "{}",
        DotReport {
            title: "POISON EFFECT",
            dot: &dot,
        }
    );

    info!(
        "{} hits, {} critical, {:.2} total damage",
        log.len(),
        log.critical_count(),
        log.total_damage()
    );
    debug!("Damage log:\n{}", log.to_json()?);

    Ok(())
}
