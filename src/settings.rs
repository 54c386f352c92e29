//! Demo scenario settings with persistence
//!
//! Settings are read from `~/.config/skirmish/scenario.toml`

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use skirmish_core::{Attacker, DamageType, Defender};
use tracing::{info, warn};

/// Everything the demo needs to run its attacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSettings {
    pub attacker: Attacker,
    pub defender: Defender,
    #[serde(default)]
    pub spells: SpellSettings,
    #[serde(default)]
    pub poison: PoisonSettings,
    /// Fixed seed for crit rolls; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            attacker: Attacker::new("Warrior", 100.0)
                .with_crit(0.25, 2.5)
                .with_armor_penetration(0.2),
            defender: Defender::new("Goblin", 50.0)
                .with_resistance(DamageType::Fire, 30.0)
                .with_resistance(DamageType::Ice, -20.0),
            spells: SpellSettings::default(),
            poison: PoisonSettings::default(),
            seed: None,
        }
    }
}

impl ScenarioSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skirmish"))
    }

    /// Get the scenario file path
    fn scenario_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("scenario.toml"))
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Invalid scenario file")
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::scenario_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No scenario file found, writing defaults to {:?}", path);
            let settings = Self::default();
            if let Err(e) = settings.save() {
                warn!("Failed to write default scenario: {:#}", e);
            }
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(settings) => {
                    info!("Loaded scenario from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse scenario: {:#}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read scenario file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("scenario.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved scenario to {:?}", path);
        Ok(())
    }
}

/// Skill multipliers for the demo's spell attacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellSettings {
    pub fire_multiplier: f64,
    pub ice_multiplier: f64,
}

impl Default for SpellSettings {
    fn default() -> Self {
        Self {
            fire_multiplier: 1.5,
            ice_multiplier: 1.3,
        }
    }
}

/// Poison damage over time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoisonSettings {
    pub tick_damage: f64,
    /// Seconds
    pub duration: f64,
    /// Seconds between ticks
    pub tick_rate: f64,
}

impl Default for PoisonSettings {
    fn default() -> Self {
        Self {
            tick_damage: 15.0,
            duration: 10.0,
            tick_rate: 2.0,
        }
    }
}
