/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::catalog::Variant;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Which edition of the investigation to run (4 or 7 cases).
    pub variant: Variant,
    pub timing: TimingConfig,
}

/// All delays are in simulation ticks except the tick rate itself.
#[derive(Clone, Debug)]
pub struct TimingConfig {
    pub tick_rate_ms: u64,
    /// Cosmetic "processing" delay before a submission is adjudicated.
    pub deliberation_ticks: u32,
    /// Longer delay for the dramatic levels (the arrest, the finale).
    pub verdict_ticks: u32,
    /// Delay between closing the final case and the victory screen.
    pub victory_ticks: u32,
    /// How long a notification stays on screen.
    pub notice_ticks: u32,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    general: TomlGeneral,
    #[serde(default)]
    timing: TomlTiming,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_variant")]
    variant: String,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_deliberation")]
    deliberation_ticks: u32,
    #[serde(default = "default_verdict")]
    verdict_ticks: u32,
    #[serde(default = "default_victory")]
    victory_ticks: u32,
    #[serde(default = "default_notice")]
    notice_ticks: u32,
}

// ── Defaults ──

fn default_variant() -> String { "seven".into() }
fn default_tick_rate() -> u64 { 75 }
fn default_deliberation() -> u32 { 13 }  // ~1s at 75ms tick
fn default_verdict() -> u32 { 20 }       // ~1.5s
fn default_victory() -> u32 { 13 }
fn default_notice() -> u32 { 55 }        // ~4s

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral { variant: default_variant() }
    }
}

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            tick_rate_ms: default_tick_rate(),
            deliberation_ticks: default_deliberation(),
            verdict_ticks: default_verdict(),
            victory_ticks: default_victory(),
            notice_ticks: default_notice(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());

        let variant = match Variant::parse(&toml_cfg.general.variant) {
            Some(v) => v,
            None => {
                eprintln!(
                    "Warning: unknown variant {:?}, running the full game.",
                    toml_cfg.general.variant,
                );
                Variant::Seven
            }
        };

        GameConfig {
            variant,
            timing: TimingConfig {
                tick_rate_ms: toml_cfg.timing.tick_rate_ms.max(1),
                deliberation_ticks: toml_cfg.timing.deliberation_ticks,
                verdict_ticks: toml_cfg.timing.verdict_ticks,
                victory_ticks: toml_cfg.timing.victory_ticks,
                notice_ticks: toml_cfg.timing.notice_ticks,
            },
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: TomlConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(cfg.general.variant, "seven");
        assert_eq!(cfg.timing.tick_rate_ms, 75);
        assert_eq!(cfg.timing.deliberation_ticks, 13);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: TomlConfig = toml::from_str(
            "[general]\nvariant = \"four\"\n\n[timing]\ntick_rate_ms = 50\n",
        )
        .expect("partial config parses");
        assert_eq!(cfg.general.variant, "four");
        assert_eq!(cfg.timing.tick_rate_ms, 50);
        assert_eq!(cfg.timing.notice_ticks, 55);
    }
}
