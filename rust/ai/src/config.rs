//! Heuristic weights and where they come from.
//!
//! Resolution order: built-in defaults, then the TOML file named by
//! `CALPOKER_AI_WEIGHTS` (any subset of fields), then one environment
//! variable per field. Later sources win.

use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;
use tracing::warn;

pub const WEIGHTS_PATH_VAR: &str = "CALPOKER_AI_WEIGHTS";

/// Every magnitude the keep-set scorer adds. The defaults reproduce the
/// California Poker front end's opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Kept cards include exactly three of one rank. Four of a kind earns no
    /// group bonus.
    pub trips_bonus: i32,
    /// Best rank group among kept cards is a pair.
    pub pair_bonus: i32,
    /// Added on top of `pair_bonus` when a second rank is paired too.
    pub two_pair_bonus: i32,
    pub four_suited_bonus: i32,
    pub three_suited_bonus: i32,
    /// Straight potential, by length of the best run (wheel draws included).
    pub run_of_four_bonus: i32,
    pub run_of_three_bonus: i32,
    pub run_of_two_bonus: i32,
    /// Multipliers for kept rank values, highest card first.
    pub position_weights: [i32; 4],
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            trips_bonus: 1000,
            pair_bonus: 500,
            two_pair_bonus: 300,
            four_suited_bonus: 400,
            three_suited_bonus: 100,
            run_of_four_bonus: 300,
            run_of_three_bonus: 100,
            run_of_two_bonus: 30,
            position_weights: [5, 4, 3, 2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightSources {
    pub trips_bonus: ValueSource,
    pub pair_bonus: ValueSource,
    pub two_pair_bonus: ValueSource,
    pub four_suited_bonus: ValueSource,
    pub three_suited_bonus: ValueSource,
    pub run_of_four_bonus: ValueSource,
    pub run_of_three_bonus: ValueSource,
    pub run_of_two_bonus: ValueSource,
    pub position_weights: ValueSource,
}

impl Default for WeightSources {
    fn default() -> Self {
        Self {
            trips_bonus: ValueSource::Default,
            pair_bonus: ValueSource::Default,
            two_pair_bonus: ValueSource::Default,
            four_suited_bonus: ValueSource::Default,
            three_suited_bonus: ValueSource::Default,
            run_of_four_bonus: ValueSource::Default,
            run_of_three_bonus: ValueSource::Default,
            run_of_two_bonus: ValueSource::Default,
            position_weights: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeightsResolved {
    pub weights: HeuristicWeights,
    pub sources: WeightSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read weights file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse weights file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid weights: {0}")]
    Invalid(String),
}

pub fn load_weights() -> Result<HeuristicWeights, ConfigError> {
    load_weights_with_sources().map(|resolved| resolved.weights)
}

pub fn load_weights_with_sources() -> Result<WeightsResolved, ConfigError> {
    let mut w = HeuristicWeights::default();
    let mut sources = WeightSources::default();

    if let Ok(path) = std::env::var(WEIGHTS_PATH_VAR)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileWeights = toml::from_str(&s)?;
        overlay(f.trips_bonus, &mut w.trips_bonus, &mut sources.trips_bonus);
        overlay(f.pair_bonus, &mut w.pair_bonus, &mut sources.pair_bonus);
        overlay(f.two_pair_bonus, &mut w.two_pair_bonus, &mut sources.two_pair_bonus);
        overlay(
            f.four_suited_bonus,
            &mut w.four_suited_bonus,
            &mut sources.four_suited_bonus,
        );
        overlay(
            f.three_suited_bonus,
            &mut w.three_suited_bonus,
            &mut sources.three_suited_bonus,
        );
        overlay(
            f.run_of_four_bonus,
            &mut w.run_of_four_bonus,
            &mut sources.run_of_four_bonus,
        );
        overlay(
            f.run_of_three_bonus,
            &mut w.run_of_three_bonus,
            &mut sources.run_of_three_bonus,
        );
        overlay(
            f.run_of_two_bonus,
            &mut w.run_of_two_bonus,
            &mut sources.run_of_two_bonus,
        );
        overlay(
            f.position_weights,
            &mut w.position_weights,
            &mut sources.position_weights,
        );
    }

    env_bonus("CALPOKER_AI_TRIPS_BONUS", &mut w.trips_bonus, &mut sources.trips_bonus)?;
    env_bonus("CALPOKER_AI_PAIR_BONUS", &mut w.pair_bonus, &mut sources.pair_bonus)?;
    env_bonus(
        "CALPOKER_AI_TWO_PAIR_BONUS",
        &mut w.two_pair_bonus,
        &mut sources.two_pair_bonus,
    )?;
    env_bonus(
        "CALPOKER_AI_FOUR_SUITED_BONUS",
        &mut w.four_suited_bonus,
        &mut sources.four_suited_bonus,
    )?;
    env_bonus(
        "CALPOKER_AI_THREE_SUITED_BONUS",
        &mut w.three_suited_bonus,
        &mut sources.three_suited_bonus,
    )?;
    env_bonus(
        "CALPOKER_AI_RUN_OF_FOUR_BONUS",
        &mut w.run_of_four_bonus,
        &mut sources.run_of_four_bonus,
    )?;
    env_bonus(
        "CALPOKER_AI_RUN_OF_THREE_BONUS",
        &mut w.run_of_three_bonus,
        &mut sources.run_of_three_bonus,
    )?;
    env_bonus(
        "CALPOKER_AI_RUN_OF_TWO_BONUS",
        &mut w.run_of_two_bonus,
        &mut sources.run_of_two_bonus,
    )?;
    if let Ok(raw) = std::env::var("CALPOKER_AI_POSITION_WEIGHTS")
        && !raw.is_empty()
    {
        w.position_weights = parse_position_weights(&raw).ok_or_else(|| {
            warn!(value = %raw, "rejected CALPOKER_AI_POSITION_WEIGHTS");
            ConfigError::Invalid(format!("position weights must be four integers, got {raw:?}"))
        })?;
        sources.position_weights = ValueSource::Env;
    }

    validate(&w)?;
    Ok(WeightsResolved {
        weights: w,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileWeights {
    #[serde(default)]
    trips_bonus: Option<i32>,
    #[serde(default)]
    pair_bonus: Option<i32>,
    #[serde(default)]
    two_pair_bonus: Option<i32>,
    #[serde(default)]
    four_suited_bonus: Option<i32>,
    #[serde(default)]
    three_suited_bonus: Option<i32>,
    #[serde(default)]
    run_of_four_bonus: Option<i32>,
    #[serde(default)]
    run_of_three_bonus: Option<i32>,
    #[serde(default)]
    run_of_two_bonus: Option<i32>,
    #[serde(default)]
    position_weights: Option<[i32; 4]>,
}

fn overlay<T>(value: Option<T>, target: &mut T, source: &mut ValueSource) {
    if let Some(v) = value {
        *target = v;
        *source = ValueSource::File;
    }
}

fn env_bonus(var: &str, target: &mut i32, source: &mut ValueSource) -> Result<(), ConfigError> {
    if let Ok(raw) = std::env::var(var)
        && !raw.is_empty()
    {
        *target = raw.trim().parse().map_err(|_| {
            warn!(var, value = %raw, "rejected weight override");
            ConfigError::Invalid(format!("{var} must be an integer, got {raw:?}"))
        })?;
        *source = ValueSource::Env;
    }
    Ok(())
}

fn parse_position_weights(raw: &str) -> Option<[i32; 4]> {
    let parsed: Vec<i32> = raw
        .split(',')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;
    parsed.try_into().ok()
}

pub fn validate(w: &HeuristicWeights) -> Result<(), ConfigError> {
    let bonuses = [
        ("trips_bonus", w.trips_bonus),
        ("pair_bonus", w.pair_bonus),
        ("two_pair_bonus", w.two_pair_bonus),
        ("four_suited_bonus", w.four_suited_bonus),
        ("three_suited_bonus", w.three_suited_bonus),
        ("run_of_four_bonus", w.run_of_four_bonus),
        ("run_of_three_bonus", w.run_of_three_bonus),
        ("run_of_two_bonus", w.run_of_two_bonus),
    ];
    if let Some((name, value)) = bonuses.iter().find(|(_, v)| *v < 0) {
        warn!(field = name, value, "rejected negative bonus");
        return Err(ConfigError::Invalid(format!(
            "{name} must be >= 0, got {value}"
        )));
    }
    let p = &w.position_weights;
    if p.iter().any(|&v| v < 0) || p.windows(2).any(|pair| pair[0] < pair[1]) {
        warn!(weights = ?p, "rejected position weights");
        return Err(ConfigError::Invalid(format!(
            "position_weights must be non-negative and non-increasing, got {p:?}"
        )));
    }
    Ok(())
}
