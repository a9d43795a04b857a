//! Engine configuration.
//!
//! Hosts build an `EngineConfig` once (in code or deserialized from their
//! own config file) and hand it to the `MatchManager`. Every field has a
//! default that matches the standard rules.

use serde::{Deserialize, Serialize};

/// Tuning for the heuristic bot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// How many cells behind a destination an opponent must sit to count
    /// as a threat. Six covers everything reachable in one roll.
    pub risk_window: u8,

    /// Score subtracted from a threatened destination.
    pub risk_penalty: i32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            risk_window: 6,
            risk_penalty: 8,
        }
    }
}

impl BotConfig {
    /// Disable risk avoidance: the bot always advances its leading token.
    #[must_use]
    pub fn reckless() -> Self {
        Self {
            risk_window: 0,
            risk_penalty: 0,
        }
    }
}

/// Engine-wide configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for match codes and per-match dice. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Length of generated match codes.
    pub code_length: usize,

    /// Attempts at drawing an unused match code before giving up.
    pub max_code_attempts: usize,

    /// Extra rolls an automated seat may earn from back-to-back sixes
    /// inside one auto-play chain. The six after the last allowed replay
    /// is reported as a fault and the seat's turn is passed.
    pub max_auto_replays: u32,

    /// Seat bots on all free colors when a forming match starts.
    pub auto_fill_on_start: bool,

    pub bot: BotConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            code_length: 6,
            max_code_attempts: 64,
            max_auto_replays: 16,
            auto_fill_on_start: false,
            bot: BotConfig::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_code_length(mut self, length: usize) -> Self {
        assert!(length > 0, "Match codes need at least one character");
        self.code_length = length;
        self
    }

    #[must_use]
    pub fn with_max_auto_replays(mut self, replays: u32) -> Self {
        self.max_auto_replays = replays;
        self
    }

    #[must_use]
    pub fn with_auto_fill_on_start(mut self, fill: bool) -> Self {
        self.auto_fill_on_start = fill;
        self
    }

    #[must_use]
    pub fn with_bot(mut self, bot: BotConfig) -> Self {
        self.bot = bot;
        self
    }
}
