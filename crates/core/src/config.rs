// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::time::Duration;

use crate::detect::rules::preset;
use crate::detect::rules::RuleDef;

pub mod defaults {
    use std::time::Duration;

    pub fn jobs() -> usize {
        8
    }

    pub fn timeout() -> Duration {
        Duration::from_secs(30 * 60)
    }
}

/// All settings for a single scan, constructed once at startup.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub identifier: String,
    pub jobs: usize,
    pub enclosed: bool,
    pub timeout: Duration,
    pub preset: RulesPreset,
    pub retry: RetryStrategy,
    pub custom_rules: Vec<String>,
    pub quiet: bool,
    pub json: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            identifier: "-".to_string(),
            jobs: defaults::jobs(),
            enclosed: false,
            timeout: defaults::timeout(),
            preset: RulesPreset::Secret,
            retry: RetryStrategy::Never,
            custom_rules: Vec::new(),
            quiet: false,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RulesPreset {
    /// Every built-in rule.
    All,
    /// All rules except a hand-curated list of noisy generic ones.
    Most,
    /// Only rules for secrets, access tokens and private keys.
    Secret,
}

impl RulesPreset {
    pub fn rules(&self) -> Vec<RuleDef> {
        match self {
            Self::All => preset::all(),
            Self::Most => preset::most(),
            Self::Secret => preset::secret(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RetryStrategy {
    /// Give up after the first failure.
    Never,
    /// 5 attempts, 5 seconds apart.
    Constant,
    /// Exponentially growing delays, capped at 15 minutes.
    Exponential,
    /// Retry immediately, forever.
    Always,
}
