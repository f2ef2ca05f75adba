// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, BootstrapResult};

/// Bootstrap-fraction engine configuration.
///
/// `max_fraction` doubles as the cap/fixed control: a positive value caps
/// the computed fraction, a negative value forces the returned fraction to
/// its magnitude without running any strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Strategy selector: 1 = ITER89, 2 = Nevins, 3 = Wilson,
    /// 4 = Sauter, 5 = Sakai.
    #[serde(default = "default_method_selector")]
    pub method_selector: i32,
    /// Radial grid resolution for the Sauter path (N ≥ 2).
    #[serde(default = "default_sauter_points")]
    pub sauter_points: usize,
    /// Maximum-fraction control value (positive = cap; negative = fixed).
    #[serde(default = "default_max_fraction")]
    pub max_fraction: f64,
}

fn default_method_selector() -> i32 {
    4
}
fn default_sauter_points() -> usize {
    200
}
fn default_max_fraction() -> f64 {
    0.9
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            method_selector: default_method_selector(),
            sauter_points: default_sauter_points(),
            max_fraction: default_max_fraction(),
        }
    }
}

impl BootstrapConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> BootstrapResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the control values. The method selector itself is validated
    /// at dispatch time, after the fixed-fraction short circuit: a fixed
    /// run never consults it.
    pub fn validate(&self) -> BootstrapResult<()> {
        if self.sauter_points < 2 {
            return Err(BootstrapError::ConfigError(format!(
                "sauter_points must be >= 2, got {}",
                self.sauter_points
            )));
        }
        if !self.max_fraction.is_finite()
            || self.max_fraction == 0.0
            || self.max_fraction.abs() > 1.0
        {
            return Err(BootstrapError::ConfigError(format!(
                "max_fraction must be finite, non-zero and within [-1, 1], got {}",
                self.max_fraction
            )));
        }
        Ok(())
    }
}
