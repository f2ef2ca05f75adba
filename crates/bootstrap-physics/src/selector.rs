//! Bootstrap fraction selector: dispatches exactly one strategy per
//! invocation, then applies the fixed-value / maximum-fraction cap policy.
//!
//! The computation is deterministic and side-effect-free, so a failure is
//! only ever a reported condition, never a retry target.

use bootstrap_types::config::BootstrapConfig;
use bootstrap_types::error::{BootstrapError, BootstrapResult};
use bootstrap_types::state::{BootstrapEstimate, BootstrapMethod, PlasmaStateSnapshot};

use crate::sauter::bootstrap_fraction_sauter;
use crate::scalings::{
    bootstrap_fraction_iter89, bootstrap_fraction_nevins, bootstrap_fraction_sakai,
    bootstrap_fraction_wilson,
};

/// Estimate the bootstrap current fraction for one plasma-state snapshot.
///
/// A negative `max_fraction` control short-circuits every strategy and
/// returns its magnitude as a user-fixed fraction. Otherwise the selected
/// strategy runs and its result is capped at `max_fraction`, with the
/// `capped` flag (and [`BootstrapEstimate::notice`]) reporting when the
/// cap was enforced.
pub fn estimate_bootstrap_fraction(
    snapshot: &PlasmaStateSnapshot,
    config: &BootstrapConfig,
) -> BootstrapResult<BootstrapEstimate> {
    config.validate()?;
    snapshot.validate()?;

    if config.max_fraction < 0.0 {
        return Ok(BootstrapEstimate {
            fraction: -config.max_fraction,
            capped: false,
            method: BootstrapMethod::Fixed,
        });
    }

    let method = BootstrapMethod::from_selector(config.method_selector)?;
    let raw = match method {
        BootstrapMethod::Iter89 => bootstrap_fraction_iter89(snapshot),
        BootstrapMethod::Nevins => bootstrap_fraction_nevins(snapshot),
        BootstrapMethod::Wilson => bootstrap_fraction_wilson(snapshot)?,
        BootstrapMethod::Sauter => bootstrap_fraction_sauter(snapshot, config.sauter_points)?,
        BootstrapMethod::Sakai => bootstrap_fraction_sakai(snapshot)?,
        BootstrapMethod::Fixed => {
            return Err(BootstrapError::ConfigError(
                "fixed-fraction mode is requested via a negative max_fraction, \
                 not the method selector"
                    .to_string(),
            ))
        }
    };

    if raw > config.max_fraction {
        Ok(BootstrapEstimate {
            fraction: config.max_fraction,
            capped: true,
            method,
        })
    } else {
        Ok(BootstrapEstimate {
            fraction: raw,
            capped: false,
            method,
        })
    }
}
