// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, BootstrapResult};

/// Self-consistent plasma-state snapshot, owned by the outer
/// current-balance solver and read-only here.
///
/// Temperatures in keV, densities in m⁻³. The snapshot is re-supplied on
/// every invocation; nothing derived from it is cached across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PlasmaStateSnapshot {
    pub r_major: f64,        // Major radius [m]
    pub inverse_aspect: f64, // ε = a/R₀, in (0, 1)
    pub b_toroidal: f64,     // Toroidal field on axis [T]
    pub plasma_current: f64, // [A]
    pub volume: f64,         // Plasma volume [m³]
    pub q0: f64,             // On-axis safety factor
    pub q95: f64,            // Safety factor at the 95% flux surface
    pub ne_avg: f64,         // Volume-averaged electron density [m⁻³]
    pub ne0: f64,            // Central electron density [m⁻³]
    pub ni_avg: f64,         // Volume-averaged ion density [m⁻³]
    pub ni0: f64,            // Central ion density [m⁻³]
    pub te_avg: f64,         // Volume-averaged electron temperature [keV]
    pub te0: f64,            // Central electron temperature [keV]
    pub ti_avg: f64,         // Volume-averaged ion temperature [keV]
    pub ti0: f64,            // Central ion temperature [keV]
    pub z_eff: f64,          // Effective charge
    pub a_ion: f64,          // Main ion mass number
    pub alpha_n: f64,        // Density profile exponent
    pub alpha_t: f64,        // Temperature profile exponent
    pub alpha_j: f64,        // Current profile exponent
    pub l_i: f64,            // Normalized internal inductance
    pub beta_total: f64,     // Total toroidal beta
    pub beta_poloidal: f64,  // Poloidal beta
    pub beta_poloidal_thermal: f64, // Thermal-component poloidal beta
}

fn require_positive(field: &'static str, value: f64) -> BootstrapResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BootstrapError::DomainError { field, value });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> BootstrapResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BootstrapError::DomainError { field, value });
    }
    Ok(())
}

impl PlasmaStateSnapshot {
    /// Minor radius a = ε·R₀ [m].
    pub fn r_minor(&self) -> f64 {
        self.r_major * self.inverse_aspect
    }

    /// Check the snapshot invariants. Non-physical values are caller
    /// errors and must fail the whole call rather than be patched up;
    /// masking them would silently corrupt the outer optimizer.
    pub fn validate(&self) -> BootstrapResult<()> {
        require_positive("r_major", self.r_major)?;
        require_positive("b_toroidal", self.b_toroidal)?;
        require_positive("plasma_current", self.plasma_current)?;
        require_positive("volume", self.volume)?;
        require_positive("q0", self.q0)?;
        require_positive("q95", self.q95)?;
        require_positive("ne_avg", self.ne_avg)?;
        require_positive("ne0", self.ne0)?;
        require_positive("ni_avg", self.ni_avg)?;
        require_positive("ni0", self.ni0)?;
        require_positive("te_avg", self.te_avg)?;
        require_positive("te0", self.te0)?;
        require_positive("ti_avg", self.ti_avg)?;
        require_positive("ti0", self.ti0)?;
        require_positive("l_i", self.l_i)?;
        require_non_negative("alpha_n", self.alpha_n)?;
        require_non_negative("alpha_t", self.alpha_t)?;
        require_non_negative("alpha_j", self.alpha_j)?;
        require_non_negative("beta_total", self.beta_total)?;
        require_non_negative("beta_poloidal", self.beta_poloidal)?;
        require_non_negative("beta_poloidal_thermal", self.beta_poloidal_thermal)?;

        if !self.inverse_aspect.is_finite()
            || self.inverse_aspect <= 0.0
            || self.inverse_aspect >= 1.0
        {
            return Err(BootstrapError::PhysicsViolation(format!(
                "inverse_aspect must lie in (0, 1), got {}",
                self.inverse_aspect
            )));
        }
        if self.q95 < self.q0 {
            return Err(BootstrapError::PhysicsViolation(format!(
                "safety factor profile must satisfy q95 >= q0, got q0 = {}, q95 = {}",
                self.q0, self.q95
            )));
        }
        if !self.z_eff.is_finite() || self.z_eff < 1.0 {
            return Err(BootstrapError::PhysicsViolation(format!(
                "z_eff must be finite and >= 1, got {}",
                self.z_eff
            )));
        }
        if !self.a_ion.is_finite() || self.a_ion < 1.0 {
            return Err(BootstrapError::PhysicsViolation(format!(
                "a_ion must be finite and >= 1, got {}",
                self.a_ion
            )));
        }
        Ok(())
    }
}

/// Radial profile table for the profile-resolved bootstrap integral.
///
/// Owned by the Sauter path only: rebuilt at the start of every
/// evaluation and discarded once the integral is accumulated.
/// Densities in 10¹⁹ m⁻³, temperatures in keV.
#[derive(Debug, Clone)]
pub struct SauterProfiles {
    pub rho: Array1<f64>,       // Normalized radius, (0, 1]
    pub eps: Array1<f64>,       // Local inverse aspect ratio ε(ρ) = ρ·a/R₀
    pub ne: Array1<f64>,        // Electron density [10¹⁹ m⁻³]
    pub ni: Array1<f64>,        // Ion density [10¹⁹ m⁻³]
    pub te: Array1<f64>,        // Electron temperature [keV]
    pub ti: Array1<f64>,        // Ion temperature [keV]
    pub inverse_q: Array1<f64>, // 1/q(ρ)
}

impl SauterProfiles {
    pub fn len(&self) -> usize {
        self.rho.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rho.is_empty()
    }
}

/// Bootstrap-current estimation strategy.
///
/// The discrete selector values 1..=5 map onto the five computable
/// variants; `Fixed` is produced only by the negative-control fixed mode
/// and is not reachable from the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootstrapMethod {
    Iter89,
    Nevins,
    Wilson,
    Sauter,
    Sakai,
    Fixed,
}

impl BootstrapMethod {
    pub fn from_selector(selector: i32) -> BootstrapResult<Self> {
        match selector {
            1 => Ok(BootstrapMethod::Iter89),
            2 => Ok(BootstrapMethod::Nevins),
            3 => Ok(BootstrapMethod::Wilson),
            4 => Ok(BootstrapMethod::Sauter),
            5 => Ok(BootstrapMethod::Sakai),
            other => Err(BootstrapError::ConfigError(format!(
                "bootstrap method selector must be in 1..=5, got {other}"
            ))),
        }
    }
}

/// Notice surfaced by the caller's reporting layer when the cap binds.
pub const CAP_NOTICE: &str = "Bootstrap fraction upper limit enforced";

/// Result of one bootstrap-fraction evaluation. Created once per
/// invocation and immediately consumed by the current-balance solver.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapEstimate {
    pub fraction: f64,
    pub capped: bool,
    pub method: BootstrapMethod,
}

impl BootstrapEstimate {
    /// The user-visible cap notice, when capping occurred. This core does
    /// not own logging or output formatting; it only reports the flag.
    pub fn notice(&self) -> Option<&'static str> {
        if self.capped {
            Some(CAP_NOTICE)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_snapshot() -> PlasmaStateSnapshot {
        PlasmaStateSnapshot {
            r_major: 6.2,
            inverse_aspect: 0.323,
            b_toroidal: 5.3,
            plasma_current: 1.5e7,
            volume: 837.0,
            q0: 1.0,
            q95: 3.5,
            ne_avg: 8.5e19,
            ne0: 1.05e20,
            ni_avg: 7.5e19,
            ni0: 9.5e19,
            te_avg: 12.0,
            te0: 25.0,
            ti_avg: 11.0,
            ti0: 23.0,
            z_eff: 1.7,
            a_ion: 2.5,
            alpha_n: 0.5,
            alpha_t: 1.0,
            alpha_j: 1.5,
            l_i: 0.9,
            beta_total: 0.03,
            beta_poloidal: 0.65,
            beta_poloidal_thermal: 0.6,
        }
    }

    #[test]
    fn test_reference_snapshot_is_valid() {
        reference_snapshot().validate().expect("valid snapshot");
    }

    #[test]
    fn test_r_minor() {
        let snap = reference_snapshot();
        assert!((snap.r_minor() - 6.2 * 0.323).abs() < 1e-12);
    }

    #[test]
    fn test_validation_names_offending_field() {
        let mut snap = reference_snapshot();
        snap.ne0 = -1.0e19;
        match snap.validate().expect_err("negative density must fail") {
            BootstrapError::DomainError { field, value } => {
                assert_eq!(field, "ne0");
                assert_eq!(value, -1.0e19);
            }
            other => panic!("Unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_nan_temperature() {
        let mut snap = reference_snapshot();
        snap.te0 = f64::NAN;
        match snap.validate().expect_err("NaN temperature must fail") {
            BootstrapError::DomainError { field, .. } => assert_eq!(field, "te0"),
            other => panic!("Unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_inverted_q_profile() {
        let mut snap = reference_snapshot();
        snap.q0 = 4.0;
        snap.q95 = 2.0;
        match snap.validate().expect_err("q95 < q0 must fail") {
            BootstrapError::PhysicsViolation(msg) => assert!(msg.contains("q95")),
            other => panic!("Unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_aspect_ratio_out_of_range() {
        for bad in [0.0, 1.0, 1.4, -0.2] {
            let mut snap = reference_snapshot();
            snap.inverse_aspect = bad;
            assert!(
                snap.validate().is_err(),
                "inverse_aspect = {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_method_selector_mapping() {
        assert_eq!(
            BootstrapMethod::from_selector(1).unwrap(),
            BootstrapMethod::Iter89
        );
        assert_eq!(
            BootstrapMethod::from_selector(2).unwrap(),
            BootstrapMethod::Nevins
        );
        assert_eq!(
            BootstrapMethod::from_selector(3).unwrap(),
            BootstrapMethod::Wilson
        );
        assert_eq!(
            BootstrapMethod::from_selector(4).unwrap(),
            BootstrapMethod::Sauter
        );
        assert_eq!(
            BootstrapMethod::from_selector(5).unwrap(),
            BootstrapMethod::Sakai
        );
        for bad in [0, 6, -1, 99] {
            match BootstrapMethod::from_selector(bad) {
                Err(BootstrapError::ConfigError(msg)) => assert!(msg.contains("selector")),
                other => panic!("selector {bad} should be a config error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_cap_notice_only_when_capped() {
        let capped = BootstrapEstimate {
            fraction: 0.6,
            capped: true,
            method: BootstrapMethod::Sauter,
        };
        assert_eq!(capped.notice(), Some(CAP_NOTICE));

        let free = BootstrapEstimate {
            fraction: 0.3,
            capped: false,
            method: BootstrapMethod::Sauter,
        };
        assert_eq!(free.notice(), None);
    }
}
