// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — Empirical Scalings
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form bootstrap-fraction correlations: ITER89 (ITER Physics
//! Design Guidelines 1989), Nevins (ITER TAC report 1992), Wilson
//! (Nucl. Fusion 32 (1992) 257) and Sakai (Fusion Eng. Des. 149 (2019)).
//!
//! Each is a pure function of scalar snapshot fields; the Nevins form
//! carries its own normalized-radius quadrature, independent of the
//! Sauter grid.

use std::f64::consts::PI;

use bootstrap_types::constants::{MU0_SI, Q_ELECTRON};
use bootstrap_types::error::{BootstrapError, BootstrapResult};
use bootstrap_types::state::PlasmaStateSnapshot;

use crate::profiles::safety_factor;

/// Number of Simpson intervals for the Nevins quadrature.
const NEVINS_INTERVALS: usize = 200;

/// Profile-shape coefficient of the ITER89 correlation,
/// C_BS = 1.32 − 0.235·x + 0.0185·x² with x = min(10, q95/q0).
pub fn iter89_profile_coefficient(q0: f64, q95: f64) -> f64 {
    let xbs = (q95 / q0).min(10.0);
    1.32 - 0.235 * xbs + 0.0185 * xbs * xbs
}

/// ITER89 bootstrap fraction f_BS = C_BS·(β_pa·√ε)^1.3.
///
/// β_pa is the total beta referred to the poloidal-field estimate
/// B_pa = (I/10⁶)/(5·⟨a⟩) with effective minor radius ⟨a⟩ = √(V/2π²R).
/// A non-positive β_pa yields zero.
pub fn bootstrap_fraction_iter89(snapshot: &PlasmaStateSnapshot) -> f64 {
    let cbs = iter89_profile_coefficient(snapshot.q0, snapshot.q95);
    let a_eff = (snapshot.volume / (2.0 * PI * PI * snapshot.r_major)).sqrt();
    let b_pa = (snapshot.plasma_current / 1.0e6) / (5.0 * a_eff);
    let beta_pa = snapshot.beta_total * snapshot.b_toroidal.powi(2) / b_pa.powi(2);
    if beta_pa <= 0.0 {
        return 0.0;
    }
    cbs * (beta_pa * snapshot.inverse_aspect.sqrt()).powf(1.3)
}

/// Integrand of the Nevins correlation at normalized flux label y.
fn nevins_integrand(y: f64, snapshot: &PlasmaStateSnapshot) -> f64 {
    let z = snapshot.z_eff;
    let beta_e = snapshot.ne_avg * snapshot.te_avg * 1.0e3 * Q_ELECTRON
        / (snapshot.b_toroidal.powi(2) / (2.0 * MU0_SI));

    let nabla = snapshot.r_minor() * y.sqrt() / snapshot.r_major;
    let x = (1.46 * nabla.sqrt() + 2.4 * nabla) / (1.0 - nabla).powf(1.5);
    let d = 1.414 * z
        + z * z
        + x * (0.754 + 2.657 * z + 2.0 * z * z)
        + x * x * (0.348 + 1.243 * z + z * z);

    let al2 = -x * (0.884 + 2.074 * z) / d;
    let alpha_i = -1.172 / (1.0 + 0.462 * x);

    // Pressure-gradient basis terms; the floor keeps the y = 1 endpoint
    // finite when alpha_n + alpha_t < 1.
    let one_minus_y = (1.0 - y).max(1e-12);
    let shape = one_minus_y.powf(snapshot.alpha_n + snapshot.alpha_t - 1.0);
    let a1 = (snapshot.alpha_n + snapshot.alpha_t) * shape;
    let a2 = snapshot.alpha_t * shape;

    let al1 = x * (0.754 + 2.21 * z + z * z + x * (0.348 + 1.243 * z + z * z)) / d;
    let q = safety_factor(y, snapshot.q0, snapshot.q95);
    let pratio = (snapshot.beta_total - beta_e) / beta_e;

    (q / snapshot.q95) * (al1 * (a1 + pratio * (a1 + alpha_i * a2)) + al2 * a2)
}

/// Composite Simpson quadrature of `f` over [0, 1].
fn simpson<F: Fn(f64) -> f64>(f: F, n_intervals: usize) -> f64 {
    let h = 1.0 / n_intervals as f64;
    let mut total = f(0.0) + f(1.0);
    for k in 1..n_intervals {
        let weight = if k % 2 == 1 { 4.0 } else { 2.0 };
        total += f(k as f64 * h) * weight;
    }
    total * h / 3.0
}

/// Nevins bootstrap fraction: 10⁶·(2.5·β_e0·R·B_T·q95·∫₀¹B_int dy)/I.
pub fn bootstrap_fraction_nevins(snapshot: &PlasmaStateSnapshot) -> f64 {
    let beta_e0 = snapshot.ne0 * snapshot.te0 * 1.0e3 * Q_ELECTRON
        / (snapshot.b_toroidal.powi(2) / (2.0 * MU0_SI));
    let integral = simpson(|y| nevins_integrand(y, snapshot), NEVINS_INTERVALS);
    let i_bootstrap_ma =
        2.5 * beta_e0 * snapshot.r_major * snapshot.b_toroidal * snapshot.q95 * integral;
    1.0e6 * i_bootstrap_ma / snapshot.plasma_current
}

/// Wilson bootstrap fraction: √ε₀·β_p,th·Σ aᵢ·bᵢ over the 12-term
/// bilinear expansion.
///
/// The effective pressure/temperature exponents are obtained by matching
/// the half-value radius of each parabolic profile against the q-profile
/// (a direct formula, no iteration). ε₀ = (R_max − R_min)/(R_max + R_min)
/// is deliberately computed from the geometric extremes R ± a rather than
/// reusing the snapshot inverse aspect ratio.
pub fn bootstrap_fraction_wilson(snapshot: &PlasmaStateSnapshot) -> BootstrapResult<f64> {
    let alpha_p = snapshot.alpha_n + snapshot.alpha_t;
    if snapshot.alpha_t <= 0.0 {
        return Err(BootstrapError::DomainError {
            field: "alpha_t",
            value: snapshot.alpha_t,
        });
    }
    if snapshot.alpha_j <= 0.0 {
        return Err(BootstrapError::DomainError {
            field: "alpha_j",
            value: snapshot.alpha_j,
        });
    }
    if snapshot.q95 <= snapshot.q0 {
        return Err(BootstrapError::PhysicsViolation(format!(
            "Wilson scaling needs a sheared q-profile with q95 > q0, got q0 = {}, q95 = {}",
            snapshot.q0, snapshot.q95
        )));
    }

    // Half-value matching: (1 - rho^2)^alpha = 1/2 fixes rho^2, and the
    // q-profile value there fixes the effective exponent.
    let ln_half = 0.5_f64.ln();
    let ln_q_ratio = (snapshot.q0 / snapshot.q95).ln();
    let term_p = 1.0 - 0.5_f64.powf(1.0 / alpha_p);
    let term_t = 1.0 - 0.5_f64.powf(1.0 / snapshot.alpha_t);
    let alpha_p_eff = ln_half
        / (((snapshot.q0 + (snapshot.q95 - snapshot.q0) * term_p) / snapshot.q95).ln()
            / ln_q_ratio)
            .ln();
    let alpha_t_eff = ln_half
        / (((snapshot.q0 + (snapshot.q95 - snapshot.q0) * term_t) / snapshot.q95).ln()
            / ln_q_ratio)
            .ln();
    if !alpha_p_eff.is_finite() || alpha_p_eff <= 0.0 {
        return Err(BootstrapError::DomainError {
            field: "alpha_p_eff",
            value: alpha_p_eff,
        });
    }
    if !alpha_t_eff.is_finite() || alpha_t_eff <= 0.0 {
        return Err(BootstrapError::DomainError {
            field: "alpha_t_eff",
            value: alpha_t_eff,
        });
    }

    let z = snapshot.z_eff;
    let aj = snapshot.alpha_j;
    let saj = aj.sqrt();
    let a = [
        1.41 * (1.0 - 0.28 * saj) * (1.0 + 0.12 / z),
        0.36 * (1.0 - 0.59 * saj) * (1.0 + 0.8 / z),
        -0.27 * (1.0 - 0.47 * saj) * (1.0 + 3.0 / z),
        0.0053 * (1.0 + 5.0 / z),
        -0.93 * (1.0 - 0.34 * saj) * (1.0 + 0.15 / z),
        -0.26 * (1.0 - 0.57 * saj) * (1.0 - 0.27 * z),
        0.064 * (1.0 - 0.6 * aj + 0.15 * aj * aj) * (1.0 + 7.6 / z),
        -0.0011 * (1.0 + 9.0 / z),
        -0.33 * (1.0 - aj + 0.33 * aj * aj),
        -0.26 * (1.0 - 0.87 / saj - 0.16 * aj),
        -0.14 * (1.0 - 1.14 / saj - 0.45 * saj),
        -0.0069,
    ];

    let r_max = snapshot.r_major + snapshot.r_minor();
    let r_min = snapshot.r_major - snapshot.r_minor();
    let eps0 = (r_max - r_min) / (r_max + r_min);
    let seps0 = eps0.sqrt();
    let b = [
        1.0,
        alpha_p_eff,
        alpha_t_eff,
        alpha_p_eff * alpha_t_eff,
        seps0,
        alpha_p_eff * seps0,
        alpha_t_eff * seps0,
        alpha_p_eff * alpha_t_eff * seps0,
        eps0,
        alpha_p_eff * eps0,
        alpha_t_eff * eps0,
        alpha_p_eff * alpha_t_eff * eps0,
    ];

    let expansion: f64 = a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum();
    Ok(seps0 * snapshot.beta_poloidal_thermal * expansion)
}

/// Sakai bootstrap fraction: single power law in ε, β_p, l_i, q95/q0 and
/// the profile exponents.
///
/// Valid only when the diamagnetic contribution is excluded in the outer
/// current balance; that precondition belongs to the caller.
pub fn bootstrap_fraction_sakai(snapshot: &PlasmaStateSnapshot) -> BootstrapResult<f64> {
    if snapshot.beta_poloidal <= 0.0 {
        return Err(BootstrapError::DomainError {
            field: "beta_poloidal",
            value: snapshot.beta_poloidal,
        });
    }
    if snapshot.alpha_n <= 0.0 {
        return Err(BootstrapError::DomainError {
            field: "alpha_n",
            value: snapshot.alpha_n,
        });
    }
    if snapshot.alpha_t <= 0.0 {
        return Err(BootstrapError::DomainError {
            field: "alpha_t",
            value: snapshot.alpha_t,
        });
    }

    let eps = snapshot.inverse_aspect;
    Ok(10.0_f64.powf(0.951 * eps - 0.948)
        * snapshot.beta_poloidal.powf(1.226 * eps + 1.584)
        * snapshot.l_i.powf(-0.184 * eps - 0.282)
        * (snapshot.q95 / snapshot.q0).powf(-0.042 * eps - 0.02)
        * snapshot.alpha_n.powf(0.13 * eps + 0.05)
        * snapshot.alpha_t.powf(0.502 * eps - 0.273))
}
