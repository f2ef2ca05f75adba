// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — Neoclassical Coefficients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Neoclassical transport coefficients of Sauter, Angioni and Lin-Liu
//! (Phys. Plasmas 6 (1999) 2834) at one radial grid point: the L31,
//! L31+L32 and L34·α terms, each weighted by running-difference local
//! poloidal-beta corrections.
//!
//! The high-collisionality ion-viscosity term carries the sign of the
//! published erratum (Phys. Plasmas 9 (2002) 5140): +0.315·ν*ᵢ²·f_t⁶.

use bootstrap_types::state::SauterProfiles;

use crate::collisionality::{LocalCollisionality, INVERSE_Q_OFFSET};

/// Poloidal-beta prefactor for interior grid points (paired-sum form).
const BETA_INTERIOR: f64 = 1.6e-4 * std::f64::consts::PI;

/// Poloidal-beta prefactor for the boundary point, 4× the interior value
/// applied to the previous point alone.
const BETA_BOUNDARY: f64 = 6.4e-4 * std::f64::consts::PI;

/// The three coefficient terms entering the bootstrap integrand.
#[derive(Debug, Clone, Copy)]
pub struct SauterCoefficients {
    /// L31 term, weighting the density gradient.
    pub l31: f64,
    /// L31+L32 term, weighting the electron temperature gradient.
    pub l31_32: f64,
    /// (1 + L34/L31·α)·L31 term, weighting the ion temperature gradient.
    pub l34_alpha_31: f64,
}

/// Effective trapped fraction entering F31.
fn f31_effective(ft: f64, nu_e: f64, z: f64) -> f64 {
    ft / (1.0 + (1.0 - 0.1 * ft) * nu_e.sqrt() + 0.5 * (1.0 - ft) * nu_e / z)
}

/// Effective trapped fraction entering F32_ee.
fn f32ee_effective(ft: f64, nu_e: f64, z: f64) -> f64 {
    ft / (1.0 + 0.26 * (1.0 - ft) * nu_e.sqrt() + 0.18 * (1.0 - 0.37 * ft) * nu_e / z.sqrt())
}

/// Effective trapped fraction entering F32_ei.
fn f32ei_effective(ft: f64, nu_e: f64, z: f64) -> f64 {
    ft / (1.0 + (1.0 + 0.6 * ft) * nu_e.sqrt() + 0.85 * (1.0 - 0.37 * ft) * nu_e * (1.0 + z))
}

/// Effective trapped fraction entering L34.
fn f34_effective(ft: f64, nu_e: f64, z: f64) -> f64 {
    ft / (1.0 + (1.0 - 0.1 * ft) * nu_e.sqrt() + 0.5 * (1.0 - 0.5 * ft) * nu_e / z)
}

/// Quartic response function F31(X).
pub fn response_f31(x: f64, z: f64) -> f64 {
    (1.0 + 1.4 / (z + 1.0)) * x - 1.9 / (z + 1.0) * x.powi(2) + 0.3 / (z + 1.0) * x.powi(3)
        + 0.2 / (z + 1.0) * x.powi(4)
}

/// Quartic response function F32_ee(X).
pub fn response_f32ee(x: f64, z: f64) -> f64 {
    (0.05 + 0.62 * z) / (z * (1.0 + 0.44 * z)) * (x - x.powi(4))
        + 1.0 / (1.0 + 0.22 * z) * (x.powi(2) - x.powi(4) - 1.2 * (x.powi(3) - x.powi(4)))
        + 1.2 / (1.0 + 0.5 * z) * x.powi(4)
}

/// Quartic response function F32_ei(Y).
pub fn response_f32ei(y: f64, z: f64) -> f64 {
    -(0.56 + 1.93 * z) / (z * (1.0 + 0.44 * z)) * (y - y.powi(4))
        + 4.95 / (1.0 + 2.48 * z) * (y.powi(2) - y.powi(4) - 0.55 * (y.powi(3) - y.powi(4)))
        - 1.2 / (1.0 + 0.5 * z) * y.powi(4)
}

/// Ion viscosity coefficient α(ν*ᵢ), built on α0(f_t).
///
/// Erratum sign: the high-collisionality term is +0.315·ν*ᵢ²·f_t⁶, not the
/// −0.315 of the original publication.
pub fn alpha_ion_viscosity(ft: f64, nu_i: f64) -> f64 {
    let alpha0 = -1.17 * (1.0 - ft) / (1.0 - 0.22 * ft - 0.19 * ft.powi(2));
    ((alpha0 + 0.25 * (1.0 - ft.powi(2)) * nu_i.sqrt()) / (1.0 + 0.5 * nu_i.sqrt())
        + 0.315 * nu_i.powi(2) * ft.powi(6))
        / (1.0 + 0.15 * nu_i.powi(2) * ft.powi(6))
}

/// Normalization (B_T·ρ_{i−1}·|1/q_{i−1} + 1e-4|)² shared by both local
/// poloidal-beta corrections.
fn beta_normalization(profiles: &SauterProfiles, i: usize, b_toroidal: f64) -> f64 {
    (b_toroidal * profiles.rho[i - 1] * (profiles.inverse_q[i - 1] + INVERSE_Q_OFFSET).abs())
        .powi(2)
}

/// Electron-only local poloidal-beta correction at grid point `i` (i ≥ 1).
///
/// Interior points use the sum of the current and previous point's (n, T);
/// the boundary point uses the previous point's values alone, scaled 4×.
pub fn beta_poloidal_electron(profiles: &SauterProfiles, i: usize, b_toroidal: f64) -> f64 {
    let norm = beta_normalization(profiles, i, b_toroidal);
    if i == profiles.len() - 1 {
        BETA_BOUNDARY * profiles.ne[i - 1] * profiles.te[i - 1] / norm
    } else {
        BETA_INTERIOR * (profiles.ne[i] + profiles.ne[i - 1]) * (profiles.te[i] + profiles.te[i - 1])
            / norm
    }
}

/// Total (electron + ion) local poloidal-beta correction at grid point `i`
/// (i ≥ 1).
pub fn beta_poloidal_total(profiles: &SauterProfiles, i: usize, b_toroidal: f64) -> f64 {
    let norm = beta_normalization(profiles, i, b_toroidal);
    if i == profiles.len() - 1 {
        BETA_BOUNDARY
            * (profiles.ne[i - 1] * profiles.te[i - 1] + profiles.ni[i - 1] * profiles.ti[i - 1])
            / norm
    } else {
        BETA_INTERIOR
            * ((profiles.ne[i] + profiles.ne[i - 1]) * (profiles.te[i] + profiles.te[i - 1])
                + (profiles.ni[i] + profiles.ni[i - 1]) * (profiles.ti[i] + profiles.ti[i - 1]))
            / norm
    }
}

/// Evaluate the three coefficient terms at grid point `i` (i ≥ 1).
///
/// The combinations reproduce the poloidal-beta expansion of the Sauter
/// ⟨j·B⟩ expression:
///   l31 = F31·β_tot,
///   l31_32 = (F32_ee + F32_ei)·β_e + l31·β_e/β_tot,
///   l34_alpha_31 = (β_tot − β_e)·L34·α + l31·(1 − β_e/β_tot).
pub fn evaluate(
    profiles: &SauterProfiles,
    i: usize,
    local: &LocalCollisionality,
    z_eff: f64,
    b_toroidal: f64,
) -> SauterCoefficients {
    let ft = local.f_trapped;
    let nu_e = local.nu_e_star;

    let beta_e = beta_poloidal_electron(profiles, i, b_toroidal);
    let beta_tot = beta_poloidal_total(profiles, i, b_toroidal);

    let l31 = response_f31(f31_effective(ft, nu_e, z_eff), z_eff) * beta_tot;

    let l32 = response_f32ee(f32ee_effective(ft, nu_e, z_eff), z_eff)
        + response_f32ei(f32ei_effective(ft, nu_e, z_eff), z_eff);
    let l31_32 = l32 * beta_e + l31 * (beta_e / beta_tot);

    let l34 = response_f31(f34_effective(ft, nu_e, z_eff), z_eff);
    let alpha = alpha_ion_viscosity(ft, local.nu_i_star);
    let l34_alpha_31 = (beta_tot - beta_e) * (l34 * alpha) + l31 * (1.0 - beta_e / beta_tot);

    SauterCoefficients {
        l31,
        l31_32,
        l34_alpha_31,
    }
}
