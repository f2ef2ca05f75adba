// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — Collisionality Kernel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Collisionality kernel: trapped-particle fraction, Coulomb logarithm,
//! collision frequencies and normalized collisionalities at one radial
//! grid point.
//!
//! Densities in 10¹⁹ m⁻³, temperatures in keV. The numeric prefactors are
//! calibrated constants of the correlation set.

use bootstrap_types::state::SauterProfiles;

/// Offset keeping the inverse safety factor away from zero in the
/// collisionality and poloidal-beta denominators.
pub const INVERSE_Q_OFFSET: f64 = 1e-4;

/// Trapped particle fraction f_t(ε) = [1 − (1−ε)·√(1−ε)] / (1 + 1.46·√ε).
///
/// Exactly zero on axis. The fit is monotone over the aspect-ratio range
/// of closed flux surfaces (it rolls over just below ε = 1, outside any
/// realizable local inverse aspect ratio).
pub fn trapped_fraction(eps: f64) -> f64 {
    (1.0 - (1.0 - eps) * (1.0 - eps).sqrt()) / (1.0 + 1.46 * eps.sqrt())
}

/// Coulomb logarithm ln Λ = 15.9 − 0.5·ln n_e + ln T_e.
pub fn coulomb_logarithm(ne: f64, te: f64) -> f64 {
    15.9 - 0.5 * ne.ln() + te.ln()
}

/// Electron collision frequency ν_e = 670·lnΛ·n_e / T_e^{3/2}.
pub fn electron_collision_frequency(ln_lambda: f64, ne: f64, te: f64) -> f64 {
    670.0 * ln_lambda * ne / te.powf(1.5)
}

/// Electron collisionality
/// ν*_e = 1.4·R·ν_e·Z_eff / |(1/q)·ε^{3/2}·√T_e·1.875e7|.
///
/// The absolute value guards against sign flips of 1/q near the axis.
pub fn electron_collisionality(
    nu_e: f64,
    r_major: f64,
    z_eff: f64,
    inverse_q: f64,
    eps: f64,
    te: f64,
) -> f64 {
    1.4 * r_major * nu_e * z_eff / (inverse_q * eps.powf(1.5) * te.sqrt() * 1.875e7).abs()
}

/// Ion collision frequency ν_i = 320·Z_eff⁴·n_i / (T_i^{3/2}·√A).
pub fn ion_collision_frequency(z_eff: f64, ni: f64, ti: f64, a_ion: f64) -> f64 {
    320.0 * z_eff.powi(4) * ni / (ti.powf(1.5) * a_ion.sqrt())
}

/// Ion collisionality
/// ν*_i = 3.2e-6·ν_i·R / |((1/q) + 1e-4)·ε^{3/2}·√(T_i/A)|.
pub fn ion_collisionality(
    nu_i: f64,
    r_major: f64,
    inverse_q: f64,
    eps: f64,
    ti: f64,
    a_ion: f64,
) -> f64 {
    3.2e-6 * nu_i * r_major
        / ((inverse_q + INVERSE_Q_OFFSET) * eps.powf(1.5) * (ti / a_ion).sqrt()).abs()
}

/// Collisionality state at one radial grid point.
#[derive(Debug, Clone, Copy)]
pub struct LocalCollisionality {
    pub f_trapped: f64,
    pub nu_e_star: f64,
    pub nu_i_star: f64,
}

impl LocalCollisionality {
    /// Run the full chain at grid point `i`.
    pub fn at_point(
        profiles: &SauterProfiles,
        i: usize,
        r_major: f64,
        z_eff: f64,
        a_ion: f64,
    ) -> Self {
        let eps = profiles.eps[i];
        let ne = profiles.ne[i];
        let te = profiles.te[i];
        let ti = profiles.ti[i];
        let inverse_q = profiles.inverse_q[i];

        let ln_lambda = coulomb_logarithm(ne, te);
        let nu_e = electron_collision_frequency(ln_lambda, ne, te);
        let nu_i = ion_collision_frequency(z_eff, profiles.ni[i], ti, a_ion);

        LocalCollisionality {
            f_trapped: trapped_fraction(eps),
            nu_e_star: electron_collisionality(nu_e, r_major, z_eff, inverse_q, eps, te),
            nu_i_star: ion_collisionality(nu_i, r_major, inverse_q, eps, ti, a_ion),
        }
    }
}
