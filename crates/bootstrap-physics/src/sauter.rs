// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — Sauter Integrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Profile-resolved bootstrap-current integral.
//!
//! First-order, left-point quadrature over the radial grid using
//! running-difference logarithmic gradients between consecutive points.
//! The σ_neo·⟨E·B⟩ electric-field term of the underlying model is not
//! represented explicitly in this numerical form; the documented form is
//! evaluated as-is.

use std::f64::consts::PI;

use bootstrap_types::error::BootstrapResult;
use bootstrap_types::state::PlasmaStateSnapshot;

use crate::coefficients;
use crate::collisionality::LocalCollisionality;
use crate::profiles::build_profiles;

/// Bootstrap current fraction from the Sauter coefficient set, on a radial
/// grid of `n_rho` points.
///
/// The grid and every kernel intermediate are local to this call; nothing
/// is cached across invocations.
pub fn bootstrap_fraction_sauter(
    snapshot: &PlasmaStateSnapshot,
    n_rho: usize,
) -> BootstrapResult<f64> {
    let profiles = build_profiles(snapshot, n_rho)?;
    let n = profiles.len();

    let mut current = 0.0;
    for i in 1..n {
        let local = LocalCollisionality::at_point(
            &profiles,
            i,
            snapshot.r_major,
            snapshot.z_eff,
            snapshot.a_ion,
        );
        let coeff =
            coefficients::evaluate(&profiles, i, &local, snapshot.z_eff, snapshot.b_toroidal);

        let rho_prev = profiles.rho[i - 1];
        let drho = profiles.rho[i] - rho_prev;
        let dln_ne = (profiles.ne[i].ln() - profiles.ne[i - 1].ln()) / drho;
        let dln_te = (profiles.te[i].ln() - profiles.te[i - 1].ln()) / drho;
        let dln_ti = (profiles.ti[i].ln() - profiles.ti[i - 1].ln()) / drho;

        let j_boot = 0.5
            * (coeff.l31 * dln_ne + coeff.l31_32 * dln_te + coeff.l34_alpha_31 * dln_ti)
            * 1.0e6
            * (-snapshot.b_toroidal * rho_prev * profiles.inverse_q[i - 1].abs())
            / (0.2 * PI * snapshot.r_major);

        current += 2.0 * PI * rho_prev * drho * j_boot;
    }

    Ok(current / snapshot.plasma_current)
}
