//! Radial profile grid for the profile-resolved bootstrap integral.
//!
//! Builds the normalized-radius discretization and evaluates the parabolic
//! density/temperature profiles and the interpolated safety-factor profile
//! at each grid point. The table is rebuilt on every Sauter evaluation;
//! plasma state may differ between optimizer iterations.

use bootstrap_types::constants::DENSITY_TO_1E19;
use bootstrap_types::error::{BootstrapError, BootstrapResult};
use bootstrap_types::state::{PlasmaStateSnapshot, SauterProfiles};
use ndarray::Array1;

/// Floor for the local inverse aspect ratio, keeping ε^{3/2} divisions
/// finite near the axis.
const EPS_FLOOR: f64 = 1e-6;

/// Floor for evaluated profile values [10¹⁹ m⁻³ / keV]. The parabolic
/// forms vanish at ρ = 1, which would put ln(0) and T^{-3/2} into the
/// collisionality kernels; the floor binds only at the outermost point.
const PROFILE_FLOOR: f64 = 1e-4;

/// Safety factor q(ρ) = q0 + (q95 − q0)·(ρ + ρ² + ρ³)/3.
///
/// Monotone interpolation from the on-axis to the edge safety factor that
/// rises faster than parabolic near the edge, as measured q-profiles do.
/// Shared with the Nevins integrand.
pub fn safety_factor(rho: f64, q0: f64, q95: f64) -> f64 {
    q0 + (q95 - q0) * (rho + rho * rho + rho * rho * rho) / 3.0
}

/// Parabolic profile c₀·(1 − ρ²)^α with the evaluation floor.
fn parabolic_profile(c0: f64, rho: f64, alpha: f64) -> f64 {
    (c0 * (1.0 - rho * rho).powf(alpha)).max(PROFILE_FLOOR)
}

/// Build the radial grid for one Sauter evaluation.
///
/// ρ runs from 1/N (avoiding the ε = 0 singularity on axis) up to 1
/// inclusive, uniformly spaced.
pub fn build_profiles(
    snapshot: &PlasmaStateSnapshot,
    n: usize,
) -> BootstrapResult<SauterProfiles> {
    if n < 2 {
        return Err(BootstrapError::ConfigError(format!(
            "Sauter radial grid needs at least 2 points, got {n}"
        )));
    }

    let rho = Array1::from_shape_fn(n, |i| (i + 1) as f64 / n as f64);
    let eps = rho.mapv(|r| (r * snapshot.inverse_aspect).max(EPS_FLOOR));
    let ne = rho.mapv(|r| parabolic_profile(snapshot.ne0 * DENSITY_TO_1E19, r, snapshot.alpha_n));
    let ni = rho.mapv(|r| parabolic_profile(snapshot.ni0 * DENSITY_TO_1E19, r, snapshot.alpha_n));
    let te = rho.mapv(|r| parabolic_profile(snapshot.te0, r, snapshot.alpha_t));
    let ti = rho.mapv(|r| parabolic_profile(snapshot.ti0, r, snapshot.alpha_t));
    let inverse_q = rho.mapv(|r| 1.0 / safety_factor(r, snapshot.q0, snapshot.q95));

    Ok(SauterProfiles {
        rho,
        eps,
        ne,
        ni,
        te,
        ti,
        inverse_q,
    })
}
