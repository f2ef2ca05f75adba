//! Shared fixtures for unit tests.

use bootstrap_types::state::PlasmaStateSnapshot;

/// ITER-like reference snapshot used across the kernel and strategy tests.
pub fn iter_like_snapshot() -> PlasmaStateSnapshot {
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
