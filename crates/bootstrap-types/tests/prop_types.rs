// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — Property-Based Tests (proptest) for bootstrap-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for bootstrap-types using proptest.
//!
//! Covers: snapshot validation invariants, configuration serialization
//! roundtrip, selector mapping.

use bootstrap_types::config::BootstrapConfig;
use bootstrap_types::state::{BootstrapMethod, PlasmaStateSnapshot};
use proptest::prelude::*;

fn snapshot(
    r_major: f64,
    inverse_aspect: f64,
    b_toroidal: f64,
    q0: f64,
    q_shear: f64,
    z_eff: f64,
) -> PlasmaStateSnapshot {
    PlasmaStateSnapshot {
        r_major,
        inverse_aspect,
        b_toroidal,
        plasma_current: 1.5e7,
        volume: 837.0,
        q0,
        q95: q0 + q_shear,
        ne_avg: 8.5e19,
        ne0: 1.05e20,
        ni_avg: 7.5e19,
        ni0: 9.5e19,
        te_avg: 12.0,
        te0: 25.0,
        ti_avg: 11.0,
        ti0: 23.0,
        z_eff,
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

// ── Snapshot Validation ──────────────────────────────────────────────

proptest! {
    /// Snapshots drawn from physical ranges pass validation.
    #[test]
    fn physical_snapshots_validate(
        r_major in 1.0f64..10.0,
        inverse_aspect in 0.1f64..0.7,
        b_toroidal in 1.0f64..13.0,
        q0 in 0.7f64..1.5,
        q_shear in 1.0f64..5.0,
        z_eff in 1.0f64..3.0,
    ) {
        let snap = snapshot(r_major, inverse_aspect, b_toroidal, q0, q_shear, z_eff);
        prop_assert!(snap.validate().is_ok());
    }

    /// The minor radius stays consistent with the aspect-ratio definition.
    #[test]
    fn minor_radius_definition(
        r_major in 1.0f64..10.0,
        inverse_aspect in 0.1f64..0.7,
    ) {
        let snap = snapshot(r_major, inverse_aspect, 5.3, 1.0, 2.5, 1.7);
        prop_assert!((snap.r_minor() - r_major * inverse_aspect).abs() < 1e-12);
    }

    /// An inverted q-profile never validates.
    #[test]
    fn inverted_q_profile_rejected(
        q0 in 1.0f64..5.0,
        deficit in 0.01f64..0.9,
    ) {
        let mut snap = snapshot(6.2, 0.323, 5.3, q0, 1.0, 1.7);
        snap.q95 = q0 * (1.0 - deficit);
        prop_assert!(snap.validate().is_err());
    }

    /// Any non-positive density or temperature is rejected.
    #[test]
    fn nonpositive_profile_values_rejected(
        value in -1.0e20f64..0.0,
        which in 0usize..4,
    ) {
        let mut snap = snapshot(6.2, 0.323, 5.3, 1.0, 2.5, 1.7);
        match which {
            0 => snap.ne0 = value,
            1 => snap.ni0 = value,
            2 => snap.te0 = value,
            _ => snap.ti0 = value,
        }
        prop_assert!(snap.validate().is_err());
    }
}

// ── Configuration ────────────────────────────────────────────────────

proptest! {
    /// Valid configurations survive a JSON roundtrip unchanged.
    #[test]
    fn config_roundtrip(
        method_selector in 1i32..=5,
        sauter_points in 2usize..1000,
        max_fraction in prop_oneof![0.01f64..1.0, -1.0f64..-0.01],
    ) {
        let cfg = BootstrapConfig { method_selector, sauter_points, max_fraction };
        prop_assert!(cfg.validate().is_ok());
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: BootstrapConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(cfg, cfg2);
    }

    /// Selector values map 1:1 onto the computable strategies.
    #[test]
    fn selector_mapping_total(selector in -100i32..100) {
        let result = BootstrapMethod::from_selector(selector);
        if (1..=5).contains(&selector) {
            let method = result.unwrap();
            prop_assert!(method != BootstrapMethod::Fixed);
        } else {
            prop_assert!(result.is_err());
        }
    }
}
