// ─────────────────────────────────────────────────────────────────────
// SCPN Bootstrap Engine — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Vacuum permeability (H/m) - real SI value.
pub const MU0_SI: f64 = 1.2566370614e-6;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// keV to Joules conversion: 1 keV = 1000 eV × 1.602e-19 J/eV
pub const KEV_TO_JOULES: f64 = 1.602176634e-16;

/// Density unit conversion m⁻³ → 10¹⁹ m⁻³, the unit the collisionality
/// correlations are calibrated for.
pub const DENSITY_TO_1E19: f64 = 1.0e-19;
