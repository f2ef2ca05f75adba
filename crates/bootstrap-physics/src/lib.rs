//! Bootstrap-current-fraction engine.
//!
//! Stage 2: radial profile grid, collisionality kernel, neoclassical
//! coefficient kernel, Sauter integrator, empirical scaling correlations,
//! strategy selector.
//!
//! The engine is pure and stateless between invocations: every strategy is
//! a bounded computation over an immutable [`PlasmaStateSnapshot`]
//! (bootstrap-types), so independent snapshots may be evaluated in
//! parallel with no synchronization.
//!
//! [`PlasmaStateSnapshot`]: bootstrap_types::state::PlasmaStateSnapshot

pub mod coefficients;
pub mod collisionality;
pub mod profiles;
pub mod sauter;
pub mod scalings;
pub mod selector;

pub use selector::estimate_bootstrap_fraction;

#[cfg(test)]
pub(crate) mod test_support;
