//! Solvers for the Linfit workspace.
//!
//! # Solvers
//!
//! - [`scan`]: exhaustive minimal-residual search over the bounded integer
//!   candidates of a normalized [`Equation`]
//!
//! [`Equation`]: linfit_core::Equation

pub mod scan;
