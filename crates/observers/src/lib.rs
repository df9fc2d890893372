//! Reusable observers and reporting for the Linfit workspace.
//!
//! This crate provides [`Observer`] implementations for the
//! [`scan`](linfit_solvers::scan) solver and the human-readable report that
//! presents its result.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasResidual`], [`CanStopEarly`]) and [`StopBelow`]
//!
//! # Observers
//!
//! - [`ResidualTable`]: records every candidate for later display
//! - [`Trace`]: forwards scan events to `tracing`
//!
//! # Reporting
//!
//! - [`Report`]: renders a solution, its equation and an optional timing
//!
//! [`Observer`]: linfit_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`StopBelow`]: traits::StopBelow

pub mod traits;

mod report;
mod residuals;
mod trace;

pub use report::Report;
pub use residuals::{ResidualTable, Row};
pub use trace::Trace;
