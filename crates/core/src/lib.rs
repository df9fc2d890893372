//! Core types for the Linfit workspace.
//!
//! Linfit approximates a target `L` as `a·x + b·y` with non-negative integer
//! `x` and `y`. This crate defines the shared pieces that solvers and
//! observers build on:
//!
//! - [`Equation`]: the normalized coefficient pair, larger coefficient first
//! - [`Orientation`]: records whether normalization swapped the coefficients
//! - [`Observer`]: receives solver events and optionally returns control actions

mod equation;
mod observer;
mod orientation;

pub use equation::{CoefficientError, Equation};
pub use observer::Observer;
pub use orientation::Orientation;
