//! Core types and traits for the Stochastic RSI workspace.
//!
//! This crate provides the foundational building blocks including:
//! - The indicator error taxonomy and the pipeline [`Stage`] it reports on
//! - Indicator traits, including the [`RsiProvider`] seam used to plug in
//!   an RSI implementation

pub mod error;
pub mod traits;

pub use error::{IndicatorError, IndicatorResult, Stage};
pub use traits::*;
