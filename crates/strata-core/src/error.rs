// File: crates/strata-core/src/error.rs
// Summary: Library error type for fatal configuration and contract failures.

use thiserror::Error;

/// Errors raised while constructing or resolving a chart state.
///
/// Fatal configuration errors abort construction before any decoration is
/// touched; no partially constructed state is observable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// A chart state requires at least one data item.
    #[error("chart data must contain at least one item")]
    EmptyData,

    /// Vertical chart padding is not supported; the base padding must have
    /// zero top and bottom components.
    #[error("vertical chart padding is not supported (top: {top}, bottom: {bottom})")]
    VerticalPadding { top: f64, bottom: f64 },

    /// A decoration reported negative padding or margin during layout
    /// resolution.
    #[error("decoration '{decoration}' reported negative insets")]
    NegativeInsets { decoration: &'static str },
}
