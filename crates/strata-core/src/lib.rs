// File: crates/strata-core/src/lib.rs
// Summary: Core library entry point; exports the layout and interpolation API.

pub mod color;
pub mod data;
pub mod decoration;
pub mod error;
pub mod geometry;
pub mod insets;
pub mod interpolate;
mod layout;
pub mod lerp;
pub mod options;
pub mod state;

pub use color::Color;
pub use data::{ChartData, ChartItem};
pub use decoration::{
    BorderDecoration, Decoration, GridDecoration, HorizontalAxisDecoration, TargetAreaDecoration,
    VerticalAxisDecoration,
};
pub use error::ChartError;
pub use geometry::{GeometryKind, GeometryPainter, Rect};
pub use insets::Insets;
pub use interpolate::lerp_chart_state;
pub use options::{ChartBehaviour, ChartOptions, ItemOptions};
pub use state::ChartState;
