// File: crates/strata-core/src/options.rs
// Summary: Immutable option bundles (chart, item, behaviour) with field-wise lerp.

use crate::color::Color;
use crate::geometry::GeometryKind;
use crate::insets::Insets;
use crate::lerp::{lerp_option_f64, threshold};

/// General chart options.
///
/// `padding` is the base padding layout resolution starts from. Vertical
/// chart padding is not supported; a non-zero top or bottom component is a
/// fatal configuration error at state construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub padding: Insets,
    /// Fixed lower bound for the value axis; data minimum when `None`.
    pub axis_min: Option<f64>,
    /// Fixed upper bound for the value axis; data maximum when `None`.
    pub axis_max: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { padding: Insets::zero(), axis_min: None, axis_max: None }
    }
}

impl ChartOptions {
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_axis_max(mut self, max: f64) -> Self {
        self.axis_max = Some(max);
        self
    }

    pub fn lerp(a: &ChartOptions, b: &ChartOptions, t: f64) -> ChartOptions {
        ChartOptions {
            padding: Insets::lerp(a.padding, b.padding, t),
            axis_min: lerp_option_f64(a.axis_min, b.axis_min, t),
            axis_max: lerp_option_f64(a.axis_max, b.axis_max, t),
        }
    }
}

/// Per-item rendering options, including the geometry-strategy selector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemOptions {
    pub padding: Insets,
    pub color: Color,
    pub min_bar_width: Option<f64>,
    pub max_bar_width: Option<f64>,
    pub geometry: GeometryKind,
}

impl Default for ItemOptions {
    fn default() -> Self {
        Self {
            padding: Insets::zero(),
            color: Color::rgb(64, 160, 255),
            min_bar_width: None,
            max_bar_width: None,
            geometry: GeometryKind::default(),
        }
    }
}

impl ItemOptions {
    pub fn with_geometry(mut self, geometry: GeometryKind) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn lerp(a: &ItemOptions, b: &ItemOptions, t: f64) -> ItemOptions {
        ItemOptions {
            padding: Insets::lerp(a.padding, b.padding, t),
            color: Color::lerp(a.color, b.color, t),
            min_bar_width: lerp_option_f64(a.min_bar_width, b.min_bar_width, t),
            max_bar_width: lerp_option_f64(a.max_bar_width, b.max_bar_width, t),
            // strategies have no continuous blend; hard switch at the midpoint
            geometry: threshold(&a.geometry, &b.geometry, t),
        }
    }
}

/// Chart interaction behaviour. Boolean flags follow the midpoint threshold
/// policy during interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChartBehaviour {
    pub scrollable: bool,
    pub stack_multiple_items: bool,
}

impl ChartBehaviour {
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn lerp(a: &ChartBehaviour, b: &ChartBehaviour, t: f64) -> ChartBehaviour {
        ChartBehaviour {
            scrollable: threshold(&a.scrollable, &b.scrollable, t),
            stack_multiple_items: threshold(&a.stack_multiple_items, &b.stack_multiple_items, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_options_lerp_switches_geometry_at_midpoint() {
        let a = ItemOptions::default().with_geometry(GeometryKind::Bar);
        let b = ItemOptions::default().with_geometry(GeometryKind::Bubble);
        assert_eq!(ItemOptions::lerp(&a, &b, 0.49).geometry, GeometryKind::Bar);
        assert_eq!(ItemOptions::lerp(&a, &b, 0.51).geometry, GeometryKind::Bubble);
    }

    #[test]
    fn chart_options_lerp_is_field_wise() {
        let a = ChartOptions::default().with_padding(Insets::horizontal(0.0, 0.0));
        let b = ChartOptions::default()
            .with_padding(Insets::horizontal(8.0, 4.0))
            .with_axis_max(10.0);
        let mid = ChartOptions::lerp(&a, &b, 0.5);
        assert_eq!(mid.padding, Insets::horizontal(4.0, 2.0));
        // axis_max present only on one side: threshold picks the target half-way
        assert_eq!(mid.axis_max, Some(10.0));
    }
}
