// File: crates/strata-core/src/decoration.rs
// Summary: Decoration trait (layout layers) and the built-in implementations.

use std::any::Any;

use crate::color::Color;
use crate::insets::Insets;
use crate::lerp::{lerp_f64, threshold};
use crate::state::ChartState;

/// A layout/visual layer composed around the chart's geometry area.
///
/// Decorations reserve space (padding can still be drawn into by other
/// decorations, margin is exclusive) and interpolate against a counterpart
/// of the same type identity. Dispatch is via trait calls; the only explicit
/// type-identity operation is `is_same_type`, used by decoration matching
/// during state interpolation.
pub trait Decoration<T: Clone + 'static> {
    /// Type identity used for matching during interpolation.
    fn id(&self) -> &'static str;

    /// Called exactly once per state construction with a read-only view of
    /// the owning state, before any decoration is asked for its insets.
    fn init(&mut self, _state: &ChartState<T>) {}

    /// Space this decoration needs inside which others may still draw.
    /// Contract: non-negative components; the resolver rejects violations.
    fn padding_needed(&self) -> Insets {
        Insets::zero()
    }

    /// Space reserved exclusively for this decoration.
    fn margin_needed(&self) -> Insets {
        Insets::zero()
    }

    fn is_same_type(&self, other: &dyn Decoration<T>) -> bool {
        self.id() == other.id()
    }

    /// Interpolated copy of this decoration towards `other` at `t`.
    /// Defined only when `other` has the same type identity; implementations
    /// panic on a mismatch (see `expect_same`).
    fn lerp(&self, other: &dyn Decoration<T>, t: f64) -> Box<dyn Decoration<T>>;

    fn clone_box(&self) -> Box<dyn Decoration<T>>;

    fn as_any(&self) -> &dyn Any;
}

impl<T: Clone + 'static> Clone for Box<dyn Decoration<T>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Downcast `other` to the concrete type of `this`, panicking when the type
/// identities differ. Interpolation only pairs decorations matched by
/// `is_same_type`, so this firing means a caller broke the contract.
fn expect_same<'a, T, D>(this: &D, other: &'a dyn Decoration<T>) -> &'a D
where
    T: Clone + 'static,
    D: Decoration<T> + 'static,
{
    match other.as_any().downcast_ref::<D>() {
        Some(d) => d,
        None => panic!(
            "decoration '{}' interpolated against mismatched type '{}'",
            this.id(),
            other.id()
        ),
    }
}

// ---- built-in decorations ---------------------------------------------------

/// Background grid. Reserves a configurable strip of padding (e.g. a gutter
/// next to the first column) and renders `columns` x `rows` cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDecoration {
    pub columns: usize,
    pub rows: usize,
    pub line_width: f64,
    pub color: Color,
    pub reserved: Insets,
}

impl Default for GridDecoration {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 4,
            line_width: 1.0,
            color: Color::rgb(40, 40, 45),
            reserved: Insets::zero(),
        }
    }
}

impl GridDecoration {
    pub fn with_reserved(mut self, reserved: Insets) -> Self {
        self.reserved = reserved;
        self
    }
}

impl<T: Clone + 'static> Decoration<T> for GridDecoration {
    fn id(&self) -> &'static str {
        "grid"
    }

    fn padding_needed(&self) -> Insets {
        self.reserved
    }

    fn lerp(&self, other: &dyn Decoration<T>, t: f64) -> Box<dyn Decoration<T>> {
        let o: &GridDecoration = expect_same(self, other);
        Box::new(GridDecoration {
            columns: lerp_f64(self.columns as f64, o.columns as f64, t).round() as usize,
            rows: lerp_f64(self.rows as f64, o.rows as f64, t).round() as usize,
            line_width: lerp_f64(self.line_width, o.line_width, t),
            color: Color::lerp(self.color, o.color, t),
            reserved: Insets::lerp(self.reserved, o.reserved, t),
        })
    }

    fn clone_box(&self) -> Box<dyn Decoration<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Value labels along the left edge. The widest label is measured from the
/// data during `init`, which is why layout resolution finishes the init pass
/// for every decoration before reading any contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalAxisDecoration {
    pub show_values: bool,
    pub char_width: f64,
    pub color: Color,
    label_width: f64,
}

impl Default for VerticalAxisDecoration {
    fn default() -> Self {
        Self {
            show_values: true,
            char_width: 8.0,
            color: Color::rgb(180, 180, 190),
            label_width: 0.0,
        }
    }
}

impl VerticalAxisDecoration {
    pub fn label_width(&self) -> f64 {
        self.label_width
    }
}

impl<T: Clone + 'static> Decoration<T> for VerticalAxisDecoration {
    fn id(&self) -> &'static str {
        "vertical_axis"
    }

    fn init(&mut self, state: &ChartState<T>) {
        if !self.show_values {
            self.label_width = 0.0;
            return;
        }
        let top = state
            .options()
            .axis_max
            .unwrap_or_else(|| state.data().max_value());
        let label = format!("{:.0}", top);
        self.label_width = label.len() as f64 * self.char_width;
    }

    fn margin_needed(&self) -> Insets {
        Insets::new(0.0, 0.0, 0.0, self.label_width)
    }

    fn lerp(&self, other: &dyn Decoration<T>, t: f64) -> Box<dyn Decoration<T>> {
        let o: &VerticalAxisDecoration = expect_same(self, other);
        Box::new(VerticalAxisDecoration {
            show_values: threshold(&self.show_values, &o.show_values, t),
            char_width: lerp_f64(self.char_width, o.char_width, t),
            color: Color::lerp(self.color, o.color, t),
            // carry the measured width so lerped states report sensible insets
            label_width: lerp_f64(self.label_width, o.label_width, t),
        })
    }

    fn clone_box(&self) -> Box<dyn Decoration<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Item labels along the bottom edge; reserves a strip of bottom margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalAxisDecoration {
    pub show_values: bool,
    pub label_height: f64,
    pub color: Color,
}

impl Default for HorizontalAxisDecoration {
    fn default() -> Self {
        Self { show_values: true, label_height: 20.0, color: Color::rgb(180, 180, 190) }
    }
}

impl<T: Clone + 'static> Decoration<T> for HorizontalAxisDecoration {
    fn id(&self) -> &'static str {
        "horizontal_axis"
    }

    fn margin_needed(&self) -> Insets {
        if self.show_values {
            Insets::new(0.0, 0.0, self.label_height, 0.0)
        } else {
            Insets::zero()
        }
    }

    fn lerp(&self, other: &dyn Decoration<T>, t: f64) -> Box<dyn Decoration<T>> {
        let o: &HorizontalAxisDecoration = expect_same(self, other);
        Box::new(HorizontalAxisDecoration {
            show_values: threshold(&self.show_values, &o.show_values, t),
            label_height: lerp_f64(self.label_height, o.label_height, t),
            color: Color::lerp(self.color, o.color, t),
        })
    }

    fn clone_box(&self) -> Box<dyn Decoration<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Horizontal band marking a target value range. Draws inside the plot area
/// and contributes no insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetAreaDecoration {
    pub min: f64,
    pub max: f64,
    pub fill: Color,
    pub line_color: Color,
    pub line_width: f64,
}

impl TargetAreaDecoration {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            fill: Color::new(255, 230, 70, 60),
            line_color: Color::rgb(255, 230, 70),
            line_width: 1.0,
        }
    }
}

impl<T: Clone + 'static> Decoration<T> for TargetAreaDecoration {
    fn id(&self) -> &'static str {
        "target_area"
    }

    fn lerp(&self, other: &dyn Decoration<T>, t: f64) -> Box<dyn Decoration<T>> {
        let o: &TargetAreaDecoration = expect_same(self, other);
        Box::new(TargetAreaDecoration {
            min: lerp_f64(self.min, o.min, t),
            max: lerp_f64(self.max, o.max, t),
            fill: Color::lerp(self.fill, o.fill, t),
            line_color: Color::lerp(self.line_color, o.line_color, t),
            line_width: lerp_f64(self.line_width, o.line_width, t),
        })
    }

    fn clone_box(&self) -> Box<dyn Decoration<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Stroke around the drawing area; reserves its line width as margin on all
/// four sides so the stroke never overlaps item geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderDecoration {
    pub width: f64,
    pub color: Color,
}

impl Default for BorderDecoration {
    fn default() -> Self {
        Self { width: 1.0, color: Color::rgb(60, 60, 70) }
    }
}

impl<T: Clone + 'static> Decoration<T> for BorderDecoration {
    fn id(&self) -> &'static str {
        "border"
    }

    fn margin_needed(&self) -> Insets {
        Insets::all(self.width)
    }

    fn lerp(&self, other: &dyn Decoration<T>, t: f64) -> Box<dyn Decoration<T>> {
        let o: &BorderDecoration = expect_same(self, other);
        Box::new(BorderDecoration {
            width: lerp_f64(self.width, o.width, t),
            color: Color::lerp(self.color, o.color, t),
        })
    }

    fn clone_box(&self) -> Box<dyn Decoration<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
