// File: crates/strata-core/src/geometry.rs
// Summary: Plot rectangle math and per-item geometry painters (bar, bubble).

use crate::color::Color;
use crate::data::ChartItem;
use crate::insets::Insets;
use crate::state::ChartState;

/// Axis-aligned rectangle in layout units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Shrink the rectangle by the given insets.
    pub fn deflate(&self, insets: Insets) -> Rect {
        Rect::from_ltrb(
            self.left + insets.left,
            self.top + insets.top,
            self.right - insets.right,
            self.bottom - insets.bottom,
        )
    }
}

/// Rendering-strategy selector for item geometry.
///
/// Interpolating two states with different selectors is a hard switch at the
/// midpoint; there is no continuous blend between strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GeometryKind {
    #[default]
    Bar,
    Bubble,
}

impl GeometryKind {
    /// Factory mapping (selector, item, state) to a painter bound to that
    /// item. The painter captures everything it needs up front so renderers
    /// can hold it without borrowing the state.
    pub fn painter<T: Clone + 'static>(
        self,
        item: &ChartItem<T>,
        state: &ChartState<T>,
    ) -> Box<dyn GeometryPainter> {
        let opts = state.item_options();
        let scale = ValueScale::of(state);
        match self {
            GeometryKind::Bar => Box::new(BarPainter {
                item_min: item.min,
                item_max: item.max,
                padding: opts.padding,
                min_bar_width: opts.min_bar_width,
                max_bar_width: opts.max_bar_width,
                color: opts.color,
                scale,
            }),
            GeometryKind::Bubble => Box::new(BubblePainter {
                item_min: item.min.unwrap_or(0.0),
                item_max: item.max,
                padding: opts.padding,
                color: opts.color,
                scale,
            }),
        }
    }
}

/// Strategy for rendering one data item's primary shape.
///
/// Renderer-agnostic: implementations compute geometry inside a resolved
/// plot rectangle and never draw pixels themselves.
pub trait GeometryPainter {
    fn id(&self) -> &'static str;

    /// Frame of the item at `index` of `count` inside `plot`.
    fn item_frame(&self, index: usize, count: usize, plot: Rect) -> Rect;

    /// Fill color the renderer should use for this item.
    fn color(&self) -> Color;
}

/// Vertical mapping from data values to plot coordinates, captured from the
/// owning state at painter-construction time.
#[derive(Clone, Copy, Debug)]
struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    fn of<T: Clone + 'static>(state: &ChartState<T>) -> Self {
        let options = state.options();
        let min = options.axis_min.unwrap_or_else(|| state.data().min_value().min(0.0));
        let mut max = options.axis_max.unwrap_or_else(|| state.data().max_value());
        if (max - min).abs() < 1e-9 {
            max = min + 1.0;
        }
        Self { min, max }
    }

    fn to_y(&self, value: f64, plot: Rect) -> f64 {
        let span = self.max - self.min;
        plot.bottom - (value - self.min) / span * plot.height()
    }
}

fn item_slot(index: usize, count: usize, plot: Rect) -> Rect {
    let width = plot.width() / count.max(1) as f64;
    Rect::from_ltwh(plot.left + width * index as f64, plot.top, width, plot.height())
}

pub struct BarPainter {
    item_min: Option<f64>,
    item_max: f64,
    padding: Insets,
    min_bar_width: Option<f64>,
    max_bar_width: Option<f64>,
    color: Color,
    scale: ValueScale,
}

impl GeometryPainter for BarPainter {
    fn id(&self) -> &'static str {
        "bar"
    }

    fn item_frame(&self, index: usize, count: usize, plot: Rect) -> Rect {
        let slot = item_slot(index, count, plot).deflate(self.padding);
        let mut width = slot.width();
        if let Some(max) = self.max_bar_width {
            width = width.min(max);
        }
        if let Some(min) = self.min_bar_width {
            width = width.max(min);
        }
        // center the clamped bar inside its slot
        let left = slot.left + (slot.width() - width) / 2.0;
        let base = self.item_min.unwrap_or(0.0).max(self.scale.min);
        let top = self.scale.to_y(self.item_max, plot);
        let bottom = self.scale.to_y(base, plot);
        Rect::from_ltrb(left, top.min(bottom), left + width, top.max(bottom))
    }

    fn color(&self) -> Color {
        self.color
    }
}

pub struct BubblePainter {
    item_min: f64,
    item_max: f64,
    padding: Insets,
    color: Color,
    scale: ValueScale,
}

impl GeometryPainter for BubblePainter {
    fn id(&self) -> &'static str {
        "bubble"
    }

    fn item_frame(&self, index: usize, count: usize, plot: Rect) -> Rect {
        let slot = item_slot(index, count, plot).deflate(self.padding);
        let top = self.scale.to_y(self.item_max, plot);
        let bottom = self.scale.to_y(self.item_min, plot);
        // bounding square of the bubble, anchored at the value span and
        // centered in the slot
        let diameter = (bottom - top).abs().min(slot.width());
        let cx = slot.left + slot.width() / 2.0;
        let cy = (top + bottom) / 2.0;
        Rect::from_ltwh(cx - diameter / 2.0, cy - diameter / 2.0, diameter, diameter)
    }

    fn color(&self) -> Color {
        self.color
    }
}
