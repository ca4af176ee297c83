// File: crates/strata-core/src/state.rs
// Summary: ChartState aggregate with the two explicit construction paths.

use crate::data::ChartData;
use crate::decoration::Decoration;
use crate::error::ChartError;
use crate::geometry::{GeometryPainter, Rect};
use crate::insets::Insets;
use crate::layout;
use crate::options::{ChartBehaviour, ChartOptions, ItemOptions};

/// One fully resolved chart configuration: data, options, decoration layers
/// and the derived drawing-area insets.
///
/// Immutable after construction. `default_margin`/`default_padding` are
/// derived state, fixed once decoration set-up completes: the base padding
/// plus the sum of every decoration's reported padding, and the sum of every
/// decoration's reported margin.
pub struct ChartState<T: Clone + 'static> {
    pub(crate) data: ChartData<T>,
    pub(crate) options: ChartOptions,
    pub(crate) item_options: ItemOptions,
    pub(crate) behaviour: ChartBehaviour,
    pub(crate) background: Vec<Box<dyn Decoration<T>>>,
    pub(crate) foreground: Vec<Box<dyn Decoration<T>>>,
    pub(crate) default_margin: Insets,
    pub(crate) default_padding: Insets,
}

impl<T: Clone + 'static> ChartState<T> {
    /// Construct a state and run layout resolution once.
    ///
    /// Fatal configuration errors (empty data, non-zero vertical base
    /// padding) abort before any decoration is touched.
    pub fn new(
        data: ChartData<T>,
        options: ChartOptions,
        item_options: ItemOptions,
        behaviour: ChartBehaviour,
        background: Vec<Box<dyn Decoration<T>>>,
        foreground: Vec<Box<dyn Decoration<T>>>,
    ) -> Result<Self, ChartError> {
        if data.is_empty() {
            return Err(ChartError::EmptyData);
        }
        if options.padding.vsum() != 0.0 {
            return Err(ChartError::VerticalPadding {
                top: options.padding.top,
                bottom: options.padding.bottom,
            });
        }

        let mut state = Self {
            data,
            options,
            item_options,
            behaviour,
            background,
            foreground,
            default_margin: Insets::zero(),
            default_padding: Insets::zero(),
        };
        let (margin, padding) = layout::resolve(&mut state)?;
        state.default_margin = margin;
        state.default_padding = padding;
        Ok(state)
    }

    /// Construct an intermediate state from pre-interpolated parts.
    ///
    /// Trusts the caller-supplied derived insets: decorations are
    /// re-initialized so they are bound to the new state for rendering, but
    /// their contributions are never re-summed. This is the path
    /// `lerp_chart_state` uses per animation frame.
    pub fn interpolated(
        data: ChartData<T>,
        options: ChartOptions,
        item_options: ItemOptions,
        behaviour: ChartBehaviour,
        background: Vec<Box<dyn Decoration<T>>>,
        foreground: Vec<Box<dyn Decoration<T>>>,
        margin: Insets,
        padding: Insets,
    ) -> Self {
        let mut state = Self {
            data,
            options,
            item_options,
            behaviour,
            background,
            foreground,
            default_margin: margin,
            default_padding: padding,
        };
        layout::init_decorations(&mut state);
        state
    }

    /// Interpolated state between `a` and `b` at factor `t`.
    /// See `crate::interpolate::lerp_chart_state`.
    pub fn lerp(a: &ChartState<T>, b: &ChartState<T>, t: f64) -> ChartState<T> {
        crate::interpolate::lerp_chart_state(a, b, t)
    }

    pub fn data(&self) -> &ChartData<T> {
        &self.data
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn item_options(&self) -> &ItemOptions {
        &self.item_options
    }

    pub fn behaviour(&self) -> &ChartBehaviour {
        &self.behaviour
    }

    /// Background decorations in rendering order (painted behind items).
    pub fn background_decorations(&self) -> &[Box<dyn Decoration<T>>] {
        &self.background
    }

    /// Foreground decorations in rendering order (painted over items).
    pub fn foreground_decorations(&self) -> &[Box<dyn Decoration<T>>] {
        &self.foreground
    }

    pub fn default_margin(&self) -> Insets {
        self.default_margin
    }

    pub fn default_padding(&self) -> Insets {
        self.default_padding
    }

    /// Drawing rectangle for an outer surface of `width` x `height`:
    /// the surface deflated by margin, then by padding.
    pub fn plot_area(&self, width: f64, height: f64) -> Rect {
        Rect::from_ltwh(0.0, 0.0, width, height)
            .deflate(self.default_margin)
            .deflate(self.default_padding)
    }

    /// Painter for the item at `index`, selected by the configured geometry
    /// strategy. `None` when the index is out of range.
    pub fn painter_for(&self, index: usize) -> Option<Box<dyn GeometryPainter>> {
        let item = self.data.items().get(index)?;
        Some(self.item_options.geometry.painter(item, self))
    }
}
