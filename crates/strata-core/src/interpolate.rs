// File: crates/strata-core/src/interpolate.rs
// Summary: State interpolation; option lerp, decoration matching, lerp construction.

use log::trace;

use crate::data::ChartData;
use crate::decoration::Decoration;
use crate::insets::Insets;
use crate::options::{ChartBehaviour, ChartOptions, ItemOptions};
use crate::state::ChartState;

/// Build a fully valid intermediate state between `a` and `b` at factor `t`.
///
/// Pure function of the two snapshots: the derived insets are interpolated
/// from the endpoints' precomputed values, never recomputed through layout
/// resolution. `t` outside [0, 1] extrapolates linearly; callers clamp if
/// that is undesired. No caching is performed here — callers driving an
/// animation should hold on to the two endpoint states.
pub fn lerp_chart_state<T: Clone + 'static>(
    a: &ChartState<T>,
    b: &ChartState<T>,
    t: f64,
) -> ChartState<T> {
    trace!("interpolating chart state at t={t}");
    ChartState::interpolated(
        ChartData::lerp(a.data(), b.data(), t),
        ChartOptions::lerp(a.options(), b.options(), t),
        ItemOptions::lerp(a.item_options(), b.item_options(), t),
        ChartBehaviour::lerp(a.behaviour(), b.behaviour(), t),
        lerp_decorations(a.background_decorations(), b.background_decorations(), t),
        lerp_decorations(a.foreground_decorations(), b.foreground_decorations(), t),
        Insets::lerp(a.default_margin(), b.default_margin(), t),
        Insets::lerp(a.default_padding(), b.default_padding(), t),
    )
}

/// Match and interpolate one decoration list.
///
/// For each decoration in the target list, the first decoration of the same
/// type identity in the source list is its interpolation partner. Unmatched
/// target decorations appear unchanged (they pop in rather than animate);
/// source decorations with no partner are dropped. Duplicate types keep
/// first-match semantics: every target duplicate pairs with the same first
/// source occurrence.
fn lerp_decorations<T: Clone + 'static>(
    a: &[Box<dyn Decoration<T>>],
    b: &[Box<dyn Decoration<T>>],
    t: f64,
) -> Vec<Box<dyn Decoration<T>>> {
    b.iter()
        .map(|target| {
            match a.iter().find(|source| source.is_same_type(target.as_ref())) {
                Some(source) => source.lerp(target.as_ref(), t),
                None => target.clone(),
            }
        })
        .collect()
}
