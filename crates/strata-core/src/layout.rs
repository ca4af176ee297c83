// File: crates/strata-core/src/layout.rs
// Summary: Layout resolution; decoration init pass and inset accumulation.

use log::debug;

use crate::error::ChartError;
use crate::insets::Insets;
use crate::state::ChartState;

/// Initialize every decoration against the owning state.
///
/// Each list is moved out of the state while its decorations run, so every
/// `init` receives a read-only view of the owning state. The pass completes
/// for all decorations before any contribution is read, so sizing that
/// depends on `init` (e.g. the widest axis label) can never make
/// accumulation order-dependent.
pub(crate) fn init_decorations<T: Clone + 'static>(state: &mut ChartState<T>) {
    let mut background = std::mem::take(&mut state.background);
    for decoration in background.iter_mut() {
        decoration.init(state);
    }
    state.background = background;

    let mut foreground = std::mem::take(&mut state.foreground);
    for decoration in foreground.iter_mut() {
        decoration.init(state);
    }
    state.foreground = foreground;
}

/// Resolve the state's derived insets: `(margin, padding)`.
///
/// Padding accumulates from the configured base padding, margin from zero;
/// both are plain component-wise sums over every decoration in both lists,
/// so permuting the lists cannot change the result. Re-running with the same
/// decoration set and state yields identical sums.
pub(crate) fn resolve<T: Clone + 'static>(
    state: &mut ChartState<T>,
) -> Result<(Insets, Insets), ChartError> {
    init_decorations(state);

    let mut padding = state.options.padding;
    for decoration in state.background.iter().chain(state.foreground.iter()) {
        let needed = decoration.padding_needed();
        if !needed.is_non_negative() {
            return Err(ChartError::NegativeInsets { decoration: decoration.id() });
        }
        padding = padding + needed;
    }

    let mut margin = Insets::zero();
    for decoration in state.background.iter().chain(state.foreground.iter()) {
        let needed = decoration.margin_needed();
        if !needed.is_non_negative() {
            return Err(ChartError::NegativeInsets { decoration: decoration.id() });
        }
        margin = margin + needed;
    }

    debug!(
        "resolved layout over {} decorations: margin {:?}, padding {:?}",
        state.background.len() + state.foreground.len(),
        margin,
        padding
    );
    Ok((margin, padding))
}
