// File: crates/strata-core/tests/interpolate.rs
// Purpose: Validate state interpolation (identity, endpoints, matching policy).

use std::any::Any;

use strata_core::{
    BorderDecoration, ChartBehaviour, ChartData, ChartItem, ChartOptions, ChartState, Color,
    Decoration, GeometryKind, GridDecoration, Insets, ItemOptions, TargetAreaDecoration,
    VerticalAxisDecoration,
};

#[derive(Clone, Copy, Debug)]
struct FixedDecoration {
    padding: Insets,
}

impl Decoration<f64> for FixedDecoration {
    fn id(&self) -> &'static str {
        "fixed"
    }

    fn padding_needed(&self) -> Insets {
        self.padding
    }

    fn lerp(&self, other: &dyn Decoration<f64>, t: f64) -> Box<dyn Decoration<f64>> {
        let o = other.as_any().downcast_ref::<FixedDecoration>().unwrap();
        Box::new(FixedDecoration { padding: Insets::lerp(self.padding, o.padding, t) })
    }

    fn clone_box(&self) -> Box<dyn Decoration<f64>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn state(
    items: Vec<f64>,
    item_options: ItemOptions,
    background: Vec<Box<dyn Decoration<f64>>>,
) -> ChartState<f64> {
    let data = ChartData::new(items.into_iter().map(|v| ChartItem::new(v, v)).collect());
    ChartState::new(
        data,
        ChartOptions::default().with_padding(Insets::horizontal(2.0, 2.0)),
        item_options,
        ChartBehaviour::default(),
        background,
        Vec::new(),
    )
    .expect("construction succeeds")
}

fn grid_of(state: &ChartState<f64>, index: usize) -> &GridDecoration {
    state.background_decorations()[index]
        .as_any()
        .downcast_ref::<GridDecoration>()
        .expect("grid decoration")
}

#[test]
fn self_interpolation_is_a_no_op() {
    for &t in &[0.0, 0.3, 0.5, 0.9, 1.0] {
        let a = state(
            vec![1.0, 5.0],
            ItemOptions::default(),
            vec![Box::new(GridDecoration::default().with_reserved(Insets::new(0.0, 0.0, 0.0, 8.0)))],
        );
        let mid = ChartState::lerp(&a, &a, t);
        assert_eq!(mid.options(), a.options());
        assert_eq!(mid.item_options(), a.item_options());
        assert_eq!(mid.behaviour(), a.behaviour());
        assert_eq!(mid.default_margin(), a.default_margin());
        assert_eq!(mid.default_padding(), a.default_padding());
        assert_eq!(grid_of(&mid, 0), grid_of(&a, 0));
    }
}

#[test]
fn endpoints_reproduce_the_snapshots() {
    let a = state(
        vec![1.0, 5.0],
        ItemOptions::default().with_color(Color::rgb(10, 20, 30)),
        vec![Box::new(GridDecoration { line_width: 1.0, ..Default::default() })],
    );
    let b = state(
        vec![3.0, 2.0],
        ItemOptions::default().with_color(Color::rgb(200, 100, 0)),
        vec![Box::new(GridDecoration { line_width: 3.0, ..Default::default() })],
    );

    let at_start = ChartState::lerp(&a, &b, 0.0);
    assert_eq!(at_start.item_options(), a.item_options());
    assert_eq!(at_start.default_padding(), a.default_padding());
    assert_eq!(grid_of(&at_start, 0).line_width, 1.0);
    assert_eq!(at_start.data().items()[0].max, 1.0);

    let at_end = ChartState::lerp(&a, &b, 1.0);
    assert_eq!(at_end.item_options(), b.item_options());
    assert_eq!(at_end.default_padding(), b.default_padding());
    assert_eq!(grid_of(&at_end, 0).line_width, 3.0);
    assert_eq!(at_end.data().items()[0].max, 3.0);
}

#[test]
fn geometry_selector_switches_at_midpoint() {
    let a = state(vec![1.0], ItemOptions::default().with_geometry(GeometryKind::Bar), Vec::new());
    let b = state(vec![1.0], ItemOptions::default().with_geometry(GeometryKind::Bubble), Vec::new());

    assert_eq!(ChartState::lerp(&a, &b, 0.49).item_options().geometry, GeometryKind::Bar);
    assert_eq!(ChartState::lerp(&a, &b, 0.51).item_options().geometry, GeometryKind::Bubble);
}

#[test]
fn unmatched_target_decoration_appears_unchanged() {
    let a = state(vec![1.0], ItemOptions::default(), Vec::new());
    let b = state(
        vec![1.0],
        ItemOptions::default(),
        vec![Box::new(TargetAreaDecoration::new(2.0, 4.0))],
    );

    for &t in &[0.0, 0.25, 0.75, 1.0] {
        let mid = ChartState::lerp(&a, &b, t);
        let target = mid.background_decorations()[0]
            .as_any()
            .downcast_ref::<TargetAreaDecoration>()
            .expect("target area present");
        assert_eq!((target.min, target.max), (2.0, 4.0));
    }
}

#[test]
fn unmatched_source_decoration_is_dropped() {
    let a = state(vec![1.0], ItemOptions::default(), vec![Box::new(BorderDecoration::default())]);
    let b = state(vec![1.0], ItemOptions::default(), Vec::new());

    for &t in &[0.0, 0.5, 1.0] {
        let mid = ChartState::lerp(&a, &b, t);
        assert!(mid.background_decorations().is_empty());
    }
}

#[test]
fn duplicate_types_keep_first_match_semantics() {
    // Both of B's duplicates pair with A's first occurrence.
    let a = state(
        vec![1.0],
        ItemOptions::default(),
        vec![
            Box::new(FixedDecoration { padding: Insets::all(0.0) }),
            Box::new(FixedDecoration { padding: Insets::all(100.0) }),
        ],
    );
    let b = state(
        vec![1.0],
        ItemOptions::default(),
        vec![
            Box::new(FixedDecoration { padding: Insets::all(10.0) }),
            Box::new(FixedDecoration { padding: Insets::all(20.0) }),
        ],
    );

    let mid = ChartState::lerp(&a, &b, 0.5);
    let padding_of = |index: usize| {
        mid.background_decorations()[index]
            .as_any()
            .downcast_ref::<FixedDecoration>()
            .unwrap()
            .padding
    };
    assert_eq!(padding_of(0), Insets::all(5.0));
    assert_eq!(padding_of(1), Insets::all(10.0));
}

#[test]
fn derived_insets_are_lerped_not_recomputed() {
    // A's axis measures "1500" (4 chars), B's "99999" (5 chars). A re-run of
    // layout resolution on the lerped data would measure the midpoint label
    // instead; the interpolated state must carry the lerp of the endpoints.
    let a = state(vec![1500.0], ItemOptions::default(), vec![Box::new(VerticalAxisDecoration::default())]);
    let b = state(vec![99999.0], ItemOptions::default(), vec![Box::new(VerticalAxisDecoration::default())]);
    assert_eq!(a.default_margin().left, 32.0);
    assert_eq!(b.default_margin().left, 40.0);

    let mid = ChartState::lerp(&a, &b, 0.5);
    assert_eq!(mid.default_margin().left, 36.0);
}

#[test]
fn t_outside_unit_interval_extrapolates() {
    let a = state(vec![0.0], ItemOptions::default(), Vec::new());
    let b = state(vec![10.0], ItemOptions::default(), Vec::new());

    let past = ChartState::lerp(&a, &b, 1.5);
    assert_eq!(past.data().items()[0].max, 15.0);
    let before = ChartState::lerp(&a, &b, -0.5);
    assert_eq!(before.data().items()[0].max, -5.0);
}
