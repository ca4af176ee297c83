// File: crates/demo/src/main.rs
// Summary: Demo builds two chart states and prints interpolated frames between them.

use anyhow::Result;
use strata_core::{
    ChartBehaviour, ChartData, ChartItem, ChartOptions, ChartState, Color, Decoration,
    GeometryKind, GridDecoration, HorizontalAxisDecoration, Insets, ItemOptions,
    TargetAreaDecoration, VerticalAxisDecoration,
};

fn main() -> Result<()> {
    env_logger::init();

    // State A: bar chart with grid + axes
    let a = ChartState::new(
        data(&[12.0, 48.0, 31.0, 60.0, 22.0]),
        ChartOptions::default().with_padding(Insets::horizontal(8.0, 8.0)),
        ItemOptions::default()
            .with_geometry(GeometryKind::Bar)
            .with_color(Color::rgb(64, 160, 255))
            .with_padding(Insets::horizontal(2.0, 2.0)),
        ChartBehaviour::default(),
        background(),
        Vec::new(),
    )?;

    // State B: bubble chart over different data, with a target band
    let mut bg = background();
    bg.push(Box::new(TargetAreaDecoration::new(30.0, 70.0)));
    let b = ChartState::new(
        data(&[55.0, 20.0, 75.0, 40.0, 90.0]),
        ChartOptions::default().with_padding(Insets::horizontal(8.0, 8.0)),
        ItemOptions::default()
            .with_geometry(GeometryKind::Bubble)
            .with_color(Color::rgb(220, 80, 80))
            .with_padding(Insets::horizontal(2.0, 2.0)),
        ChartBehaviour::default(),
        bg,
        Vec::new(),
    )?;

    print_state("A", &a);
    print_state("B", &b);

    println!("\nTransition A -> B:");
    for step in 0..=4 {
        let t = step as f64 / 4.0;
        let frame = ChartState::lerp(&a, &b, t);
        let margin = frame.default_margin();
        let padding = frame.default_padding();
        println!(
            "  t={:.2}  geometry={:?}  margin.left={:.1}  padding.left={:.1}  item0.max={:.1}  decorations={}",
            t,
            frame.item_options().geometry,
            margin.left,
            padding.left,
            frame.data().items()[0].max,
            frame.background_decorations().len(),
        );
    }

    // Item frames at the midpoint, inside a 640x480 surface
    let frame = ChartState::lerp(&a, &b, 0.5);
    let plot = frame.plot_area(640.0, 480.0);
    println!("\nMidpoint plot area: {:?}", plot);
    for index in 0..frame.data().len() {
        if let Some(painter) = frame.painter_for(index) {
            let rect = painter.item_frame(index, frame.data().len(), plot);
            println!("  item {index}: {} at {:?}", painter.id(), rect);
        }
    }

    Ok(())
}

fn data(values: &[f64]) -> ChartData<&'static str> {
    ChartData::new(values.iter().map(|&v| ChartItem::new(v, "item")).collect())
}

fn background() -> Vec<Box<dyn Decoration<&'static str>>> {
    vec![
        Box::new(GridDecoration::default().with_reserved(Insets::new(0.0, 0.0, 0.0, 8.0))),
        Box::new(VerticalAxisDecoration::default()),
        Box::new(HorizontalAxisDecoration::default()),
    ]
}

fn print_state(name: &str, state: &ChartState<&'static str>) {
    println!(
        "State {name}: {} items, geometry {:?}, margin {:?}, padding {:?}",
        state.data().len(),
        state.item_options().geometry,
        state.default_margin(),
        state.default_padding(),
    );
}
