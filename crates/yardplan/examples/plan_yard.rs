//! Example: Planning a yard from a spec built in code
//!
//! This example builds a `YardSpec` directly, without a request file, and
//! prints where everything landed before rendering the SVG.

use yardplan::{
    YardBuilder,
    element::ElementKind,
    spec::{EntrySide, YardSpec},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = YardSpec::new(80.0, 38.0, 50)
        .with_entry_side(EntrySide::Long)
        .with_num_wash_stations(3)
        .with_middle_crossroad(Some(4.0));

    let builder = YardBuilder::default();
    let layout = builder.plan(&spec)?;

    let summary = layout.summary();
    println!("Planned yard:");
    println!("  Orientation: {}", summary.orientation());
    println!("  Containers per row: {}", summary.containers_per_row());
    println!("  Rows used: {}", summary.rows());
    println!("  Containers: {}", layout.count(ElementKind::Container));
    println!("  Wash stations: {}", layout.count(ElementKind::WashStation));
    for warning in layout.warnings() {
        println!("  {warning}");
    }
    println!();

    let svg = builder.render_svg(&layout)?;
    let output_path = "plan_yard_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {output_path} ({} bytes)", svg.len());

    Ok(())
}
