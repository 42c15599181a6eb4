//! Layout engine for container yards.
//!
//! This module turns a validated [`YardSpec`] into a [`YardLayout`]. The
//! computation is a fixed sequence of phases, each reading geometry fixed by
//! the ones before it:
//!
//! ```text
//! YardSpec
//!     ↓ validate
//!     ↓ direction   (row orientation)
//!     ↓ capacity    (containers per row, rows)
//!     ↓ containers  (sweep, crossroad avoidance)
//!     ↓ wash        (station column, conflicts)
//!     ↓ roads       (border, driveway, crossroad, entry)
//!     ↓ diagnostics (overflow)
//! YardLayout
//! ```
//!
//! The engine is pure: the same spec always yields the same layout.
//!
//! # Submodules
//!
//! - [`capacity`] - Row capacity arithmetic
//! - [`direction`] - Orientation resolution

pub mod capacity;
mod containers;
mod diagnostics;
pub mod direction;
mod roads;
mod wash;

use log::{debug, info};

use yardplan_core::{
    element::Rect,
    geometry::{Bounds, Point, Size},
    spec::YardSpec,
    yard::{RowSummary, YardLayout},
};

use crate::error::YardError;

pub use roads::ENTRY_DEPTH;

/// Compute the layout of a yard.
///
/// # Errors
///
/// - [`YardError::InvalidSpec`] if any dimension is not a positive finite
///   length or no containers are requested.
/// - [`YardError::InsufficientCapacity`] if not a single container can be
///   placed in a row.
///
/// Overflowing rows and omitted wash stations are not errors; they are
/// reported through [`YardLayout::warnings`].
///
/// # Examples
///
/// ```
/// use yardplan::{layout, spec::YardSpec, element::ElementKind};
///
/// let spec = YardSpec::new(80.0, 38.0, 50);
/// let yard = layout::compute(&spec).unwrap();
///
/// assert_eq!(yard.count(ElementKind::Container), 50);
/// assert!(!yard.has_warnings());
/// ```
pub fn compute(spec: &YardSpec) -> Result<YardLayout, YardError> {
    spec.validate()?;

    let orientation = direction::resolve_orientation(spec.orientation(), spec.entry_side());
    info!(
        orientation:% = orientation,
        entry_side:% = spec.entry_side(),
        num_containers = spec.num_containers();
        "Computing yard layout"
    );

    let capacity = capacity::Capacity::compute(spec, orientation)?;
    debug!(
        containers_per_row = capacity.containers_per_row,
        num_rows = capacity.num_rows;
        "Capacity computed"
    );

    let band = roads::crossroad_band(spec, orientation);
    let sweep = containers::sweep(spec, orientation, &capacity, band)?;
    debug!(
        placed = sweep.containers.len(),
        rows = sweep.rows,
        crossroad_shift = sweep.crossroad_shift;
        "Containers placed"
    );

    let wash = wash::place(spec);

    let mut warnings = wash.conflicts;
    warnings.extend(diagnostics::check_overflow(
        spec,
        orientation,
        sweep.rows,
        sweep.crossroad_shift,
    ));

    let mut elements: Vec<Rect> = Vec::with_capacity(sweep.containers.len() + wash.stations.len() + 4);
    elements.push(roads::border(spec));
    elements.push(roads::driveway(spec));
    elements.extend(roads::crossroad(spec, orientation));
    elements.extend(sweep.containers);
    elements.extend(wash.stations);
    elements.push(roads::entry(spec));

    let plot = Bounds::new_from_corner(
        Point::default(),
        Size::new(spec.plot_length(), spec.plot_width()),
    );
    let summary = RowSummary::new(orientation, capacity.containers_per_row, sweep.rows);

    info!(
        elements = elements.len(),
        warnings = warnings.len();
        "Yard layout computed"
    );

    Ok(YardLayout::new(plot, summary, elements, warnings))
}

#[cfg(test)]
mod tests {
    use yardplan_core::{
        diagnostic::DiagnosticCode,
        element::ElementKind,
        spec::{EntrySide, Orientation, OrientationPolicy, SpecError},
    };

    use super::*;

    fn container_overlaps(layout: &YardLayout) -> usize {
        let containers: Vec<_> = layout.elements_of(ElementKind::Container).collect();
        let mut overlaps = 0;
        for (i, a) in containers.iter().enumerate() {
            for b in &containers[i + 1..] {
                if a.bounds().overlaps(&b.bounds()) {
                    overlaps += 1;
                }
            }
        }
        overlaps
    }

    #[test]
    fn test_standard_yard() {
        let spec = YardSpec::new(80.0, 38.0, 50);
        let layout = compute(&spec).unwrap();

        assert_eq!(layout.count(ElementKind::Container), 50);
        assert_eq!(layout.count(ElementKind::WashStation), 2);
        assert_eq!(layout.count(ElementKind::Entry), 1);
        assert_eq!(layout.count(ElementKind::Driveway), 1);
        assert_eq!(layout.count(ElementKind::Crossroad), 0);
        assert!(layout.warnings().is_empty());
        assert_eq!(container_overlaps(&layout), 0);

        let summary = layout.summary();
        assert_eq!(summary.orientation(), Orientation::Horizontal);
        assert_eq!(summary.containers_per_row(), 13);
        assert_eq!(summary.rows(), 5);
    }

    #[test]
    fn test_drawing_order() {
        let spec = YardSpec::new(80.0, 38.0, 20).with_middle_crossroad(Some(4.0));
        let layout = compute(&spec).unwrap();

        let kinds: Vec<_> = layout.elements().iter().map(Rect::kind).collect();
        assert_eq!(kinds.first(), Some(&ElementKind::Border));
        assert_eq!(kinds.last(), Some(&ElementKind::Entry));
        assert!(kinds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_deterministic() {
        let spec = YardSpec::new(80.0, 38.0, 50)
            .with_entry_side(EntrySide::Long)
            .with_middle_crossroad(Some(4.0));
        assert_eq!(compute(&spec).unwrap(), compute(&spec).unwrap());
    }

    #[test]
    fn test_long_entry_lays_vertical_columns() {
        let spec = YardSpec::new(80.0, 38.0, 30).with_entry_side(EntrySide::Long);
        let layout = compute(&spec).unwrap();

        assert_eq!(layout.summary().orientation(), Orientation::Vertical);
        assert_eq!(layout.count(ElementKind::Container), 30);
        for container in layout.elements_of(ElementKind::Container) {
            assert_eq!(container.width(), 2.4);
            assert_eq!(container.height(), 6.0);
        }

        let entry = layout.elements_of(ElementKind::Entry).next().unwrap();
        assert_eq!(entry.origin().x(), 80.0);
    }

    #[test]
    fn test_orientation_policy_overrides_entry() {
        let spec = YardSpec::new(80.0, 38.0, 30)
            .with_entry_side(EntrySide::Long)
            .with_orientation(OrientationPolicy::Horizontal);
        let layout = compute(&spec).unwrap();
        assert_eq!(layout.summary().orientation(), Orientation::Horizontal);
    }

    #[test]
    fn test_crossroad_keeps_clear() {
        let spec = YardSpec::new(80.0, 38.0, 50).with_middle_crossroad(Some(4.0));
        let layout = compute(&spec).unwrap();

        let crossroad = layout.elements_of(ElementKind::Crossroad).next().unwrap();
        assert_eq!(crossroad.label(), Some("ACCESS CROSSROAD"));
        for container in layout.elements_of(ElementKind::Container) {
            assert!(!container.bounds().overlaps(&crossroad.bounds()));
        }
    }

    #[test]
    fn test_overflow_warns_but_places_all() {
        let spec = YardSpec::new(80.0, 20.0, 100);
        let layout = compute(&spec).unwrap();

        assert_eq!(layout.count(ElementKind::Container), 100);
        let codes: Vec<_> = layout.warnings().iter().filter_map(|w| w.code()).collect();
        assert!(codes.contains(&DiagnosticCode::W001));
        assert!(layout.extent().min_y() < 0.0);
    }

    #[test]
    fn test_wash_conflict_is_warning() {
        let spec = YardSpec::new(80.0, 11.0, 5)
            .with_num_wash_stations(3)
            .with_wash_size(4.0, 2.0)
            .with_wash_gap(2.0);
        let layout = compute(&spec).unwrap();

        assert_eq!(layout.count(ElementKind::WashStation), 2);
        assert_eq!(layout.warnings()[0].code(), Some(DiagnosticCode::W002));
    }

    #[test]
    fn test_invalid_spec() {
        let err = compute(&YardSpec::new(-80.0, 38.0, 50)).unwrap_err();
        assert!(matches!(
            err,
            YardError::InvalidSpec(SpecError::NonPositiveLength { field: "plot_length", .. })
        ));

        let err = compute(&YardSpec::new(80.0, 38.0, 0)).unwrap_err();
        assert!(matches!(err, YardError::InvalidSpec(SpecError::NoContainers)));
    }

    #[test]
    fn test_huge_demand_is_an_error() {
        let err = compute(&YardSpec::new(80.0, 38.0, usize::MAX)).unwrap_err();
        assert!(matches!(err, YardError::InsufficientCapacity(_)));

        let over = capacity::MAX_CONTAINERS + 1;
        let err = compute(&YardSpec::new(80.0, 38.0, over)).unwrap_err();
        assert!(matches!(err, YardError::InsufficientCapacity(_)));
    }

    #[test]
    fn test_off_grid_dimensions_do_not_overlap() {
        for entry in [EntrySide::Short, EntrySide::Long] {
            let spec = YardSpec::new(97.3, 61.7, 200)
                .with_container_size(6.058, 2.438)
                .with_margin(0.7)
                .with_access_road_width(4.3)
                .with_entry_side(entry);
            let layout = compute(&spec).unwrap();

            assert_eq!(layout.count(ElementKind::Container), 200);
            assert_eq!(container_overlaps(&layout), 0);
        }
    }

    #[test]
    fn test_zero_capacity() {
        let err = compute(&YardSpec::new(5.0, 38.0, 1)).unwrap_err();
        assert!(matches!(err, YardError::InsufficientCapacity(_)));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use yardplan_core::{element::ElementKind, spec::EntrySide};

    use super::*;

    /// Half-meter steps keep every coordinate exactly representable.
    fn half_meters(range: std::ops::RangeInclusive<u32>) -> impl Strategy<Value = f32> {
        range.prop_map(|halves| halves as f32 / 2.0)
    }

    proptest! {
        #[test]
        fn places_exact_count_without_overlap(
            plot_length in half_meters(60..=240),
            plot_width in half_meters(40..=160),
            container_width in half_meters(4..=6),
            road in half_meters(4..=10),
            num_containers in 1usize..120,
            long_entry in any::<bool>(),
            crossroad in proptest::option::of(half_meters(4..=10)),
        ) {
            let entry = if long_entry { EntrySide::Long } else { EntrySide::Short };
            let spec = YardSpec::new(plot_length, plot_width, num_containers)
                .with_container_size(6.0, container_width)
                .with_access_road_width(road)
                .with_entry_side(entry)
                .with_middle_crossroad(crossroad);

            let Ok(layout) = compute(&spec) else {
                return Ok(());
            };

            prop_assert_eq!(layout.count(ElementKind::Container), num_containers);

            let containers: Vec<_> = layout.elements_of(ElementKind::Container).collect();
            for (i, a) in containers.iter().enumerate() {
                prop_assert!(a.origin().x() >= road);
                for b in &containers[i + 1..] {
                    prop_assert!(!a.bounds().overlaps(&b.bounds()));
                }
            }

            if let Some(band) = layout.elements_of(ElementKind::Crossroad).next() {
                for container in &containers {
                    prop_assert!(!container.bounds().overlaps(&band.bounds()));
                }
            }
        }

        #[test]
        fn places_exact_count_without_overlap_off_grid(
            plot_length in 30.0f32..150.0,
            plot_width in 20.0f32..90.0,
            container_length in 5.5f32..12.5,
            container_width in 2.0f32..3.0,
            margin in 0.1f32..2.0,
            road in 0.5f32..6.0,
            num_containers in 1usize..150,
            long_entry in any::<bool>(),
            crossroad in proptest::option::of(1.0f32..6.0),
        ) {
            let entry = if long_entry { EntrySide::Long } else { EntrySide::Short };
            let spec = YardSpec::new(plot_length, plot_width, num_containers)
                .with_container_size(container_length, container_width)
                .with_margin(margin)
                .with_access_road_width(road)
                .with_entry_side(entry)
                .with_middle_crossroad(crossroad);

            let Ok(layout) = compute(&spec) else {
                return Ok(());
            };

            prop_assert_eq!(layout.count(ElementKind::Container), num_containers);

            let containers: Vec<_> = layout.elements_of(ElementKind::Container).collect();
            for (i, a) in containers.iter().enumerate() {
                prop_assert!(a.origin().x() >= road);
                for b in &containers[i + 1..] {
                    prop_assert!(
                        !a.bounds().overlaps(&b.bounds()),
                        "{:?} overlaps {:?}",
                        a.bounds(),
                        b.bounds()
                    );
                }
            }

            if let Some(band) = layout.elements_of(ElementKind::Crossroad).next() {
                for container in &containers {
                    prop_assert!(!container.bounds().overlaps(&band.bounds()));
                }
            }
        }
    }
}
