use approx::assert_relative_eq;
use xyplot_rs::core::{AxisParameters, AxisSlot, PlotLine, PlotPoint, PlotSettings, Viewport};
use xyplot_rs::layout::{
    ProjectedPoint, major_tick_values, minor_tick_values, project_line, tick_labels,
    tick_mark_lengths, vertical_axis_for,
};
use xyplot_rs::PlotError;

fn axis(min: f64, max: f64, major_ticks: u32, minor_ticks: u32) -> AxisParameters {
    AxisParameters {
        min,
        max,
        major_ticks,
        minor_ticks,
        title: None,
    }
}

fn settings_with(x: AxisParameters, y: AxisParameters) -> PlotSettings {
    PlotSettings {
        x_axis: AxisSlot::Configured(x),
        y_axis: AxisSlot::Configured(y),
        ..PlotSettings::default()
    }
}

#[test]
fn major_ticks_hit_zero_exactly() {
    let values = major_tick_values(&axis(-1.5, 4.0, 11, 5));
    assert_eq!(values.len(), 12);
    assert_eq!(values[3], 0.0);
    assert_relative_eq!(values[0], -1.5);
    assert_relative_eq!(values[11], 4.0);
}

#[test]
fn axis_without_major_ticks_has_no_marks() {
    let degenerate = axis(0.0, 1.0, 0, 0);
    assert!(major_tick_values(&degenerate).is_empty());
    assert!(minor_tick_values(&degenerate).is_empty());
    assert!(tick_labels(&degenerate).is_empty());
}

#[test]
fn minor_ticks_sit_between_major_ticks() {
    let values = minor_tick_values(&axis(0.0, 1.0, 2, 2));
    assert_eq!(values.len(), 2);
    assert_relative_eq!(values[0], 0.25);
    assert_relative_eq!(values[1], 0.75);

    assert_eq!(minor_tick_values(&axis(0.0, 4.0, 8, 5)).len(), 32);
}

#[test]
fn labels_use_the_precision_of_the_step() {
    let labels = tick_labels(&axis(0.0, 4.0, 8, 5));
    assert_eq!(labels.len(), 9);
    assert_eq!(labels[0], "0.0");
    assert_eq!(labels[1], "0.5");
    assert_eq!(labels[8], "4.0");

    let labels = tick_labels(&axis(-1.5, 4.0, 11, 5));
    assert_eq!(labels[3], "0.0");

    let labels = tick_labels(&axis(0.0, 100.0, 10, 5));
    assert_eq!(labels[1], "10");
}

#[test]
fn tick_marks_scale_with_the_viewport_diagonal() {
    let lengths = tick_mark_lengths(&PlotSettings::default(), Viewport::new(300, 400))
        .expect("valid viewport");
    assert_relative_eq!(lengths.minor, 2.5, epsilon = 1e-12);
    assert_relative_eq!(lengths.major, 5.0, epsilon = 1e-12);
}

#[test]
fn empty_viewport_is_rejected() {
    let err = tick_mark_lengths(&PlotSettings::default(), Viewport::new(0, 10))
        .expect_err("empty viewport must fail");
    assert_eq!(
        err,
        PlotError::InvalidViewport {
            width: 0,
            height: 10
        }
    );

    let line = PlotLine::from_xy([(0.0, 0.0)]);
    assert!(project_line(&line, &PlotSettings::default(), Viewport::new(10, 0)).is_err());
}

#[test]
fn negative_tick_fraction_is_rejected() {
    let settings = PlotSettings {
        minor_tick_size_fraction: -1.0,
        ..PlotSettings::default()
    };
    let err = tick_mark_lengths(&settings, Viewport::new(300, 400))
        .expect_err("negative fraction must fail");
    assert!(matches!(err, PlotError::InvalidSettings(_)));
}

#[test]
fn points_project_into_viewport_pixels() {
    let settings = settings_with(axis(0.0, 10.0, 10, 5), axis(0.0, 4.0, 8, 5));
    let line = PlotLine::from_xy([(5.0, 1.0), (0.0, 0.0), (10.0, 4.0)]);

    let projected = project_line(&line, &settings, Viewport::new(100, 40)).expect("projection");
    assert_eq!(projected.len(), 3);
    assert_relative_eq!(projected[0].x, 50.0, epsilon = 1e-12);
    assert_relative_eq!(projected[0].y, 30.0, epsilon = 1e-12);
    assert_eq!(projected[1], ProjectedPoint { x: 0.0, y: 40.0 });
    assert_eq!(projected[2], ProjectedPoint { x: 100.0, y: 0.0 });
}

#[test]
fn secondary_lines_use_the_secondary_axis_only_when_shown() {
    let mut settings = settings_with(axis(0.0, 10.0, 10, 5), axis(0.0, 4.0, 8, 5));
    settings.secondary_axis = AxisSlot::Configured(axis(0.0, 100.0, 10, 5));
    settings.show_secondary_axis = true;
    let line = PlotLine::from_xy([(0.0, 50.0)]).on_secondary_axis();

    assert_eq!(vertical_axis_for(&line, &settings).max, 100.0);
    let projected = project_line(&line, &settings, Viewport::new(100, 40)).expect("projection");
    assert_relative_eq!(projected[0].y, 20.0, epsilon = 1e-12);

    settings.show_secondary_axis = false;
    assert_eq!(vertical_axis_for(&line, &settings).max, 4.0);
}

#[test]
fn undefined_projection_collapses_to_origin() {
    let settings = settings_with(axis(0.0, 10.0, 10, 5), axis(0.0, 4.0, 8, 5));
    let mut line = PlotLine::default();
    line.append(PlotPoint::new(f64::NAN, 1.0));

    let projected = project_line(&line, &settings, Viewport::new(100, 40)).expect("projection");
    assert_eq!(projected, vec![ProjectedPoint::default()]);
}

#[test]
fn out_of_range_points_can_be_clamped() {
    let settings = settings_with(axis(0.0, 10.0, 10, 5), axis(0.0, 4.0, 8, 5));
    let line = PlotLine::from_xy([(20.0, -4.0)]);
    let viewport = Viewport::new(100, 40);

    let projected = project_line(&line, &settings, viewport).expect("projection");
    assert_eq!(
        projected[0].clamped(viewport),
        ProjectedPoint { x: 100.0, y: 40.0 }
    );
}
