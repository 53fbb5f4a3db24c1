use serde::{Deserialize, Serialize};

use crate::core::{AxisParameters, PlotLine, PlotPoint, PlotSettings, Viewport};
use crate::error::{PlotError, PlotResult};

/// A plot point mapped into viewport pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    /// Clamps the point into the viewport rectangle.
    #[must_use]
    pub fn clamped(self, viewport: Viewport) -> Self {
        Self {
            x: self.x.clamp(0.0, f64::from(viewport.width)),
            y: self.y.clamp(0.0, f64::from(viewport.height)),
        }
    }
}

/// Vertical axis a line is drawn against: the secondary one only when the
/// line asks for it and the plot shows it.
#[must_use]
pub fn vertical_axis_for(line: &PlotLine, settings: &PlotSettings) -> AxisParameters {
    if line.uses_secondary_axis && settings.show_secondary_axis {
        settings.secondary_axis.resolved()
    } else {
        settings.y_axis.resolved()
    }
}

/// Maps every point of `line` into viewport pixels.
///
/// Points whose projection is undefined (NaN coordinates or a zero-width
/// axis) collapse to the origin.
pub fn project_line(
    line: &PlotLine,
    settings: &PlotSettings,
    viewport: Viewport,
) -> PlotResult<Vec<ProjectedPoint>> {
    if !viewport.is_valid() {
        return Err(PlotError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let x_axis = settings.x_axis.resolved();
    let y_axis = vertical_axis_for(line, settings);
    Ok(line
        .iter()
        .map(|point| project_point(point, &x_axis, &y_axis, viewport))
        .collect())
}

fn project_point(
    point: &PlotPoint,
    x_axis: &AxisParameters,
    y_axis: &AxisParameters,
    viewport: Viewport,
) -> ProjectedPoint {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let x = width * (point.x - x_axis.min) / (x_axis.max - x_axis.min);
    let y = height * (1.0 - (point.y - y_axis.min) / (y_axis.max - y_axis.min));
    if x.is_nan() || y.is_nan() {
        return ProjectedPoint::default();
    }
    ProjectedPoint { x, y }
}
