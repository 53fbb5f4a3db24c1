use smallvec::SmallVec;

use crate::core::{AxisParameters, PlotSettings, Viewport};
use crate::error::{PlotError, PlotResult};

/// Major tick values of one axis. Engine plans rarely exceed a dozen ticks.
pub type TickValues = SmallVec<[f64; 16]>;

/// Tick values closer to zero than this fraction of the major step are
/// printed and drawn as exactly zero.
const ZERO_SNAP_RELATIVE: f64 = 1e-12;

const MAX_LABEL_DECIMALS: usize = 12;

/// Returns `0.0` for values whose magnitude does not exceed `tiny`.
#[must_use]
pub fn zero_if_tiny(value: f64, tiny: f64) -> f64 {
    if value.abs() > tiny { value } else { 0.0 }
}

/// Values of the `major_ticks + 1` major tick marks from `min` to `max`.
///
/// Empty when the axis has no major ticks.
#[must_use]
pub fn major_tick_values(axis: &AxisParameters) -> TickValues {
    let Some(step) = axis.major_step() else {
        return TickValues::new();
    };
    let count = f64::from(axis.major_ticks);
    let span = axis.max - axis.min;
    let tiny = step.abs() * ZERO_SNAP_RELATIVE;
    (0..=axis.major_ticks)
        .map(|index| zero_if_tiny(axis.min + span * f64::from(index) / count, tiny))
        .collect()
}

/// Values of the minor tick marks strictly between adjacent major ticks.
///
/// `minor_ticks` counts subdivisions per major interval, so each interval
/// carries `minor_ticks - 1` minor marks.
#[must_use]
pub fn minor_tick_values(axis: &AxisParameters) -> Vec<f64> {
    let Some(step) = axis.major_step() else {
        return Vec::new();
    };
    if axis.minor_ticks < 2 {
        return Vec::new();
    }
    let subdivisions = f64::from(axis.minor_ticks);
    let tiny = step.abs() * ZERO_SNAP_RELATIVE;
    let mut values =
        Vec::with_capacity((axis.major_ticks * (axis.minor_ticks - 1)) as usize);
    for major in 0..axis.major_ticks {
        let start = axis.min + step * f64::from(major);
        for minor in 1..axis.minor_ticks {
            values.push(zero_if_tiny(
                start + step * f64::from(minor) / subdivisions,
                tiny,
            ));
        }
    }
    values
}

/// Labels for the major ticks, printed with just enough decimals to tell
/// adjacent ticks apart.
#[must_use]
pub fn tick_labels(axis: &AxisParameters) -> Vec<String> {
    let Some(step) = axis.major_step() else {
        return Vec::new();
    };
    let decimals = label_decimals(step);
    major_tick_values(axis)
        .into_iter()
        .map(|value| format!("{value:.decimals$}"))
        .collect()
}

fn label_decimals(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    (0..MAX_LABEL_DECIMALS)
        .find(|&decimals| {
            let scaled = step * 10f64.powi(decimals as i32);
            (scaled - scaled.round()).abs() <= scaled.abs() * 1e-9
        })
        .unwrap_or(MAX_LABEL_DECIMALS)
}

/// Tick mark lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMarkLengths {
    pub minor: f64,
    pub major: f64,
}

/// Scales the tick size fractions in `settings` by the viewport diagonal.
pub fn tick_mark_lengths(settings: &PlotSettings, viewport: Viewport) -> PlotResult<TickMarkLengths> {
    if !viewport.is_valid() {
        return Err(PlotError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    settings.validate()?;

    let diagonal = viewport.diagonal();
    Ok(TickMarkLengths {
        minor: diagonal * settings.minor_tick_size_fraction,
        major: diagonal * settings.major_tick_size_fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::{label_decimals, zero_if_tiny};

    #[test]
    fn tiny_values_snap_to_zero() {
        assert_eq!(zero_if_tiny(1e-16, 1e-15), 0.0);
        assert_eq!(zero_if_tiny(-2e-15, 1e-15), -2e-15);
    }

    #[test]
    fn label_decimals_follow_the_step() {
        assert_eq!(label_decimals(10.0), 0);
        assert_eq!(label_decimals(0.5), 1);
        assert_eq!(label_decimals(0.25), 2);
        assert_eq!(label_decimals(0.1 + 0.2), 1);
    }
}
