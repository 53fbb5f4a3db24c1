//! Single-axis autoscaling: expands a raw data range to round bounds and
//! picks tick counts for it.

use crate::core::{AxisPlan, AxisRange, TickPlan};
use crate::scaling::tick_planner::plan_ticks;

/// Data may sit up to 0.1% outside the rounded bounds so values that are
/// already round are not pushed to the next grid line.
pub const SAFETY_FACTOR: f64 = 0.999;

/// Zero-crossing plans with more major ticks than this are folded into a
/// grid with twice the step.
pub const MAX_MAJOR_TICKS: u32 = 12;

const ZERO_CROSSING_MINOR_TICKS: u32 = 5;

/// Power of ten that maps a range into roughly `10..100` integer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Exponent(i32);

impl Exponent {
    fn for_magnitude(magnitude: f64) -> Self {
        Self((magnitude * SAFETY_FACTOR).log10().floor() as i32 - 1)
    }

    // Dividing by an exact power of ten keeps results like 3.7 exact, where
    // multiplying by 0.1 would not.
    fn to_units(self, value: f64) -> f64 {
        if self.0 < 0 {
            value * 10f64.powi(-self.0)
        } else {
            value / 10f64.powi(self.0)
        }
    }

    fn from_units(self, units: f64) -> f64 {
        if self.0 < 0 {
            units / 10f64.powi(-self.0)
        } else {
            units * 10f64.powi(self.0)
        }
    }
}

/// Expands `range` to round bounds and chooses major/minor tick counts.
///
/// Crossed ranges are reordered first. Non-finite, zero-width or all-zero
/// ranges produce [`AxisPlan::DEGENERATE`]: `[0, 1]` without ticks. When the
/// range straddles zero the result always has a major tick at exactly zero.
#[must_use]
pub fn scale_range(range: AxisRange) -> AxisPlan {
    let range = range.normalized();
    if !range.is_finite() || range.lower == range.upper {
        return AxisPlan::DEGENERATE;
    }
    let magnitude = range.lower.abs().max(range.upper.abs());
    if magnitude == 0.0 {
        return AxisPlan::DEGENERATE;
    }

    let exponent = Exponent::for_magnitude(magnitude);
    let upper_units = exponent.to_units(range.upper);
    let lower_units = exponent.to_units(range.lower);
    let imax = if range.upper < 0.0 {
        (upper_units / SAFETY_FACTOR).ceil()
    } else {
        (upper_units * SAFETY_FACTOR).ceil()
    };
    let imin = if range.lower < 0.0 {
        (lower_units * SAFETY_FACTOR).floor()
    } else {
        (lower_units / SAFETY_FACTOR).floor()
    };
    if !imin.is_finite() || !imax.is_finite() {
        return AxisPlan::DEGENERATE;
    }
    // A very narrow range can round to a single grid line.
    let imax = if imax <= imin { imin + 1.0 } else { imax };

    let units = AxisRange::new(imin, imax);
    let planned = if units.straddles_zero() {
        plan_zero_crossing(units)
    } else {
        plan_ticks(units)
    };

    AxisPlan::new(
        AxisRange::new(
            exponent.from_units(planned.range.lower),
            exponent.from_units(planned.range.upper),
        ),
        planned.ticks,
    )
}

/// In-place form of [`scale_range`]: rewrites `lower`/`upper` with the
/// rounded bounds and returns the tick plan.
pub fn adjust_axis(lower: &mut f64, upper: &mut f64) -> TickPlan {
    let planned = scale_range(AxisRange::new(*lower, *upper));
    *lower = planned.range.lower;
    *upper = planned.range.upper;
    planned.ticks
}

/// Plans `[0, upper]` and `[lower, 0]` separately, then stretches the
/// shorter half to a whole number of the longer half's steps so zero lands
/// on a major tick.
fn plan_zero_crossing(units: AxisRange) -> AxisPlan {
    let upper_half = plan_ticks(AxisRange::new(0.0, units.upper));
    let lower_half = plan_ticks(AxisRange::new(units.lower, 0.0));
    let mut upper = upper_half.range.upper;
    let mut lower = lower_half.range.lower;
    let upper_count = f64::from(upper_half.ticks.major);
    let lower_count = f64::from(lower_half.ticks.major);

    let (anchor_is_upper, anchor_count, other_count) = if upper * lower_count
        == -lower * upper_count
    {
        // Both halves already share one step.
        (true, upper_half.ticks.major, lower_half.ticks.major)
    } else if upper > -lower {
        let count = (-lower * upper_count / upper).ceil();
        lower = -count * upper / upper_count;
        (true, upper_half.ticks.major, count as u32)
    } else {
        let count = (upper * lower_count / -lower).ceil();
        upper = count * -lower / lower_count;
        (false, lower_half.ticks.major, count as u32)
    };

    let mut major = anchor_count + other_count;
    if major > MAX_MAJOR_TICKS {
        let step = (upper - lower) / f64::from(major);
        let mut grow = |on_upper: bool| {
            if on_upper {
                upper += step;
            } else {
                lower -= step;
            }
        };
        // Each half needs an even number of steps to keep zero on the
        // doubled grid.
        let anchor_odd = anchor_count % 2 != 0;
        let other_odd = other_count % 2 != 0;
        if anchor_odd {
            grow(anchor_is_upper);
        }
        if other_odd {
            grow(!anchor_is_upper);
        }
        major = (anchor_count + u32::from(anchor_odd) + other_count + u32::from(other_odd)) / 2;
    }

    AxisPlan::new(
        AxisRange::new(lower, upper),
        TickPlan::new(major, ZERO_CROSSING_MINOR_TICKS),
    )
}

#[cfg(test)]
mod tests {
    use super::{Exponent, plan_zero_crossing, scale_range};
    use crate::core::{AxisRange, TickPlan};

    #[test]
    fn exponent_maps_magnitude_into_two_digit_units() {
        assert_eq!(Exponent::for_magnitude(3.7), Exponent(-1));
        assert_eq!(Exponent::for_magnitude(10.0), Exponent(-1));
        assert_eq!(Exponent::for_magnitude(100.0), Exponent(0));
        assert_eq!(Exponent::for_magnitude(0.042), Exponent(-3));
        assert_eq!(Exponent(-1).from_units(37.0), 3.7);
    }

    #[test]
    fn zero_crossing_stretches_shorter_half_to_anchor_step() {
        let planned = plan_zero_crossing(AxisRange::new(-12.0, 37.0));
        assert_eq!(planned.range, AxisRange::new(-15.0, 40.0));
        assert_eq!(planned.ticks, TickPlan::new(11, 5));
    }

    #[test]
    fn zero_crossing_with_lower_anchor_stretches_upper_half() {
        let planned = plan_zero_crossing(AxisRange::new(-37.0, 12.0));
        assert_eq!(planned.range, AxisRange::new(-40.0, 15.0));
        assert_eq!(planned.ticks, TickPlan::new(11, 5));
    }

    #[test]
    fn matching_halves_fold_without_extension_when_both_even() {
        let planned = plan_zero_crossing(AxisRange::new(-12.0, 20.0));
        assert_eq!(planned.range, AxisRange::new(-12.0, 20.0));
        assert_eq!(planned.ticks, TickPlan::new(8, 5));
    }

    #[test]
    fn fold_grows_both_halves_when_both_odd() {
        let planned = plan_zero_crossing(AxisRange::new(-3.0, 11.0));
        assert_eq!(planned.range, AxisRange::new(-4.0, 12.0));
        assert_eq!(planned.ticks, TickPlan::new(8, 5));
    }

    #[test]
    fn narrow_range_is_widened_to_one_unit() {
        let planned = scale_range(AxisRange::new(1.0, 1.0005));
        assert_eq!(planned.range, AxisRange::new(1.0, 1.01));
        assert_eq!(planned.ticks, TickPlan::DEFAULT);
    }
}
