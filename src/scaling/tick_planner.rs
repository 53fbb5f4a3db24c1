//! Heuristic tick counts for small integer spans.
//!
//! Axis ranges reach this module already normalized by a power of ten, so
//! their spans fall between 1 and 100 units. Each span maps to a
//! `(major, minor)` pair and, for awkward spans, a small extension of the
//! range that makes it divide evenly into the chosen major count.

use crate::core::{AxisPlan, AxisRange, TickPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MajorRule {
    Fixed(u32),
    /// One major tick per unit of span.
    PerUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    None,
    Add(u32),
    /// Grow the span up to the band's upper edge.
    RoundUpTo(u32),
}

#[derive(Debug, Clone, Copy)]
struct SpanRule {
    first: u32,
    last: u32,
    major: MajorRule,
    minor: u32,
    extension: Extension,
}

const fn exact(span: u32, major: u32, minor: u32) -> SpanRule {
    SpanRule {
        first: span,
        last: span,
        major: MajorRule::Fixed(major),
        minor,
        extension: Extension::None,
    }
}

const fn padded(span: u32, major: u32, minor: u32) -> SpanRule {
    SpanRule {
        first: span,
        last: span,
        major: MajorRule::Fixed(major),
        minor,
        extension: Extension::Add(1),
    }
}

const fn band(first: u32, last: u32, major: u32, minor: u32) -> SpanRule {
    SpanRule {
        first,
        last,
        major: MajorRule::Fixed(major),
        minor,
        extension: Extension::RoundUpTo(last),
    }
}

static SPAN_RULES: [SpanRule; 39] = [
    exact(2, 10, 4),
    exact(3, 6, 5),
    exact(4, 8, 5),
    exact(5, 10, 5),
    exact(6, 6, 4),
    SpanRule {
        first: 7,
        last: 11,
        major: MajorRule::PerUnit,
        minor: 5,
        extension: Extension::None,
    },
    exact(12, 6, 4),
    padded(13, 7, 4),
    exact(14, 7, 4),
    exact(15, 10, 3),
    exact(16, 8, 4),
    padded(17, 9, 4),
    exact(18, 9, 4),
    padded(19, 10, 4),
    exact(20, 10, 4),
    exact(21, 7, 3),
    exact(22, 11, 4),
    padded(23, 6, 4),
    exact(24, 6, 4),
    exact(25, 10, 5),
    padded(26, 9, 3),
    exact(27, 9, 3),
    exact(28, 7, 4),
    padded(29, 6, 5),
    exact(30, 6, 5),
    padded(31, 8, 4),
    exact(32, 8, 4),
    exact(33, 11, 3),
    padded(34, 7, 5),
    exact(35, 7, 5),
    band(36, 40, 8, 5),
    band(41, 45, 9, 5),
    band(46, 50, 10, 5),
    band(51, 55, 11, 5),
    band(56, 60, 6, 5),
    band(61, 70, 7, 5),
    band(71, 80, 8, 5),
    band(81, 90, 9, 5),
    band(91, 100, 10, 5),
];

/// Result of a table lookup for one span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanTicks {
    pub ticks: TickPlan,
    /// Amount to add to the range so it divides cleanly into `ticks.major`.
    pub range_extension: f64,
}

impl SpanTicks {
    const DEFAULT: Self = Self {
        ticks: TickPlan::DEFAULT,
        range_extension: 0.0,
    };
}

/// Looks up the tick plan for an integer span in normalized units.
///
/// Spans that are not whole numbers or fall outside `2..=100` get
/// [`TickPlan::DEFAULT`] without extension.
#[must_use]
pub fn best_ticks(span: f64) -> SpanTicks {
    if !span.is_finite() || span.fract() != 0.0 || !(2.0..=100.0).contains(&span) {
        return SpanTicks::DEFAULT;
    }
    let units = span as u32;
    let Some(rule) = SPAN_RULES
        .iter()
        .find(|rule| (rule.first..=rule.last).contains(&units))
    else {
        return SpanTicks::DEFAULT;
    };

    let major = match rule.major {
        MajorRule::Fixed(major) => major,
        MajorRule::PerUnit => units,
    };
    let range_extension = match rule.extension {
        Extension::None => 0,
        Extension::Add(amount) => amount,
        Extension::RoundUpTo(edge) => edge - units,
    };
    SpanTicks {
        ticks: TickPlan::new(major, rule.minor),
        range_extension: f64::from(range_extension),
    }
}

/// Plans ticks for a range in normalized integer units.
///
/// Ranges with a non-negative lower bound are extended at the top. Ranges
/// reaching below zero are extended at the bottom and then snapped outward to
/// multiples of the integer major step so ticks land on round values.
#[must_use]
pub fn plan_ticks(range: AxisRange) -> AxisPlan {
    let AxisRange {
        mut lower,
        mut upper,
    } = range;
    let SpanTicks {
        mut ticks,
        range_extension,
    } = best_ticks(upper - lower);

    if lower < 0.0 {
        lower -= range_extension;
        let step = ((upper - lower).trunc() / f64::from(ticks.major)).trunc();
        if step != 0.0 {
            lower = (lower / step).floor() * step;
            upper = (upper / step).ceil() * step;
            ticks.major = ((upper - lower) / step).round() as u32;
        }
    } else {
        upper += range_extension;
    }

    AxisPlan::new(AxisRange::new(lower, upper), ticks)
}
