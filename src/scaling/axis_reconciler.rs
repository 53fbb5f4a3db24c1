//! Aligns the primary and secondary vertical tick grids.
//!
//! Both axes are scaled independently first. Unless the plot asks for
//! independent ticks, one of them is then stretched by whole steps so both
//! end up with the same number of major ticks and their grid lines coincide.

use serde::{Deserialize, Serialize};

use crate::core::{AxisPlan, AxisRange, TickPlan};

/// Inputs the reconciler reads from the plot settings and data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOptions {
    pub independent_ticks: bool,
    pub show_secondary_axis: bool,
    pub secondary_present: bool,
}

/// Which adjustment the reconciler applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reconciliation {
    /// Grids left alone; degenerate plans were replaced with the default.
    Independent,
    /// The primary axis had no data and took over the secondary plan.
    PrimaryAdoptedSecondary,
    /// The primary axis grew to the secondary major count.
    PrimaryExtended,
    /// The secondary axis grew to the primary major count.
    SecondaryExtended,
    /// The primary axis had too many ticks and now groups several steps per major tick.
    PrimaryCoarsened,
    /// The secondary axis had too many ticks and now groups several steps per major tick.
    SecondaryCoarsened,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconciledAxes {
    pub y: AxisPlan,
    pub secondary: AxisPlan,
    pub show_secondary_axis: bool,
    pub outcome: Reconciliation,
}

impl ReconciledAxes {
    #[must_use]
    pub fn kept_independent(&self) -> bool {
        self.outcome == Reconciliation::Independent
    }
}

/// Unifies the tick grids of the primary (`y`) and secondary axes.
///
/// The axis with more major ticks normally wins and the other one grows to
/// match. When the larger count exceeds 1.5x the smaller, the larger axis
/// instead groups its steps so it carries the smaller count. The secondary
/// axis is hidden whenever no line uses it.
#[must_use]
pub fn reconcile_axes(
    y: AxisPlan,
    secondary: AxisPlan,
    options: ReconcileOptions,
) -> ReconciledAxes {
    let show_secondary_axis = options.show_secondary_axis && options.secondary_present;

    if options.independent_ticks || secondary.is_degenerate() {
        return ReconciledAxes {
            y: y.with_default_ticks(),
            secondary: secondary.with_default_ticks(),
            show_secondary_axis,
            outcome: Reconciliation::Independent,
        };
    }

    if y.is_degenerate() {
        return ReconciledAxes {
            y: secondary,
            secondary,
            show_secondary_axis: false,
            outcome: Reconciliation::PrimaryAdoptedSecondary,
        };
    }

    let y_major = y.ticks.major;
    let secondary_major = secondary.ticks.major;
    let (y, secondary, outcome) = if secondary_major > y_major {
        if exceeds_one_and_a_half(secondary_major, y_major) {
            (
                y,
                coarsen(secondary, y.ticks),
                Reconciliation::SecondaryCoarsened,
            )
        } else {
            (
                extend(y, secondary.ticks),
                secondary,
                Reconciliation::PrimaryExtended,
            )
        }
    } else if exceeds_one_and_a_half(y_major, secondary_major) {
        (
            coarsen(y, secondary.ticks),
            secondary,
            Reconciliation::PrimaryCoarsened,
        )
    } else {
        (
            y,
            extend(secondary, y.ticks),
            Reconciliation::SecondaryExtended,
        )
    };

    ReconciledAxes {
        y,
        secondary,
        show_secondary_axis,
        outcome,
    }
}

fn exceeds_one_and_a_half(larger: u32, smaller: u32) -> bool {
    u64::from(larger) * 10 > u64::from(smaller) * 15
}

/// Grows `axis` at its own step until it has `target.major` intervals.
fn extend(axis: AxisPlan, target: TickPlan) -> AxisPlan {
    regrid(axis, target.major, 1, target)
}

/// Grows `axis` at its own step to a multiple of `target.major` intervals so
/// each new major tick spans a whole number of old steps.
fn coarsen(axis: AxisPlan, target: TickPlan) -> AxisPlan {
    let steps_per_major = axis.ticks.major.div_ceil(target.major);
    regrid(axis, steps_per_major * target.major, steps_per_major, target)
}

fn regrid(axis: AxisPlan, target_steps: u32, steps_per_major: u32, ticks: TickPlan) -> AxisPlan {
    let step = axis.step();
    let change = target_steps.saturating_sub(axis.ticks.major);
    let below = if axis.range.straddles_zero() {
        let balanced = change - change / 2;
        if steps_per_major > 1 {
            // Keep zero on a major tick of the coarser grid when the added
            // steps allow it.
            let zero_index = (-axis.range.lower / step).round() as u32;
            let aligned = (steps_per_major - zero_index % steps_per_major) % steps_per_major;
            if aligned <= change { aligned } else { balanced }
        } else {
            balanced
        }
    } else {
        0
    };
    let above = change - below;

    AxisPlan::new(
        AxisRange::new(
            axis.range.lower - f64::from(below) * step,
            axis.range.upper + f64::from(above) * step,
        ),
        ticks,
    )
}
