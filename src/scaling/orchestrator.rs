use tracing::{debug, trace};

use crate::core::{AxisPlan, AxisSlot, PlotData};
use crate::scaling::axis_reconciler::{ReconcileOptions, reconcile_axes};
use crate::scaling::axis_scaler::scale_range;
use crate::scaling::range_aggregator::aggregate_ranges;

impl PlotData {
    /// Rescales the axes when `settings.auto_scale` is enabled.
    pub fn scale_axes(&mut self) {
        if self.settings.auto_scale {
            self.axes_scale();
        } else {
            trace!("autoscale disabled; keeping configured axes");
        }
    }

    /// Rescales all three axes from the current data regardless of
    /// `settings.auto_scale`.
    ///
    /// Without any line the settings are left untouched. Otherwise the x,
    /// y and secondary axis slots are overwritten (keeping their titles) and
    /// `show_secondary_axis` may be switched off; every other setting is
    /// preserved.
    pub fn axes_scale(&mut self) {
        let settings = &self.settings;
        let Some(ranges) = aggregate_ranges(&self.series, settings.show_secondary_axis) else {
            debug!("no series to scale; keeping configured axes");
            return;
        };

        let x = scale_range(ranges.x);
        let y = scale_range(ranges.y);
        let secondary = scale_range(ranges.secondary);
        trace!(?x, ?y, ?secondary, "independent axis plans");

        let reconciled = reconcile_axes(
            y,
            secondary,
            ReconcileOptions {
                independent_ticks: settings.independent_ticks,
                show_secondary_axis: settings.show_secondary_axis,
                secondary_present: ranges.secondary_present,
            },
        );
        let x = if reconciled.kept_independent() {
            x.with_default_ticks()
        } else {
            x
        };
        debug!(
            outcome = ?reconciled.outcome,
            x_major = x.ticks.major,
            y_major = reconciled.y.ticks.major,
            secondary_major = reconciled.secondary.ticks.major,
            "axes rescaled"
        );
        if settings.show_secondary_axis && !reconciled.show_secondary_axis {
            debug!("secondary axis hidden; no line uses it");
        }

        let settings = &mut self.settings;
        settings.x_axis = rescaled_slot(&settings.x_axis, x);
        settings.y_axis = rescaled_slot(&settings.y_axis, reconciled.y);
        settings.secondary_axis = rescaled_slot(&settings.secondary_axis, reconciled.secondary);
        settings.show_secondary_axis = reconciled.show_secondary_axis;
    }
}

fn rescaled_slot(slot: &AxisSlot, plan: AxisPlan) -> AxisSlot {
    AxisSlot::Configured(plan.into_parameters(slot.title().map(str::to_owned)))
}

/// Rescales `data` when its settings request autoscaling.
pub fn scale_axes(data: &mut PlotData) {
    data.scale_axes();
}

/// Rescales `data` unconditionally.
pub fn axes_scale(data: &mut PlotData) {
    data.axes_scale();
}
