use ordered_float::OrderedFloat;

use crate::core::{AxisRange, PlotLine};

/// Raw data extents per axis, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRanges {
    pub x: AxisRange,
    pub y: AxisRange,
    pub secondary: AxisRange,
    /// Whether any line is bound to the secondary axis.
    pub secondary_present: bool,
}

/// Scans every line for the x, primary-y and secondary-y extents.
///
/// With the secondary axis hidden every line counts toward `y` and
/// `secondary` mirrors it. Axes without any finite sample keep
/// [`AxisRange::EMPTY`], which scales to the degenerate plan. Returns `None`
/// when there are no lines at all.
#[must_use]
pub fn aggregate_ranges(series: &[PlotLine], show_secondary_axis: bool) -> Option<DataRanges> {
    if series.is_empty() {
        return None;
    }

    let mut x = AxisRange::EMPTY;
    let mut y = AxisRange::EMPTY;
    let mut secondary = AxisRange::EMPTY;
    let mut secondary_present = false;

    for line in series {
        secondary_present |= line.uses_secondary_axis;
        if let Some(x_extent) = extent(line.iter().map(|point| point.x)) {
            x = x.union(x_extent);
        }
        let Some(y_extent) = extent(line.iter().map(|point| point.y)) else {
            continue;
        };
        if line.uses_secondary_axis && show_secondary_axis {
            secondary = secondary.union(y_extent);
        } else {
            y = y.union(y_extent);
        }
    }

    if !show_secondary_axis {
        secondary = y;
    }

    Some(DataRanges {
        x,
        y,
        secondary,
        secondary_present,
    })
}

fn extent(values: impl Iterator<Item = f64> + Clone) -> Option<AxisRange> {
    let ordered = values.filter(|value| !value.is_nan()).map(OrderedFloat);
    let lower = ordered.clone().min()?;
    let upper = ordered.max()?;
    Some(AxisRange::new(lower.into_inner(), upper.into_inner()))
}
