use serde::{Deserialize, Serialize};

use crate::core::{PlotLine, PlotSettings};

/// Everything a renderer needs to draw a plot: the lines and their settings.
///
/// Scaling rewrites `settings` in place and never touches the point data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotData {
    pub series: Vec<PlotLine>,
    pub settings: PlotSettings,
}

impl PlotData {
    #[must_use]
    pub fn new(series: Vec<PlotLine>, settings: PlotSettings) -> Self {
        Self { series, settings }
    }

    /// Whether any line is bound to the secondary axis.
    #[must_use]
    pub fn has_secondary_series(&self) -> bool {
        self.series.iter().any(|line| line.uses_secondary_axis)
    }
}
