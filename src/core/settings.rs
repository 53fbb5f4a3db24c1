use serde::{Deserialize, Serialize};

use crate::core::{AxisSlot, LegendPosition};
use crate::error::{PlotError, PlotResult};

/// Axis configuration and display switches of a plot.
///
/// The scaling engine reads `auto_scale`, `independent_ticks` and
/// `show_secondary_axis`, and writes the three axis slots. Every other field
/// is carried untouched for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSettings {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_axis: AxisSlot,
    #[serde(default)]
    pub y_axis: AxisSlot,
    #[serde(default)]
    pub secondary_axis: AxisSlot,
    pub show_secondary_axis: bool,
    pub auto_scale: bool,
    pub independent_ticks: bool,
    /// Minor tick length as a fraction of the plot-area diagonal.
    pub minor_tick_size_fraction: f64,
    /// Major tick length as a fraction of the plot-area diagonal.
    pub major_tick_size_fraction: f64,
    #[serde(default)]
    pub legend_pos: LegendPosition,
    #[serde(default = "default_legend")]
    pub legend: bool,
    #[serde(default)]
    pub selection: Option<usize>,
}

fn default_legend() -> bool {
    true
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_axis: AxisSlot::Unconfigured,
            y_axis: AxisSlot::Unconfigured,
            secondary_axis: AxisSlot::Unconfigured,
            show_secondary_axis: false,
            auto_scale: true,
            independent_ticks: false,
            minor_tick_size_fraction: 0.005,
            major_tick_size_fraction: 0.01,
            legend_pos: LegendPosition::default(),
            legend: default_legend(),
            selection: None,
        }
    }
}

impl PlotSettings {
    #[must_use]
    pub fn with_secondary_axis(mut self, show: bool) -> Self {
        self.show_secondary_axis = show;
        self
    }

    #[must_use]
    pub fn with_independent_ticks(mut self, independent: bool) -> Self {
        self.independent_ticks = independent;
        self
    }

    #[must_use]
    pub fn with_auto_scale(mut self, auto_scale: bool) -> Self {
        self.auto_scale = auto_scale;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        let fractions = [
            ("minor", self.minor_tick_size_fraction),
            ("major", self.major_tick_size_fraction),
        ];
        for (name, fraction) in fractions {
            if !fraction.is_finite() || fraction < 0.0 {
                return Err(PlotError::InvalidSettings(format!(
                    "{name} tick size fraction must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
