use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;

/// One plotted line: an ordered point collection bound to the primary or the
/// secondary vertical axis.
///
/// Styling (colors, dashes, point symbols) belongs to the renderer and is not
/// modelled here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotLine {
    pub points: Vec<PlotPoint>,
    #[serde(default)]
    pub uses_secondary_axis: bool,
    #[serde(default)]
    pub legend: Option<String>,
}

impl PlotLine {
    #[must_use]
    pub fn new(points: Vec<PlotPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Builds a line from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(values: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::new(values.into_iter().map(PlotPoint::from).collect())
    }

    #[must_use]
    pub fn on_secondary_axis(mut self) -> Self {
        self.uses_secondary_axis = true;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    pub fn append(&mut self, point: PlotPoint) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlotPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PlotLine {
    type Item = &'a PlotPoint;
    type IntoIter = std::slice::Iter<'a, PlotPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
