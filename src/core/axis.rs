use serde::{Deserialize, Serialize};

/// Raw, unrounded extent of data along one axis.
///
/// A range may be crossed (`lower > upper`) while it is being accumulated;
/// [`AxisRange::normalized`] restores the order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    /// Identity for accumulation: every finite value widens it.
    pub const EMPTY: Self = Self {
        lower: f64::INFINITY,
        upper: f64::NEG_INFINITY,
    };

    /// Range returned for degenerate or unusable input.
    pub const FALLBACK: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };

    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Widens the range so it contains `value`. NaN is ignored.
    pub fn include(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.lower = self.lower.min(value);
        self.upper = self.upper.max(value);
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        if self.lower > self.upper {
            Self::new(self.upper, self.lower)
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn straddles_zero(self) -> bool {
        self.lower < 0.0 && self.upper > 0.0
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Major/minor tick counts for one axis.
///
/// `minor` counts subdivisions per major interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickPlan {
    pub major: u32,
    pub minor: u32,
}

impl TickPlan {
    pub const DEFAULT: Self = Self::new(10, 5);
    /// Marks "no usable data" for an axis.
    pub const DEGENERATE: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.major == 0
    }

    /// Replaces a degenerate plan with [`TickPlan::DEFAULT`].
    #[must_use]
    pub fn or_default(self) -> Self {
        if self.is_degenerate() {
            Self::DEFAULT
        } else {
            self
        }
    }
}

impl Default for TickPlan {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<(u32, u32)> for TickPlan {
    fn from((major, minor): (u32, u32)) -> Self {
        Self::new(major, minor)
    }
}

/// Rounded range together with the tick plan chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPlan {
    pub range: AxisRange,
    pub ticks: TickPlan,
}

impl AxisPlan {
    /// `[0, 1]` without ticks: the axis had no usable data.
    pub const DEGENERATE: Self = Self::new(AxisRange::FALLBACK, TickPlan::DEGENERATE);

    #[must_use]
    pub const fn new(range: AxisRange, ticks: TickPlan) -> Self {
        Self { range, ticks }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.ticks.is_degenerate()
    }

    /// Same range with a degenerate tick plan replaced by [`TickPlan::DEFAULT`].
    #[must_use]
    pub fn with_default_ticks(self) -> Self {
        Self::new(self.range, self.ticks.or_default())
    }

    /// Distance between adjacent major ticks.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.range.span() / f64::from(self.ticks.major)
    }

    #[must_use]
    pub fn into_parameters(self, title: Option<String>) -> AxisParameters {
        AxisParameters::from_plan(self.range, self.ticks, title)
    }
}

/// Finalized extent, ticks and title of an axis as consumed by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisParameters {
    pub min: f64,
    pub max: f64,
    pub major_ticks: u32,
    pub minor_ticks: u32,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for AxisParameters {
    fn default() -> Self {
        Self::from_plan(AxisRange::FALLBACK, TickPlan::DEFAULT, None)
    }
}

impl AxisParameters {
    #[must_use]
    pub fn from_plan(range: AxisRange, ticks: TickPlan, title: Option<String>) -> Self {
        Self {
            min: range.lower,
            max: range.upper,
            major_ticks: ticks.major,
            minor_ticks: ticks.minor,
            title,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        AxisRange::new(self.min, self.max)
    }

    #[must_use]
    pub fn ticks(&self) -> TickPlan {
        TickPlan::new(self.major_ticks, self.minor_ticks)
    }

    /// Distance between adjacent major ticks, `None` without major ticks.
    #[must_use]
    pub fn major_step(&self) -> Option<f64> {
        (self.major_ticks > 0).then(|| (self.max - self.min) / f64::from(self.major_ticks))
    }
}

/// Axis configuration slot in [`crate::core::PlotSettings`].
///
/// An axis starts `Unconfigured` and becomes `Configured` once the engine (or
/// the host) writes parameters into it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum AxisSlot {
    #[default]
    Unconfigured,
    Configured(AxisParameters),
}

impl AxisSlot {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    #[must_use]
    pub fn parameters(&self) -> Option<&AxisParameters> {
        match self {
            Self::Unconfigured => None,
            Self::Configured(parameters) => Some(parameters),
        }
    }

    /// Configured parameters, or the defaults a renderer falls back to.
    #[must_use]
    pub fn resolved(&self) -> AxisParameters {
        self.parameters().cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.parameters()
            .and_then(|parameters| parameters.title.as_deref())
    }
}

impl From<AxisParameters> for AxisSlot {
    fn from(parameters: AxisParameters) -> Self {
        Self::Configured(parameters)
    }
}
