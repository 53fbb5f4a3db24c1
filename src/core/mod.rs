pub mod axis;
pub mod plot_data;
pub mod series;
pub mod settings;
pub mod types;

pub use axis::{AxisParameters, AxisPlan, AxisRange, AxisSlot, TickPlan};
pub use plot_data::PlotData;
pub use series::PlotLine;
pub use settings::PlotSettings;
pub use types::{LegendPosition, PlotPoint, Viewport};
