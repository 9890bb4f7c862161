mod charts;
pub use charts::{BarChart, ChartSlot, ResourceChart, CHART_SURFACE_ID, DATASET_LABEL};

mod export;
pub use export::ExportPanel;

mod table;
pub use table::MetricsTable;
