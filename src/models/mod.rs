// Wire-format types and the dashboard view-model derived from them

pub mod catalog;
pub mod dashboard_view;
pub mod prediction;

pub use catalog::MetadataCatalog;
pub use dashboard_view::{
    ChartSeries, DashboardModel, FactorCard, ImpactTone, PeriodRow, PriceChange, Trend,
    format_price,
};
pub use prediction::{Factor, FactorSet, PredictionResult, Recommendations};
