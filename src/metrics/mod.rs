//! @ai:module:intent Run records and their statistical aggregation
//! @ai:module:layer application
//! @ai:module:public_api RunRecord, SummaryRecord, SummaryAggregator

pub mod aggregator;
pub mod types;

pub use aggregator::{SummaryAggregator, SummaryAggregatorTrait};
pub use types::{RunRecord, SummaryRecord};
