//! End-to-end ingestion pipelines
//!
//! Both pipelines run strictly left to right and end in the same
//! [`ResultTree`](crate::app::models::ResultTree) shape:
//!
//! - [`start_list`] - block parser → metadata → combined-event collapsing →
//!   scorer → aggregator → team standings
//! - [`event_result`] - metadata row → result rows → status gate → scorer with
//!   season bests → aggregator
//!
//! Any error aborts the whole file; nothing half-parsed reaches aggregation.

pub mod event_result;
pub mod start_list;

#[cfg(test)]
pub mod tests;

pub use event_result::{EventResultPipeline, EventResultReport, check_status};
pub use start_list::{StartListPipeline, StartListReport, StartListRow};
