//! Assembly of scored events into the nested result tree
//!
//! ## Architecture
//!
//! - [`tree`] - [`ResultTreeBuilder`], enforcing one grouping key per tree
//! - [`documents`] - Storage-shaped documents keyed by slugs

pub mod documents;
pub mod tree;

#[cfg(test)]
pub mod tests;

pub use documents::{DocumentKey, event_documents, event_update};
pub use tree::ResultTreeBuilder;
