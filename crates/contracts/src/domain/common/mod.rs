//! Common types shared by all aggregates

pub mod aggregate_id;
pub mod nullable;
pub mod response;

// Re-exports
pub use aggregate_id::AggregateId;
pub use response::{ListResponse, MessageResponse, PaginatedResponse, Pagination};
