//! Employee queries and writes
//!
//! Paged and filtered listing, department lookup, and the create, update
//! and delete path with email uniqueness.

mod service;
mod types;


// Re-export public types
pub use service::EmployeeService;
pub use types::{
    CreateEmployeeRequest, EmployeeListItem, EmployeeQueryParams, EmployeeResponse,
    PagedResponse, UpdateEmployeeRequest,
};
