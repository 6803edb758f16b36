//! Services module
//!
//! This module contains business logic and service implementations

pub mod employee;

pub use employee::{
    CreateEmployeeRequest, EmployeeListItem, EmployeeQueryParams, EmployeeResponse,
    EmployeeService, PagedResponse, UpdateEmployeeRequest,
};
