//! Domain models

pub mod employee;
pub mod pagination;
pub mod user;

pub use employee::{Employee, EmployeeFields, NewEmployee};
pub use pagination::{DEFAULT_PAGE_SIZE, EmployeeFilter, MAX_PAGE_NUMBER, MAX_PAGE_SIZE, Page};
pub use user::{NewUser, User, UserRole, UserView};
