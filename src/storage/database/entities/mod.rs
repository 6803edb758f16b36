/// Employee entity module
pub mod employee;
/// User entity module
pub mod user;

pub use employee::Entity as Employee;
pub use user::Entity as User;
