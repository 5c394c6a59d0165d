pub mod admins;
pub mod employees;
