pub mod admin;
pub mod employee;
pub mod notification;
pub mod password;
pub mod token;
