pub mod admin;
pub mod email;
pub mod employee;
pub mod health;
pub mod identity;
pub mod token;
