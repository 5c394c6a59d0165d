//! Domain types shared across HRDesk crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod admin;
pub mod employee;
pub mod id;
