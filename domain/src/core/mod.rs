//! Core domain types

pub mod error;
pub mod image;
pub mod problem;
