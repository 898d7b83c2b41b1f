//! Application use cases

pub mod solve;
