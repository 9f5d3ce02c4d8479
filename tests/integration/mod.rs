//! Integration tests

pub mod batch_routes_tests;
pub mod error_handling_tests;
