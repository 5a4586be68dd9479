//! Integration test modules.

mod persistence_test;
mod session_test;
