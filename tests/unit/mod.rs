//! Unit test modules.

mod achievement_tracker_test;
mod favorites_test;
mod streak_test;
mod summary_test;
mod validation_test;
