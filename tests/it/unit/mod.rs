//! Unit tests for multibrush.

mod settings_tests;
mod snapshot_tests;
