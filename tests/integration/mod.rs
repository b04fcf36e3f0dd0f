//! Integration test suite: end-to-end context composition scenarios.

mod compose_tests;
mod notice_tests;
