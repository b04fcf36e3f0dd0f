//! Unit test suite: pipeline construction and cross-module behavior that
//! does not fit a single module's inline tests.

mod ordering_tests;
mod resolver_tests;
