//! Naming policy tests.
