//! Integration tests for fixmat crates.
//!
//! This crate contains end-to-end tests that exercise the math types through
//! the transformation stacks, the matrix context and the projection helpers.
//! Set `RUST_LOG=fixmat_stack=trace` to see stack events in failing tests.
