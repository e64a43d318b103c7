//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Starting position and board invariants
//! - `movement.rs` - Per-piece movement rules and path blocking
//! - `edge_cases.rs` - Corners, highlights and unusual positions
//! - `proptest.rs` - Property-based tests
