//! Integration tests for the netops gateway
//!
//! This crate contains end-to-end tests that exercise the full stack:
//! - HTTP API layer
//! - Inventory lookups
//! - Gated command execution over the mock transport
//!
//! # Test Structure
//!
//! - `api_test.rs` - HTTP surface tests (registration, listing, commands)
//! - `concurrency_test.rs` - Session-gate bound and failure isolation

// This crate only contains tests, no library code
