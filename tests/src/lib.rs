//! Integration and system tests for the tally expression engine.
//!
//! The actual tests live under `tests/`; this crate exists so the workspace
//! has one member dedicated to end-to-end coverage of the public `evaluate`
//! entry point.
