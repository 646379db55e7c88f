//! Common test utilities for Innumerati tests
//!
//! Shared fixtures, a scriptable converter mock and custom assertions used
//! across the unit and integration tests.

#[cfg(any(test, debug_assertions))]
pub mod mocks;

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
