//! Test Module
//!
//! Cross-module test suite for the Nova reply engine.
//!
//! ## Test Categories
//! - `reply_tests`: intent replies, precedence, and the fallback chain
//! - `backend_tests`: rule and HTTP backend behavior

pub mod reply_tests;
