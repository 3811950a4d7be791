//! Core types and trait definitions for the casefile fraud-case tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in trait impls (stabilised in Rust
// 1.75). Suppress the advisory lint about `Send` bounds on returned futures.
#![allow(async_fn_in_trait)]

pub mod case;
pub mod category;
pub mod error;
pub mod store;
pub mod user;

pub use error::{Error, Result};
