//! State & Routing Demo
//!
//! A small single-page application showing routing and local view state:
//! - Four routed pages behind a shared navigation shell
//! - A two-operand calculator with inline validation feedback
//! - A light/dark theme toggle driving an explicit style table
//!
//! The same crate builds the WASM client (`web`) and the SSR server (`server`).

pub mod app;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
