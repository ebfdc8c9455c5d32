//! battlelog - a terminal client that follows a battle's live event stream
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod markup;
pub mod runtime;
pub mod sse;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
