//! Polygrid (workspace facade crate).
//!
//! Re-exports the member crates under `polygrid::{core,input,store,term,types}`
//! and hosts the pieces that tie them together: configuration, the terminal
//! application state and the headless `show` command.

pub use polygrid_core as core;
pub use polygrid_input as input;
pub use polygrid_store as store;
pub use polygrid_term as term;
pub use polygrid_types as types;

pub mod app;
pub mod config;
pub mod show;
