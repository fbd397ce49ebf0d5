// ABOUTME: Library root for berth - runtime adapter, reconciler, views and commands.
// ABOUTME: The main binary is in main.rs.

pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod inventory;
pub mod metrics;
pub mod output;
pub mod reachability;
pub mod runtime;
pub mod types;
pub mod views;
