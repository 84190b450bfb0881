//! Reminder task storage for Tickler.
//!
//! This module persists employer-owned recruitment reminders: creating
//! pending tasks, retrieving them by identifier, listing them per employer
//! and status, surfacing tasks falling due for an external sweeper, and
//! applying status/schedule mutations. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
