//! Tickler: recruitment reminder task store.
//!
//! This crate provides durable persistence and retrieval of reminder tasks
//! raised during a recruitment pipeline: follow-ups an employer still has to
//! act on, optionally linked to a job posting and/or a candidate, with a due
//! timestamp an external sweeper can query.
//!
//! # Architecture
//!
//! Tickler follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! Reminder generation and due-reminder notification are external
//! collaborators; this crate only stores and serves the records they work
//! with.

pub mod reminder;
