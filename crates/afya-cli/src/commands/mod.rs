//! Subcommand implementations.

pub mod activity;
pub mod analytics;
pub mod auth;
pub mod clients;
pub mod enroll;
pub mod programs;
