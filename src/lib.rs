//! Attendance Budget Engine for Turkish university absence rules
//!
//! This crate computes per-course absence budgets for theory (T) and practice (U)
//! sessions, semester progress, and the surrounding dashboard, repository and
//! backfill reconciliation collaborators.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reconciliation;
pub mod repository;
