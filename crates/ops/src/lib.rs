//! Washboard operations library.
//!
//! Everything the interactive dashboard needs, behind a library seam:
//!
//! - [`db`] - SQLite persistent store (pooled, migrated on startup)
//! - [`models`] - Domain records and input structs
//! - [`services`] - Intake, completion, ledger, and registration flows
//! - [`analytics`] - Pure aggregation engine for the sales dashboard
//! - [`export`] - Delimited flat-file export of the filtered order view
//!
//! The page/form UI itself is an external collaborator; it supplies
//! already-typed values (dates, times, decimals) to the services here and
//! renders whatever they return.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
