//! Time-Entry Validation and Pay-Computation Engine
//!
//! This crate provides the core of a personal shift-tracking tool: it
//! enforces structural and temporal invariants over clock-in/clock-out
//! records and converts those records into a tiered pay breakdown
//! (regular, overtime, penalty overtime, night differential, Sunday premium).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod validation;
