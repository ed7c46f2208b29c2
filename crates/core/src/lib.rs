//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Wallet balance math and transaction admission rules
//! - `profile` - Salary-driven derived writes
//! - `report` - Date filtering and ledger aggregation
//! - `auth` - Password hashing

pub mod auth;
pub mod ledger;
pub mod profile;
pub mod report;
