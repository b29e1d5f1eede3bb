//! Badge swipe tracker.
//!
//! Turns a log of door swipes (IN/OUT at the main reader) into worked time
//! per local calendar day and per month, with a lunch deduction and a debt
//! figure against the daily target.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
