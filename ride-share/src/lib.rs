//! Ride-share data model and reporting server.
//!
//! Drivers, passengers and the trips linking them, loaded from CSV records,
//! with derived ratings, revenue, expenditure and riding-time figures.

pub mod config;
pub mod domain;
pub mod report;
pub mod repository;
pub mod web;
