#![forbid(unsafe_code)]

//! Core domain model and planning logic for the weekly workout and meal planner.
//!
//! This crate provides:
//! - Domain types (profile, catalog entries, day and weekly plans)
//! - The embedded catalog and catalog overrides
//! - Calorie model, workout selector and meal selector
//! - The weekly engine and shopping list aggregation
//! - Profile input parsing, configuration and CSV export

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod input;
pub mod calories;
pub mod workout;
pub mod meals;
pub mod engine;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::{Config, ProfileDefaults};
pub use input::ProfileInput;
pub use calories::target_calories;
pub use engine::{generate_weekly_plan, shopping_list, PlanReport, Planner};
pub use export::{write_plan_csv, write_shopping_csv};
