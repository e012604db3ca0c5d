pub mod actions;
pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
