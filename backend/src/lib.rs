//! In-memory category catalog with filtered, sorted and paginated listings.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
