// ABOUTME: Helper modules for somatrack-cli
// ABOUTME: JSON file persistence and console output formatting

pub mod display;
pub mod files;
