// ABOUTME: Command modules for somatrack-cli
// ABOUTME: Scale-export import, derived metrics and record CSV exchange

pub mod metrics;
pub mod records;
pub mod scale;
