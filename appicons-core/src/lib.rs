pub mod batch;
pub mod config;
pub mod converter;
pub mod export;
pub mod targets;
