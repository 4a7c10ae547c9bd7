//! CLI command implementations.

pub mod build_info;
pub mod common;
pub mod config;
pub mod resolve;
pub mod show;
