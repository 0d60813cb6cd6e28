//! CLI subcommands.

pub mod config;
pub mod demo;
pub mod draft;
pub mod extract;
pub mod input;
pub mod recommend;
