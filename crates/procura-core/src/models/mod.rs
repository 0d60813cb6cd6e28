//! Data models for quotes, purchase orders, and configuration.

pub mod config;
pub mod purchase_order;
pub mod quote;
