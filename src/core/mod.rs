// src/core/mod.rs
pub mod banner;
pub mod config;
pub mod session;
