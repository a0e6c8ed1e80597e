//! Core library components.
//!
//! This module contains the reusable logic for retrieving, normalizing,
//! encrypting and storing secrets, plus configuration handling.

pub mod backend;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod export;
pub mod normalize;
pub mod store;
pub mod types;
pub mod vault;
