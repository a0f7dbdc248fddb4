//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`).
//! Keep it lean: no I/O, loading, or locking, just data and simple helpers.

pub mod component;
pub mod config;
pub mod symbol;
