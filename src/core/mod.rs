//! Core module - fundamental types and utilities

pub mod entity;
pub mod error;
pub mod units;

pub use entity::Record;
pub use error::{StoreError, ValidationError};
