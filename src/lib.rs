//! MDT: Motor Data Toolkit
//!
//! A library and CLI for managing rocket motor hardware records (parts,
//! assemblies, casting supplies, reloads) as plain-text JSON files.

pub mod cli;
pub mod core;
pub mod entities;
pub mod store;
