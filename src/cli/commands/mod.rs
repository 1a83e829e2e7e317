//! CLI command implementations

pub mod asm;
pub mod completions;
pub mod init;
pub mod part;
pub mod reload;
pub mod sup;
pub mod validate;
