//! Command implementations behind the `gstep` binary.

pub mod commands;

pub use commands::EditOp;
