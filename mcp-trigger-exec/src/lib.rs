#![forbid(unsafe_code)]

//! Runtime side of the MCP trigger: performs the outbound calls.
//!
//! Parameter resolution and endpoint listing live in `mcp-trigger-core`.

pub mod executor;

pub use crate::executor::{BatchError, BatchInvoker, ErrorRecord, OutputRecord};
