//! Retorno CLI tools.
//!
//! This crate provides command-line tools for working with CNAB400 retorno
//! files:
//!
//! - `retorno-extract`: Decode retorno files and list their settlements
//!
//! # Example Usage
//!
//! ```bash
//! retorno-extract CN150115.RET
//! retorno-extract --format json --strict *.RET
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;
