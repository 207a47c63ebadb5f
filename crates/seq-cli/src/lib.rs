//! # seq-cli
//!
//! Command-line front end for the A005243 generator.
//!
//! # Usage
//!
//! ```bash
//! # Write the first 30000 terms as index/value lines
//! cargo run -p seq-cli -- write
//!
//! # Growth analysis with stacked plots and a JSON summary
//! cargo run -p seq-cli -- analyze --n 10000 --plot growth.png --json growth.json
//!
//! # Re-check every sequence property on a prefix
//! cargo run -p seq-cli -- check --n 5000
//! ```

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands};
