//! # seq-gen
//!
//! Incremental generator for OEIS A005243.
//!
//! ## Algorithm
//!
//! The generator keeps three pieces of state, all owned by a single call:
//!
//! | State | Role |
//! |-------|------|
//! | Terms | The accepted prefix `a_1..a_k` |
//! | Candidate pool | Min-heap of run-sums not yet consumed, deduplicated by value |
//! | Suffix-sum cache | `a_k, a_k + a_{k-1}, ...` for the newest term |
//!
//! Accepting a term `t` pushes `s + t` for every cached suffix sum `s`
//! (exactly the runs of length >= 2 ending at `t`), then replaces the cache
//! with `[t] ++ [t + s ...]`. The next term is the smallest pool value above
//! the last accepted term.
//!
//! # Usage
//!
//! ```rust
//! let terms = seq_gen::generate(6).unwrap();
//! assert_eq!(terms, vec![1, 2, 3, 5, 6, 8]);
//!
//! assert!(seq_gen::generate(-1).unwrap_err().is_invalid_argument());
//! ```

pub mod generator;
pub mod pool;
pub mod suffix;

pub use generator::{
    generate, generate_terms, generate_with_stats, term_count, GenerationReport, GenerationStats,
    GeneratorConfig, SequenceGenerator,
};
pub use pool::{CandidatePool, PushOutcome};
pub use suffix::SuffixSums;
