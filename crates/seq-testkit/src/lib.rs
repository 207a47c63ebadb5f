//! # seq-testkit
//!
//! Seeded randomness for reproducible sequence tests.
//!
//! Randomized tests draw term counts from a [`DeterministicRng`]. The seed
//! is printed on every run; set `SEQ_SEED` to replay a failure:
//!
//! ```bash
//! SEQ_SEED=12345 cargo test -p seq-gen
//! ```

pub mod random;

pub use random::DeterministicRng;

/// Environment variable holding a replay seed.
pub const SEED_ENV: &str = "SEQ_SEED";

/// Get the test seed from `SEQ_SEED` or generate a random one.
///
/// Prints the seed for reproduction.
#[must_use]
pub fn get_or_generate_seed() -> u64 {
    match std::env::var(SEED_ENV) {
        Ok(s) => {
            let seed: u64 = s.parse().expect("SEQ_SEED must be a valid u64");
            println!("{}={} (from environment)", SEED_ENV, seed);
            seed
        }
        Err(_) => {
            // Zero is a weak Xoshiro seed.
            let seed = rand::random::<u64>().max(1);
            println!("{}={} (randomly generated)", SEED_ENV, seed);
            seed
        }
    }
}
