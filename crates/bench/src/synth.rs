//! Deterministic data synthesis for benchmark inputs.

use rand::{Rng, SeedableRng, rngs::StdRng};

// Fixed seed so every run compresses identical data.
const BUFFER_SEED: u64 = 0x00CA_5CAD;

/// Synthesize `size` bytes of seeded pseudo-random data.
pub fn synth_buffer(size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(BUFFER_SEED);
    let mut buf = vec![0u8; size];
    rng.fill(&mut buf[..]);
    buf
}

/// The synthesized record at `index`: `("key{index}", "value{index}")`.
pub fn record_at(index: u64) -> (String, String) {
    (format!("key{index}"), format!("value{index}"))
}
