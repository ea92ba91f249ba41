//! PBKDF2 key-derivation benchmarks
//!
//! Both sides derive a 32-byte key from the same password and salt, "us"
//! through `ring::pbkdf2` and the baseline through the RustCrypto `pbkdf2`
//! crate. Name sets fully overlap, so every merged entry is comparable.

use benchlab_core::benchmark::BenchmarkTable;
use pbkdf2::pbkdf2_hmac;
use ring::pbkdf2 as ring_pbkdf2;
use sha2::{Sha256, Sha512};
use std::num::NonZeroU32;

const PASSWORD: &[u8] = b"correct horse battery staple";
const SALT: &[u8] = b"benchlab-suite-salt";

fn derive_ring(algorithm: ring_pbkdf2::Algorithm, iterations: u32) {
    let iterations = NonZeroU32::new(iterations).expect("iteration count is nonzero");
    let mut out = [0u8; 32];
    ring_pbkdf2::derive(algorithm, iterations, SALT, PASSWORD, &mut out);
}

pub fn ours() -> BenchmarkTable {
    BenchmarkTable::new()
        .with("pbkdf2-sha256-1k", || {
            derive_ring(ring_pbkdf2::PBKDF2_HMAC_SHA256, 1_000)
        })
        .with("pbkdf2-sha256-10k", || {
            derive_ring(ring_pbkdf2::PBKDF2_HMAC_SHA256, 10_000)
        })
        .with("pbkdf2-sha512-1k", || {
            derive_ring(ring_pbkdf2::PBKDF2_HMAC_SHA512, 1_000)
        })
}

pub fn theirs() -> BenchmarkTable {
    BenchmarkTable::new()
        .with("pbkdf2-sha256-1k", || {
            let mut out = [0u8; 32];
            pbkdf2_hmac::<Sha256>(PASSWORD, SALT, 1_000, &mut out);
        })
        .with("pbkdf2-sha256-10k", || {
            let mut out = [0u8; 32];
            pbkdf2_hmac::<Sha256>(PASSWORD, SALT, 10_000, &mut out);
        })
        .with("pbkdf2-sha512-1k", || {
            let mut out = [0u8; 32];
            pbkdf2_hmac::<Sha512>(PASSWORD, SALT, 1_000, &mut out);
        })
}
