//! Random-byte generation benchmarks
//!
//! "Us" draws from `ring`'s `SystemRandom`; the baseline draws from the
//! `rand` crate. The common buffer sizes share names so they pair up in the
//! merged table; each side also carries one routine the other has no
//! counterpart for.

use benchlab_core::benchmark::BenchmarkTable;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use ring::rand::{SecureRandom, SystemRandom};

fn fill_system(len: usize) {
    let rng = SystemRandom::new();
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf).expect("system rng failure");
}

fn fill_os(len: usize) {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
}

pub fn ours() -> BenchmarkTable {
    BenchmarkTable::new()
        .with("random-bytes-32", || fill_system(32))
        .with("random-bytes-1k", || fill_system(1024))
        .with("random-bytes-16k", || fill_system(16 * 1024))
        // no baseline counterpart: ring can hand back typed values directly
        .with("random-u64", || {
            let rng = SystemRandom::new();
            let mut buf = [0u8; 8];
            rng.fill(&mut buf).expect("system rng failure");
            let _ = u64::from_le_bytes(buf);
        })
}

pub fn theirs() -> BenchmarkTable {
    BenchmarkTable::new()
        .with("random-bytes-32", || fill_os(32))
        .with("random-bytes-1k", || fill_os(1024))
        .with("random-bytes-16k", || fill_os(16 * 1024))
        // no ring counterpart: userspace generator reseeded from the OS
        .with("random-stdrng-1k", || {
            let mut rng = StdRng::from_entropy();
            let mut buf = vec![0u8; 1024];
            rng.fill_bytes(&mut buf);
        })
}
