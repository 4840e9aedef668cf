// tests/helpers.rs

// Deterministic pseudo-random bytes (LCG, repeatable across runs)
#[allow(dead_code)]
pub fn bytes_with_seed(n: usize, seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(n);
    let mut s = seed | 1; // odd
    for _ in 0..n {
        s = s
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        out.push((s >> 56) as u8);
    }
    out
}

// Deterministic u64 samples spread over the full range, plus the edges
// that matter for width and rounding behavior.
#[allow(dead_code)]
pub fn u64_samples(n: usize, seed: u64) -> Vec<u64> {
    let mut out = vec![
        0,
        1,
        0xFF,
        0x100,
        0xFFFF,
        0x10000,
        0xFFFF_FFFF,
        0x1_0000_0000,
        (1u64 << 53) - 1,
        1u64 << 53,
        (1u64 << 53) + 1,
        u64::MAX - 1,
        u64::MAX,
    ];
    let mut s = seed | 1;
    while out.len() < n {
        s = s
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // vary the magnitude so short byte runs show up too
        let shift = (s >> 58) as u32 & 63;
        out.push(s >> shift);
    }
    out
}
