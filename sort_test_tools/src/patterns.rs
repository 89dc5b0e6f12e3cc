use std::env;
use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by all pattern generators in this process. Set `OVERRIDE_SEED` to reproduce a
/// failing run.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| u64::from_str(&seed).ok())
        .unwrap_or_else(|| thread_rng().gen())
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("len > 0 and exponent > 0");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_size = len / saw_count.max(1);
    if chunk_size == 0 {
        return vals;
    }

    let mut rng = new_seeded_rng();
    for chunk in vals.chunks_mut(chunk_size) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by(|a, b| b.cmp(a));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by(|a, b| b.cmp(a));

    vals
}
