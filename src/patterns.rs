//! Input patterns for testing and benchmarking the sort drivers.
//!
//! Currently limited to i32 values. All random derived patterns draw from a
//! seed that is fixed once per process, so failures reproduce across calls
//! within the same run. See [`random_init_seed`].

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_random_size(max_size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    // < size > is random from call to call, with max_size as maximum size.

    let random_size = random_uniform(1, 0..=(max_size as i32));
    random(random_size[0] as usize)
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(size, saw_count, |chunk| chunk.sort_unstable())
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(size, saw_count, |chunk| {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e))
    })
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunk_size = (size / saw_count.max(1)).max(1);
    let directions = random_uniform((size / chunk_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn saw_mixed_range(size: usize, range: std::ops::Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // Ascending and descending chunks randomly picked, with chunk length
    // drawn from `range`.

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);

    let max_chunks = size / range.start;
    let directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_sizes = random_uniform(max_chunks + 1, (range.start as i32)..(range.end as i32));

    let mut i = 0;
    let mut l = 0;
    while l < size {
        let chunk_size = chunk_sizes[i] as usize;
        let chunk = &mut vals[l..(l + chunk_size).min(size)];

        if directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }

        i += 1;
        l += chunk_size;
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let (rising, falling) = vals.split_at_mut(size / 2);
    rising.sort_unstable();
    falling.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every subsequent call to a random derived pattern draw a fresh seed.
///
/// By default the seed is picked once per process, so e.g. `random(4)` yields
/// the same values on every call. Benchmarks want fresh values per call.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed used by the random derived patterns. Print it before testing so
/// crashes are reproducible.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

fn saw(size: usize, saw_count: usize, sort_chunk: impl Fn(&mut [i32])) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunk_size = (size / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_size) {
        sort_chunk(chunk);
    }

    vals
}
