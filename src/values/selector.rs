//! @acp:module "Task Selector"
//! @acp:summary "Uniform sampling of daily tasks without replacement"
//! @acp:domain core
//! @acp:layer logic

use rand::Rng;

/// Tasks offered per day
pub const TASKS_PER_DAY: usize = 3;

/// Draw `k` distinct tasks from `pool` using a partial Fisher-Yates shuffle.
///
/// Results are in draw order. A pool smaller than `k` is returned whole, in
/// shuffled order. Every call is an independent draw.
pub fn sample_tasks<R: Rng + ?Sized>(pool: &[String], k: usize, rng: &mut R) -> Vec<String> {
    if pool.len() < k {
        tracing::warn!(
            "Task pool has {} entries, fewer than the {} requested",
            pool.len(),
            k
        );
    }
    let k = k.min(pool.len());

    let mut indices: Vec<usize> = (0..pool.len()).collect();
    for i in 0..k {
        let j = rng.random_range(i..indices.len());
        indices.swap(i, j);
    }

    indices[..k].iter().map(|&i| pool[i].clone()).collect()
}

/// @acp:summary "Three fresh tasks from the thread-local RNG"
pub fn random_tasks(pool: &[String]) -> Vec<String> {
    sample_tasks(pool, TASKS_PER_DAY, &mut rand::rng())
}
