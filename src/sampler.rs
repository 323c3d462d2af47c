use rand::seq::SliceRandom;
use rand::Rng;

/// Pick at most `k` candidates.
///
/// Returns every candidate when `k` covers the whole slice, otherwise a
/// uniformly random subset of exactly `k` distinct candidates. Selection is
/// deterministic for a fixed seed and candidate ordering, so callers must
/// sort candidates before sampling.
pub fn sample_bounded<T: Clone, R: Rng>(candidates: &[T], k: usize, rng: &mut R) -> Vec<T> {
    if candidates.len() <= k {
        return candidates.to_vec();
    }
    candidates.choose_multiple(rng, k).cloned().collect()
}

/// Apportion `total` across buckets in proportion to their sizes using the
/// largest-remainder method.
///
/// Each bucket first receives `floor(total * size / sum)`; the leftover
/// units go one at a time to the buckets with the largest fractional
/// remainders, ties broken by encounter order. The result always sums to
/// `total` exactly and never exceeds a bucket's availability, provided
/// `total <= sum`.
pub fn proportional_counts(available: &[usize], total: usize) -> Vec<usize> {
    let total_available: usize = available.iter().sum();
    if total_available == 0 || total == 0 {
        return vec![0; available.len()];
    }

    let mut counts = Vec::with_capacity(available.len());
    let mut remainders = Vec::with_capacity(available.len());
    for (idx, &avail) in available.iter().enumerate() {
        counts.push(total * avail / total_available);
        remainders.push((total * avail % total_available, idx));
    }

    let mut leftover = total - counts.iter().sum::<usize>();
    // Stable sort keeps encounter order among equal remainders
    remainders.sort_by(|a, b| b.0.cmp(&a.0));
    for (remainder, idx) in remainders {
        if leftover == 0 || remainder == 0 {
            break;
        }
        counts[idx] += 1;
        leftover -= 1;
    }

    counts
}
