use rand::Rng;

/// Uniform sample of `min(count, items.len())` elements without replacement.
///
/// Every k-subset is equally likely; the result order is random as well.
pub fn sample_without_replacement<T, R: Rng + ?Sized>(
    items: Vec<T>,
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    let amount = count.min(items.len());
    let picked = rand::seq::index::sample(rng, items.len(), amount);
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    picked.into_iter().filter_map(|i| slots[i].take()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn returns_requested_amount_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_without_replacement((0..50).collect(), 10, &mut rng);
        assert_eq!(picked.len(), 10);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(picked.iter().all(|v| (0..50).contains(v)));
    }

    #[test]
    fn small_pool_returns_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut picked = sample_without_replacement(vec!["a", "b", "c"], 10, &mut rng);
        picked.sort();
        assert_eq!(picked, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_without_replacement(Vec::<i32>::new(), 5, &mut rng).is_empty());
        assert!(sample_without_replacement(vec![1, 2, 3], 0, &mut rng).is_empty());
    }

    #[test]
    fn selection_varies_between_draws() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: HashSet<Vec<i32>> = (0..20)
            .map(|_| {
                let mut s = sample_without_replacement((0..20).collect(), 3, &mut rng);
                s.sort();
                s
            })
            .collect();
        assert!(draws.len() > 1);
    }

    #[test]
    fn every_element_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(sample_without_replacement((0..10).collect::<Vec<i32>>(), 2, &mut rng));
        }
        assert_eq!(seen.len(), 10);
    }
}
