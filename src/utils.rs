use std::cmp::Ordering;
use std::hash::Hasher;

/// Total order on `f64` bounds.
///
/// Agrees with `==` on every non-NaN value (so `-0.0` and `0.0` compare equal),
/// and falls back to [`f64::total_cmp`] for NaN.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Feed an `f64` into a hasher consistently with [`cmp_f64`].
pub fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    // Both zeros compare equal, so they must hash equal.
    let value = if value == 0.0 { 0.0 } else { value };
    state.write_u64(value.to_bits());
}

/// Iterate over all unordered pairs `(items[i], items[j])` with `i < j`.
pub fn unique_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| items[i + 1..].iter().map(move |b| (a, b)))
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    use super::*;

    fn hash_of(value: f64) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_f64(value, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_cmp_f64() {
        assert_eq!(cmp_f64(0.0, 1.0), Ordering::Less);
        assert_eq!(cmp_f64(1.0, 1.0), Ordering::Equal);
        assert_eq!(cmp_f64(-0.0, 0.0), Ordering::Equal);
        assert_eq!(cmp_f64(f64::NEG_INFINITY, -1e300), Ordering::Less);
        assert_eq!(cmp_f64(f64::INFINITY, f64::INFINITY), Ordering::Equal);
    }

    #[test]
    fn test_hash_f64_zeros() {
        assert_eq!(hash_of(0.0), hash_of(-0.0));
        assert_ne!(hash_of(0.0), hash_of(1.0));
    }

    #[test]
    fn test_unique_pairs() {
        let items = [1, 2, 3];
        let pairs: Vec<_> = unique_pairs(&items).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);

        let single = [1];
        assert_eq!(unique_pairs(&single).count(), 0);

        let none: [i32; 0] = [];
        assert_eq!(unique_pairs(&none).count(), 0);
    }
}
