//! Ranking and unranking of ordered triples drawn without replacement.
//!
//! Ranks enumerate triples `(i1, i2, i3)` of distinct indices in `[0, n)`
//! with `i1` ascending outermost, then `i2` over the remaining values, then
//! `i3` over what is left. Nothing is materialized: both directions are a
//! handful of integer operations.

/// `n * (n - 1) * (n - 2)`, the number of ordered distinct triples.
/// Zero below three; saturates at `u64::MAX`.
pub fn capacity(n: u64) -> u64 {
    if n < 3 {
        return 0;
    }
    n.checked_mul(n - 1)
        .and_then(|v| v.checked_mul(n - 2))
        .unwrap_or(u64::MAX)
}

/// Map a rank in `[0, capacity(n))` to its triple.
pub fn unrank(rank: u64, n: u64) -> Option<[u64; 3]> {
    if n < 3 || rank >= capacity(n) {
        return None;
    }

    let p2 = (n - 1).checked_mul(n - 2)?;
    let i1 = rank / p2;
    let r = rank % p2;
    let b = r / (n - 2);
    let c = r % (n - 2);

    let i2 = if b >= i1 { b + 1 } else { b };

    // Re-insert the two taken indices as gaps, smallest first.
    let (lo, hi) = if i1 < i2 { (i1, i2) } else { (i2, i1) };
    let mut i3 = c;
    if i3 >= lo {
        i3 += 1;
    }
    if i3 >= hi {
        i3 += 1;
    }

    Some([i1, i2, i3])
}

/// Inverse of [`unrank`]. `None` when indices repeat or fall outside `[0, n)`.
pub fn rank(triple: [u64; 3], n: u64) -> Option<u64> {
    let [i1, i2, i3] = triple;
    if n < 3 || i1 >= n || i2 >= n || i3 >= n {
        return None;
    }
    if i1 == i2 || i1 == i3 || i2 == i3 {
        return None;
    }

    let b = if i2 > i1 { i2 - 1 } else { i2 };
    let (lo, hi) = if i1 < i2 { (i1, i2) } else { (i2, i1) };
    let c = i3 - u64::from(i3 > lo) - u64::from(i3 > hi);

    let p2 = (n - 1).checked_mul(n - 2)?;
    i1.checked_mul(p2)?
        .checked_add(b.checked_mul(n - 2)?)?
        .checked_add(c)
}
