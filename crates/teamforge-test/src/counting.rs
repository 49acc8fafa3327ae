//! Closed-form counts for asserting enumeration sizes.

pub fn factorial(n: u64) -> u128 {
    (1..=n as u128).product()
}

/// `C(n, k)`, zero when `k > n`.
pub fn binomial(n: u64, k: u64) -> u128 {
    if k > n {
        return 0;
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}

/// `N! / (s1! * s2! * ...)` where `N` is the sum of `sizes`.
pub fn multinomial(sizes: &[usize]) -> u128 {
    let total: u64 = sizes.iter().map(|&s| s as u64).sum();
    sizes
        .iter()
        .fold(factorial(total), |acc, &s| acc / factorial(s as u64))
}

/// Multinomial divided by `k!` for every maximal run of `k` adjacent equal sizes.
pub fn canonical_count(sizes: &[usize]) -> u128 {
    let mut count = multinomial(sizes);
    let mut run = 1u64;
    for pair in sizes.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
        } else {
            count /= factorial(run);
            run = 1;
        }
    }
    count / factorial(run)
}
