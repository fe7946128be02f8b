//! Elementary integer arithmetic shared by the exercises.

pub fn gcd(a: u64, b: u64) -> u64 {
    // Euclidean algorithm
    let mut x = a;
    let mut y = b;
    while y != 0 {
        let temp = y;
        y = x % y;
        x = temp;
    }
    x
}

pub fn lcm(a: u64, b: u64) -> u128 {
    // a*b can overflow u64, so widen before multiplying
    if a == 0 || b == 0 {
        0
    } else {
        (a as u128 * b as u128) / gcd(a, b) as u128
    }
}

pub fn is_prime(n: u64) -> bool {
    // Trial division while i*i <= n
    if n <= 1 {
        return false;
    }
    let mut i = 2u64;
    while square_fits(i, n) {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// `i*i <= n` without overflowing.
pub fn square_fits(i: u64, n: u64) -> bool {
    i.checked_mul(i).map_or(false, |sq| sq <= n)
}

/// Largest `r` with `r*r <= n`.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    // float estimate can be off by one either way near 2^53 and above
    while !square_fits(r, n) {
        r -= 1;
    }
    while square_fits(r + 1, n) {
        r += 1;
    }
    r
}

/// Non-negative remainder: `((n % m) + m) % m`.
pub fn modulo(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}
