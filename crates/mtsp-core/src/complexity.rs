//! Asymptotic operation counts for the exact solvers, used to size runs
//! and to explain why the exact DP has a hard ceiling.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Complexity {
    /// `None` when the count does not fit in a `u128`.
    pub space: Option<u128>,
    pub time: Option<u128>,
}

/// Space `n * 2^n`, time `n^2 * 2^n`.
pub fn held_karp(n: u32) -> Complexity {
    let states = pow2(n);
    Complexity {
        space: states.and_then(|s| s.checked_mul(u128::from(n))),
        time: states.and_then(|s| s.checked_mul(u128::from(n) * u128::from(n))),
    }
}

/// Space `n`, time `n!`.
pub fn brute_force(n: u32) -> Complexity {
    Complexity {
        space: Some(u128::from(n)),
        time: factorial(n),
    }
}

/// One Held-Karp run per agent over `n` cities.
pub fn held_karp_mtsp(n: u32, agents: u32) -> Complexity {
    let single = held_karp(n);
    let m = u128::from(agents);
    Complexity {
        space: single.space.and_then(|s| s.checked_mul(m)),
        time: single.time.and_then(|t| t.checked_mul(m)),
    }
}

fn pow2(n: u32) -> Option<u128> {
    1u128.checked_shl(n)
}

fn factorial(n: u32) -> Option<u128> {
    (1..=u128::from(n)).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_karp_counts() {
        let c = held_karp(10);
        assert_eq!(c.space, Some(10 * 1024));
        assert_eq!(c.time, Some(100 * 1024));
    }

    #[test]
    fn brute_force_grows_factorially() {
        assert_eq!(brute_force(10).time, Some(3_628_800));
        assert_eq!(brute_force(0).time, Some(1));
        assert_eq!(brute_force(40).time, None);
    }

    #[test]
    fn mtsp_scales_with_agents() {
        assert_eq!(held_karp_mtsp(4, 3).time, Some(3 * 16 * 16));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(held_karp(200).space, None);
    }
}
