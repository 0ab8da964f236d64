//! 정확한 소수 계수 함수 π(n)
//!
//! 에라토스테네스의 체를 한 번 만든 뒤 누적 개수 테이블로 질의에 답한다.

use anyhow::{bail, ensure, Result};

/// 체를 만들 수 있는 최대 상한 (bool + u32 테이블 약 500MB)
pub const MAX_SIEVE_LIMIT: u64 = 100_000_000;

/// 누적 소수 개수 테이블
#[derive(Debug, Clone)]
pub struct PrimeCounter {
    /// cumulative[n] = π(n)
    cumulative: Vec<u32>,
}

impl PrimeCounter {
    /// `limit` 까지의 체를 만들어 카운터 생성
    pub fn new(limit: u64) -> Result<Self> {
        if limit < 1 {
            bail!("소수 계수 상한은 1 이상이어야 합니다: limit = {}", limit);
        }
        ensure!(
            limit <= MAX_SIEVE_LIMIT,
            "소수 계수 상한 {} 이(가) 최대 {} 을(를) 넘습니다",
            limit,
            MAX_SIEVE_LIMIT
        );
        let limit = usize::try_from(limit)?;

        let mut cumulative = Vec::with_capacity(limit + 1);
        let mut count = 0u32;
        for is_prime in sieve_of_eratosthenes(limit) {
            if is_prime {
                count += 1;
            }
            cumulative.push(count);
        }

        Ok(Self { cumulative })
    }

    /// 질의 가능한 최대 n
    pub fn limit(&self) -> u64 {
        (self.cumulative.len() - 1) as u64
    }

    /// π(n): n 이하 소수의 개수
    pub fn count(&self, n: i64) -> Result<u64> {
        if n <= 0 {
            bail!("π(n)은 양의 정수에서만 정의됩니다: n = {}", n);
        }
        match self.cumulative.get(n as usize) {
            Some(&c) => Ok(c as u64),
            None => bail!("n = {} 이(가) 체 상한 {} 을(를) 넘습니다", n, self.limit()),
        }
    }
}

/// `is_prime[k]` 테이블 (0..=limit)
pub fn sieve_of_eratosthenes(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }

    let mut p = 2;
    while p * p <= limit {
        if is_prime[p] {
            for multiple in (p * p..=limit).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }
    is_prime
}

/// 단발성 π(n) 계산
pub fn prime_pi(n: i64) -> Result<u64> {
    if n <= 0 {
        bail!("π(n)은 양의 정수에서만 정의됩니다: n = {}", n);
    }
    PrimeCounter::new(n as u64)?.count(n)
}
