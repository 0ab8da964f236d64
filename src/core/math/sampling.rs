//! 도메인 샘플링과 목표 밀도 곡선 π(x)/x

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::primes::PrimeCounter;

/// 절삭된 샘플이 π의 정의역 밖으로 내려가지 않도록 하는 도메인 시작 하한
pub const MIN_DOMAIN_START: f64 = 2.0;

/// 샘플링 도메인 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// 시작값 (포함)
    pub start: f64,
    /// 끝값 (포함)
    pub end: f64,
    /// 샘플 개수
    pub samples: usize,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            start: 100.0,
            end: 10_000.0,
            samples: 500,
        }
    }
}

impl DomainConfig {
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        Self { start, end, samples }
    }

    /// 도메인 파라미터 검증
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.start.is_finite() && self.end.is_finite(),
            "도메인 경계는 유한해야 합니다: [{}, {}]",
            self.start,
            self.end
        );
        ensure!(self.samples >= 2, "샘플 개수는 2 이상이어야 합니다: {}", self.samples);
        ensure!(
            self.end > self.start,
            "도메인 끝값은 시작값보다 커야 합니다: [{}, {}]",
            self.start,
            self.end
        );
        ensure!(
            self.start >= MIN_DOMAIN_START,
            "도메인 시작값은 {} 이상이어야 합니다: {}",
            MIN_DOMAIN_START,
            self.start
        );
        Ok(())
    }
}

/// 정렬된 샘플과 그에 대응하는 목표 밀도
#[derive(Debug, Clone, PartialEq)]
pub struct DensitySamples {
    pub xs: Vec<f64>,
    pub density: Vec<f64>,
}

impl DensitySamples {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// 정수로 절삭된 도메인 양 끝 (ψ-문단 출력용)
    pub fn truncated_bounds(&self) -> Option<(i64, i64)> {
        let first = self.xs.first()?;
        let last = self.xs.last()?;
        Some((first.trunc() as i64, last.trunc() as i64))
    }
}

/// [start, end] 를 `count` 개로 균등 분할 (양 끝 포함)
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>> {
    ensure!(count >= 2, "linspace 개수는 2 이상이어야 합니다: {}", count);
    ensure!(end > start, "linspace 끝값은 시작값보다 커야 합니다: [{}, {}]", start, end);

    let step = (end - start) / (count - 1) as f64;
    let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    // 마지막 값은 반올림 오차 없이 정확히 end
    values[count - 1] = end;
    Ok(values)
}

/// 도메인을 샘플링하고 각 샘플의 π(trunc(x)) / x 를 계산
pub fn sample_prime_density(domain: &DomainConfig) -> Result<DensitySamples> {
    domain.validate()?;

    let xs = linspace(domain.start, domain.end, domain.samples)?;
    let counter = PrimeCounter::new(domain.end.trunc() as u64)?;

    let density = xs
        .iter()
        .map(|&x| -> Result<f64> {
            let pi = counter.count(x.trunc() as i64)?;
            Ok(pi as f64 / x)
        })
        .collect::<Result<Vec<f64>>>()?;

    log::info!(
        "소수 밀도 샘플링 완료: {} 개 샘플, x ∈ [{}, {}], π({}) = {}",
        xs.len(),
        domain.start,
        domain.end,
        counter.limit(),
        counter.count(counter.limit() as i64)?
    );

    Ok(DensitySamples { xs, density })
}
