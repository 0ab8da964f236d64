//! ζ 기반 모달 투영 모델
//!
//! ρ(x) = 1/ln(x) + Σ_n A_n · cos(t_n · ln(x) + θ_n)
//!
//! 호출자는 x > 1 을 보장해야 한다 (ln(x) 가 유한하고 0이 아님).

use anyhow::{ensure, Result};
use nalgebra::DVector;
use std::f64::consts::TAU;

use super::zeta_zeros::ZETA_ZERO_ORDINATES;

/// 모드별 진폭과 위상
#[derive(Debug, Clone, PartialEq)]
pub struct ModalParams {
    pub amplitudes: Vec<f64>,
    pub phases: Vec<f64>,
}

impl ModalParams {
    pub fn new(amplitudes: Vec<f64>, phases: Vec<f64>) -> Result<Self> {
        ensure!(
            amplitudes.len() == phases.len(),
            "진폭과 위상의 길이가 다릅니다: {} != {}",
            amplitudes.len(),
            phases.len()
        );
        Ok(Self { amplitudes, phases })
    }

    /// 모든 진폭이 0인 null 재구성 (ρ = 1/ln x)
    pub fn zeros(modes: usize) -> Self {
        Self {
            amplitudes: vec![0.0; modes],
            phases: vec![0.0; modes],
        }
    }

    /// 고정 초기 추정값: 균일 진폭, 0 부터 2π 까지 균등 간격 위상 (양 끝 포함)
    pub fn initial_guess(modes: usize, amplitude: f64) -> Self {
        let phases = match modes {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let step = TAU / (modes - 1) as f64;
                let mut phases: Vec<f64> = (0..modes).map(|i| step * i as f64).collect();
                phases[modes - 1] = TAU;
                phases
            }
        };
        Self {
            amplitudes: vec![amplitude; modes],
            phases,
        }
    }

    /// [A_1..A_N, θ_1..θ_N] 평탄화 벡터에서 복원
    pub fn from_flat(flat: &[f64], modes: usize) -> Result<Self> {
        ensure!(
            flat.len() == 2 * modes,
            "평탄화 파라미터 길이는 {} 이어야 합니다: {}",
            2 * modes,
            flat.len()
        );
        let (amplitudes, phases) = flat.split_at(modes);
        Ok(Self {
            amplitudes: amplitudes.to_vec(),
            phases: phases.to_vec(),
        })
    }

    /// 최적화기용 평탄화 벡터
    pub fn to_flat(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.amplitudes.len() + self.phases.len(),
            self.amplitudes.iter().chain(self.phases.iter()).copied(),
        )
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// 위상을 [0, 2π) 로 감싼 사본. cos 의 주기성 때문에 모델 값은 변하지 않는다.
    pub fn with_wrapped_phases(&self) -> Self {
        Self {
            amplitudes: self.amplitudes.clone(),
            phases: self.phases.iter().map(|p| p.rem_euclid(TAU)).collect(),
        }
    }
}

/// 고정 주파수 집합 위의 모달 투영 모델
#[derive(Debug, Clone, PartialEq)]
pub struct ModalProjection {
    frequencies: Vec<f64>,
}

impl ModalProjection {
    pub fn new(frequencies: Vec<f64>) -> Result<Self> {
        ensure!(!frequencies.is_empty(), "주파수 집합이 비어 있습니다");
        ensure!(
            frequencies.iter().all(|t| t.is_finite() && *t > 0.0),
            "주파수는 모두 유한한 양수여야 합니다: {:?}",
            frequencies
        );
        Ok(Self { frequencies })
    }

    /// 제타 영점 15개를 주파수로 쓰는 기본 모델
    pub fn zeta() -> Self {
        Self {
            frequencies: ZETA_ZERO_ORDINATES.to_vec(),
        }
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn modes(&self) -> usize {
        self.frequencies.len()
    }

    /// 진동항이 없는 기저 밀도 1/ln(x)
    pub fn baseline(x: f64) -> f64 {
        1.0 / x.ln()
    }

    /// 단일 x 에서 ρ(x)
    pub fn evaluate(&self, x: f64, params: &ModalParams) -> f64 {
        debug_assert_eq!(params.len(), self.modes());

        let log_x = x.ln();
        let mut rho = 1.0 / log_x;
        for ((t, a), theta) in self
            .frequencies
            .iter()
            .zip(&params.amplitudes)
            .zip(&params.phases)
        {
            rho += a * (t * log_x + theta).cos();
        }
        rho
    }

    /// 도메인 전체에 대해 원소별 평가
    pub fn evaluate_all(&self, xs: &[f64], params: &ModalParams) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x, params)).collect()
    }
}
