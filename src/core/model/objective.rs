//! 재구성 평균제곱오차 목적 함수 δ²
//!
//! δ²(A, θ) = mean_j (ρ(x_j; A, θ) − target_j)²

use anyhow::{ensure, Result};
use nalgebra::DVector;

use super::modal::{ModalParams, ModalProjection};
use crate::core::optimizers::DifferentiableObjective;

/// 두 곡선 사이 평균제곱오차. 빈 입력은 0이나 NaN 대신 에러.
pub fn mean_squared_error(predicted: &[f64], target: &[f64]) -> Result<f64> {
    ensure!(!target.is_empty(), "빈 곡선의 평균제곱오차는 정의되지 않습니다");
    ensure!(
        predicted.len() == target.len(),
        "곡선 길이가 다릅니다: {} != {}",
        predicted.len(),
        target.len()
    );

    let sum: f64 = predicted
        .iter()
        .zip(target)
        .map(|(p, t)| (p - t).powi(2))
        .sum();
    Ok(sum / target.len() as f64)
}

/// 고정된 도메인/목표 위의 모달 투영 목적 함수
#[derive(Debug, Clone)]
pub struct ProjectionObjective<'a> {
    model: &'a ModalProjection,
    target: &'a [f64],
    xs: &'a [f64],
    /// 샘플별 ln(x) 캐시
    log_xs: Vec<f64>,
}

impl<'a> ProjectionObjective<'a> {
    pub fn new(model: &'a ModalProjection, xs: &'a [f64], target: &'a [f64]) -> Result<Self> {
        ensure!(!xs.is_empty(), "빈 도메인에서는 목적 함수를 만들 수 없습니다");
        ensure!(
            xs.len() == target.len(),
            "도메인과 목표 곡선 길이가 다릅니다: {} != {}",
            xs.len(),
            target.len()
        );

        Ok(Self {
            model,
            target,
            xs,
            log_xs: xs.iter().map(|x| x.ln()).collect(),
        })
    }

    /// 구조화된 파라미터에서 δ²
    pub fn mse(&self, params: &ModalParams) -> Result<f64> {
        ensure!(
            params.len() == self.model.modes(),
            "모드 수가 맞지 않습니다: 파라미터 {} 개, 주파수 {} 개",
            params.len(),
            self.model.modes()
        );
        let predicted = self.model.evaluate_all(self.xs, params);
        mean_squared_error(&predicted, self.target)
    }

    /// 평탄화 벡터 (앞 절반 진폭, 뒤 절반 위상) 에서 δ²
    pub fn mse_flat(&self, flat: &[f64]) -> Result<f64> {
        let params = ModalParams::from_flat(flat, self.model.modes())?;
        self.mse(&params)
    }
}

impl DifferentiableObjective for ProjectionObjective<'_> {
    fn dimension(&self) -> usize {
        2 * self.model.modes()
    }

    /// 샘플을 한 번 순회하며 δ² 와 해석적 그래디언트를 함께 계산
    ///
    /// ∂δ²/∂A_n = (2/M) Σ r_j cos(φ_nj)
    /// ∂δ²/∂θ_n = −(2/M) Σ r_j A_n sin(φ_nj),  φ_nj = t_n ln x_j + θ_n
    fn value_and_gradient(&self, x: &DVector<f64>) -> (f64, DVector<f64>) {
        let modes = self.model.modes();
        let frequencies = self.model.frequencies();
        let amplitudes = x.rows(0, modes);
        let phases = x.rows(modes, modes);

        let mut gradient = DVector::zeros(2 * modes);
        let mut cosines = vec![0.0; modes];
        let mut sines = vec![0.0; modes];
        let mut sum_sq = 0.0;

        for (&log_x, &target) in self.log_xs.iter().zip(self.target) {
            let mut rho = 1.0 / log_x;
            for n in 0..modes {
                let (s, c) = (frequencies[n] * log_x + phases[n]).sin_cos();
                sines[n] = s;
                cosines[n] = c;
                rho += amplitudes[n] * c;
            }

            let residual = rho - target;
            sum_sq += residual * residual;
            for n in 0..modes {
                gradient[n] += residual * cosines[n];
                gradient[modes + n] -= residual * amplitudes[n] * sines[n];
            }
        }

        let count = self.target.len() as f64;
        gradient *= 2.0 / count;
        (sum_sq / count, gradient)
    }
}
