//! 샘플링 → 목적 함수 → 경계 최적화 를 한 번에 수행하는 피팅 단계

use anyhow::Result;
use std::f64::consts::TAU;

use super::config::FitConfig;
use crate::core::math::{sample_prime_density, DensitySamples};
use crate::core::model::{ModalParams, ModalProjection, ProjectionObjective};
use crate::core::optimizers::{self, Bounds, Termination};

/// 피팅 결과. 생성 후에는 읽기 전용.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// 피팅된 진폭과 위상 (위상은 [0, 2π))
    pub params: ModalParams,
    /// 반환된 파라미터에서의 δ²
    pub mse: f64,
    /// 최적화기가 보고한 최소 목적값
    pub solver_value: f64,
    /// 초기 추정값에서의 δ²
    pub initial_mse: f64,
    /// 진폭이 모두 0인 null 재구성 (1/ln x) 의 δ²
    pub baseline_mse: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub termination: Termination,
}

impl FitResult {
    pub fn converged(&self) -> bool {
        self.termination.converged()
    }
}

/// 샘플, 모델, 결과를 묶은 파이프라인 산출물
#[derive(Debug, Clone)]
pub struct ModalFit {
    pub samples: DensitySamples,
    pub model: ModalProjection,
    pub result: FitResult,
}

impl ModalFit {
    /// 피팅된 파라미터로 재구성한 밀도 곡선
    pub fn reconstruction(&self) -> Vec<f64> {
        self.model.evaluate_all(&self.samples.xs, &self.result.params)
    }
}

/// 목표 밀도를 샘플링하고 모드별 진폭/위상을 피팅
pub fn fit_modal_projection(config: &FitConfig) -> Result<ModalFit> {
    let samples = sample_prime_density(&config.domain)?;
    let model = ModalProjection::new(config.frequencies.clone())?;
    let result = fit_samples(&model, &samples, config)?;

    Ok(ModalFit {
        samples,
        model,
        result,
    })
}

fn fit_samples(
    model: &ModalProjection,
    samples: &DensitySamples,
    config: &FitConfig,
) -> Result<FitResult> {
    let modes = model.modes();
    let objective = ProjectionObjective::new(model, &samples.xs, &samples.density)?;

    let initial = ModalParams::initial_guess(modes, config.initial_amplitude);
    let bounds = Bounds::from_blocks(&[(modes, 0.0, config.amplitude_max), (modes, 0.0, TAU)])?;

    let initial_mse = objective.mse(&initial)?;
    let baseline_mse = objective.mse(&ModalParams::zeros(modes))?;

    let solution = optimizers::minimize(&objective, &initial.to_flat(), &bounds, &config.optimizer)?;
    if !solution.converged() {
        log::warn!("최적화가 수렴하지 않았습니다 ({:?}); 최선의 점을 그대로 사용합니다", solution.termination);
    }

    // 상한 2π 에 붙은 위상은 0 으로 감싸 [0, 2π) 를 지킨다
    let params = ModalParams::from_flat(solution.x.as_slice(), modes)?.with_wrapped_phases();
    let mse = objective.mse(&params)?;

    log::info!(
        "δ²: 초기 {:.6e}, null 재구성 {:.6e}, 최종 {:.6e}",
        initial_mse,
        baseline_mse,
        mse
    );
    log::debug!("최적화기 보고값 {:.12e}, 재계산값 {:.12e}", solution.value, mse);

    Ok(FitResult {
        params,
        mse,
        solver_value: solution.value,
        initial_mse,
        baseline_mse,
        iterations: solution.iterations,
        evaluations: solution.evaluations,
        termination: solution.termination,
    })
}
