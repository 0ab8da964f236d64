//! 경계 제약 최적화기
//!
//! 목적 함수와 시작점, 상자 경계, 구성을 받아 결과 하나를 돌려주는 단일 호출 경계.
//! 중간 반복 상태는 밖으로 노출하지 않는다.

pub mod bounds;
pub mod config;
pub mod lbfgsb;

#[cfg(test)]
mod __tests__;

pub use bounds::Bounds;
pub use config::OptimizerConfig;

use anyhow::{ensure, Result};
use nalgebra::DVector;

/// 값과 그래디언트를 계산할 수 있는 목적 함수
pub trait DifferentiableObjective {
    fn dimension(&self) -> usize;

    fn value_and_gradient(&self, x: &DVector<f64>) -> (f64, DVector<f64>);

    fn value(&self, x: &DVector<f64>) -> f64 {
        self.value_and_gradient(x).0
    }
}

/// 최적화 종료 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// 사영 그래디언트 노름이 허용치 이하
    ProjectedGradient,
    /// 상대 감소량이 허용치 이하
    RelativeReduction,
    MaxIterations,
    LineSearchFailed,
    NonFinite,
}

impl Termination {
    pub fn converged(self) -> bool {
        matches!(self, Self::ProjectedGradient | Self::RelativeReduction)
    }
}

/// 최적화 결과. 수렴 여부와 무관하게 항상 최선의 점을 담는다.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub x: DVector<f64>,
    pub value: f64,
    pub initial_value: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub termination: Termination,
}

impl OptimizationResult {
    pub fn converged(&self) -> bool {
        self.termination.converged()
    }
}

/// 경계 제약 최소화. 에러는 차원 불일치뿐이며 비수렴은 결과의 종료 사유로 보고된다.
pub fn minimize<O: DifferentiableObjective>(
    objective: &O,
    x0: &DVector<f64>,
    bounds: &Bounds,
    config: &OptimizerConfig,
) -> Result<OptimizationResult> {
    ensure!(
        x0.len() == objective.dimension(),
        "시작점 차원 {} 이(가) 목적 함수 차원 {} 과(와) 다릅니다",
        x0.len(),
        objective.dimension()
    );
    ensure!(
        bounds.dimension() == x0.len(),
        "경계 차원 {} 이(가) 시작점 차원 {} 과(와) 다릅니다",
        bounds.dimension(),
        x0.len()
    );

    let result = lbfgsb::minimize_projected_lbfgs(objective, x0, bounds, config);

    log::info!(
        "사영 L-BFGS 종료: {:?}, 반복 {} 회, 평가 {} 회, 목적값 {:.6e} → {:.6e}",
        result.termination,
        result.iterations,
        result.evaluations,
        result.initial_value,
        result.value
    );

    Ok(result)
}
