use serde::{Deserialize, Serialize};

/// 사영 L-BFGS 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// 최대 반복 횟수
    pub max_iterations: usize,
    /// L-BFGS 곡률쌍 기억 개수
    pub history_size: usize,
    /// 사영 그래디언트 무한노름 허용치
    pub gradient_tolerance: f64,
    /// (f_k − f_k+1) / max(|f_k|, |f_k+1|, 1) 허용치
    pub relative_reduction_tolerance: f64,
    /// 선탐색 최대 반감 횟수
    pub max_line_search_steps: usize,
    /// Armijo 충분 감소 계수
    pub armijo_c1: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 15_000,
            history_size: 10,
            gradient_tolerance: 1e-7,
            relative_reduction_tolerance: 1e7 * f64::EPSILON,
            max_line_search_steps: 30,
            armijo_c1: 1e-4,
        }
    }
}

impl OptimizerConfig {
    /// 새 구성 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 최대 반복 횟수 설정
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// L-BFGS 기억 크기 설정
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    /// 사영 그래디언트 허용치 설정
    pub fn with_gradient_tolerance(mut self, tolerance: f64) -> Self {
        self.gradient_tolerance = tolerance;
        self
    }

    /// 상대 감소 허용치 설정
    pub fn with_relative_reduction_tolerance(mut self, tolerance: f64) -> Self {
        self.relative_reduction_tolerance = tolerance;
        self
    }
}
