//! 사영 L-BFGS 최적화기
//!
//! 경계에 붙은 변수를 고정한 채 자유 변수 위에서 2-루프 재귀로 준뉴턴 방향을 구하고,
//! 사영 경로를 따라 Armijo 백트래킹 선탐색을 한다. 받아들인 스텝마다 목적값은
//! 증가하지 않는다.

use nalgebra::DVector;
use std::collections::VecDeque;

use super::bounds::Bounds;
use super::config::OptimizerConfig;
use super::{DifferentiableObjective, OptimizationResult, Termination};

/// 곡률쌍 (s, y, ρ = 1 / sᵀy)
#[derive(Debug, Clone)]
struct CurvaturePair {
    s: DVector<f64>,
    y: DVector<f64>,
    rho: f64,
}

/// 받아들여진 선탐색 결과
struct AcceptedStep {
    x: DVector<f64>,
    value: f64,
    gradient: DVector<f64>,
}

pub fn minimize_projected_lbfgs<O: DifferentiableObjective>(
    objective: &O,
    x0: &DVector<f64>,
    bounds: &Bounds,
    config: &OptimizerConfig,
) -> OptimizationResult {
    let mut x = bounds.project(x0);
    let (mut value, mut gradient) = objective.value_and_gradient(&x);
    let initial_value = value;
    let mut evaluations = 1;
    let mut iterations = 0;
    let mut history: VecDeque<CurvaturePair> = VecDeque::with_capacity(config.history_size);

    if !value.is_finite() {
        return OptimizationResult {
            x,
            value,
            initial_value,
            iterations,
            evaluations,
            termination: Termination::NonFinite,
        };
    }

    let mut termination = Termination::MaxIterations;
    while iterations < config.max_iterations {
        if bounds.projected_gradient_norm(&x, &gradient) <= config.gradient_tolerance {
            termination = Termination::ProjectedGradient;
            break;
        }

        let free = bounds.free_mask(&x, &gradient);
        let mut direction = two_loop_direction(&gradient, &history, &free);
        if direction.dot(&gradient) >= 0.0 {
            // 준뉴턴 방향이 하강 방향이 아니면 기억을 버리고 최급강하로
            history.clear();
            direction = steepest_direction(&gradient, &free);
        }

        let initial_step = if history.is_empty() {
            let norm = direction.norm();
            if norm > 0.0 { (1.0 / norm).min(1.0) } else { 1.0 }
        } else {
            1.0
        };

        let (accepted, used) =
            projected_backtracking(objective, bounds, &x, value, &gradient, &direction, initial_step, config);
        evaluations += used;

        let Some(step) = accepted else {
            if history.is_empty() {
                termination = Termination::LineSearchFailed;
                break;
            }
            history.clear();
            continue;
        };
        iterations += 1;

        let s = &step.x - &x;
        let y = &step.gradient - &gradient;
        let sy = s.dot(&y);
        if config.history_size > 0 && sy > f64::EPSILON * y.norm_squared() {
            if history.len() == config.history_size {
                history.pop_front();
            }
            history.push_back(CurvaturePair { s, y, rho: 1.0 / sy });
        }

        let reduction = (value - step.value) / value.abs().max(step.value.abs()).max(1.0);
        log::trace!("L-BFGS 반복 {}: f = {:.9e}, 감소량 = {:.3e}", iterations, step.value, reduction);

        x = step.x;
        value = step.value;
        gradient = step.gradient;

        if reduction <= config.relative_reduction_tolerance {
            termination = Termination::RelativeReduction;
            break;
        }
    }

    OptimizationResult {
        x,
        value,
        initial_value,
        iterations,
        evaluations,
        termination,
    }
}

/// 자유 변수 위에서 −H·g 를 2-루프 재귀로 계산
fn two_loop_direction(
    gradient: &DVector<f64>,
    history: &VecDeque<CurvaturePair>,
    free: &[bool],
) -> DVector<f64> {
    let mut q = masked(gradient, free);
    let mut alphas = Vec::with_capacity(history.len());

    for pair in history.iter().rev() {
        let alpha = pair.rho * pair.s.dot(&q);
        q.axpy(-alpha, &pair.y, 1.0);
        alphas.push(alpha);
    }

    // 초기 헤시안 근사 γI, γ = sᵀy / yᵀy
    if let Some(last) = history.back() {
        q *= 1.0 / (last.rho * last.y.norm_squared());
    }

    for (pair, alpha) in history.iter().zip(alphas.iter().rev()) {
        let beta = pair.rho * pair.y.dot(&q);
        q.axpy(alpha - beta, &pair.s, 1.0);
    }

    -masked(&q, free)
}

fn steepest_direction(gradient: &DVector<f64>, free: &[bool]) -> DVector<f64> {
    -masked(gradient, free)
}

fn masked(v: &DVector<f64>, free: &[bool]) -> DVector<f64> {
    DVector::from_iterator(
        v.len(),
        v.iter().zip(free).map(|(x, &is_free)| if is_free { *x } else { 0.0 }),
    )
}

/// 사영 경로 x(α) = P(x + α·d) 위의 Armijo 백트래킹.
/// 반환값은 (받아들인 스텝, 사용한 함수 평가 수).
#[allow(clippy::too_many_arguments)]
fn projected_backtracking<O: DifferentiableObjective>(
    objective: &O,
    bounds: &Bounds,
    x: &DVector<f64>,
    value: f64,
    gradient: &DVector<f64>,
    direction: &DVector<f64>,
    initial_step: f64,
    config: &OptimizerConfig,
) -> (Option<AcceptedStep>, usize) {
    let mut step = initial_step;
    let mut evaluations = 0;

    for _ in 0..config.max_line_search_steps {
        let candidate = bounds.project(&(x + direction * step));
        let displacement = &candidate - x;
        if displacement.norm() == 0.0 {
            break;
        }

        let (candidate_value, candidate_gradient) = objective.value_and_gradient(&candidate);
        evaluations += 1;

        // 사영으로 하강성이 깨져도 목적값은 절대 늘지 않게 min(·, 0)
        let decrease = config.armijo_c1 * gradient.dot(&displacement).min(0.0);
        if candidate_value.is_finite() && candidate_value <= value + decrease {
            return (
                Some(AcceptedStep {
                    x: candidate,
                    value: candidate_value,
                    gradient: candidate_gradient,
                }),
                evaluations,
            );
        }
        step *= 0.5;
    }

    (None, evaluations)
}
