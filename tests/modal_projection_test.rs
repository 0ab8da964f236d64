//! 기준 실행 (500 샘플, x ∈ [100, 10000], 제타 영점 15개) 통합 테스트

use std::f64::consts::TAU;
use zeta_projection::{fit_modal_projection, FitConfig, ModalParams, ProjectionObjective};

#[test]
fn 기준_실행이_null_재구성보다_낫다() {
    let config = FitConfig::default();
    let fit = fit_modal_projection(&config).unwrap();

    println!(
        "δ²: 초기 {:.6e}, null {:.6e}, 최종 {:.6e} ({:?}, 반복 {} 회)",
        fit.result.initial_mse,
        fit.result.baseline_mse,
        fit.result.mse,
        fit.result.termination,
        fit.result.iterations
    );

    assert!(
        fit.result.mse < fit.result.baseline_mse,
        "최종 δ² {} 은(는) 1/ln(x) 만의 δ² {} 보다 작아야 함",
        fit.result.mse,
        fit.result.baseline_mse
    );
    assert!(fit.result.mse <= fit.result.initial_mse, "초기 추정값보다 나빠지지 않음");
}

#[test]
fn 기준_실행_경계_만족() {
    let fit = fit_modal_projection(&FitConfig::default()).unwrap();

    assert_eq!(fit.result.params.len(), 15);
    for n in 0..15 {
        let a = fit.result.params.amplitudes[n];
        let theta = fit.result.params.phases[n];
        assert!((0.0..=0.1).contains(&a), "A_{} = {}", n + 1, a);
        assert!((0.0..TAU).contains(&theta), "θ_{} = {}", n + 1, theta);
    }
}

#[test]
fn null_재구성_오차는_독립적으로_재현된다() {
    let fit = fit_modal_projection(&FitConfig::default()).unwrap();
    let objective = ProjectionObjective::new(&fit.model, &fit.samples.xs, &fit.samples.density).unwrap();

    let null = objective.mse(&ModalParams::zeros(15)).unwrap();
    let manual: f64 = fit
        .samples
        .xs
        .iter()
        .zip(&fit.samples.density)
        .map(|(x, d)| (1.0 / x.ln() - d).powi(2))
        .sum::<f64>()
        / fit.samples.len() as f64;

    assert_eq!(null, fit.result.baseline_mse);
    assert!((null - manual).abs() < 1e-15);
}

#[test]
fn 같은_입력_두번_실행은_같은_오차() {
    let config = FitConfig::default();

    let first = fit_modal_projection(&config).unwrap();
    let second = fit_modal_projection(&config).unwrap();

    assert!((first.result.mse - second.result.mse).abs() <= 1e-12);
    assert_eq!(first.result.params, second.result.params, "결정적 최적화기는 같은 점을 돌려줌");
}
