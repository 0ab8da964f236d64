use crate::core::math::DomainConfig;
use crate::core::pipeline::{fit_modal_projection, FitConfig};
use crate::core::report::*;
use anyhow::{bail, Result};
use std::cell::RefCell;

/// 표시 대신 받은 차트를 기록
#[derive(Default)]
struct RecordingPresenter {
    charts: RefCell<Vec<ComparisonChart>>,
}

impl ChartPresenter for RecordingPresenter {
    fn present(&self, chart: &ComparisonChart) -> Result<()> {
        self.charts.borrow_mut().push(chart.clone());
        Ok(())
    }
}

struct FailingPresenter;

impl ChartPresenter for FailingPresenter {
    fn present(&self, _chart: &ComparisonChart) -> Result<()> {
        bail!("디스플레이 없음")
    }
}

#[test]
fn 리포트_전체_순서_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let config = FitConfig::default()
        .with_domain(DomainConfig::new(100.0, 3_000.0, 60))
        .with_export_path(dir.path().join(EXPORT_FILE_NAME));
    let fit = fit_modal_projection(&config).unwrap();

    let presenter = RecordingPresenter::default();
    let mut out = Vec::new();
    report_fit(&fit, &config, &mut out, &presenter).unwrap();
    let text = String::from_utf8(out).unwrap();

    // 출력 순서: 오차 → 저장 확인 → LaTeX 표 → ψ-문단
    let error_at = text.find("Final projection error δ² = ").unwrap();
    let saved_at = text.find("모달 파라미터 저장 완료").unwrap();
    let table_at = text.find(r"\begin{tabular}").unwrap();
    let psi_at = text.find("ψ-paragraph := ").unwrap();
    assert!(error_at < saved_at && saved_at < table_at && table_at < psi_at);
    assert!(text.contains(&format!("{:.6}", fit.result.mse)));
    assert!(text.contains("⊂ x ∈ [100, 3000]"));

    let charts = presenter.charts.borrow();
    assert_eq!(charts.len(), 1, "차트는 한 번 표시");
    assert_eq!(charts[0].series[0].values, fit.samples.density);
    assert_eq!(charts[0].series[1].values, fit.reconstruction());

    let records = read_parameter_csv(&config.export_path).unwrap();
    assert_eq!(records.len(), 15);
}

#[test]
fn 차트_실패시_리포트_중단_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let config = FitConfig::default()
        .with_domain(DomainConfig::new(100.0, 1_000.0, 10))
        .with_export_path(dir.path().join(EXPORT_FILE_NAME));
    let fit = fit_modal_projection(&config).unwrap();

    let mut out = Vec::new();
    assert!(report_fit(&fit, &config, &mut out, &FailingPresenter).is_err());
    assert!(!config.export_path.exists(), "차트 실패 후에는 파일을 쓰지 않음");
}
