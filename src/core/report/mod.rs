//! 피팅 결과 리포터
//!
//! 최종 오차 출력 → 비교 차트 → CSV 내보내기 → LaTeX 표 → ψ-문단 순서로
//! 결과를 읽기만 한다.

pub mod chart;
pub mod console;
pub mod export;

#[cfg(test)]
mod __tests__;

pub use chart::{ChartPresenter, ChartSeries, ComparisonChart, NativeWindow};
pub use console::*;
pub use export::*;

use anyhow::{Context, Result};
use std::io::Write;

use crate::core::pipeline::{FitConfig, ModalFit};

/// 활성 모드 선택 임계값
pub const ACTIVE_MODE_THRESHOLD: f64 = 0.005;
/// 파라미터 CSV 파일 이름
pub const EXPORT_FILE_NAME: &str = "modal_projection_parameters.csv";
/// LaTeX 표 최대 행 수
pub const TABLE_ROWS: usize = 5;

/// 진폭이 임계값을 넘는 모드의 0 기반 인덱스
pub fn active_modes(amplitudes: &[f64], threshold: f64) -> Vec<usize> {
    amplitudes
        .iter()
        .enumerate()
        .filter(|(_, a)| **a > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// 리포트 전 단계를 고정 순서로 수행
pub fn report_fit<W: Write, C: ChartPresenter + ?Sized>(
    fit: &ModalFit,
    config: &FitConfig,
    out: &mut W,
    presenter: &C,
) -> Result<()> {
    let result = &fit.result;
    let frequencies = fit.model.frequencies();

    // 1-2. 최종 오차
    writeln!(out, "{}", format_error_banner(result.mse))?;
    out.flush()?;

    // 3. 비교 차트 (창이 닫힐 때까지 블록)
    let chart = ComparisonChart::density_comparison(
        &fit.samples.xs,
        &fit.samples.density,
        &fit.reconstruction(),
    )?;
    presenter.present(&chart)?;

    // 4. CSV 내보내기
    let records = parameter_records(frequencies, &result.params)?;
    write_parameter_csv(&config.export_path, &records)?;
    log::info!("파라미터 {} 행을 {} 에 기록", records.len(), config.export_path.display());
    writeln!(out, "{}", format_export_confirmation(&config.export_path))?;

    // 5. LaTeX 표
    writeln!(out, "{}", format_latex_table(&records, config.table_rows))?;

    // 6. ψ-문단
    let active = active_modes(&result.params.amplitudes, config.active_mode_threshold);
    let (start, end) = fit
        .samples
        .truncated_bounds()
        .context("샘플이 비어 있어 도메인 경계를 알 수 없습니다")?;
    writeln!(out, "{}", format_psi_paragraph(&active, start, end))?;

    Ok(())
}
