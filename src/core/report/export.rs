//! 모달 파라미터 CSV 내보내기/읽기
//!
//! 헤더 한 줄 + 주파수당 한 줄, 모든 수치는 소수 6자리 텍스트.

use anyhow::{bail, ensure, Context, Result};
use std::fs;
use std::path::Path;

use crate::core::model::ModalParams;

/// CSV 헤더 열 이름
pub const CSV_HEADER: [&str; 3] = ["ζ-zero t_n", "A_n (Amplitude)", "θ_n (Phase in rad)"];

/// 주파수 하나에 대한 내보내기 행
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRecord {
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
}

/// 주파수 순서대로 (t_n, A_n, θ_n) 행 구성
pub fn parameter_records(frequencies: &[f64], params: &ModalParams) -> Result<Vec<ParameterRecord>> {
    ensure!(
        frequencies.len() == params.len(),
        "주파수 {} 개와 파라미터 {} 개가 맞지 않습니다",
        frequencies.len(),
        params.len()
    );

    Ok(frequencies
        .iter()
        .zip(&params.amplitudes)
        .zip(&params.phases)
        .map(|((&frequency, &amplitude), &phase)| ParameterRecord {
            frequency,
            amplitude,
            phase,
        })
        .collect())
}

pub fn render_csv(records: &[ParameterRecord]) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');
    for record in records {
        csv.push_str(&format!(
            "{:.6},{:.6},{:.6}\n",
            record.frequency, record.amplitude, record.phase
        ));
    }
    csv
}

/// 파일을 덮어쓰며 기록
pub fn write_parameter_csv(path: &Path, records: &[ParameterRecord]) -> Result<()> {
    fs::write(path, render_csv(records))
        .with_context(|| format!("파라미터 파일을 쓸 수 없습니다: {}", path.display()))
}

pub fn parse_parameter_csv(text: &str) -> Result<Vec<ParameterRecord>> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().context("CSV 헤더가 없습니다")?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    ensure!(
        columns == CSV_HEADER,
        "CSV 헤더가 예상과 다릅니다: {:?}",
        columns
    );

    lines
        .enumerate()
        .map(|(i, line)| {
            let fields = line
                .split(',')
                .map(|field| field.trim().parse::<f64>())
                .collect::<Result<Vec<f64>, _>>()
                .with_context(|| format!("{} 번째 데이터 행을 해석할 수 없습니다: {}", i + 1, line))?;
            match fields.as_slice() {
                &[frequency, amplitude, phase] => Ok(ParameterRecord {
                    frequency,
                    amplitude,
                    phase,
                }),
                _ => bail!("{} 번째 데이터 행의 열 수가 3 이 아닙니다: {}", i + 1, line),
            }
        })
        .collect()
}

pub fn read_parameter_csv(path: &Path) -> Result<Vec<ParameterRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("파라미터 파일을 읽을 수 없습니다: {}", path.display()))?;
    parse_parameter_csv(&text)
}
