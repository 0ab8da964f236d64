//! 콘솔 출력 서식. 모든 수치는 고정 소수 자릿수로 찍는다.

use std::path::Path;

use super::export::ParameterRecord;

/// ψ 라벨 사이 구분자
pub const MODE_SEPARATOR: &str = " ⊕ ";

/// 완료 배너 + δ² (소수 6자리) + 장식 구분선
pub fn format_error_banner(mse: f64) -> String {
    format!(
        "\n✅ NHSN ζ 투영 피팅 완료\nFinal projection error δ² = {:.6}\n{}",
        mse,
        "—".repeat(50)
    )
}

pub fn format_export_confirmation(path: &Path) -> String {
    format!("✅ 모달 파라미터 저장 완료: {}", path.display())
}

/// 앞쪽 min(rows, N) 개 모드의 LaTeX tabular 조각
pub fn format_latex_table(records: &[ParameterRecord], rows: usize) -> String {
    let mut lines = vec![
        "\n📝 LaTeX 표 조각 (상위 모드):".to_string(),
        r"\begin{tabular}{c|c|c}".to_string(),
        r"$t_n$ & $A_n$ & $\theta_n$ \\ \hline".to_string(),
    ];
    for record in records.iter().take(rows) {
        lines.push(format!(
            r"{:.4} & {:.5} & {:.4} \\",
            record.frequency, record.amplitude, record.phase
        ));
    }
    lines.push(r"\end{tabular}".to_string());
    lines.join("\n")
}

/// 활성 모드 라벨 ψk (1 기반) 를 ⊕ 로 잇고 절삭된 도메인 경계를 붙인다
pub fn format_psi_paragraph(active: &[usize], start: i64, end: i64) -> String {
    let path = active
        .iter()
        .map(|n| format!("ψ{}", n + 1))
        .collect::<Vec<_>>()
        .join(MODE_SEPARATOR);
    format!(
        "\n🧠 StructureLang ψ-paragraph:\nψ-paragraph := {} ⊂ x ∈ [{}, {}]",
        path, start, end
    )
}
