use crate::core::report::*;

fn sample_records() -> Vec<ParameterRecord> {
    (0..7)
        .map(|n| ParameterRecord {
            frequency: 14.13472514 + n as f64,
            amplitude: 0.0123456 * n as f64,
            phase: 0.5 + n as f64,
        })
        .collect()
}

#[test]
fn 오차_배너_소수6자리_테스트() {
    let banner = format_error_banner(0.000123456789);

    assert!(banner.contains("Final projection error δ² = 0.000123"));
    assert!(banner.contains(&"—".repeat(50)), "장식 구분선 포함");
}

#[test]
fn 활성모드_선택_테스트() {
    let amplitudes = [0.0, 0.006, 0.005, 0.1, 0.0049];

    assert_eq!(active_modes(&amplitudes, ACTIVE_MODE_THRESHOLD), vec![1, 3], "임계값 초과만 선택 (경계값 제외)");
    assert!(active_modes(&[], ACTIVE_MODE_THRESHOLD).is_empty());
    assert_eq!(active_modes(&amplitudes, 0.0), vec![1, 2, 3, 4]);
}

#[test]
fn psi_문단_테스트() {
    let line = format_psi_paragraph(&[0, 2, 14], 100, 10_000);
    assert!(line.ends_with("ψ-paragraph := ψ1 ⊕ ψ3 ⊕ ψ15 ⊂ x ∈ [100, 10000]"));

    let single = format_psi_paragraph(&[4], 2, 50);
    assert!(single.ends_with("ψ-paragraph := ψ5 ⊂ x ∈ [2, 50]"));

    let empty = format_psi_paragraph(&[], 100, 10_000);
    assert!(empty.ends_with("ψ-paragraph :=  ⊂ x ∈ [100, 10000]"));
}

#[test]
fn latex_표_상위5행_테스트() {
    let table = format_latex_table(&sample_records(), TABLE_ROWS);
    let lines: Vec<&str> = table.lines().collect();

    assert!(lines.contains(&r"\begin{tabular}{c|c|c}"));
    assert!(lines.contains(&r"$t_n$ & $A_n$ & $\theta_n$ \\ \hline"));
    assert_eq!(lines.last(), Some(&r"\end{tabular}"));

    let rows: Vec<&&str> = lines.iter().filter(|l| l.ends_with(r" \\") && !l.contains("hline")).collect();
    assert_eq!(rows.len(), 5, "최대 5행");
    assert_eq!(*rows[0], r"14.1347 & 0.00000 & 0.5000 \\");
    assert_eq!(*rows[1], r"15.1347 & 0.01235 & 1.5000 \\");
}

#[test]
fn latex_표_모드수가_적을때_테스트() {
    let records = &sample_records()[..2];
    let table = format_latex_table(records, TABLE_ROWS);

    let rows = table.lines().filter(|l| l.ends_with(r" \\") && !l.contains("hline")).count();
    assert_eq!(rows, 2, "min(5, N) 행");
}
