//! 피팅 → CSV 내보내기 → 다시 읽기 통합 테스트

use zeta_projection::core::report::{parameter_records, read_parameter_csv, write_parameter_csv};
use zeta_projection::{fit_modal_projection, DomainConfig, FitConfig, ZETA_ZERO_ORDINATES};

#[test]
fn 내보낸_파라미터_왕복() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("modal_projection_parameters.csv");
    let config = FitConfig::default()
        .with_domain(DomainConfig::new(100.0, 5_000.0, 100))
        .with_export_path(&path);

    let fit = fit_modal_projection(&config).unwrap();
    let records = parameter_records(fit.model.frequencies(), &fit.result.params).unwrap();
    write_parameter_csv(&config.export_path, &records).unwrap();

    let parsed = read_parameter_csv(&path).unwrap();
    assert_eq!(parsed.len(), ZETA_ZERO_ORDINATES.len());

    for (n, row) in parsed.iter().enumerate() {
        assert!((row.frequency - ZETA_ZERO_ORDINATES[n]).abs() <= 1e-6, "주파수 순서 유지");
        assert!((row.amplitude - fit.result.params.amplitudes[n]).abs() <= 1e-6);
        assert!((row.phase - fit.result.params.phases[n]).abs() <= 1e-6);
    }
}

#[test]
fn csv_텍스트는_소수_6자리() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.csv");
    let config = FitConfig::default().with_domain(DomainConfig::new(100.0, 1_000.0, 20));

    let fit = fit_modal_projection(&config).unwrap();
    let records = parameter_records(fit.model.frequencies(), &fit.result.params).unwrap();
    write_parameter_csv(&path, &records).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("ζ-zero t_n,A_n (Amplitude),θ_n (Phase in rad)"));
    for line in lines {
        for field in line.split(',') {
            let decimals = field.split('.').nth(1).map(str::len);
            assert_eq!(decimals, Some(6), "필드 {} 는 소수 6자리", field);
        }
    }
}
