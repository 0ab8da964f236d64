use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::math::DomainConfig;
use crate::core::model::ZETA_ZERO_ORDINATES;
use crate::core::optimizers::OptimizerConfig;
use crate::core::report::{ACTIVE_MODE_THRESHOLD, EXPORT_FILE_NAME, TABLE_ROWS};

/// 한 번의 피팅 실행 전체 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// 샘플링 도메인
    pub domain: DomainConfig,
    /// 모달 주파수 t_n
    pub frequencies: Vec<f64>,
    /// 초기 진폭 (모든 모드 동일)
    pub initial_amplitude: f64,
    /// 진폭 상한 (하한은 0)
    pub amplitude_max: f64,
    /// 활성 모드 선택 임계값
    pub active_mode_threshold: f64,
    /// LaTeX 표에 찍을 최대 행 수
    pub table_rows: usize,
    /// 파라미터 CSV 경로
    pub export_path: PathBuf,
    /// 최적화기 구성
    pub optimizer: OptimizerConfig,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            domain: DomainConfig::default(),
            frequencies: ZETA_ZERO_ORDINATES.to_vec(),
            initial_amplitude: 0.01,
            amplitude_max: 0.1,
            active_mode_threshold: ACTIVE_MODE_THRESHOLD,
            table_rows: TABLE_ROWS,
            export_path: PathBuf::from(EXPORT_FILE_NAME),
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl FitConfig {
    pub fn with_domain(mut self, domain: DomainConfig) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_frequencies(mut self, frequencies: Vec<f64>) -> Self {
        self.frequencies = frequencies;
        self
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }
}
