//! ζ 영점 모달 투영 라이브러리
//!
//! 정규화된 소수 밀도 π(x)/x 를 리만 제타 영점 주파수의 코사인 모드 합으로
//! 재구성하고, 경계 제약 최적화로 모드별 진폭과 위상을 피팅한다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 샘플링 및 소수 계수
    DomainConfig, DensitySamples, PrimeCounter, prime_pi, sample_prime_density,
    // 모델 및 목적 함수
    ModalParams, ModalProjection, ProjectionObjective, ZETA_ZERO_ORDINATES,
    // 최적화기
    Bounds, OptimizationResult, OptimizerConfig, Termination,
    // 파이프라인
    FitConfig, FitResult, ModalFit, fit_modal_projection,
    // 리포터
    ChartPresenter, ComparisonChart, NativeWindow, ParameterRecord, report_fit,
};
