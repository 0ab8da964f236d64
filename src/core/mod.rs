//! # ζ 모달 투영 핵심 모듈
//!
//! 샘플러 → 모델/목적 함수 → 경계 최적화기 → 리포터 로 이어지는 단방향 파이프라인

pub mod math;
pub mod model;
pub mod optimizers;
pub mod pipeline;
pub mod report;

// 주요 타입들 재수출
pub use math::*;
pub use model::*;
pub use optimizers::{Bounds, OptimizationResult, OptimizerConfig, Termination};
pub use pipeline::*;
pub use report::*;
