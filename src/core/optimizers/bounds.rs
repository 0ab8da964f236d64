//! 원소별 상자 경계 [l_i, u_i]

use anyhow::{ensure, Result};
use nalgebra::DVector;

#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: DVector<f64>,
    upper: DVector<f64>,
}

impl Bounds {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        ensure!(
            lower.len() == upper.len(),
            "하한과 상한의 길이가 다릅니다: {} != {}",
            lower.len(),
            upper.len()
        );
        for (i, (l, u)) in lower.iter().zip(&upper).enumerate() {
            ensure!(
                l.is_finite() && u.is_finite() && l <= u,
                "{} 번째 경계가 잘못되었습니다: [{}, {}]",
                i,
                l,
                u
            );
        }
        Ok(Self {
            lower: DVector::from_vec(lower),
            upper: DVector::from_vec(upper),
        })
    }

    /// (개수, 하한, 상한) 블록들을 이어 붙인 경계
    pub fn from_blocks(blocks: &[(usize, f64, f64)]) -> Result<Self> {
        let mut lower = Vec::new();
        let mut upper = Vec::new();
        for &(count, l, u) in blocks {
            lower.extend(std::iter::repeat(l).take(count));
            upper.extend(std::iter::repeat(u).take(count));
        }
        Self::new(lower, upper)
    }

    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &DVector<f64> {
        &self.lower
    }

    pub fn upper(&self) -> &DVector<f64> {
        &self.upper
    }

    /// 상자 위로의 사영 P(x)
    pub fn project(&self, x: &DVector<f64>) -> DVector<f64> {
        let mut projected = x.clone();
        self.project_in_place(&mut projected);
        projected
    }

    pub fn project_in_place(&self, x: &mut DVector<f64>) {
        for ((v, l), u) in x.iter_mut().zip(self.lower.iter()).zip(self.upper.iter()) {
            *v = v.clamp(*l, *u);
        }
    }

    pub fn contains(&self, x: &DVector<f64>) -> bool {
        x.len() == self.dimension()
            && x.iter()
                .zip(self.lower.iter())
                .zip(self.upper.iter())
                .all(|((v, l), u)| *l <= *v && *v <= *u)
    }

    /// ‖P(x − g) − x‖_∞
    pub fn projected_gradient_norm(&self, x: &DVector<f64>, gradient: &DVector<f64>) -> f64 {
        x.iter()
            .zip(gradient.iter())
            .zip(self.lower.iter().zip(self.upper.iter()))
            .map(|((v, g), (l, u))| ((v - g).clamp(*l, *u) - v).abs())
            .fold(0.0, f64::max)
    }

    /// 경계에 붙어 바깥쪽으로 밀리는 변수를 제외한 자유 변수 마스크
    pub fn free_mask(&self, x: &DVector<f64>, gradient: &DVector<f64>) -> Vec<bool> {
        x.iter()
            .zip(gradient.iter())
            .zip(self.lower.iter().zip(self.upper.iter()))
            .map(|((v, g), (l, u))| !((*v <= *l && *g > 0.0) || (*v >= *u && *g < 0.0)))
            .collect()
    }
}
