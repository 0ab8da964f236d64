
use crate::core::optimizers::DifferentiableObjective;
use nalgebra::DVector;

/// Σ w_i (x_i − c_i)²
pub(super) struct WeightedQuadratic {
    pub center: Vec<f64>,
    pub weights: Vec<f64>,
}

impl DifferentiableObjective for WeightedQuadratic {
    fn dimension(&self) -> usize {
        self.center.len()
    }

    fn value_and_gradient(&self, x: &DVector<f64>) -> (f64, DVector<f64>) {
        let mut value = 0.0;
        let mut gradient = DVector::zeros(x.len());
        for i in 0..x.len() {
            let d = x[i] - self.center[i];
            value += self.weights[i] * d * d;
            gradient[i] = 2.0 * self.weights[i] * d;
        }
        (value, gradient)
    }
}

/// (1 − x)² + 100 (y − x²)²
pub(super) struct Rosenbrock;

impl DifferentiableObjective for Rosenbrock {
    fn dimension(&self) -> usize {
        2
    }

    fn value_and_gradient(&self, v: &DVector<f64>) -> (f64, DVector<f64>) {
        let (x, y) = (v[0], v[1]);
        let value = (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2);
        let gradient = DVector::from_vec(vec![
            -2.0 * (1.0 - x) - 400.0 * x * (y - x * x),
            200.0 * (y - x * x),
        ]);
        (value, gradient)
    }
}

/// 항상 NaN 을 돌려주는 목적 함수
pub(super) struct NanObjective;

impl DifferentiableObjective for NanObjective {
    fn dimension(&self) -> usize {
        2
    }

    fn value_and_gradient(&self, x: &DVector<f64>) -> (f64, DVector<f64>) {
        (f64::NAN, DVector::zeros(x.len()))
    }
}
