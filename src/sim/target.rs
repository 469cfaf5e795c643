//! Target functions.
//!
//! A target maps a batch of inputs to a batch of outputs and carries no
//! state. Any `Fn(f64) -> f64` closure or function pointer is a target;
//! it is applied element-wise.

use crate::domain::TargetKind;

pub trait TargetFunction: Sync {
    fn eval(&self, xs: &[f64]) -> Vec<f64>;
}

impl<F> TargetFunction for F
where
    F: Fn(f64) -> f64 + Sync,
{
    fn eval(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self(x)).collect()
    }
}

fn sin_pi(x: f64) -> f64 {
    (std::f64::consts::PI * x).sin()
}

fn cos_pi(x: f64) -> f64 {
    (std::f64::consts::PI * x).cos()
}

fn cubic(x: f64) -> f64 {
    x * x * x - x
}

impl TargetKind {
    /// The scalar function behind this kind.
    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            TargetKind::Sin => sin_pi,
            TargetKind::Cos => cos_pi,
            TargetKind::Cubic => cubic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_evaluate_elementwise() {
        let target = |x: f64| 2.0 * x;
        assert_eq!(target.eval(&[0.0, 1.5, -2.0]), vec![0.0, 3.0, -4.0]);
    }

    #[test]
    fn builtin_targets_hit_known_values() {
        let sin = TargetKind::Sin.function();
        let ys = sin.eval(&[0.0, 0.5, -0.5]);
        assert!(ys[0].abs() < 1e-15);
        assert!((ys[1] - 1.0).abs() < 1e-15);
        assert!((ys[2] + 1.0).abs() < 1e-15);

        assert!((TargetKind::Cos.function()(0.0) - 1.0).abs() < 1e-15);
        assert_eq!(TargetKind::Cubic.function()(1.0), 0.0);
    }
}
