//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;
use crate::error::NormError;

/// Calculate the squared norm of a wavefunction as a plain Riemann sum,
/// `Σ q[k]² dx`.
///
/// Returns zero for an empty array.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    q.iter().fold(A::zero(), |acc, qk| acc + qk.powi(2)) * dx
}

/// Calculate the inner product of two real wavefunctions as a plain Riemann
/// sum.
///
/// Arrays of unequal length are truncated to the shorter of the two.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    q.iter().zip(p).fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk) * dx
}

/// Renormalize a wavefunction in place.
///
/// Fails without modifying `q` if its squared norm is not positive and finite.
pub fn wf_renormalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dx: f64)
    -> Result<(), NormError>
where S: nd::DataMut<Elem = f64>
{
    let norm = NormError::check(wf_norm(q, dx))?.sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
    Ok(())
}

/// Return a normalized copy of a wavefunction.
pub fn wf_normalized<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64)
    -> Result<nd::Array1<f64>, NormError>
where S: nd::Data<Elem = f64>
{
    let norm = NormError::check(wf_norm(q, dx))?.sqrt();
    Ok(q.mapv(|qk| qk / norm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_is_riemann_sum() {
        let q = nd::array![1.0, 2.0, 2.0];
        assert!((wf_norm(&q, 0.5) - 4.5).abs() < 1e-15);
    }

    #[test]
    fn renormalize_zero_fails_untouched() {
        let mut q: nd::Array1<f64> = nd::Array1::zeros(5);
        assert!(wf_renormalize(&mut q, 0.1).is_err());
        assert!(q.iter().all(|qk| *qk == 0.0));
    }

    #[test]
    fn normalized_has_unit_norm() {
        let q: nd::Array1<f64> = nd::Array1::linspace(0.0, 3.0, 31);
        let qn = wf_normalized(&q, 0.1).unwrap();
        assert!((wf_norm(&qn, 0.1) - 1.0).abs() < 1e-12);
        assert!((wf_dot(&qn, &qn, 0.1) - 1.0).abs() < 1e-12);
    }
}
