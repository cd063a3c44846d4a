//! Evaluation of a polynomial given in Lagrange form over the roots of unity.
//!
//! For a polynomial `f` of degree `< n` with values `f_i = f(ω_i)` on the `n`-th
//! roots of unity, and `z` outside of the domain:
//!
//! ```text
//! f(z) = (z^n - 1) / n · Σ f_i · ω_i / (z - ω_i)
//! ```
//!
//! The formula only needs the roots and evaluations to be listed in the same
//! order, so it works unchanged on bit-reversed domains.

use bls12_381::{batch_inversion::batch_inverse, ff::Field, Scalar};

/// Evaluates the polynomial with values `evaluations` on `roots` at the point `z`.
///
/// `roots` must be the full group of `n`-th roots of unity, in any order, with
/// `evaluations[i]` the value at `roots[i]`. When `z` is one of the roots the
/// formula divides by zero, so the matching evaluation is returned directly.
pub fn evaluate_lagrange_form(roots: &[Scalar], evaluations: &[Scalar], z: Scalar) -> Scalar {
    assert_eq!(roots.len(), evaluations.len());

    if let Some(index) = position_in_domain(roots, z) {
        return evaluations[index];
    }

    let mut inverse_denominators: Vec<_> = roots.iter().map(|root| z - root).collect();
    // z is not a root, so none of the differences are zero
    batch_inverse(&mut inverse_denominators);

    evaluate_with_inverse_denominators(roots, evaluations, z, &inverse_denominators)
}

/// Same as [`evaluate_lagrange_form`] for an out-of-domain `z`, reusing the
/// already inverted `1 / (z - ω_i)`.
pub fn evaluate_with_inverse_denominators(
    roots: &[Scalar],
    evaluations: &[Scalar],
    z: Scalar,
    inverse_denominators: &[Scalar],
) -> Scalar {
    let n = roots.len() as u64;

    let sum: Scalar = roots
        .iter()
        .zip(evaluations)
        .zip(inverse_denominators)
        .map(|((root, evaluation), inv)| *evaluation * root * inv)
        .sum();

    let n_inv = Scalar::from(n)
        .invert()
        .expect("domain size is smaller than the field characteristic");
    let z_pow_n_minus_one = z.pow_vartime([n]) - Scalar::ONE;

    sum * z_pow_n_minus_one * n_inv
}

/// Index `i` such that `roots[i] == z`, if any.
pub fn position_in_domain(roots: &[Scalar], z: Scalar) -> Option<usize> {
    roots.iter().position(|root| *root == z)
}
