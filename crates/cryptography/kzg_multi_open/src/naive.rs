//! Slow reference implementations the FK20 prover is tested against.

use bls12_381::{traits::*, G1Point, G1Projective, Scalar};
use polynomial::poly_coeff::{vanishing_poly, PolyCoeff};

use crate::commit_key::CommitKey;

/// Divides by a monic polynomial, discarding the remainder.
fn divide_by_monic(dividend: &[Scalar], divisor: &[Scalar]) -> Vec<Scalar> {
    let divisor_degree = divisor.len() - 1;
    if dividend.len() <= divisor_degree {
        return Vec::new();
    }

    let mut remainder = dividend.to_vec();
    let mut quotient = vec![Scalar::ZERO; dividend.len() - divisor_degree];
    for i in (0..quotient.len()).rev() {
        let coeff = remainder[i + divisor_degree];
        quotient[i] = coeff;
        for (j, divisor_coeff) in divisor.iter().enumerate() {
            remainder[i + j] -= coeff * divisor_coeff;
        }
    }

    quotient
}

/// Opens `polynomial` at `points` with one proof: the commitment to
/// `polynomial / Z`, where `Z` vanishes on `points`.
pub(crate) fn compute_multi_opening(
    commit_key: &CommitKey,
    polynomial: &PolyCoeff,
    points: &[Scalar],
) -> (G1Point, Vec<Scalar>) {
    let evaluations = points.iter().map(|point| polynomial.eval(point)).collect();

    let quotient = divide_by_monic(polynomial, &vanishing_poly(points));
    (commit_key.commit_g1(&quotient).to_affine(), evaluations)
}

/// Commitments to `⌊f(X) / X^{(k+1)·l}⌋` for every `k` whose quotient is non-empty.
pub(crate) fn h_poly_commitments(
    commit_key: &CommitKey,
    polynomial: &PolyCoeff,
    coset_size: usize,
) -> Vec<G1Projective> {
    (1..polynomial.len() / coset_size)
        .map(|k| commit_key.commit_g1(&polynomial[k * coset_size..]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_linear_factor() {
        // (X^2 + 3X + 2) / (X + 1) = X + 2
        let s = |v: u64| Scalar::from(v);
        let quotient = divide_by_monic(&[s(2), s(3), s(1)], &[s(1), s(1)]);
        assert_eq!(quotient, vec![s(2), s(1)]);
    }

    #[test]
    fn division_discards_remainder() {
        // (X^2 + 1) / (X - 1) = X + 1 remainder 2
        let s = |v: u64| Scalar::from(v);
        let quotient = divide_by_monic(&[s(1), s(0), s(1)], &[-s(1), s(1)]);
        assert_eq!(quotient, vec![s(1), s(1)]);
    }
}
