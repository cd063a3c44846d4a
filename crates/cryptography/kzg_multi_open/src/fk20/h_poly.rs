use bls12_381::{traits::*, G1Projective, Scalar};
use polynomial::poly_coeff::PolyCoeff;

use crate::fk20::{batch_toeplitz::BatchToeplitzMatrixVecMul, toeplitz::ToeplitzMatrix};

/// Splits `list` into `n` strided subsequences.
///
/// `take_every_nth([a0, a1, a2, a3, a4, a5], 2) = [[a0, a2, a4], [a1, a3, a5]]`
pub(crate) fn take_every_nth<T: Copy>(list: &[T], n: usize) -> Vec<Vec<T>> {
    (0..n)
        .map(|offset| list.iter().copied().skip(offset).step_by(n).collect())
        .collect()
}

/// Commitments to the `h` polynomials of section 3.1.1 of the FK20 paper.
///
/// The proof for coset `k` is the `k`-th output of an FFT over these.
/// The Toeplitz matrix for offset `i` is upper triangular, with
/// the reversed coefficients at stride `coset_size` on its first row.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub(crate) fn compute_h_poly_commitments(
    batch_toeplitz: &BatchToeplitzMatrixVecMul,
    mut polynomial: PolyCoeff,
    coset_size: usize,
) -> Vec<G1Projective> {
    assert!(
        coset_size.is_power_of_two(),
        "expected the coset size to be a power of two, found {coset_size}"
    );
    assert!(
        polynomial.len().is_power_of_two(),
        "expected a power of two number of coefficients, found {}",
        polynomial.len()
    );

    // Highest coefficient first
    polynomial.reverse();

    let matrices = take_every_nth(&polynomial, coset_size)
        .into_iter()
        .map(|row| {
            let mut col = vec![Scalar::ZERO; row.len()];
            col[0] = row[0];
            ToeplitzMatrix::new(row, col)
        })
        .collect();

    batch_toeplitz.sum_matrix_vector_mul(matrices)
}

#[cfg(test)]
mod tests {
    use super::take_every_nth;

    #[test]
    fn strided_split() {
        assert_eq!(take_every_nth(&[5, 4, 3, 2], 2), vec![vec![5, 3], vec![4, 2]]);
        assert_eq!(
            take_every_nth(&[0, 1, 2, 3, 4, 5], 3),
            vec![vec![0, 3], vec![1, 4], vec![2, 5]]
        );
        assert_eq!(take_every_nth(&[7, 8], 1), vec![vec![7, 8]]);
    }
}
