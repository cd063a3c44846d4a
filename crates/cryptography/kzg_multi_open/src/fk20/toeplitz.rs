use bls12_381::Scalar;

/// A matrix that is constant along every descending diagonal, stored as its
/// first row and first column.
///
/// ```text
/// row = [1, 2, 3, 4]
/// col = [1, 5, 6, 7]
///
/// [1 2 3 4]
/// [5 1 2 3]
/// [6 5 1 2]
/// [7 6 5 1]
/// ```
#[derive(Debug, Clone)]
pub(crate) struct ToeplitzMatrix {
    row: Vec<Scalar>,
    /// Includes the top-left entry, which is shared with `row`.
    col: Vec<Scalar>,
}

impl ToeplitzMatrix {
    /// # Panics
    ///
    /// Panics if `row` or `col` is empty, or if they disagree on the top-left entry.
    pub(crate) fn new(row: Vec<Scalar>, col: Vec<Scalar>) -> Self {
        assert!(
            !row.is_empty() && !col.is_empty(),
            "a toeplitz matrix needs a non-empty row and column"
        );
        assert_eq!(row[0], col[0], "row and column must share the top-left entry");
        Self { row, col }
    }
}

/// A Toeplitz matrix in which each row is the previous one rotated right by one,
/// so the first row alone determines it.
///
/// Circulant matrices are diagonalised by the DFT, which turns a
/// matrix-vector product into a pointwise product between two FFTs.
#[derive(Debug, Clone)]
pub(crate) struct CirculantMatrix {
    pub(crate) row: Vec<Scalar>,
}

impl CirculantMatrix {
    /// Embeds an `n x n` Toeplitz matrix into a `2n x 2n` circulant matrix.
    ///
    /// The first `n` entries of the circulant product with a zero-padded vector
    /// are the Toeplitz product.
    pub(crate) fn from_toeplitz(tm: ToeplitzMatrix) -> Self {
        let mut extension = tm.row;
        extension.rotate_left(1);
        extension.reverse();

        Self {
            row: [tm.col, extension].concat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;
    use polynomial::domain::Domain;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn dense(tm: &ToeplitzMatrix) -> Vec<Vec<Scalar>> {
        let n = tm.col.len();
        (0..n)
            .map(|i| {
                (0..tm.row.len())
                    .map(|j| if i <= j { tm.row[j - i] } else { tm.col[i - j] })
                    .collect()
            })
            .collect()
    }

    fn dense_mul(matrix: &[Vec<Scalar>], vector: &[Scalar]) -> Vec<Scalar> {
        matrix
            .iter()
            .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum())
            .collect()
    }

    fn circulant_mul(tm: ToeplitzMatrix, vector: Vec<Scalar>) -> Vec<Scalar> {
        let n = vector.len();
        let domain = Domain::new(2 * n);
        let circulant = CirculantMatrix::from_toeplitz(tm);

        let vector_fft = domain.fft_scalars(vector.into());
        let row_fft = domain.fft_scalars(circulant.row.into());
        let product: Vec<_> = vector_fft.iter().zip(&row_fft).map(|(a, b)| a * b).collect();

        let mut result = domain.ifft_scalars(product).0;
        result.truncate(n);
        result
    }

    #[test]
    fn dense_form_of_small_matrix() {
        let s = |v: u64| Scalar::from(v);
        let tm = ToeplitzMatrix::new(vec![s(1), s(5), s(6)], vec![s(1), s(2), s(3)]);
        assert_eq!(
            dense(&tm),
            vec![
                vec![s(1), s(5), s(6)],
                vec![s(2), s(1), s(5)],
                vec![s(3), s(2), s(1)],
            ]
        );
        assert_eq!(
            dense_mul(&dense(&tm), &[s(1), s(2), s(3)]),
            vec![s(29), s(19), s(10)]
        );
    }

    #[test]
    fn circulant_embedding_matches_dense_product() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in [1usize, 2, 8, 32] {
            let row: Vec<_> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
            let mut col: Vec<_> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
            col[0] = row[0];
            let vector: Vec<_> = (0..n).map(|_| Scalar::random(&mut rng)).collect();

            let tm = ToeplitzMatrix::new(row, col);
            let expected = dense_mul(&dense(&tm), &vector);
            assert_eq!(circulant_mul(tm, vector), expected, "n = {n}");
        }
    }

    #[test]
    #[should_panic]
    fn mismatched_corner_panics() {
        let _ = ToeplitzMatrix::new(
            vec![Scalar::from(1u64), Scalar::from(2u64)],
            vec![Scalar::from(9u64), Scalar::from(3u64)],
        );
    }
}
