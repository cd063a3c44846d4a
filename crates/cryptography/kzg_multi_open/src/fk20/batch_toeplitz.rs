use bls12_381::{g1_batch_normalize, lincomb::g1_lincomb, G1Point, G1Projective};
use maybe_rayon::prelude::*;
use polynomial::domain::Domain;

use crate::fk20::toeplitz::{CirculantMatrix, ToeplitzMatrix};

/// Computes `Σ A_i · x_i` for Toeplitz matrices `A_i` that change per call and
/// fixed vectors of G1 points `x_i`.
///
/// The FFTs of the fixed vectors are done once up front. They are stored
/// transposed, as one column per point of the circulant domain, so a call
/// costs one MSM per column and a single inverse FFT.
#[derive(Debug)]
pub(crate) struct BatchToeplitzMatrixVecMul {
    /// Number of matrix-vector products summed per call.
    batch_size: usize,
    /// `columns[j][i]` is the `j`-th FFT output of the `i`-th fixed vector.
    columns: Vec<Vec<G1Point>>,
    /// Length of each fixed vector and of the result.
    size_of_vector: usize,
    /// Twice `size_of_vector`.
    circulant_domain: Domain,
}

impl BatchToeplitzMatrixVecMul {
    /// # Panics
    ///
    /// Panics if the vectors are empty, have differing lengths, or a length
    /// that is not a power of two.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub(crate) fn new(vectors: Vec<Vec<G1Point>>) -> Self {
        assert!(!vectors.is_empty(), "expected at least one vector");
        let size_of_vector = vectors[0].len();
        assert!(
            vectors.iter().all(|v| v.len() == size_of_vector),
            "expected all vectors to be the same length"
        );
        assert!(
            size_of_vector.is_power_of_two(),
            "expected the size of the vector to be a power of two"
        );

        let circulant_domain = Domain::new(size_of_vector * 2);

        let vector_ffts: Vec<_> = vectors
            .maybe_into_par_iter()
            .map(|vector| {
                let projective = vector.into_iter().map(G1Projective::from).collect();
                g1_batch_normalize(&circulant_domain.fft_g1(projective))
            })
            .collect();

        Self::from_columns(transpose(vector_ffts))
    }

    /// Wraps columns that were computed ahead of time, in the layout produced by [`Self::new`].
    ///
    /// # Panics
    ///
    /// Panics if the number of columns is not a power of two of at least two,
    /// or the columns have differing lengths.
    pub(crate) fn from_columns(columns: Vec<Vec<G1Point>>) -> Self {
        let circulant_size = columns.len();
        assert!(
            circulant_size >= 2 && circulant_size.is_power_of_two(),
            "expected a power of two number of columns, found {circulant_size}"
        );
        let batch_size = columns[0].len();
        assert!(
            columns.iter().all(|column| column.len() == batch_size),
            "expected all columns to be the same length"
        );

        Self {
            batch_size,
            columns,
            size_of_vector: circulant_size / 2,
            circulant_domain: Domain::new(circulant_size),
        }
    }

    pub(crate) fn columns(&self) -> &[Vec<G1Point>] {
        &self.columns
    }

    /// Computes `Σ A_i · x_i`.
    ///
    /// Summing inside the FFT domain means one inverse FFT in total rather than
    /// one per matrix.
    pub(crate) fn sum_matrix_vector_mul(&self, matrices: Vec<ToeplitzMatrix>) -> Vec<G1Projective> {
        assert_eq!(
            matrices.len(),
            self.batch_size,
            "expected one matrix per precomputed vector"
        );

        let row_ffts: Vec<_> = matrices
            .maybe_into_par_iter()
            .map(|matrix| {
                let circulant = CirculantMatrix::from_toeplitz(matrix);
                self.circulant_domain.fft_scalars(circulant.row.into())
            })
            .collect();

        // Hadamard products summed over the batch are inner products over the transpose
        let msm_scalars = transpose(row_ffts);

        let result: Vec<_> = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("msm per circulant column").entered();
            self.columns
                .maybe_par_iter()
                .zip(msm_scalars)
                .map(|(points, scalars)| {
                    g1_lincomb(points, &scalars).expect("one scalar per matrix and per point")
                })
                .collect()
        };

        // The upper half is an artifact of the circulant embedding
        self.circulant_domain
            .ifft_g1_take_n(result, Some(self.size_of_vector))
    }
}

/// Transposes a rectangular matrix given as a list of rows.
///
/// ```text
/// [[1, 2, 3],      [[1, 4],
///  [4, 5, 6]]  ->   [2, 5],
///                   [3, 6]]
/// ```
pub(crate) fn transpose<T>(rows: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let Some(num_cols) = rows.first().map(Vec::len) else {
        return Vec::new();
    };
    let num_rows = rows.len();

    let mut result: Vec<Vec<T>> = (0..num_cols).map(|_| Vec::with_capacity(num_rows)).collect();
    for row in rows {
        for (column, elem) in result.iter_mut().zip(row) {
            column.push(elem);
        }
    }

    result
}
