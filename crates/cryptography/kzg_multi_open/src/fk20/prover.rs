use std::sync::OnceLock;

use bls12_381::{g1_batch_normalize, traits::*, G1Point, Scalar};
use polynomial::{domain::Domain, poly_coeff::PolyCoeff, reverse_bit_order};

use crate::{
    commit_key::CommitKey,
    fk20::{
        batch_toeplitz::BatchToeplitzMatrixVecMul,
        h_poly::{compute_h_poly_commitments, take_every_nth},
    },
};

/// What the prover makes proofs about.
#[derive(Debug, Clone)]
pub enum Input {
    /// A polynomial in monomial form.
    PolyCoeff(PolyCoeff),
    /// Evaluations over the polynomial domain in bit-reversed order.
    ///
    /// With this input the first `polynomial_bound` evaluations returned by the
    /// prover are the data itself, in the order given.
    Data(Vec<Scalar>),
}

/// Computes KZG proofs for every coset of a fixed domain at once using FK20.
///
/// FK20 only opens at roots of unity; each proof attests to the `coset_size`
/// evaluations of one coset. See [FK20](https://github.com/khovratovich/Kate/blob/master/Kate_amortized.pdf).
///
/// The Toeplitz precomputation is done the first time proofs are requested,
/// unless it was supplied with [`FK20Prover::with_precomputed_columns`].
#[derive(Debug)]
pub struct FK20Prover {
    batch_toeplitz: OnceLock<BatchToeplitzMatrixVecMul>,
    /// Number of points a proof attests to. `l` in the paper.
    coset_size: usize,
    /// Number of coefficients the polynomials may have.
    polynomial_bound: usize,
    /// Total number of points opened, across all cosets.
    number_of_points_to_open: usize,
    /// One point per proof
    proof_domain: Domain,
    /// One point per opened evaluation
    evaluation_domain: Domain,
    /// Used to interpolate [`Input::Data`]
    poly_domain: Domain,
    commit_key: CommitKey,
}

impl FK20Prover {
    /// # Panics
    ///
    /// Panics if a size is not a power of two, if the opened domain is not larger
    /// than a coset, or if the commit key has fewer than `polynomial_bound` points.
    pub fn new(
        commit_key: CommitKey,
        polynomial_bound: usize,
        points_per_proof: usize,
        number_of_points_to_open: usize,
    ) -> Self {
        assert!(points_per_proof.is_power_of_two());
        assert!(number_of_points_to_open.is_power_of_two());
        assert!(polynomial_bound.is_power_of_two());
        assert!(number_of_points_to_open > points_per_proof);
        assert!(polynomial_bound > points_per_proof);
        assert!(commit_key.g1s.len() >= polynomial_bound);

        Self {
            batch_toeplitz: OnceLock::new(),
            coset_size: points_per_proof,
            polynomial_bound,
            number_of_points_to_open,
            proof_domain: Domain::new(number_of_points_to_open / points_per_proof),
            evaluation_domain: Domain::new(number_of_points_to_open),
            poly_domain: Domain::new(polynomial_bound),
            commit_key,
        }
    }

    /// Like [`Self::new`], with the Toeplitz columns already computed.
    ///
    /// `columns` must have `2 * polynomial_bound / points_per_proof` entries of
    /// `points_per_proof` points each, in the layout returned by
    /// [`Self::precomputed_columns`].
    ///
    /// # Panics
    ///
    /// Panics on the same conditions as [`Self::new`], or if `columns` has the wrong shape.
    pub fn with_precomputed_columns(
        commit_key: CommitKey,
        polynomial_bound: usize,
        points_per_proof: usize,
        number_of_points_to_open: usize,
        columns: Vec<Vec<G1Point>>,
    ) -> Self {
        let prover = Self::new(
            commit_key,
            polynomial_bound,
            points_per_proof,
            number_of_points_to_open,
        );

        assert_eq!(columns.len(), 2 * prover.toeplitz_vector_len());
        assert!(columns.iter().all(|column| column.len() == points_per_proof));
        let batch_toeplitz = BatchToeplitzMatrixVecMul::from_columns(columns);

        prover
            .batch_toeplitz
            .set(batch_toeplitz)
            .expect("the prover was just created");
        prover
    }

    const fn toeplitz_vector_len(&self) -> usize {
        self.polynomial_bound / self.coset_size
    }

    /// Returns the Toeplitz precomputation, computing it on first use.
    ///
    /// Concurrent first calls block until a single computation finishes.
    fn batch_toeplitz(&self) -> &BatchToeplitzMatrixVecMul {
        self.batch_toeplitz.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                coset_size = self.coset_size,
                polynomial_bound = self.polynomial_bound,
                "computing fk20 toeplitz columns"
            );
            BatchToeplitzMatrixVecMul::new(self.srs_vectors())
        })
    }

    /// The fixed vectors the Toeplitz matrices are multiplied with.
    ///
    /// These are the commit key points without the last `coset_size` of them,
    /// reversed and split by stride `coset_size`. A proof never needs the top
    /// `coset_size` coefficients, just as a single-point quotient has one
    /// coefficient fewer than its polynomial.
    fn srs_vectors(&self) -> Vec<Vec<G1Point>> {
        let srs_truncated: Vec<_> = self.commit_key.g1s[..self.polynomial_bound]
            .iter()
            .rev()
            .skip(self.coset_size)
            .copied()
            .collect();

        let mut srs_vectors = take_every_nth(&srs_truncated, self.coset_size);
        for vector in &mut srs_vectors {
            vector.resize(self.toeplitz_vector_len(), G1Point::identity());
        }
        srs_vectors
    }

    /// Forces the Toeplitz precomputation.
    pub fn precompute(&self) {
        let _ = self.batch_toeplitz();
    }

    /// True once the Toeplitz columns are available.
    pub fn is_precomputed(&self) -> bool {
        self.batch_toeplitz.get().is_some()
    }

    /// The Toeplitz columns, computing them if needed. They can be stored and
    /// handed back to [`Self::with_precomputed_columns`].
    pub fn precomputed_columns(&self) -> &[Vec<G1Point>] {
        self.batch_toeplitz().columns()
    }

    pub const fn num_proofs(&self) -> usize {
        self.number_of_points_to_open / self.coset_size
    }

    pub const fn coset_size(&self) -> usize {
        self.coset_size
    }

    /// Converts the input to monomial form, padded to `polynomial_bound` coefficients.
    ///
    /// # Panics
    ///
    /// Panics if the input has more than `polynomial_bound` values.
    pub fn polynomial(&self, input: Input) -> PolyCoeff {
        let mut poly_coeff = match input {
            Input::PolyCoeff(poly_coeff) => poly_coeff,
            Input::Data(mut data) => {
                reverse_bit_order(&mut data);
                self.poly_domain.ifft_scalars(data)
            }
        };
        assert!(poly_coeff.len() <= self.polynomial_bound);
        poly_coeff.resize(self.polynomial_bound, Scalar::ZERO);
        poly_coeff
    }

    pub fn commit(&self, input: Input) -> G1Point {
        let poly_coeff = self.polynomial(input);
        self.commit_key.commit_g1(&poly_coeff).into()
    }

    /// Evaluates the polynomial over the whole opened domain and groups the
    /// evaluations by coset, in bit-reversed coset order.
    pub fn compute_coset_evaluations(&self, input: Input) -> Vec<Vec<Scalar>> {
        let poly_coeff = self.polynomial(input);
        self.coset_evaluations(poly_coeff)
    }

    fn coset_evaluations(&self, poly_coeff: PolyCoeff) -> Vec<Vec<Scalar>> {
        // Bit-reversing the evaluations makes each coset a contiguous chunk
        let mut evaluations = self.evaluation_domain.fft_scalars(poly_coeff);
        reverse_bit_order(&mut evaluations);
        evaluations
            .chunks_exact(self.coset_size)
            .map(<[Scalar]>::to_vec)
            .collect()
    }

    /// Returns one proof per coset together with the coset evaluations. Both are
    /// in bit-reversed coset order, so `proofs[k]` attests to `evaluations[k]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_multi_opening_proofs(&self, input: Input) -> (Vec<G1Point>, Vec<Vec<Scalar>>) {
        let poly_coeff = self.polynomial(input);

        let h_poly_commitments =
            compute_h_poly_commitments(self.batch_toeplitz(), poly_coeff.clone(), self.coset_size);
        let mut proofs = self.proof_domain.fft_g1(h_poly_commitments);
        reverse_bit_order(&mut proofs);

        (
            g1_batch_normalize(&proofs),
            self.coset_evaluations(poly_coeff),
        )
    }
}
