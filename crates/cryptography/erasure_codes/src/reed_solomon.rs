use std::ops::Deref;

use bls12_381::{batch_inversion::batch_inverse_checked, ff::Field, Scalar};
use polynomial::{
    domain::Domain,
    poly_coeff::{vanishing_poly, PolyCoeff},
    CosetFFT,
};

use crate::errors::RSError;

/// Shift of the coset used to divide by the vanishing polynomial during recovery.
///
/// 7 is the multiplicative generator of the scalar field, so it does not lie in any
/// power-of-two subgroup and the vanishing polynomial has no roots on `7·H`.
pub const RECOVERY_COSET_SHIFT: u64 = 7;

/// Positions that are missing in every block of a codeword.
///
/// A codeword of length `n` is viewed as `n / block_size` consecutive blocks. Index `i`
/// in this list means position `i` is erased in every block, ie the positions
/// `i, i + block_size, i + 2·block_size, ...` of the codeword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockErasureIndices(pub Vec<usize>);

impl Deref for BlockErasureIndices {
    type Target = Vec<usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Reed-Solomon code over the roots of unity.
///
/// A message is a polynomial with at most `poly_len` coefficients and its codeword
/// is the evaluation over the `poly_len · expansion_factor` roots of unity.
#[derive(Debug)]
pub struct ReedSolomon {
    poly_len: usize,
    expansion_factor: usize,
    evaluation_domain: Domain,
    block_size: usize,
    /// `codeword_length / block_size`
    num_blocks: usize,
    /// Roots of unity of order `block_size`. The erased positions of the first
    /// block are roots of the vanishing polynomial built from this domain.
    block_size_domain: Domain,
    recovery_coset: CosetFFT,
}

impl ReedSolomon {
    /// All three parameters must be powers of two.
    pub fn new(poly_len: usize, expansion_factor: usize, block_size: usize) -> Self {
        assert!(
            poly_len.is_power_of_two()
                && expansion_factor.is_power_of_two()
                && block_size.is_power_of_two(),
            "Reed-Solomon parameters must be powers of two"
        );
        let codeword_length = poly_len * expansion_factor;
        assert!(block_size <= codeword_length);

        Self {
            poly_len,
            expansion_factor,
            evaluation_domain: Domain::new(codeword_length),
            block_size,
            num_blocks: codeword_length / block_size,
            block_size_domain: Domain::new(block_size),
            recovery_coset: CosetFFT::new(Scalar::from(RECOVERY_COSET_SHIFT)),
        }
    }

    pub const fn codeword_length(&self) -> usize {
        self.poly_len * self.expansion_factor
    }

    /// Each erased block position removes `num_blocks` evaluations, and at least
    /// `poly_len` evaluations must survive.
    pub const fn acceptable_num_block_erasures(&self) -> usize {
        (self.codeword_length() - self.poly_len) / self.num_blocks
    }

    /// Evaluates the message polynomial over the codeword domain.
    pub fn encode(&self, message: PolyCoeff) -> Result<Vec<Scalar>, RSError> {
        if message.len() > self.poly_len {
            return Err(RSError::PolynomialHasTooManyCoefficients {
                num_coefficients: message.len(),
                max_num_coefficients: self.poly_len,
            });
        }
        Ok(self.evaluation_domain.fft_scalars(message))
    }

    /// Recovers the message polynomial from a codeword with block erasures.
    ///
    /// `codeword_with_erasures` must hold the whole codeword in domain order with
    /// zeros at the erased positions.
    ///
    /// With `E` the received word and `Z` vanishing on the erasures, `E·Z = D·Z`
    /// holds on the whole domain. Interpolating `E·Z` and dividing by `Z` on a coset,
    /// where `Z` has no roots, yields `D`.
    pub fn recover_polynomial_coefficient(
        &self,
        codeword_with_erasures: Vec<Scalar>,
        erasures: &BlockErasureIndices,
    ) -> Result<PolyCoeff, RSError> {
        assert_eq!(codeword_with_erasures.len(), self.codeword_length());

        let z_x = self.vanishing_poly_for_block_erasures(erasures)?;
        self.recover_with_vanishing_poly(codeword_with_erasures, z_x)
    }

    /// Builds `Z(X)` that vanishes on every erased position of every block.
    ///
    /// With `ρ` of order `block_size`, the erased positions `i + k·block_size` are the
    /// roots of `Z(X) = V(X^num_blocks)`, where `V` vanishes on the `ρ^i`.
    fn vanishing_poly_for_block_erasures(
        &self,
        erasures: &BlockErasureIndices,
    ) -> Result<PolyCoeff, RSError> {
        for &block_index in erasures.iter() {
            if block_index >= self.block_size {
                return Err(RSError::InvalidBlockIndex {
                    block_index,
                    block_size: self.block_size,
                });
            }
        }
        if erasures.len() > self.acceptable_num_block_erasures() {
            return Err(RSError::TooManyBlockErasures {
                num_block_erasures: erasures.len(),
                max_num_block_erasures_accepted: self.acceptable_num_block_erasures(),
            });
        }

        let roots: Vec<_> = erasures
            .iter()
            .map(|&index| self.block_size_domain.roots[index])
            .collect();
        let v_x = vanishing_poly(&roots);

        // deg V <= acceptable erasures < block_size, so i * num_blocks stays in range
        let mut z_x = vec![Scalar::ZERO; self.codeword_length()];
        for (i, coeff) in v_x.0.into_iter().enumerate() {
            z_x[i * self.num_blocks] = coeff;
        }

        Ok(PolyCoeff(z_x))
    }

    fn recover_with_vanishing_poly(
        &self,
        codeword_with_erasures: Vec<Scalar>,
        z_x: PolyCoeff,
    ) -> Result<PolyCoeff, RSError> {
        let domain = &self.evaluation_domain;

        let z_eval = domain.fft_scalars(z_x.clone());
        let ez_eval: Vec<_> = z_eval
            .iter()
            .zip(codeword_with_erasures)
            .map(|(z, e)| e * z)
            .collect();
        let dz_x = domain.ifft_scalars(ez_eval);

        let dz_coset_eval = domain.coset_fft_scalars(dz_x, &self.recovery_coset);
        let mut z_coset_eval_inv = domain.coset_fft_scalars(z_x, &self.recovery_coset);
        batch_inverse_checked(&mut z_coset_eval_inv)
            .map_err(|err| RSError::DivisionByZero { index: err.index })?;

        let d_coset_eval: Vec<_> = dz_coset_eval
            .into_iter()
            .zip(z_coset_eval_inv)
            .map(|(dz, z_inv)| dz * z_inv)
            .collect();
        let mut d_x = domain.coset_ifft_scalars(d_coset_eval, &self.recovery_coset);

        if d_x[self.poly_len..].iter().any(|c| !bool::from(c.is_zero())) {
            return Err(RSError::PolynomialHasInvalidLength {
                num_coefficients: d_x.len(),
                expected_num_coefficients: self.poly_len,
            });
        }
        d_x.truncate(self.poly_len);

        Ok(d_x)
    }
}
