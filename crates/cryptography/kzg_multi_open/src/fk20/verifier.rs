use bls12_381::{
    g1_batch_normalize, lincomb::g1_lincomb, multi_pairings, reduce_bytes_to_scalar_bias,
    traits::*, G1Point, G2Prepared, Scalar,
};
use polynomial::{domain::Domain, reverse_bit_order, CosetFFT};
use sha2::{Digest, Sha256};

use crate::{
    fk20::{cosets::coset_gens, errors::VerifierError},
    verification_key::VerificationKey,
};

/// Domain separator for the challenge that batches cell openings together.
pub const RANDOM_CHALLENGE_CELL_BATCH_DOMAIN: &[u8; 16] = b"RCKZGCBATCH__V1_";

/// Index of a coset, in the bit-reversed order the prover emits them in.
pub type CosetIndex = u64;

/// Position of a commitment in a deduplicated list of commitments.
///
/// Many openings usually refer to the same few commitments, so the verifier
/// receives each commitment once and openings point into that list.
pub type CommitmentIndex = u64;

/// Checks batches of coset openings with a single pairing.
///
/// Any proof of the right form is accepted, FK20 is only how the prover
/// happens to compute them.
#[derive(Debug)]
pub struct FK20Verifier {
    pub verification_key: VerificationKey,
    /// `g_k` for each coset, in bit-reversed order
    pub coset_gens_bit_reversed: Vec<Scalar>,
    /// The subgroup `H` every coset is a shift of
    coset_domain: Domain,
    /// `[τ^n]_2` with `n` the coset size
    tau_pow_n: G2Prepared,
    /// `-[1]_2`
    neg_g2_gen: G2Prepared,
    /// `g_k^n`, the constant term of the vanishing polynomial `X^n - g_k^n` of coset `k`
    coset_gens_pow_n: Vec<Scalar>,
    coset_fft_gens: Vec<CosetFFT>,
}

impl FK20Verifier {
    pub fn new(
        verification_key: VerificationKey,
        num_points_to_open: usize,
        num_cosets: usize,
    ) -> Self {
        let coset_size = num_points_to_open / num_cosets;
        assert_eq!(
            coset_size, verification_key.coset_size,
            "the verification key was made for a different coset size"
        );

        let coset_gens = coset_gens(num_points_to_open, num_cosets, true);
        let n = coset_size as u64;

        let coset_gens_pow_n = coset_gens
            .iter()
            .map(|generator| generator.pow_vartime([n]))
            .collect();
        let coset_fft_gens = coset_gens.iter().copied().map(CosetFFT::new).collect();

        Self {
            tau_pow_n: G2Prepared::from(verification_key.tau_pow_coset_size_g2()),
            neg_g2_gen: G2Prepared::from(-verification_key.g2_gen()),
            coset_domain: Domain::new(coset_size),
            verification_key,
            coset_gens_bit_reversed: coset_gens,
            coset_gens_pow_n,
            coset_fft_gens,
        }
    }

    pub fn num_cosets(&self) -> usize {
        self.coset_gens_bit_reversed.len()
    }

    fn validate_inputs(
        &self,
        num_commitments: usize,
        commitment_indices: &[CommitmentIndex],
        coset_indices: &[CosetIndex],
        coset_evals: &[Vec<Scalar>],
        proofs: &[G1Point],
    ) -> Result<(), VerifierError> {
        let same_length = commitment_indices.len() == proofs.len()
            && coset_indices.len() == proofs.len()
            && coset_evals.len() == proofs.len();
        if !same_length {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                commitment_indices_len: commitment_indices.len(),
                coset_indices_len: coset_indices.len(),
                coset_evaluations_len: coset_evals.len(),
                proofs_len: proofs.len(),
            });
        }

        for &commitment_index in commitment_indices {
            if commitment_index >= num_commitments as u64 {
                return Err(VerifierError::InvalidCommitmentIndex {
                    commitment_index,
                    num_commitments,
                });
            }
        }

        let coset_size = self.verification_key.coset_size;
        for (&coset_index, evals) in coset_indices.iter().zip(coset_evals) {
            if coset_index >= self.num_cosets() as u64 {
                return Err(VerifierError::InvalidCosetIndex {
                    coset_index,
                    num_cosets: self.num_cosets(),
                });
            }
            if evals.len() != coset_size {
                return Err(VerifierError::CosetEvaluationHasInvalidLength {
                    coset_index,
                    length: evals.len(),
                    expected_length: coset_size,
                });
            }
        }

        Ok(())
    }

    /// Verifies that, for every `i`, `proofs[i]` attests that the polynomial
    /// committed to by `deduplicated_commitments[commitment_indices[i]]` takes
    /// the values `coset_evals[i]` on coset `coset_indices[i]`.
    ///
    /// With `r` a Fiat-Shamir challenge over all inputs, the check is
    ///
    /// `e(Σ r^i π_i, [τ^n]_2) = e(Σ r^i C_i - [Σ r^i I_i(X)]_1 + Σ r^i g_i^n π_i, [1]_2)`
    ///
    /// where `I_i` interpolates the evaluations over the coset.
    ///
    /// An empty batch is valid.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(batch_size = proofs.len())))]
    pub fn verify_multi_opening(
        &self,
        deduplicated_commitments: &[G1Point],
        commitment_indices: &[CommitmentIndex],
        coset_indices: &[CosetIndex],
        coset_evals: &[Vec<Scalar>],
        proofs: &[G1Point],
    ) -> Result<(), VerifierError> {
        self.validate_inputs(
            deduplicated_commitments.len(),
            commitment_indices,
            coset_indices,
            coset_evals,
            proofs,
        )?;
        if proofs.is_empty() {
            return Ok(());
        }

        let r = compute_fiat_shamir_challenge(
            &self.verification_key,
            deduplicated_commitments,
            commitment_indices,
            coset_indices,
            coset_evals,
            proofs,
        );
        let r_powers: Vec<_> = std::iter::successors(Some(Scalar::ONE), |power| Some(power * r))
            .take(proofs.len())
            .collect();

        let comm_random_sum_proofs =
            g1_lincomb(proofs, &r_powers).expect("one power of r per proof");

        let weighted_r_powers: Vec<_> = coset_indices
            .iter()
            .zip(&r_powers)
            .map(|(&coset_index, r_power)| r_power * self.coset_gens_pow_n[coset_index as usize])
            .collect();
        let random_weighted_sum_proofs =
            g1_lincomb(proofs, &weighted_r_powers).expect("one weight per proof");

        // Repeated commitments get their powers of r added up, so each unique
        // commitment costs one scalar multiplication.
        let mut weights = vec![Scalar::ZERO; deduplicated_commitments.len()];
        for (&commitment_index, r_power) in commitment_indices.iter().zip(&r_powers) {
            weights[commitment_index as usize] += r_power;
        }
        let random_sum_commitments =
            g1_lincomb(deduplicated_commitments, &weights).expect("one weight per commitment");

        let random_sum_interpolation_poly =
            self.compute_sum_interpolation_poly(coset_evals, coset_indices, &r_powers);
        let comm_random_sum_interpolation_poly = self
            .verification_key
            .commit_g1(&random_sum_interpolation_poly);

        let pairing_input_g1 = (random_sum_commitments - comm_random_sum_interpolation_poly)
            + random_weighted_sum_proofs;

        let normalized = g1_batch_normalize(&[comm_random_sum_proofs, pairing_input_g1]);
        let proof_valid = multi_pairings(&[
            (&normalized[0], &self.tau_pow_n),
            (&normalized[1], &self.neg_g2_gen),
        ]);

        if proof_valid {
            Ok(())
        } else {
            Err(VerifierError::InvalidProof)
        }
    }

    /// `Σ r^i I_i(X)`, in monomial form.
    fn compute_sum_interpolation_poly(
        &self,
        coset_evals: &[Vec<Scalar>],
        coset_indices: &[CosetIndex],
        r_powers: &[Scalar],
    ) -> Vec<Scalar> {
        let mut sum = vec![Scalar::ZERO; self.verification_key.coset_size];

        for ((evals, &coset_index), r_power) in coset_evals.iter().zip(coset_indices).zip(r_powers) {
            // Coset evaluations are bit-reversed, the coset FFT wants domain order
            let mut evals = evals.clone();
            reverse_bit_order(&mut evals);

            let coset_fft = &self.coset_fft_gens[coset_index as usize];
            let interpolation_poly = self.coset_domain.coset_ifft_scalars(evals, coset_fft);

            for (acc, coeff) in sum.iter_mut().zip(interpolation_poly.iter()) {
                *acc += coeff * r_power;
            }
        }

        sum
    }
}

/// Derives the batching challenge from every input of the batch.
///
/// The transcript is the domain separator, the number of coefficients and
/// coset size, the number of commitments and of openings, each commitment, and
/// then per opening its commitment index, coset index, evaluations and proof.
/// Integers are 8-byte big-endian.
#[allow(clippy::manual_slice_size_calculation)]
fn compute_fiat_shamir_challenge(
    verification_key: &VerificationKey,
    commitments: &[G1Point],
    commitment_indices: &[CommitmentIndex],
    coset_indices: &[CosetIndex],
    coset_evals: &[Vec<Scalar>],
    proofs: &[G1Point],
) -> Scalar {
    const G1_COMPRESSED_SIZE: usize = 48;
    const SCALAR_SIZE: usize = 32;

    let hash_input_size = RANDOM_CHALLENGE_CELL_BATCH_DOMAIN.len()
        + 4 * size_of::<u64>()
        + commitments.len() * G1_COMPRESSED_SIZE
        + proofs.len()
            * (2 * size_of::<u64>()
                + verification_key.coset_size * SCALAR_SIZE
                + G1_COMPRESSED_SIZE);

    let mut hash_input: Vec<u8> = Vec::with_capacity(hash_input_size);
    hash_input.extend(RANDOM_CHALLENGE_CELL_BATCH_DOMAIN);
    hash_input.extend((verification_key.num_coefficients_in_polynomial as u64).to_be_bytes());
    hash_input.extend((verification_key.coset_size as u64).to_be_bytes());
    hash_input.extend((commitments.len() as u64).to_be_bytes());
    hash_input.extend((proofs.len() as u64).to_be_bytes());

    for commitment in commitments {
        hash_input.extend(commitment.to_compressed());
    }

    for (((commitment_index, coset_index), evals), proof) in commitment_indices
        .iter()
        .zip(coset_indices)
        .zip(coset_evals)
        .zip(proofs)
    {
        hash_input.extend(commitment_index.to_be_bytes());
        hash_input.extend(coset_index.to_be_bytes());
        for eval in evals {
            hash_input.extend(eval.to_bytes_be());
        }
        hash_input.extend(proof.to_compressed());
    }

    debug_assert_eq!(hash_input.len(), hash_input_size);

    // The challenge only needs 128 bits of entropy, so the bias from reducing
    // a 256-bit digest is irrelevant
    let digest: [u8; 32] = Sha256::digest(hash_input).into();
    reduce_bytes_to_scalar_bias(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        create_insecure_commit_verification_keys,
        fk20::prover::{FK20Prover, Input},
    };

    const POLY_LEN: usize = 4096;
    const COSET_SIZE: usize = 64;
    const NUM_POINTS: usize = 2 * POLY_LEN;
    const NUM_COSETS: usize = NUM_POINTS / COSET_SIZE;

    struct Fixture {
        verifier: FK20Verifier,
        commitments: Vec<G1Point>,
        proofs: Vec<Vec<G1Point>>,
        evaluations: Vec<Vec<Vec<Scalar>>>,
    }

    fn fixture() -> Fixture {
        let (ck, vk) = create_insecure_commit_verification_keys();
        let prover = FK20Prover::new(ck, POLY_LEN, COSET_SIZE, NUM_POINTS);

        let mut commitments = Vec::new();
        let mut proofs = Vec::new();
        let mut evaluations = Vec::new();
        for seed in 0..2u64 {
            let data: Vec<_> = (0..POLY_LEN as u64)
                .map(|i| Scalar::from(i * 31 + seed))
                .collect();
            commitments.push(prover.commit(Input::Data(data.clone())));
            let (p, e) = prover.compute_multi_opening_proofs(Input::Data(data));
            proofs.push(p);
            evaluations.push(e);
        }

        Fixture {
            verifier: FK20Verifier::new(vk, NUM_POINTS, NUM_COSETS),
            commitments,
            proofs,
            evaluations,
        }
    }

    #[test]
    fn domain_separator_is_pinned() {
        assert_eq!(RANDOM_CHALLENGE_CELL_BATCH_DOMAIN, b"RCKZGCBATCH__V1_");
    }

    #[test]
    fn all_cosets_of_one_polynomial_verify() {
        let f = fixture();
        let coset_indices: Vec<u64> = (0..NUM_COSETS as u64).collect();

        let result = f.verifier.verify_multi_opening(
            &f.commitments[..1],
            &vec![0; NUM_COSETS],
            &coset_indices,
            &f.evaluations[0],
            &f.proofs[0],
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn openings_across_commitments_verify() {
        let f = fixture();

        // Row 1 coset 5, row 0 coset 77, row 1 coset 0, row 0 coset 77 again
        let picks = [(1usize, 5usize), (0, 77), (1, 0), (0, 77)];
        let commitment_indices: Vec<u64> = picks.iter().map(|(row, _)| *row as u64).collect();
        let coset_indices: Vec<u64> = picks.iter().map(|(_, k)| *k as u64).collect();
        let evals: Vec<_> = picks.iter().map(|(row, k)| f.evaluations[*row][*k].clone()).collect();
        let proofs: Vec<_> = picks.iter().map(|(row, k)| f.proofs[*row][*k]).collect();

        let result = f.verifier.verify_multi_opening(
            &f.commitments,
            &commitment_indices,
            &coset_indices,
            &evals,
            &proofs,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn tampered_evaluation_is_rejected() {
        let f = fixture();
        let mut evals = f.evaluations[0][3].clone();
        evals[10] += Scalar::ONE;

        let result =
            f.verifier
                .verify_multi_opening(&f.commitments, &[0], &[3], &[evals], &[f.proofs[0][3]]);
        assert_eq!(result, Err(VerifierError::InvalidProof));
    }

    #[test]
    fn proof_for_another_coset_is_rejected() {
        let f = fixture();
        let result = f.verifier.verify_multi_opening(
            &f.commitments,
            &[0],
            &[3],
            &[f.evaluations[0][3].clone()],
            &[f.proofs[0][4]],
        );
        assert_eq!(result, Err(VerifierError::InvalidProof));
    }

    #[test]
    fn structural_errors() {
        let f = fixture();
        let evals = f.evaluations[0][0].clone();
        let proof = f.proofs[0][0];

        assert!(matches!(
            f.verifier
                .verify_multi_opening(&f.commitments, &[0, 0], &[0], &[evals.clone()], &[proof]),
            Err(VerifierError::BatchVerificationInputsMustHaveSameLength { .. })
        ));
        assert_eq!(
            f.verifier
                .verify_multi_opening(&f.commitments, &[2], &[0], &[evals.clone()], &[proof]),
            Err(VerifierError::InvalidCommitmentIndex {
                commitment_index: 2,
                num_commitments: 2
            })
        );
        assert_eq!(
            f.verifier.verify_multi_opening(
                &f.commitments,
                &[0],
                &[NUM_COSETS as u64],
                &[evals],
                &[proof]
            ),
            Err(VerifierError::InvalidCosetIndex {
                coset_index: NUM_COSETS as u64,
                num_cosets: NUM_COSETS
            })
        );
        assert!(matches!(
            f.verifier
                .verify_multi_opening(&f.commitments, &[0], &[0], &[vec![Scalar::ONE]], &[proof]),
            Err(VerifierError::CosetEvaluationHasInvalidLength { .. })
        ));
    }

    #[test]
    fn empty_batch_is_valid() {
        let f = fixture();
        assert_eq!(f.verifier.verify_multi_opening(&[], &[], &[], &[], &[]), Ok(()));
    }
}
