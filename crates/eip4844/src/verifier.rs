use kzg_single_open::fiat_shamir::compute_r_powers_for_verify_kzg_proof_batch;
use maybe_rayon::prelude::*;
use serialization::{
    deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
};

use crate::{
    fiat_shamir::compute_fiat_shamir_challenge, verification_passed, BlobRef, Context, Error,
    KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
};

impl Context {
    /// Verifies that `proof` opens `commitment` to `y` at `z`.
    ///
    /// Malformed inputs are reported as a failed verification.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#verify_kzg_proof
    pub fn verify_kzg_proof(
        &self,
        commitment: KZGCommitment,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: KZGProof,
    ) -> bool {
        verification_passed(self.try_verify_kzg_proof(commitment, z, y, proof))
    }

    /// Like [`Self::verify_kzg_proof`], but reports why verification failed.
    pub fn try_verify_kzg_proof(
        &self,
        commitment: KZGCommitment,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: KZGProof,
    ) -> Result<(), Error> {
        let commitment = deserialize_compressed_g1(&commitment)?;
        let proof = deserialize_compressed_g1(&proof)?;
        let z = deserialize_bytes_to_scalar(&z)?;
        let y = deserialize_bytes_to_scalar(&y)?;

        self.verifier.verify_kzg_proof(commitment, z, y, proof)?;

        Ok(())
    }

    /// Verifies a proof produced by [`Self::compute_blob_kzg_proof`].
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof
    pub fn verify_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: KZGCommitment,
        proof: KZGProof,
    ) -> bool {
        verification_passed(self.try_verify_blob_kzg_proof(blob, commitment, proof))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn try_verify_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: KZGCommitment,
        proof: KZGProof,
    ) -> Result<(), Error> {
        let polynomial = deserialize_blob_to_scalars(blob, self.field_elements_per_blob())?;
        let commitment_g1 = deserialize_compressed_g1(&commitment)?;
        let proof = deserialize_compressed_g1(&proof)?;

        let z = compute_fiat_shamir_challenge(blob, &commitment, self.field_elements_per_blob());
        let y = self.verifier.compute_evaluation(&polynomial, z);

        self.verifier.verify_kzg_proof(commitment_g1, z, y, proof)?;

        Ok(())
    }

    /// Verifies many blob proofs with a single pairing check.
    ///
    /// Inputs of different lengths fail verification. An empty batch passes.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof_batch
    pub fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[BlobRef],
        commitments: &[KZGCommitment],
        proofs: &[KZGProof],
    ) -> bool {
        verification_passed(self.try_verify_blob_kzg_proof_batch(blobs, commitments, proofs))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn try_verify_blob_kzg_proof_batch(
        &self,
        blobs: &[BlobRef],
        commitments: &[KZGCommitment],
        proofs: &[KZGProof],
    ) -> Result<(), Error> {
        let same_length = (blobs.len() == commitments.len()) & (blobs.len() == proofs.len());
        if !same_length {
            return Err(Error::BatchVerificationInputsMustHaveSameLength {
                blobs_len: blobs.len(),
                commitments_len: commitments.len(),
                proofs_len: proofs.len(),
            });
        }

        match blobs.len() {
            0 => return Ok(()),
            1 => return self.try_verify_blob_kzg_proof(blobs[0], commitments[0], proofs[0]),
            _ => {}
        }

        let commitments_g1 = commitments
            .iter()
            .map(|commitment| deserialize_compressed_g1(commitment))
            .collect::<Result<Vec<_>, _>>()?;
        let proofs_g1 = proofs
            .iter()
            .map(|proof| deserialize_compressed_g1(proof))
            .collect::<Result<Vec<_>, _>>()?;

        // Each blob is deserialized and evaluated at its own challenge independently.
        let field_elements_per_blob = self.field_elements_per_blob();
        let (zs, ys): (Vec<_>, Vec<_>) = (0..blobs.len())
            .maybe_into_par_iter()
            .map(|i| {
                let polynomial = deserialize_blob_to_scalars(blobs[i], field_elements_per_blob)?;
                let z =
                    compute_fiat_shamir_challenge(blobs[i], &commitments[i], field_elements_per_blob);
                let y = self.verifier.compute_evaluation(&polynomial, z);
                Ok((z, y))
            })
            .collect::<Result<Vec<_>, Error>>()?
            .into_iter()
            .unzip();

        let r_powers = compute_r_powers_for_verify_kzg_proof_batch(
            field_elements_per_blob,
            commitments,
            &zs,
            &ys,
            proofs,
        );

        self.verifier
            .verify_kzg_proof_batch(&commitments_g1, &zs, &ys, &proofs_g1, &r_powers)?;

        Ok(())
    }
}
