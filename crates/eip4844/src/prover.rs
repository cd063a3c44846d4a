use bls12_381::G1Point;
use serialization::{
    deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
};

use crate::{
    fiat_shamir::compute_fiat_shamir_challenge, BlobRef, Context, Error, KZGCommitment,
    KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
};

impl Context {
    /// Computes the KZG commitment to the polynomial represented by the blob.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#blob_to_kzg_commitment
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn blob_to_kzg_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, Error> {
        let polynomial = deserialize_blob_to_scalars(blob, self.field_elements_per_blob())?;

        // The blob holds evaluations in bit-reversed order, matching the commit key.
        let commitment: G1Point = self.prover.commit(&polynomial).into();

        Ok(commitment.to_compressed())
    }

    /// Computes the KZG proof of the blob's polynomial at `z`, returning the proof and the evaluation.
    ///
    /// `z` may be one of the roots of unity of the evaluation domain.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#compute_kzg_proof
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_kzg_proof(
        &self,
        blob: BlobRef,
        z: KZGOpeningPoint,
    ) -> Result<(KZGProof, KZGOpeningEvaluation), Error> {
        let polynomial = deserialize_blob_to_scalars(blob, self.field_elements_per_blob())?;
        let z = deserialize_bytes_to_scalar(&z)?;

        let (proof, y) = self.prover.compute_kzg_proof(&polynomial, z);

        Ok((proof.to_compressed(), y.to_bytes_be()))
    }

    /// Computes the KZG proof of a blob at the point derived from the blob and its commitment.
    ///
    /// The commitment is not checked to match the blob; it only has to be a valid G1 point.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#compute_blob_kzg_proof
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: KZGCommitment,
    ) -> Result<KZGProof, Error> {
        let polynomial = deserialize_blob_to_scalars(blob, self.field_elements_per_blob())?;

        // Only deserialized to check that it is a point in the correct subgroup
        let _ = deserialize_compressed_g1(&commitment)?;

        let z = compute_fiat_shamir_challenge(blob, &commitment, self.field_elements_per_blob());
        let (proof, _) = self.prover.compute_kzg_proof(&polynomial, z);

        Ok(proof.to_compressed())
    }
}
