use crate::{
    BlobRef, Bytes48Ref, DASContext, Error, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
};

// The blob methods of `eip4844::Context`, so one context serves both forks.
// `blob_to_kzg_commitment` lives with the cell methods.
impl DASContext {
    /// See [`eip4844::Context::compute_kzg_proof`].
    pub fn compute_kzg_proof(
        &self,
        blob: BlobRef,
        z: KZGOpeningPoint,
    ) -> Result<(KZGProof, KZGOpeningEvaluation), Error> {
        Ok(self.eip4844_ctx.compute_kzg_proof(blob, z)?)
    }

    /// See [`eip4844::Context::compute_blob_kzg_proof`].
    pub fn compute_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: Bytes48Ref,
    ) -> Result<KZGProof, Error> {
        Ok(self.eip4844_ctx.compute_blob_kzg_proof(blob, *commitment)?)
    }

    /// See [`eip4844::Context::verify_kzg_proof`].
    pub fn verify_kzg_proof(
        &self,
        commitment: Bytes48Ref,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: Bytes48Ref,
    ) -> bool {
        self.eip4844_ctx.verify_kzg_proof(*commitment, z, y, *proof)
    }

    /// See [`eip4844::Context::verify_blob_kzg_proof`].
    pub fn verify_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: Bytes48Ref,
        proof: Bytes48Ref,
    ) -> bool {
        self.eip4844_ctx.verify_blob_kzg_proof(blob, *commitment, *proof)
    }

    /// See [`eip4844::Context::verify_blob_kzg_proof_batch`].
    pub fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[BlobRef],
        commitments: &[Bytes48Ref],
        proofs: &[Bytes48Ref],
    ) -> bool {
        let commitments: Vec<_> = commitments.iter().map(|commitment| **commitment).collect();
        let proofs: Vec<_> = proofs.iter().map(|proof| **proof).collect();
        self.eip4844_ctx.verify_blob_kzg_proof_batch(blobs, &commitments, &proofs)
    }
}
