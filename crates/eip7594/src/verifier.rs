use std::{collections::HashMap, hash::Hash};

use kzg_multi_open::{verification_key::VerificationKey, Verifier};
use serialization::{deserialize_cells, deserialize_compressed_g1_points};
use trusted_setup::PeerDasMaterial;

use crate::{
    constants::{
        CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL,
        FIELD_ELEMENTS_PER_EXT_BLOB,
    },
    errors::{Error, VerifierError},
    Bytes48Ref, CellIndex, CellRef, DASContext,
};

/// Checks cell proofs.
#[derive(Debug)]
pub(crate) struct VerifierContext {
    kzg_multipoint_verifier: Verifier,
}

impl VerifierContext {
    pub(crate) fn new(material: &PeerDasMaterial) -> Self {
        // Interpolation polynomials have degree < FIELD_ELEMENTS_PER_CELL, so
        // only that many G1 points, and one more G2 point, are needed.
        let verification_key = VerificationKey::new(
            material.g1_monomial[..=FIELD_ELEMENTS_PER_CELL].to_vec(),
            material.g2_monomial.to_vec(),
            FIELD_ELEMENTS_PER_CELL,
            FIELD_ELEMENTS_PER_BLOB,
        );

        Self {
            kzg_multipoint_verifier: Verifier::new(
                verification_key,
                FIELD_ELEMENTS_PER_EXT_BLOB,
                CELLS_PER_EXT_BLOB,
            ),
        }
    }
}

/// Returns the unique items in order of first appearance, and for each input
/// item the position of its copy in that list.
fn deduplicate_with_indices<T: Eq + Hash + Clone>(input: Vec<T>) -> (Vec<T>, Vec<u64>) {
    let mut unique = Vec::new();
    let mut positions = HashMap::new();

    let indices = input
        .into_iter()
        .map(|item| {
            *positions.entry(item.clone()).or_insert_with(|| {
                unique.push(item);
                unique.len() - 1
            }) as u64
        })
        .collect();

    (unique, indices)
}

impl DASContext {
    /// Verifies that each cell is the opening of its commitment at the coset
    /// given by its index, with one pairing check for the whole batch.
    ///
    /// Returns `Ok(false)` if a proof does not verify or a commitment, proof or
    /// cell is not a valid encoding. Inputs of different lengths, an index
    /// outside the extended blob or a setup without PeerDAS material are
    /// errors. An empty batch is valid.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/fulu/polynomial-commitments-sampling.md#verify_cell_kzg_proof_batch
    pub fn verify_cell_kzg_proof_batch(
        &self,
        commitments: Vec<Bytes48Ref>,
        cell_indices: &[CellIndex],
        cells: Vec<CellRef>,
        proofs: Vec<Bytes48Ref>,
    ) -> Result<bool, Error> {
        match self.try_verify_cell_kzg_proof_batch(commitments, cell_indices, cells, proofs) {
            Ok(()) => Ok(true),
            Err(err) if err.is_proof_invalid() || matches!(err, Error::Serialization(_)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?err, "cell proof batch failed verification");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Like [`Self::verify_cell_kzg_proof_batch`], but every failure is an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(batch_size = cells.len())))]
    pub fn try_verify_cell_kzg_proof_batch(
        &self,
        commitments: Vec<Bytes48Ref>,
        cell_indices: &[CellIndex],
        cells: Vec<CellRef>,
        proofs: Vec<Bytes48Ref>,
    ) -> Result<(), Error> {
        let verifier = &self.peerdas()?.verifier_ctx.kzg_multipoint_verifier;

        // Validation
        //
        validation::verify_cell_kzg_proof_batch(&commitments, cell_indices, &cells, &proofs)?;

        if cells.is_empty() {
            return Ok(());
        }

        // Many cells usually share a few commitments, which are only
        // deserialized and hashed once.
        let (deduplicated_commitments, commitment_indices) = deduplicate_with_indices(commitments);

        // Deserialization
        //
        let row_commitments = deserialize_compressed_g1_points(&deduplicated_commitments)?;
        let proofs = deserialize_compressed_g1_points(&proofs)?;
        let coset_evals = deserialize_cells(&cells)?;

        // Computation
        //
        verifier
            .verify_multi_opening(
                &row_commitments,
                &commitment_indices,
                cell_indices,
                &coset_evals,
                &proofs,
            )
            .map_err(VerifierError::from)?;

        Ok(())
    }
}

mod validation {
    use crate::{
        constants::CELLS_PER_EXT_BLOB, errors::VerifierError, Bytes48Ref, CellIndex, CellRef,
    };

    pub(super) fn verify_cell_kzg_proof_batch(
        commitments: &[Bytes48Ref],
        cell_indices: &[CellIndex],
        cells: &[CellRef],
        proofs: &[Bytes48Ref],
    ) -> Result<(), VerifierError> {
        let same_length = (commitments.len() == cell_indices.len())
            & (commitments.len() == cells.len())
            & (commitments.len() == proofs.len());
        if !same_length {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                commitments_len: commitments.len(),
                cell_indices_len: cell_indices.len(),
                cells_len: cells.len(),
                proofs_len: proofs.len(),
            });
        }

        if let Some(&cell_index) = cell_indices
            .iter()
            .find(|&&index| index >= CELLS_PER_EXT_BLOB as u64)
        {
            return Err(VerifierError::CellIndexOutOfRange {
                cell_index,
                max_number_of_cells: CELLS_PER_EXT_BLOB as u64,
            });
        }

        Ok(())
    }
}
