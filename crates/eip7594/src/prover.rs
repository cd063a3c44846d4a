use bls12_381::G1Point;
use erasure_codes::ReedSolomon;
use kzg_multi_open::{commit_key::CommitKey, Prover, ProverInput};
use serialization::{deserialize_blob_to_scalars, serialize_cells, serialize_cells_and_proofs};
use trusted_setup::PeerDasMaterial;

use crate::{
    constants::{
        CELLS_PER_EXT_BLOB, EXTENSION_FACTOR, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL,
        FIELD_ELEMENTS_PER_EXT_BLOB,
    },
    errors::Error,
    recovery::recover_polynomial_coeff,
    BlobRef, Cell, CellIndex, CellRef, DASContext, KZGCommitment, KZGProof,
};

/// Computes cells and their proofs.
#[derive(Debug)]
pub(crate) struct ProverContext {
    kzg_multipoint_prover: Prover,
    rs: ReedSolomon,
}

impl ProverContext {
    pub(crate) fn new(material: &PeerDasMaterial) -> Self {
        let commit_key = CommitKey::new(material.g1_monomial.to_vec());

        // Each proof attests to the evaluations on one coset, ie one cell.
        let point_set_size = FIELD_ELEMENTS_PER_CELL;

        // Proofs are made for every point of the extended blob.
        let number_of_points_to_open = FIELD_ELEMENTS_PER_EXT_BLOB;

        let kzg_multipoint_prover = match material.fk20_columns {
            Some(columns) => Prover::with_precomputed_columns(
                commit_key,
                FIELD_ELEMENTS_PER_BLOB,
                point_set_size,
                number_of_points_to_open,
                columns.to_vec(),
            ),
            None => Prover::new(
                commit_key,
                FIELD_ELEMENTS_PER_BLOB,
                point_set_size,
                number_of_points_to_open,
            ),
        };

        let rs = ReedSolomon::new(
            FIELD_ELEMENTS_PER_BLOB,
            EXTENSION_FACTOR,
            CELLS_PER_EXT_BLOB,
        );

        Self {
            kzg_multipoint_prover,
            rs,
        }
    }
}

impl DASContext {
    /// Computes the KZG commitment to the polynomial represented by the blob.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#blob_to_kzg_commitment
    pub fn blob_to_kzg_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, Error> {
        Ok(self.eip4844_ctx.blob_to_kzg_commitment(blob)?)
    }

    /// Computes the cells and the KZG proofs for the given blob.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/fulu/polynomial-commitments-sampling.md#compute_cells_and_kzg_proofs
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_cells_and_kzg_proofs(
        &self,
        blob: BlobRef,
    ) -> Result<([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]), Error> {
        let prover = &self.peerdas()?.prover_ctx.kzg_multipoint_prover;

        // Deserialization
        //
        let scalars = deserialize_blob_to_scalars(blob, FIELD_ELEMENTS_PER_BLOB)?;

        // Computation
        //
        let (proofs, cells) = prover.compute_multi_opening_proofs(ProverInput::Data(scalars));

        Ok(serialize_cells_and_proofs(&cells, &proofs))
    }

    /// Computes the cells for the given blob, without proofs.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/fulu/polynomial-commitments-sampling.md#compute_cells
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_cells(&self, blob: BlobRef) -> Result<[Cell; CELLS_PER_EXT_BLOB], Error> {
        let prover = &self.peerdas()?.prover_ctx.kzg_multipoint_prover;

        let scalars = deserialize_blob_to_scalars(blob, FIELD_ELEMENTS_PER_BLOB)?;
        let extended_blob = prover.compute_coset_evaluations(ProverInput::Data(scalars));

        Ok(serialize_cells(&extended_blob))
    }

    /// Recovers all cells and computes all KZG proofs, given at least half of the cells.
    ///
    /// `cell_indices` may be in any order but must not repeat.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/dev/specs/fulu/polynomial-commitments-sampling.md#recover_cells_and_kzg_proofs
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn recover_cells_and_kzg_proofs(
        &self,
        cell_indices: Vec<CellIndex>,
        cells: Vec<CellRef>,
    ) -> Result<([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]), Error> {
        let prover_ctx = &self.peerdas()?.prover_ctx;

        // Recover polynomial
        //
        let poly_coeff = recover_polynomial_coeff(&prover_ctx.rs, cell_indices, cells)?;

        // Compute proofs and evaluation sets
        //
        let (proofs, coset_evaluations) = prover_ctx
            .kzg_multipoint_prover
            .compute_multi_opening_proofs(ProverInput::PolyCoeff(poly_coeff));

        Ok(serialize_cells_and_proofs(&coset_evaluations, &proofs))
    }

    /// Runs the FK20 precomputation now instead of on the first proof.
    pub fn precompute_fk20(&self) -> Result<(), Error> {
        self.peerdas()?.prover_ctx.kzg_multipoint_prover.precompute();
        Ok(())
    }

    /// The FK20 table in the layout of the `fk20` field of the trusted setup,
    /// so it can be stored and loaded instead of recomputed.
    pub fn fk20_table(&self) -> Result<Vec<G1Point>, Error> {
        let prover = &self.peerdas()?.prover_ctx.kzg_multipoint_prover;
        Ok(prover.precomputed_columns().concat())
    }
}
