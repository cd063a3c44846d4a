use erasure_codes::RSError;
use serialization::SerializationError;
use trusted_setup::{MissingSetupMaterial, SetupError};

use crate::CellIndex;

/// Errors that can occur during proving, verification, recovery or serialization.
#[derive(Debug)]
pub enum Error {
    /// Error that occurred during verification.
    Verifier(VerifierError),
    /// Error that occurred during data recovery.
    Recovery(RecoveryError),
    /// Error that occurred while serializing or deserializing data.
    Serialization(SerializationError),
    /// Error that occurred in the EIP-4844 methods.
    EIP4844(eip4844::Error),
    /// The trusted setup cannot serve the requested operation.
    Setup(SetupError),
}

impl Error {
    /// Returns true if the inputs were well formed but a proof failed verification.
    pub fn is_proof_invalid(&self) -> bool {
        match self {
            Self::Verifier(VerifierError::FK20(err)) => {
                *err == kzg_multi_open::VerifierError::InvalidProof
            }
            Self::EIP4844(err) => err.is_proof_invalid(),
            _ => false,
        }
    }
}

impl From<VerifierError> for Error {
    fn from(value: VerifierError) -> Self {
        Self::Verifier(value)
    }
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl From<RecoveryError> for Error {
    fn from(value: RecoveryError) -> Self {
        Self::Recovery(value)
    }
}

impl From<RSError> for Error {
    fn from(value: RSError) -> Self {
        Self::Recovery(RecoveryError::ReedSolomon(value))
    }
}

impl From<eip4844::Error> for Error {
    fn from(value: eip4844::Error) -> Self {
        Self::EIP4844(value)
    }
}

impl From<MissingSetupMaterial> for Error {
    fn from(value: MissingSetupMaterial) -> Self {
        Self::Setup(SetupError::MissingSetupMaterial(value))
    }
}

/// Error type returned when data reconstruction via erasure coding fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    NotEnoughCellsToReconstruct {
        num_cells_received: usize,
        min_cells_needed: usize,
    },
    NumCellIndicesNotEqualToNumCells {
        num_cell_indices: usize,
        num_cells: usize,
    },
    TooManyCellsReceived {
        num_cells_received: usize,
        max_cells_needed: usize,
    },
    CellIndexOutOfRange {
        cell_index: CellIndex,
        max_number_of_cells: u64,
    },
    /// The same cell index was supplied more than once.
    DuplicateCellIndex { cell_index: CellIndex },
    /// The cells are not consistent with any blob.
    ReedSolomon(RSError),
}

impl From<RSError> for RecoveryError {
    fn from(value: RSError) -> Self {
        Self::ReedSolomon(value)
    }
}

/// Errors from verifying cell proofs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    CellIndexOutOfRange {
        cell_index: CellIndex,
        max_number_of_cells: u64,
    },
    BatchVerificationInputsMustHaveSameLength {
        commitments_len: usize,
        cell_indices_len: usize,
        cells_len: usize,
        proofs_len: usize,
    },
    /// Failure in the multi-opening verifier, including a failed pairing check.
    FK20(kzg_multi_open::VerifierError),
}

impl From<kzg_multi_open::VerifierError> for VerifierError {
    fn from(value: kzg_multi_open::VerifierError) -> Self {
        Self::FK20(value)
    }
}
