pub use kzg_single_open::VerifierError;
pub use serialization::SerializationError;

/// Top-level error type for EIP-4844 operations.
#[derive(Debug)]
pub enum Error {
    /// Error encountered during verification of a proof.
    Verifier(VerifierError),
    /// Error encountered while (de)serializing blobs, scalars, or group elements.
    Serialization(SerializationError),
    BatchVerificationInputsMustHaveSameLength {
        blobs_len: usize,
        commitments_len: usize,
        proofs_len: usize,
    },
}

impl Error {
    /// Returns true if the inputs were well formed but the proof did not verify.
    pub const fn is_proof_invalid(&self) -> bool {
        matches!(self, Self::Verifier(VerifierError::InvalidProof))
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
