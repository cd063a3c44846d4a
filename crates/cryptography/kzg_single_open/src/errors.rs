/// Errors from verifying single-point opening proofs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The pairing check failed.
    InvalidProof,
    BatchVerificationInputsMustHaveSameLength {
        commitments_len: usize,
        points_len: usize,
        evaluations_len: usize,
        proofs_len: usize,
    },
}
