/// Errors returned when checking multi-point opening proofs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The pairing check failed.
    InvalidProof,
    BatchVerificationInputsMustHaveSameLength {
        commitment_indices_len: usize,
        coset_indices_len: usize,
        coset_evaluations_len: usize,
        proofs_len: usize,
    },
    InvalidCosetIndex {
        coset_index: u64,
        num_cosets: usize,
    },
    InvalidCommitmentIndex {
        commitment_index: u64,
        num_commitments: usize,
    },
    /// A coset evaluation does not have exactly `coset_size` values.
    CosetEvaluationHasInvalidLength {
        coset_index: u64,
        length: usize,
        expected_length: usize,
    },
}
