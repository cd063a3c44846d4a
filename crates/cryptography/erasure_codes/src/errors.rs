/// Errors from Reed-Solomon encoding or erasure recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RSError {
    /// The message polynomial does not fit in `poly_len` coefficients.
    PolynomialHasTooManyCoefficients {
        num_coefficients: usize,
        max_num_coefficients: usize,
    },
    /// The recovered polynomial has non-zero coefficients past `poly_len`,
    /// meaning the received codeword was not a valid encoding.
    PolynomialHasInvalidLength {
        num_coefficients: usize,
        expected_num_coefficients: usize,
    },
    /// More block positions are missing than the code can correct.
    TooManyBlockErasures {
        num_block_erasures: usize,
        max_num_block_erasures_accepted: usize,
    },
    /// A block erasure index is not smaller than the block size.
    InvalidBlockIndex {
        block_index: usize,
        block_size: usize,
    },
    /// The vanishing polynomial has a root on the recovery coset.
    DivisionByZero { index: usize },
}
