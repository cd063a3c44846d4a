/// Errors from decoding untrusted bytes or hex handed to the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// The bytes do not encode an integer below the field modulus.
    CouldNotDeserializeScalar { bytes: Vec<u8> },
    /// The bytes are not a valid compressed point of the G1 subgroup.
    CouldNotDeserializeG1Point { bytes: Vec<u8> },
    ScalarHasInvalidLength { bytes: Vec<u8>, length: usize },
    BlobHasInvalidLength { length: usize, expected: usize },
    CellHasInvalidLength { length: usize, expected: usize },
    G1PointHasInvalidLength { bytes: Vec<u8>, length: usize },
    /// The string is not `0x`-prefixed hex.
    InvalidHex { hex: String },
}
