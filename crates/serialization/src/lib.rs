//! Conversions between the byte encodings used at the public API boundary
//! and the field elements and curve points the engines work with.

pub mod constants;
mod errors;
pub mod hex;
pub mod types;

use bls12_381::{G1Point, Scalar};
use constants::{BYTES_PER_CELL, BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT, CELLS_PER_EXT_BLOB};
pub use errors::SerializationError;
use types::{Cell, KZGProof, SerializedScalar};

/// Deserializes a 32 byte big-endian field element.
///
/// Fails if the slice is not 32 bytes or the integer is not below the field modulus.
pub fn deserialize_bytes_to_scalar(scalar_bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let Ok(bytes32) = <&SerializedScalar>::try_from(scalar_bytes) else {
        return Err(SerializationError::ScalarHasInvalidLength {
            bytes: scalar_bytes.to_vec(),
            length: scalar_bytes.len(),
        });
    };

    // Convert the CtOption into Option
    let option_scalar: Option<Scalar> = Scalar::from_bytes_be(bytes32).into();
    option_scalar.ok_or_else(|| SerializationError::CouldNotDeserializeScalar {
        bytes: scalar_bytes.to_vec(),
    })
}

fn deserialize_bytes_to_scalars(bytes: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if bytes.len() % BYTES_PER_FIELD_ELEMENT != 0 {
        return Err(SerializationError::ScalarHasInvalidLength {
            bytes: bytes.to_vec(),
            length: bytes.len(),
        });
    }

    bytes
        .chunks_exact(BYTES_PER_FIELD_ELEMENT)
        .map(deserialize_bytes_to_scalar)
        .collect()
}

/// Deserializes a blob holding exactly `field_elements_per_blob` scalars.
pub fn deserialize_blob_to_scalars(
    blob_bytes: &[u8],
    field_elements_per_blob: usize,
) -> Result<Vec<Scalar>, SerializationError> {
    let expected = field_elements_per_blob * BYTES_PER_FIELD_ELEMENT;
    if blob_bytes.len() != expected {
        return Err(SerializationError::BlobHasInvalidLength {
            length: blob_bytes.len(),
            expected,
        });
    }
    deserialize_bytes_to_scalars(blob_bytes)
}

pub fn deserialize_cell_to_scalars(cell_bytes: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if cell_bytes.len() != BYTES_PER_CELL {
        return Err(SerializationError::CellHasInvalidLength {
            length: cell_bytes.len(),
            expected: BYTES_PER_CELL,
        });
    }
    deserialize_bytes_to_scalars(cell_bytes)
}

pub fn deserialize_cells(
    cells: &[&[u8; BYTES_PER_CELL]],
) -> Result<Vec<Vec<Scalar>>, SerializationError> {
    cells
        .iter()
        .map(|cell| deserialize_cell_to_scalars(cell.as_slice()))
        .collect()
}

/// Deserializes a compressed G1 point, checking that it lies in the prime order subgroup.
pub fn deserialize_compressed_g1(point_bytes: &[u8]) -> Result<G1Point, SerializationError> {
    let Ok(point_bytes) = <&[u8; BYTES_PER_G1_POINT]>::try_from(point_bytes) else {
        return Err(SerializationError::G1PointHasInvalidLength {
            bytes: point_bytes.to_vec(),
            length: point_bytes.len(),
        });
    };

    let opt_g1: Option<G1Point> = Option::from(G1Point::from_compressed(point_bytes));
    opt_g1.ok_or_else(|| SerializationError::CouldNotDeserializeG1Point {
        bytes: point_bytes.to_vec(),
    })
}

pub fn deserialize_compressed_g1_points(
    points: &[&[u8; BYTES_PER_G1_POINT]],
) -> Result<Vec<G1Point>, SerializationError> {
    points
        .iter()
        .map(|point| deserialize_compressed_g1(point.as_slice()))
        .collect()
}

pub fn serialize_g1_compressed(point: &G1Point) -> [u8; BYTES_PER_G1_POINT] {
    point.to_compressed()
}

/// Serializes the evaluations of one coset into a cell.
///
/// Panics if `scalars` does not hold exactly one cell's worth of field elements.
pub fn serialize_scalars_to_cell(scalars: &[Scalar]) -> Cell {
    assert_eq!(
        scalars.len() * BYTES_PER_FIELD_ELEMENT,
        BYTES_PER_CELL,
        "a cell is serialized from exactly {} scalars",
        BYTES_PER_CELL / BYTES_PER_FIELD_ELEMENT
    );

    let mut cell = Box::new([0u8; BYTES_PER_CELL]);
    for (chunk, scalar) in cell.chunks_exact_mut(BYTES_PER_FIELD_ELEMENT).zip(scalars) {
        chunk.copy_from_slice(&scalar.to_bytes_be());
    }
    cell
}

/// Serializes the coset evaluations of an extended blob into its cells.
pub fn serialize_cells<T: AsRef<[Scalar]>>(coset_evaluations: &[T]) -> [Cell; CELLS_PER_EXT_BLOB] {
    let cells: Vec<Cell> = coset_evaluations
        .iter()
        .map(|evaluations| serialize_scalars_to_cell(evaluations.as_ref()))
        .collect();

    cells
        .try_into()
        .unwrap_or_else(|_| panic!("expected {CELLS_PER_EXT_BLOB} cells"))
}

pub fn serialize_cells_and_proofs<T: AsRef<[Scalar]>>(
    coset_evaluations: &[T],
    proofs: &[G1Point],
) -> ([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]) {
    let cells = serialize_cells(coset_evaluations);

    let proofs: Vec<_> = proofs.iter().map(serialize_g1_compressed).collect();
    let proofs = proofs
        .try_into()
        .unwrap_or_else(|_| panic!("expected {CELLS_PER_EXT_BLOB} proofs"));

    (cells, proofs)
}

#[cfg(test)]
mod tests {
    use bls12_381::{traits::*, G1Projective};

    use super::*;
    use crate::constants::FIELD_ELEMENTS_PER_CELL;

    // The scalar field modulus, big-endian.
    const MODULUS: [u8; 32] = [
        0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8,
        0x05, 0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00,
        0x00, 0x01,
    ];

    #[test]
    fn scalar_must_be_below_modulus() {
        assert!(matches!(
            deserialize_bytes_to_scalar(&MODULUS),
            Err(SerializationError::CouldNotDeserializeScalar { .. })
        ));

        let mut below = MODULUS;
        below[31] = 0;
        let scalar = deserialize_bytes_to_scalar(&below).unwrap();
        assert_eq!(scalar, -Scalar::ONE);
    }

    #[test]
    fn scalar_length_is_checked() {
        assert!(matches!(
            deserialize_bytes_to_scalar(&[0u8; 31]),
            Err(SerializationError::ScalarHasInvalidLength { length: 31, .. })
        ));
    }

    #[test]
    fn blob_length_is_checked() {
        let blob = vec![0u8; 4 * BYTES_PER_FIELD_ELEMENT];
        assert_eq!(deserialize_blob_to_scalars(&blob, 4).unwrap().len(), 4);
        assert_eq!(
            deserialize_blob_to_scalars(&blob, 8),
            Err(SerializationError::BlobHasInvalidLength {
                length: 128,
                expected: 256
            })
        );
    }

    #[test]
    fn cell_round_trip() {
        let scalars: Vec<_> = (0..FIELD_ELEMENTS_PER_CELL as u64)
            .map(|i| -Scalar::from(i))
            .collect();
        let cell = serialize_scalars_to_cell(&scalars);
        assert_eq!(deserialize_cell_to_scalars(cell.as_slice()).unwrap(), scalars);
        assert_eq!(deserialize_cells(&[&*cell]).unwrap(), vec![scalars]);
    }

    #[test]
    fn g1_rejects_bad_encodings() {
        let generator = G1Point::generator();
        let bytes = serialize_g1_compressed(&generator);
        assert_eq!(deserialize_compressed_g1(&bytes).unwrap(), generator);

        assert!(matches!(
            deserialize_compressed_g1(&bytes[..47]),
            Err(SerializationError::G1PointHasInvalidLength { length: 47, .. })
        ));

        // Missing compression flag
        let mut uncompressed_flag = bytes;
        uncompressed_flag[0] &= 0x7f;
        assert!(matches!(
            deserialize_compressed_g1(&uncompressed_flag),
            Err(SerializationError::CouldNotDeserializeG1Point { .. })
        ));
    }

    #[test]
    fn identity_is_a_valid_commitment() {
        let mut identity = [0u8; 48];
        identity[0] = 0xc0;
        let point = deserialize_compressed_g1(&identity).unwrap();
        assert_eq!(point, G1Projective::identity().to_affine());
    }
}
