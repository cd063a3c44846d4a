use crate::constants::{BYTES_PER_CELL, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT};

/// `BlobRef` is a reference to an opaque blob.
///
/// The number of field elements in a blob is fixed by the trusted setup,
/// so the length is checked when the blob is deserialized rather than in the type.
/// This library never returns a blob, which is why there is no owned `Blob` type.
pub type BlobRef<'a> = &'a [u8];

/// `Bytes48Ref` is a reference to an untrusted 48 byte encoding of either
/// a purported `KZGProof` or a purported `KZGCommitment`.
pub type Bytes48Ref<'a> = &'a [u8; 48];

/// The evaluations of the extended blob on one coset, serialized.
///
/// Cells are heap allocated.
pub type Cell = Box<[u8; BYTES_PER_CELL]>;

/// `CellRef` is a reference to a serialized cell.
pub type CellRef<'a> = &'a [u8; BYTES_PER_CELL];

/// Position of a cell within the extended blob, in `[0, CELLS_PER_EXT_BLOB)`.
pub type CellIndex = u64;

/// A 48 byte opening proof. The same type is used for 4844 point openings
/// and for 7594 coset openings.
pub type KZGProof = [u8; BYTES_PER_COMMITMENT];

/// A 48 byte commitment to a polynomial.
pub type KZGCommitment = [u8; BYTES_PER_COMMITMENT];

/// A 32 byte big-endian field element.
pub type SerializedScalar = [u8; BYTES_PER_FIELD_ELEMENT];
