// Field elements here always refer to the scalar field.

/// The number of bytes needed to represent a field element.
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// The number of field elements in a blob.
///
/// See: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-4844.md
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// The number of bytes needed to represent a blob.
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// The number of bytes in a compressed G1 point.
pub const BYTES_PER_G1_POINT: usize = 48;

/// Commitments and proofs are compressed G1 points.
pub const BYTES_PER_COMMITMENT: usize = BYTES_PER_G1_POINT;

/// Reed-Solomon expansion factor applied to a blob before it is cut into cells.
pub const EXTENSION_FACTOR: usize = 2;

/// The number of evaluations in an extended blob.
pub const FIELD_ELEMENTS_PER_EXT_BLOB: usize = EXTENSION_FACTOR * FIELD_ELEMENTS_PER_BLOB;

/// The number of field elements in a cell.
///
/// See: https://github.com/ethereum/consensus-specs/blob/dev/specs/fulu/polynomial-commitments-sampling.md
pub const FIELD_ELEMENTS_PER_CELL: usize = 64;

/// The number of bytes needed to represent a cell.
pub const BYTES_PER_CELL: usize = FIELD_ELEMENTS_PER_CELL * BYTES_PER_FIELD_ELEMENT;

/// The number of cells a blob occupies before extension.
pub const CELLS_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB / FIELD_ELEMENTS_PER_CELL;

/// The number of cells in an extended blob.
pub const CELLS_PER_EXT_BLOB: usize = FIELD_ELEMENTS_PER_EXT_BLOB / FIELD_ELEMENTS_PER_CELL;
