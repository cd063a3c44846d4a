use erasure_codes::{BlockErasureIndices, ReedSolomon};
use kzg_multi_open::recover_evaluations_in_domain_order;
use polynomial::poly_coeff::PolyCoeff;
use serialization::deserialize_cells;

use crate::{
    constants::{CELLS_PER_EXT_BLOB, EXTENSION_FACTOR, FIELD_ELEMENTS_PER_EXT_BLOB},
    errors::{Error, RecoveryError},
    CellIndex, CellRef,
};

/// Recovers the blob polynomial, in monomial form, from at least half of its cells.
pub(crate) fn recover_polynomial_coeff(
    rs: &ReedSolomon,
    cell_indices: Vec<CellIndex>,
    cells: Vec<CellRef>,
) -> Result<PolyCoeff, Error> {
    // Validation
    //
    validate_recovery_inputs(&cell_indices, &cells)?;

    // Callers may pass cells in any order.
    let mut pairs: Vec<_> = cell_indices.into_iter().zip(cells).collect();
    pairs.sort_unstable_by_key(|&(index, _)| index);
    let (cell_indices, cells): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();

    // Deserialization
    //
    let coset_evaluations = deserialize_cells(&cells)?;
    let cell_indices: Vec<_> = cell_indices
        .into_iter()
        .map(|index| index as usize)
        .collect();

    // Computation
    //
    // Cells hold cosets in bit-reversed order. Reed-Solomon decoding works on
    // the evaluations in the order an FFT of the polynomial would produce them.
    let (present_indices, codeword_with_erasures) = recover_evaluations_in_domain_order(
        FIELD_ELEMENTS_PER_EXT_BLOB,
        cell_indices,
        coset_evaluations,
    )
    // Indices were validated and every cell deserialized to the same length.
    .expect("infallible: could not recover evaluations in domain order");

    let missing = find_missing_cell_indices(&present_indices);

    Ok(rs.recover_polynomial_coefficient(codeword_with_erasures, &BlockErasureIndices(missing))?)
}

fn find_missing_cell_indices(present_cell_indices: &[usize]) -> Vec<usize> {
    let mut present = [false; CELLS_PER_EXT_BLOB];
    for &index in present_cell_indices {
        present[index] = true;
    }

    (0..CELLS_PER_EXT_BLOB).filter(|&i| !present[i]).collect()
}

/// Checks, in this order: one index per cell, at most one cell per index,
/// every index in range, no index repeated, and at least half of the cells.
pub(crate) fn validate_recovery_inputs(
    cell_indices: &[CellIndex],
    cells: &[CellRef],
) -> Result<(), RecoveryError> {
    if cell_indices.len() != cells.len() {
        return Err(RecoveryError::NumCellIndicesNotEqualToNumCells {
            num_cell_indices: cell_indices.len(),
            num_cells: cells.len(),
        });
    }

    if cell_indices.len() > CELLS_PER_EXT_BLOB {
        return Err(RecoveryError::TooManyCellsReceived {
            num_cells_received: cell_indices.len(),
            max_cells_needed: CELLS_PER_EXT_BLOB,
        });
    }

    if let Some(&cell_index) = cell_indices
        .iter()
        .find(|&&index| index >= CELLS_PER_EXT_BLOB as u64)
    {
        return Err(RecoveryError::CellIndexOutOfRange {
            cell_index,
            max_number_of_cells: CELLS_PER_EXT_BLOB as u64,
        });
    }

    if let Some(cell_index) = find_duplicate_cell_index(cell_indices) {
        return Err(RecoveryError::DuplicateCellIndex { cell_index });
    }

    let min_cells_needed = CELLS_PER_EXT_BLOB / EXTENSION_FACTOR;
    if cell_indices.len() < min_cells_needed {
        return Err(RecoveryError::NotEnoughCellsToReconstruct {
            num_cells_received: cell_indices.len(),
            min_cells_needed,
        });
    }

    Ok(())
}

/// Returns the first index seen twice. Indices must already be in range.
fn find_duplicate_cell_index(cell_indices: &[CellIndex]) -> Option<CellIndex> {
    let mut seen = [false; CELLS_PER_EXT_BLOB];
    cell_indices
        .iter()
        .copied()
        .find(|&index| std::mem::replace(&mut seen[index as usize], true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BYTES_PER_CELL;

    static ZERO_CELL: [u8; BYTES_PER_CELL] = [0u8; BYTES_PER_CELL];

    fn inputs(indices: Vec<CellIndex>) -> (Vec<CellIndex>, Vec<CellRef<'static>>) {
        let cells = vec![&ZERO_CELL; indices.len()];
        (indices, cells)
    }

    #[test]
    fn duplicate_detection() {
        assert_eq!(find_duplicate_cell_index(&[]), None);
        assert_eq!(find_duplicate_cell_index(&[7]), None);
        assert_eq!(find_duplicate_cell_index(&[3, 2, 1]), None);
        assert_eq!(find_duplicate_cell_index(&[1, 1, 2, 3]), Some(1));
        assert_eq!(find_duplicate_cell_index(&[5, 9, 0, 9, 5]), Some(9));
        assert_eq!(find_duplicate_cell_index(&[0, 0, 0]), Some(0));
    }

    #[test]
    fn missing_indices_are_the_complement() {
        let present: Vec<usize> = (0..CELLS_PER_EXT_BLOB).step_by(2).collect();
        let missing = find_missing_cell_indices(&present);
        let expected: Vec<usize> = (1..CELLS_PER_EXT_BLOB).step_by(2).collect();
        assert_eq!(missing, expected);

        let all: Vec<usize> = (0..CELLS_PER_EXT_BLOB).collect();
        assert!(find_missing_cell_indices(&all).is_empty());
    }

    #[test]
    fn half_and_all_cells_are_accepted() {
        let (indices, cells) = inputs((0..64).collect());
        assert_eq!(validate_recovery_inputs(&indices, &cells), Ok(()));

        let (indices, cells) = inputs((0..128).collect());
        assert_eq!(validate_recovery_inputs(&indices, &cells), Ok(()));
    }

    #[test]
    fn length_mismatch_is_reported_first() {
        // Also out of range and unordered, but the length check comes first.
        let (mut indices, cells) = inputs(vec![500, 3, 2]);
        indices.pop();
        assert_eq!(
            validate_recovery_inputs(&indices, &cells),
            Err(RecoveryError::NumCellIndicesNotEqualToNumCells {
                num_cell_indices: 2,
                num_cells: 3,
            })
        );
    }

    #[test]
    fn out_of_range_index() {
        let (indices, cells) = inputs(vec![0, 128]);
        assert_eq!(
            validate_recovery_inputs(&indices, &cells),
            Err(RecoveryError::CellIndexOutOfRange {
                cell_index: 128,
                max_number_of_cells: 128,
            })
        );
    }

    #[test]
    fn duplicates_are_rejected_in_any_order() {
        let (indices, cells) = inputs(vec![0, 1, 2, 2]);
        assert_eq!(
            validate_recovery_inputs(&indices, &cells),
            Err(RecoveryError::DuplicateCellIndex { cell_index: 2 })
        );

        let mut indices: Vec<CellIndex> = (0..64).rev().collect();
        indices.push(40);
        let (indices, cells) = inputs(indices);
        assert_eq!(
            validate_recovery_inputs(&indices, &cells),
            Err(RecoveryError::DuplicateCellIndex { cell_index: 40 })
        );
    }

    #[test]
    fn unsorted_indices_are_accepted() {
        let mut unsorted: Vec<CellIndex> = (0..64).collect();
        unsorted.swap(10, 11);
        let (indices, cells) = inputs(unsorted);
        assert_eq!(validate_recovery_inputs(&indices, &cells), Ok(()));

        let (indices, cells) = inputs((0..128).rev().collect());
        assert_eq!(validate_recovery_inputs(&indices, &cells), Ok(()));
    }

    #[test]
    fn too_many_cells() {
        // 129 in-range indices must repeat one, but the count is reported first.
        let (indices, cells) = inputs((0..129).map(|i| i % 128).collect());
        assert_eq!(
            validate_recovery_inputs(&indices, &cells),
            Err(RecoveryError::TooManyCellsReceived {
                num_cells_received: 129,
                max_cells_needed: 128,
            })
        );
    }

    #[test]
    fn not_enough_cells() {
        for count in [0, 1, 63] {
            let (indices, cells) = inputs((0..count).collect());
            assert_eq!(
                validate_recovery_inputs(&indices, &cells),
                Err(RecoveryError::NotEnoughCellsToReconstruct {
                    num_cells_received: count as usize,
                    min_cells_needed: 64,
                })
            );
        }
    }
}
