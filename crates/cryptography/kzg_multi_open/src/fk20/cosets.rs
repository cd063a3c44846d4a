use bls12_381::{traits::*, Scalar};
use polynomial::{domain::Domain, reverse_bit_order, reverse_bits};

/// Returns the generators `g_k` of the `num_cosets` cosets `g_k·H` that
/// partition the domain of size `num_points`, where `H` is its subgroup of
/// size `num_points / num_cosets`.
///
/// `g_k = ω^k`, or `ω^{rev(k)}` when `bit_reversed` is set, which is the
/// order the prover emits its proofs and evaluations in.
pub fn coset_gens(num_points: usize, num_cosets: usize, bit_reversed: bool) -> Vec<Scalar> {
    assert!(
        num_cosets.is_power_of_two() && num_points % num_cosets == 0,
        "expected a power of two number of cosets dividing the domain"
    );
    let generator = Domain::new(num_points).generator;
    let log_num_cosets = num_cosets.trailing_zeros();

    (0..num_cosets)
        .map(|k| {
            let exponent = if bit_reversed {
                reverse_bits(k, log_num_cosets)
            } else {
                k
            };
            generator.pow_vartime([exponent as u64])
        })
        .collect()
}

/// Places coset evaluations, given in the prover's bit-reversed order, at their
/// positions in the evaluation domain.
///
/// The values of the coset with bit-reversed index `k` end up at positions
/// `rev(k) + i * num_cosets`. The returned indices are those `rev(k)`.
/// Positions of cosets that were not supplied are zero.
///
/// Returns `None` if no cosets are given, they differ in length, or an index is
/// out of range. Duplicate indices are the caller's responsibility.
pub fn recover_evaluations_in_domain_order(
    domain_size: usize,
    coset_indices: Vec<usize>,
    coset_evaluations: Vec<Vec<Scalar>>,
) -> Option<(Vec<usize>, Vec<Scalar>)> {
    if coset_indices.is_empty() || coset_indices.len() != coset_evaluations.len() {
        return None;
    }

    let coset_len = coset_evaluations[0].len();
    if coset_len == 0 || coset_evaluations.iter().any(|coset| coset.len() != coset_len) {
        return None;
    }

    let num_cosets = domain_size / coset_len;
    if coset_indices.iter().any(|&index| index >= num_cosets) {
        return None;
    }

    let mut elements = vec![Scalar::ZERO; domain_size];
    for (&coset_index, evaluations) in coset_indices.iter().zip(coset_evaluations) {
        let start = coset_index * coset_len;
        elements[start..start + coset_len].copy_from_slice(&evaluations);
    }

    reverse_bit_order(&mut elements);

    let log_num_cosets = num_cosets.trailing_zeros();
    let domain_order_indices = coset_indices
        .into_iter()
        .map(|index| reverse_bits(index, log_num_cosets))
        .collect();

    Some((domain_order_indices, elements))
}
