/// Reverses the lowest `bits` bits of `n`.
///
/// `reverse_bits(0b001, 3) == 0b100`. With `bits == 0` the result is zero.
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    n.reverse_bits() >> (usize::BITS - bits)
}

/// Permutes `values` in place so that the element at index `i` moves to the index
/// obtained by reversing the bits of `i`.
///
/// The permutation is an involution. Panics if the length is not a power of two
/// (the empty slice is accepted and left alone).
pub fn reverse_bit_order<T>(values: &mut [T]) {
    let n = values.len();
    if n == 0 {
        return;
    }
    assert!(n.is_power_of_two(), "length {n} is not a power of two");

    let log_n = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_bits(i, log_n);
        if i < j {
            values.swap(i, j);
        }
    }
}
