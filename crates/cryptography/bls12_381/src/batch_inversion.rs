use ff::Field;

/// Returned by [`batch_inverse_checked`] when an element has no inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero {
    /// Position of the first zero element in the input.
    pub index: usize,
}

/// Replaces every element of `v` with its inverse using Montgomery's trick.
///
/// Panics if any element is zero. Use [`batch_inverse_checked`] when the input
/// is not known to be zero free.
pub fn batch_inverse<F: Field>(v: &mut [F]) {
    if let Err(DivisionByZero { index }) = batch_inverse_checked(v) {
        panic!("cannot invert the zero element at index {index}");
    }
}

/// Replaces every element of `v` with its inverse using Montgomery's trick.
///
/// If any element is zero, `v` is left untouched and the position of the first
/// zero is returned.
pub fn batch_inverse_checked<F: Field>(v: &mut [F]) -> Result<(), DivisionByZero> {
    if let Some(index) = v.iter().position(|f| bool::from(f.is_zero())) {
        return Err(DivisionByZero { index });
    }
    if v.is_empty() {
        return Ok(());
    }

    // prefix[i] = v[0] * ... * v[i]
    let mut prefix = Vec::with_capacity(v.len());
    let mut acc = F::ONE;
    for f in v.iter() {
        acc *= f;
        prefix.push(acc);
    }

    let mut acc_inv = acc
        .invert()
        .expect("product of non-zero field elements is non-zero");

    for i in (1..v.len()).rev() {
        let inverse = acc_inv * prefix[i - 1];
        acc_inv *= v[i];
        v[i] = inverse;
    }
    v[0] = acc_inv;

    Ok(())
}
