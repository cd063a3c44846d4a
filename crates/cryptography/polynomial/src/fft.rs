use std::ops::{Add, Mul, Neg, Sub};

use bls12_381::{ff::Field, group::Group, G1Projective, Scalar};
use maybe_rayon::prelude::*;

use crate::reverse_bit_order;

/// Values that can be transformed by an FFT whose twiddle factors are scalars.
///
/// Implemented for field elements and for G1 points, where "multiplication by a
/// twiddle" is scalar multiplication.
pub(crate) trait FFTElement:
    Sized
    + Send
    + Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Scalar, Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
}

impl FFTElement for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }
}

impl FFTElement for G1Projective {
    fn zero() -> Self {
        Self::identity()
    }
}

/// Returns `[1, ω, ω^2, ..., ω^{n/2 - 1}]`.
pub(crate) fn precompute_twiddles(omega: Scalar, n: usize) -> Vec<Scalar> {
    std::iter::successors(Some(Scalar::ONE), |w| Some(*w * omega))
        .take(n / 2)
        .collect()
}

/// Iterative radix-2 decimation-in-time FFT.
///
/// `twiddles` must come from [`precompute_twiddles`] for a generator of order
/// `values.len()`. Input and output are both in natural order.
pub(crate) fn fft_inplace<T: FFTElement>(twiddles: &[Scalar], values: &mut [T]) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    debug_assert_eq!(twiddles.len(), n / 2);

    reverse_bit_order(values);

    let mut half = 1;
    while half < n {
        // Stage with blocks of size 2 * half uses ω_{2·half} = ω^{n / (2·half)}
        let stride = n / (2 * half);
        values.maybe_par_chunks_mut(2 * half).for_each(|block| {
            let (lo, hi) = block.split_at_mut(half);
            for (j, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                butterfly(a, b, twiddles[j * stride]);
            }
        });
        half *= 2;
    }
}

#[inline]
fn butterfly<T: FFTElement>(a: &mut T, b: &mut T, twiddle: Scalar) {
    let t = if twiddle == Scalar::ONE {
        *b
    } else if twiddle == -Scalar::ONE {
        -*b
    } else if *b == T::zero() {
        // Skips a scalar multiplication, which matters for G1 and sparse inputs.
        T::zero()
    } else {
        *b * twiddle
    };
    *b = *a - t;
    *a = *a + t;
}
