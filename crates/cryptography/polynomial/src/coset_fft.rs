use bls12_381::{ff::Field, Scalar};

/// A coset `g·H` of an FFT domain `H`, described by its shift `g` and the inverse of `g`.
///
/// Evaluating over a coset lets us divide by a polynomial that vanishes somewhere on `H`.
#[derive(Debug, Clone)]
pub struct CosetFFT {
    pub generator: Scalar,
    pub generator_inv: Scalar,
}

impl CosetFFT {
    pub fn new(generator: Scalar) -> Self {
        Self {
            generator,
            generator_inv: generator.invert().expect("coset shift must be non-zero"),
        }
    }
}
