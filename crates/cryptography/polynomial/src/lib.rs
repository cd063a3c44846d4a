pub mod barycentric;
mod bit_reversal;
mod coset_fft;
pub mod domain;
mod fft;
pub mod poly_coeff;

pub use bit_reversal::{reverse_bit_order, reverse_bits};
pub use coset_fft::CosetFFT;
