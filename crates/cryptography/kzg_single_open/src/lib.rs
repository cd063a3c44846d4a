//! KZG commitments and single-point opening proofs for polynomials given by
//! their evaluations over the roots of unity in bit-reversed order.

mod errors;
pub mod fiat_shamir;
pub mod prover;
pub mod verifier;

pub use errors::VerifierError;
