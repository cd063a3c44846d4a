#[cfg(all(feature = "singlethreaded", feature = "multithreaded"))]
compile_error!("`singlethreaded` and `multithreaded` cannot be enabled simultaneously");

mod errors;
mod fiat_shamir;
mod prover;
mod verifier;

/// Re-exported types
pub use errors::{Error, SerializationError, VerifierError};
pub use fiat_shamir::FIAT_SHAMIR_PROTOCOL_DOMAIN;
pub use serialization::{constants, types::*};
pub use trusted_setup::{SetupError, TrustedSetup};

#[rustfmt::skip]
// Note: adding rustfmt::skip so that `cargo fmt` does not mix the
// public re-exported types with the following private imports.
use bls12_381::{traits::PrimeCurveAffine, G1Point};
use kzg_single_open::{
    prover::{CommitKey, Prover},
    verifier::{VerificationKey, Verifier},
};

/// The point a polynomial is opened at, as a 32 byte big-endian scalar.
pub type KZGOpeningPoint = SerializedScalar;

/// The value of a polynomial at the opening point, as a 32 byte big-endian scalar.
pub type KZGOpeningEvaluation = SerializedScalar;

/// Commits to, opens and verifies blobs.
///
/// The blob size is the number of Lagrange points in the trusted setup.
#[derive(Debug)]
pub struct Context {
    prover: Prover,
    verifier: Verifier,
}

impl Context {
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        let commit_key = CommitKey::new(trusted_setup.g1_lagrange_brp().to_vec());
        let g2_monomial = trusted_setup.g2_monomial();
        let verification_key =
            VerificationKey::new(G1Point::generator(), g2_monomial[0], g2_monomial[1]);

        Self {
            verifier: Verifier::new(trusted_setup.poly_num(), verification_key),
            prover: Prover::new(commit_key),
        }
    }

    /// The number of field elements in a blob.
    pub fn field_elements_per_blob(&self) -> usize {
        self.prover.domain_size()
    }
}

/// Turns the outcome of a verification into a boolean, logging why it failed.
fn verification_passed(result: Result<(), Error>) -> bool {
    match result {
        Ok(()) => true,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = ?_err, "verification failed");
            false
        }
    }
}
