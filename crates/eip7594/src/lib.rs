#[cfg(all(feature = "singlethreaded", feature = "multithreaded"))]
compile_error!("`singlethreaded` and `multithreaded` cannot be enabled simultaneously");

mod eip4844_methods;
mod errors;
mod prover;
mod recovery;
mod verifier;

// Exported types
//
pub use eip4844::{KZGOpeningEvaluation, KZGOpeningPoint};
pub use errors::{Error, RecoveryError, VerifierError};
pub use serialization::{constants, hex, types::*, SerializationError};
/// TrustedSetup contains the points needed to make and verify proofs.
pub use trusted_setup::{MissingSetupMaterial, SetupError, TrustedSetup};

use prover::ProverContext;
use verifier::VerifierContext;

/// The prover and verifier for cells. They need more of the trusted setup
/// than blob proofs do.
#[derive(Debug)]
struct PeerDasContext {
    prover_ctx: ProverContext,
    verifier_ctx: VerifierContext,
}

/// DASContext commits to blobs, proves and verifies their openings, and
/// extends them into cells with proofs for PeerDAS (EIP-7594).
///
/// The EIP-4844 methods only need the Lagrange points and two G2 points of
/// the setup. The cell methods also need the monomial G1 points; without them
/// they return [`Error::Setup`].
///
/// The FK20 precomputation needed for cell proofs is expensive. It runs the
/// first time proofs are computed, once per context, unless the setup carries it.
#[derive(Debug)]
pub struct DASContext {
    eip4844_ctx: eip4844::Context,
    peerdas_ctx: Result<PeerDasContext, MissingSetupMaterial>,
}

impl DASContext {
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        let peerdas_ctx = trusted_setup
            .peerdas_material()
            .map(|material| PeerDasContext {
                prover_ctx: ProverContext::new(&material),
                verifier_ctx: VerifierContext::new(&material),
            });

        #[cfg(feature = "tracing")]
        if let Err(missing) = &peerdas_ctx {
            tracing::debug!(?missing, "cell methods are unavailable with this trusted setup");
        }

        Self {
            eip4844_ctx: eip4844::Context::new(trusted_setup),
            peerdas_ctx,
        }
    }

    fn peerdas(&self) -> Result<&PeerDasContext, Error> {
        self.peerdas_ctx.as_ref().map_err(|missing| Error::from(*missing))
    }

    /// Returns true if the trusted setup is sufficient for the cell methods.
    pub const fn supports_cells(&self) -> bool {
        self.peerdas_ctx.is_ok()
    }
}
