// Shared by the integration tests of this crate and of the eip4844 crate.
#![allow(dead_code)]

use std::sync::{Once, OnceLock};

use bls12_381::{
    batch_inversion::batch_inverse, g1_batch_normalize, traits::*, G1Projective, G2Point,
    G2Projective, Scalar,
};
use polynomial::domain::Domain;
use rand::{rngs::StdRng, SeedableRng};
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use trusted_setup::TrustedSetup;

pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * 32;

const NUM_G2_POINTS: usize = 65;

/// The secret of the insecure setup. Anyone knowing it can forge proofs.
pub fn insecure_secret() -> Scalar {
    Scalar::from(0x5eed_1234_u64)
}

/// A full size setup, built once per test binary.
pub fn insecure_trusted_setup() -> &'static TrustedSetup {
    static SETUP: OnceLock<TrustedSetup> = OnceLock::new();
    SETUP.get_or_init(|| build_insecure_setup(FIELD_ELEMENTS_PER_BLOB))
}

/// Builds a setup of `size` Lagrange points with monomial G1 points and 65 G2 points.
pub fn build_insecure_setup(size: usize) -> TrustedSetup {
    let secret = insecure_secret();
    let powers: Vec<_> = std::iter::successors(Some(Scalar::ONE), |power| Some(power * secret))
        .take(size.max(NUM_G2_POINTS))
        .collect();

    let g1_monomial: Vec<_> = powers[..size]
        .iter()
        .map(|power| G1Projective::generator() * power)
        .collect();

    // L_i(s) = (s^n - 1) / n * ω^i / (s - ω^i)
    let domain = Domain::new(size);
    let mut denominators: Vec<_> = domain.roots.iter().map(|root| secret - root).collect();
    batch_inverse(&mut denominators);
    let scale = (secret.pow_vartime([size as u64]) - Scalar::ONE) * domain.domain_size_inv;
    let g1_lagrange: Vec<_> = domain
        .roots
        .iter()
        .zip(&denominators)
        .map(|(root, inverse)| G1Projective::generator() * (scale * root * inverse))
        .collect();

    let g2_monomial = powers[..NUM_G2_POINTS]
        .iter()
        .map(|power| G2Point::from(G2Projective::generator() * power))
        .collect();

    TrustedSetup::from_points(
        g1_batch_normalize(&g1_lagrange),
        g2_monomial,
        Some(g1_batch_normalize(&g1_monomial)),
        None,
    )
    .expect("insecure setup is well formed")
}

/// A blob of `FIELD_ELEMENTS_PER_BLOB` random field elements.
pub fn random_blob(seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..FIELD_ELEMENTS_PER_BLOB)
        .flat_map(|_| Scalar::random(&mut rng).to_bytes_be())
        .collect()
}

/// Logs to stderr, filtered by `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();
        let _ = Registry::default()
            .with(env_filter)
            .with(ForestLayer::default())
            .try_init();
    });
}
