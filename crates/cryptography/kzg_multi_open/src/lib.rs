//! Multi-point KZG openings over cosets of the roots of unity.
//!
//! Proofs for every coset are produced at once with the FK20 method, and
//! any set of (commitment, coset, evaluations, proof) openings can be checked
//! with a single pairing.

pub mod commit_key;
pub mod fk20;
pub mod verification_key;

pub use fk20::{
    recover_evaluations_in_domain_order, CommitmentIndex, CosetIndex, Prover, ProverInput,
    Verifier, VerifierError,
};

#[cfg(test)]
mod naive;

#[cfg(test)]
pub(crate) fn create_insecure_commit_verification_keys(
) -> (commit_key::CommitKey, verification_key::VerificationKey) {
    use bls12_381::{
        ff::Field, g1_batch_normalize, group::Group, G1Projective, G2Point, G2Projective, Scalar,
    };
    use commit_key::CommitKey;
    use verification_key::VerificationKey;

    // A single proof attests to 64 points of a polynomial with 4096 coefficients
    let coset_size = 64;
    let num_coefficients_in_polynomial = 4096;

    let secret = Scalar::from(0x5eed_1234_u64);

    let g1_points: Vec<_> = std::iter::successors(Some(Scalar::ONE), |power| Some(power * secret))
        .take(num_coefficients_in_polynomial)
        .map(|power| G1Projective::generator() * power)
        .collect();
    let g1_points = g1_batch_normalize(&g1_points);

    // The verifier commits to interpolation polynomials of degree < coset_size
    // and needs [tau^coset_size]_2
    let g2_points: Vec<_> = std::iter::successors(Some(Scalar::ONE), |power| Some(power * secret))
        .take(coset_size + 1)
        .map(|power| G2Point::from(G2Projective::generator() * power))
        .collect();

    let ck = CommitKey::new(g1_points.clone());
    let vk = VerificationKey::new(
        g1_points[..coset_size + 1].to_vec(),
        g2_points,
        coset_size,
        num_coefficients_in_polynomial,
    );

    (ck, vk)
}
