use bls12_381::{
    lincomb::g1_lincomb, pairing_verify, traits::*, G1Point, G2Point, Scalar,
};
use itertools::{chain, izip, Itertools};
use polynomial::{barycentric::evaluate_lagrange_form, domain::Domain, reverse_bit_order};

use crate::VerifierError;

/// The part of the setup needed to check single-point openings.
#[derive(Debug, Clone)]
pub struct VerificationKey {
    pub gen_g1: G1Point,
    pub gen_g2: G2Point,
    /// `[τ]G₂`
    pub tau_g2: G2Point,
}

impl VerificationKey {
    pub const fn new(gen_g1: G1Point, gen_g2: G2Point, tau_g2: G2Point) -> Self {
        Self {
            gen_g1,
            gen_g2,
            tau_g2,
        }
    }
}

#[derive(Debug)]
pub struct Verifier {
    roots_brp: Vec<Scalar>,
    pub verification_key: VerificationKey,
}

impl Verifier {
    pub fn new(domain_size: usize, verification_key: VerificationKey) -> Self {
        let mut roots_brp = Domain::new(domain_size).roots;
        reverse_bit_order(&mut roots_brp);

        Self {
            roots_brp,
            verification_key,
        }
    }

    pub fn domain_size(&self) -> usize {
        self.roots_brp.len()
    }

    /// Evaluates the polynomial with the given bit-reversed evaluations at `z`.
    pub fn compute_evaluation(&self, evaluations: &[Scalar], z: Scalar) -> Scalar {
        evaluate_lagrange_form(&self.roots_brp, evaluations, z)
    }

    /// Checks `e(C - [y]G₁, G₂) == e(π, [τ - z]G₂)`, ie that `P(X) - y = Q(X)·(X - z)`.
    pub fn verify_kzg_proof(
        &self,
        commitment: G1Point,
        z: Scalar,
        y: Scalar,
        proof: G1Point,
    ) -> Result<(), VerifierError> {
        let vk = &self.verification_key;

        let commitment_minus_y = (commitment - vk.gen_g1 * y).to_affine();
        let tau_minus_z = (vk.tau_g2 - vk.gen_g2 * z).to_affine();

        if pairing_verify(&commitment_minus_y, &vk.gen_g2, &proof, &tau_minus_z) {
            Ok(())
        } else {
            Err(VerifierError::InvalidProof)
        }
    }

    /// Checks many openings with one pairing equation, using the powers of a random `r`.
    ///
    /// ```text
    /// e(Σ r^i·(C_i - [y_i]G₁ + z_i·π_i), G₂) == e(Σ r^i·π_i, [τ]G₂)
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_kzg_proof_batch(
        &self,
        commitments: &[G1Point],
        zs: &[Scalar],
        ys: &[Scalar],
        proofs: &[G1Point],
        r_powers: &[Scalar],
    ) -> Result<(), VerifierError> {
        let n = commitments.len();
        if zs.len() != n || ys.len() != n || proofs.len() != n {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                commitments_len: n,
                points_len: zs.len(),
                evaluations_len: ys.len(),
                proofs_len: proofs.len(),
            });
        }
        assert_eq!(r_powers.len(), n);

        let vk = &self.verification_key;

        let lhs_g1 = {
            let points = chain![commitments, proofs, [&vk.gen_g1]]
                .copied()
                .collect_vec();
            let y_lincomb: Scalar = izip!(r_powers, ys).map(|(r, y)| r * y).sum();
            let scalars = chain![
                r_powers.iter().copied(),
                izip!(r_powers, zs).map(|(r, z)| r * z),
                [-y_lincomb]
            ]
            .collect_vec();
            g1_lincomb(&points, &scalars)
                .expect("one scalar per point")
                .to_affine()
        };
        let rhs_g1 = g1_lincomb(proofs, r_powers)
            .expect("one scalar per proof")
            .to_affine();

        if pairing_verify(&lhs_g1, &vk.gen_g2, &rhs_g1, &vk.tau_g2) {
            Ok(())
        } else {
            Err(VerifierError::InvalidProof)
        }
    }
}
