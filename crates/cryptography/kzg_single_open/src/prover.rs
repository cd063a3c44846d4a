use bls12_381::{
    batch_inversion::batch_inverse, ff::Field, lincomb::g1_lincomb, G1Point, G1Projective, Scalar,
};
use maybe_rayon::prelude::*;
use polynomial::{
    barycentric::{evaluate_with_inverse_denominators, position_in_domain},
    domain::Domain,
    reverse_bit_order,
};

/// The Lagrange basis `[L_i(τ)]G₁`, in bit-reversed order so that it lines up
/// with polynomials given by their bit-reversed evaluations.
#[derive(Debug, Clone)]
pub struct CommitKey {
    pub g1_lagrange_brp: Vec<G1Point>,
}

impl CommitKey {
    pub const fn new(g1_lagrange_brp: Vec<G1Point>) -> Self {
        Self { g1_lagrange_brp }
    }
}

#[derive(Debug)]
pub struct Prover {
    /// Roots of unity in bit-reversed order, matching the evaluation order.
    roots_brp: Vec<Scalar>,
    pub commit_key: CommitKey,
}

impl Prover {
    /// The domain size is the number of Lagrange basis points.
    pub fn new(commit_key: CommitKey) -> Self {
        let mut roots_brp = Domain::new(commit_key.g1_lagrange_brp.len()).roots;
        reverse_bit_order(&mut roots_brp);

        Self {
            roots_brp,
            commit_key,
        }
    }

    pub fn domain_size(&self) -> usize {
        self.roots_brp.len()
    }

    /// Commits to the polynomial with the given bit-reversed evaluations.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn commit(&self, evaluations: &[Scalar]) -> G1Projective {
        g1_lincomb(&self.commit_key.g1_lagrange_brp, evaluations)
            .expect("number of evaluations equals the size of the commit key")
    }

    /// Opens the polynomial at `z`, returning the proof and `y = P(z)`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_kzg_proof(&self, evaluations: &[Scalar], z: Scalar) -> (G1Point, Scalar) {
        let (y, quotient) = self.compute_evaluation_and_quotient(evaluations, z);
        (self.commit(&quotient).into(), y)
    }

    /// Returns `P(z)` and the evaluations of `Q(X) = (P(X) - P(z)) / (X - z)`,
    /// both over the bit-reversed domain.
    pub fn compute_evaluation_and_quotient(
        &self,
        evaluations: &[Scalar],
        z: Scalar,
    ) -> (Scalar, Vec<Scalar>) {
        assert_eq!(evaluations.len(), self.domain_size());

        match position_in_domain(&self.roots_brp, z) {
            Some(index) => self.evaluation_and_quotient_in_domain(evaluations, index),
            None => self.evaluation_and_quotient_out_of_domain(evaluations, z),
        }
    }

    /// `Q(ω_i) = (P(ω_i) - y) / (ω_i - z)`
    fn evaluation_and_quotient_out_of_domain(
        &self,
        evaluations: &[Scalar],
        z: Scalar,
    ) -> (Scalar, Vec<Scalar>) {
        // 1 / (z - ω_i), none of them zero since z is outside of the domain
        let mut inverse_denominators: Vec<_> =
            self.roots_brp.maybe_par_iter().map(|root| z - root).collect();
        batch_inverse(&mut inverse_denominators);

        let y = evaluate_with_inverse_denominators(
            &self.roots_brp,
            evaluations,
            z,
            &inverse_denominators,
        );

        let quotient = inverse_denominators
            .maybe_par_iter()
            .zip(evaluations.maybe_par_iter())
            .map(|(inv, evaluation)| (y - evaluation) * inv)
            .collect();

        (y, quotient)
    }

    /// `z` is the root at `index`. Every other entry uses the usual formula, the entry at
    /// `index` is the limit:
    ///
    /// ```text
    /// Q(ω_m) = Σ_{j≠m} (P(ω_j) - y) · ω_j / (ω_m · (ω_m - ω_j))
    ///        = -(1/ω_m) · Σ_{j≠m} Q(ω_j) · ω_j
    /// ```
    fn evaluation_and_quotient_in_domain(
        &self,
        evaluations: &[Scalar],
        index: usize,
    ) -> (Scalar, Vec<Scalar>) {
        let z = self.roots_brp[index];
        let y = evaluations[index];

        // The entry at `index` would be zero. It is replaced by one and its result
        // overwritten below.
        let mut inverse_denominators: Vec<_> = self
            .roots_brp
            .iter()
            .enumerate()
            .map(|(j, root)| if j == index { Scalar::ONE } else { z - root })
            .collect();
        batch_inverse(&mut inverse_denominators);

        let mut quotient: Vec<_> = inverse_denominators
            .iter()
            .zip(evaluations)
            .map(|(inv, evaluation)| (y - evaluation) * inv)
            .collect();
        quotient[index] = Scalar::ZERO;

        let weighted_sum: Scalar = quotient
            .iter()
            .zip(&self.roots_brp)
            .map(|(q, root)| *q * root)
            .sum();
        let z_inv = z.invert().expect("roots of unity are non-zero");
        quotient[index] = -weighted_sum * z_inv;

        (y, quotient)
    }
}
