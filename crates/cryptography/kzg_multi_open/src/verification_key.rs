use bls12_381::{lincomb::g1_lincomb, G1Point, G1Projective, G2Point, Scalar};

/// The part of the setup needed to check multi-point openings.
#[derive(Clone, Debug)]
pub struct VerificationKey {
    /// `[τ^i]_1` for `i` in `0..=coset_size`, used to commit to the
    /// interpolation polynomial of a coset.
    pub g1s: Vec<G1Point>,
    /// `[τ^i]_2` for `i` in `0..=coset_size`.
    pub g2s: Vec<G2Point>,
    /// Number of points a single proof attests to.
    pub coset_size: usize,
    /// Number of coefficients of the committed polynomials.
    pub num_coefficients_in_polynomial: usize,
}

impl VerificationKey {
    /// # Panics
    ///
    /// Panics if there are not `coset_size + 1` G2 points, since `[τ^coset_size]_2`
    /// is part of every pairing check, or fewer than `coset_size` G1 points.
    pub fn new(
        g1s: Vec<G1Point>,
        g2s: Vec<G2Point>,
        coset_size: usize,
        num_coefficients_in_polynomial: usize,
    ) -> Self {
        assert!(
            g2s.len() > coset_size,
            "need [τ^{coset_size}]_2, found only {} g2 points",
            g2s.len()
        );
        assert!(
            g1s.len() >= coset_size,
            "need {coset_size} g1 points to commit to interpolation polynomials"
        );

        Self {
            g1s,
            g2s,
            coset_size,
            num_coefficients_in_polynomial,
        }
    }

    /// Commits to a polynomial in monomial form with the G1 powers.
    pub fn commit_g1(&self, polynomial: &[Scalar]) -> G1Projective {
        g1_lincomb(&self.g1s[..polynomial.len()], polynomial)
            .expect("points and coefficients were sliced to the same length")
    }

    /// `[1]_2`
    pub fn g2_gen(&self) -> G2Point {
        self.g2s[0]
    }

    /// `[τ^coset_size]_2`
    pub fn tau_pow_coset_size_g2(&self) -> G2Point {
        self.g2s[self.coset_size]
    }
}
