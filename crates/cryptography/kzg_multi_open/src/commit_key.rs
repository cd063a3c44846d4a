use bls12_381::{lincomb::g1_lincomb, G1Point, G1Projective, Scalar};

/// Powers of the secret in G1, `[G, τG, τ^2 G, ...]`, used to commit to
/// polynomials in monomial form.
#[derive(Debug, Clone)]
pub struct CommitKey {
    /// The number of points bounds the number of coefficients a committed
    /// polynomial may have.
    pub g1s: Vec<G1Point>,
}

impl CommitKey {
    /// # Panics
    ///
    /// Panics if `g1s` is empty.
    pub fn new(g1s: Vec<G1Point>) -> Self {
        assert!(!g1s.is_empty(), "a commit key needs at least one point");
        Self { g1s }
    }

    /// Commits to `poly_coeff` using the first `poly_coeff.len()` points.
    ///
    /// Panics if the polynomial has more coefficients than the key has points.
    pub fn commit_g1(&self, poly_coeff: &[Scalar]) -> G1Projective {
        g1_lincomb(&self.g1s[..poly_coeff.len()], poly_coeff)
            .expect("points and coefficients were sliced to the same length")
    }
}
