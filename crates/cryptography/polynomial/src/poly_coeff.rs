use std::ops::{Deref, DerefMut};

use bls12_381::{ff::Field, Scalar};

/// A polynomial in coefficient form, lowest degree first:
/// `a_0 + a_1·X + ... + a_{n-1}·X^{n-1}`.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PolyCoeff(pub Vec<Scalar>);

impl PolyCoeff {
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = longer.clone();
        for (r, s) in result.iter_mut().zip(shorter.iter()) {
            *r += s;
        }
        result.trim_trailing_zeros();
        result
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.iter().map(|c| -c).collect())
    }

    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Evaluates the polynomial at `x` with Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &Scalar) -> Scalar {
        self.iter()
            .rev()
            .fold(Scalar::ZERO, |acc, coeff| acc * x + coeff)
    }

    /// Schoolbook multiplication. Only used on the small polynomials built during
    /// recovery, everything large goes through an FFT.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }
        let mut result = vec![Scalar::ZERO; self.len() + other.len() - 1];
        for (i, a) in self.iter().enumerate() {
            for (j, b) in other.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        let mut result = Self(result);
        result.trim_trailing_zeros();
        result
    }

    /// Returns the coefficients of `P(c·X)`, ie `a_i·c^i`.
    ///
    /// Evaluating the shifted polynomial over a domain `H` is the same as evaluating
    /// the original over the coset `c·H`.
    #[must_use]
    pub fn shift(mut self, c: Scalar) -> Self {
        let mut power = Scalar::ONE;
        for coeff in self.iter_mut() {
            *coeff *= power;
            power *= c;
        }
        self
    }

    fn trim_trailing_zeros(&mut self) {
        while self.last().is_some_and(|c| bool::from(c.is_zero())) {
            self.pop();
        }
    }
}

impl Deref for PolyCoeff {
    type Target = Vec<Scalar>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PolyCoeff {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Scalar>> for PolyCoeff {
    fn from(value: Vec<Scalar>) -> Self {
        Self(value)
    }
}

/// The monic polynomial whose roots are exactly `roots`:
/// `(X - r_0)(X - r_1)...(X - r_{k-1})`.
pub fn vanishing_poly(roots: &[Scalar]) -> PolyCoeff {
    // Multiplying by (X - r) in place: new[i] = old[i-1] - r·old[i]
    let mut coeffs = Vec::with_capacity(roots.len() + 1);
    coeffs.push(Scalar::ONE);
    for root in roots {
        coeffs.push(Scalar::ZERO);
        for i in (1..coeffs.len()).rev() {
            coeffs[i] = coeffs[i - 1] - coeffs[i] * root;
        }
        coeffs[0] = -coeffs[0] * root;
    }
    PolyCoeff(coeffs)
}
