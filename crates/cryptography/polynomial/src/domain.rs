use bls12_381::{
    ff::{Field, PrimeField},
    group::Group,
    G1Projective, Scalar,
};

use crate::{
    coset_fft::CosetFFT,
    fft::{fft_inplace, precompute_twiddles},
    poly_coeff::PolyCoeff,
};

/// The multiplicative subgroup of `n`-th roots of unity, together with the
/// precomputed tables needed to move between coefficient form and evaluation
/// form over it.
#[derive(Debug, Clone)]
pub struct Domain {
    /// `[1, ω, ω^2, ..., ω^{n-1}]`
    pub roots: Vec<Scalar>,
    /// `n` as a field element
    pub domain_size: Scalar,
    pub domain_size_inv: Scalar,
    /// `ω`, an element of order `n`
    pub generator: Scalar,
    pub generator_inv: Scalar,
    twiddles: Vec<Scalar>,
    twiddles_inv: Vec<Scalar>,
}

impl Domain {
    /// Creates the domain of size `size` rounded up to the next power of two.
    pub fn new(size: usize) -> Self {
        let size = size.max(1).next_power_of_two();

        let generator = Self::compute_generator_for_size(size);
        let generator_inv = generator.invert().expect("roots of unity are non-zero");

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size
            .invert()
            .expect("domain size is smaller than the field characteristic");

        let roots: Vec<_> = std::iter::successors(Some(Scalar::ONE), |root| Some(root * generator))
            .take(size)
            .collect();

        Self {
            roots,
            domain_size,
            domain_size_inv,
            generator,
            generator_inv,
            twiddles: precompute_twiddles(generator, size),
            twiddles_inv: precompute_twiddles(generator_inv, size),
        }
    }

    /// Returns an element of multiplicative order exactly `size`.
    fn compute_generator_for_size(size: usize) -> Scalar {
        let log_size = size.trailing_zeros();
        assert!(
            log_size <= Scalar::S,
            "the scalar field only has roots of unity up to order 2^{}",
            Scalar::S
        );

        // ROOT_OF_UNITY has order 2^S
        Scalar::ROOT_OF_UNITY.pow_vartime([1u64 << (Scalar::S - log_size)])
    }

    /// Number of points in the domain. Always a power of two.
    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// Evaluates `polynomial` at every root of the domain.
    ///
    /// Panics if the polynomial has more coefficients than the domain has points.
    pub fn fft_scalars(&self, mut polynomial: PolyCoeff) -> Vec<Scalar> {
        assert!(polynomial.len() <= self.size());
        polynomial.resize(self.size(), Scalar::ZERO);

        fft_inplace(&self.twiddles, &mut polynomial);

        polynomial.0
    }

    /// Interpolates the polynomial that takes the values `evaluations` on the domain.
    pub fn ifft_scalars(&self, mut evaluations: Vec<Scalar>) -> PolyCoeff {
        assert!(evaluations.len() <= self.size());
        evaluations.resize(self.size(), Scalar::ZERO);

        fft_inplace(&self.twiddles_inv, &mut evaluations);
        for value in &mut evaluations {
            *value *= self.domain_size_inv;
        }

        PolyCoeff(evaluations)
    }

    /// Evaluates `polynomial` over the coset `g·H`, where `g` is the coset generator.
    pub fn coset_fft_scalars(&self, polynomial: PolyCoeff, coset: &CosetFFT) -> Vec<Scalar> {
        self.fft_scalars(polynomial.shift(coset.generator))
    }

    /// Interpolates over the coset `g·H`. Inverse of [`Self::coset_fft_scalars`].
    pub fn coset_ifft_scalars(&self, evaluations: Vec<Scalar>, coset: &CosetFFT) -> PolyCoeff {
        self.ifft_scalars(evaluations).shift(coset.generator_inv)
    }

    /// FFT over G1, where the inner products are multi-scalar multiplications with
    /// powers of the roots.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(n = self.size())))]
    pub fn fft_g1(&self, mut points: Vec<G1Projective>) -> Vec<G1Projective> {
        assert!(points.len() <= self.size());
        points.resize(self.size(), G1Projective::identity());

        fft_inplace(&self.twiddles, &mut points);

        points
    }

    pub fn ifft_g1(&self, points: Vec<G1Projective>) -> Vec<G1Projective> {
        self.ifft_g1_take_n(points, None)
    }

    /// Inverse FFT over G1 that only returns the first `n` outputs.
    ///
    /// The final scaling by `1/size` is the expensive part, so it is skipped for
    /// the discarded outputs. `None` returns all of them.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(n = self.size())))]
    pub fn ifft_g1_take_n(
        &self,
        mut points: Vec<G1Projective>,
        n: Option<usize>,
    ) -> Vec<G1Projective> {
        assert!(points.len() <= self.size());
        points.resize(self.size(), G1Projective::identity());

        fft_inplace(&self.twiddles_inv, &mut points);

        let take = n.unwrap_or(points.len());
        assert!(take <= points.len());
        points.truncate(take);
        for point in &mut points {
            *point *= self.domain_size_inv;
        }

        points
    }
}
