use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod batch_inversion;
pub mod lincomb;

// Re-export ff and group, so other crates do not need to import and version them independently.
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 group.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 group.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 group.
pub type G2Projective = blstrs::G2Projective;

/// A G2 point with its Miller loop lines precomputed.
pub type G2Prepared = blstrs::G2Prepared;

/// Element of the BLS12-381 scalar field.
pub type Scalar = blstrs::Scalar;

/// Returns true if the product of the pairings of the given pairs is the identity in GT.
///
/// Pairs whose G1 element is the identity contribute nothing to the product and
/// are removed before the Miller loop.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    let pairs: Vec<_> = pairs
        .iter()
        .filter(|(g1, _)| !bool::from(g1.is_identity()))
        .copied()
        .collect();

    blstrs::Bls12::multi_miller_loop(&pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Checks `e(-a1, a2) * e(b1, b2) == 1`, ie that `e(a1, a2) == e(b1, b2)`.
///
/// Identity points on either side of a pair make that pair trivial, so it is skipped.
pub fn pairing_verify(a1: &G1Point, a2: &G2Point, b1: &G1Point, b2: &G2Point) -> bool {
    let neg_a1 = -*a1;
    let mut pairs = Vec::with_capacity(2);
    for (g1, g2) in [(&neg_a1, a2), (b1, b2)] {
        if bool::from(g1.is_identity()) || bool::from(g2.is_identity()) {
            continue;
        }
        pairs.push((*g1, G2Prepared::from(*g2)));
    }

    let pairs: Vec<_> = pairs.iter().map(|(g1, g2)| (g1, g2)).collect();
    multi_pairings(&pairs)
}

/// Converts projective points to affine using a single field inversion.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    let mut affine_points = vec![G1Point::identity(); projective_points.len()];
    G1Projective::batch_normalize(projective_points, &mut affine_points);
    affine_points
}

/// Interprets `bytes` as a big-endian integer and reduces it modulo the scalar field order.
///
/// The reduction introduces a negligible bias, which is acceptable for Fiat-Shamir challenges.
pub fn reduce_bytes_to_scalar_bias(bytes: [u8; 32]) -> Scalar {
    let mut out = blst::blst_fr::default();

    unsafe {
        let mut s = blst::blst_scalar::default();
        blst::blst_scalar_from_bendian(&mut s, bytes.as_ptr());
        blst::blst_fr_from_scalar(&mut out, std::ptr::addr_of!(s));
    }

    Scalar::from(out)
}
