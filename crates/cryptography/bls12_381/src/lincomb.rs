use crate::{traits::*, G1Point, G1Projective, Scalar};

/// Multi-scalar multiplication over G1.
///
/// Returns `None` if `points` and `scalars` differ in length.
///
/// Pairs where the point is the identity or the scalar is zero are dropped before
/// the MSM. This does not change the result, it only makes sparse inputs (such as
/// mostly empty blobs) cheap. It also keeps identity points away from blst, which
/// returns the identity for the whole sum when one of its inputs is the identity.
/// The filtering branches on the scalars, so this is not constant time.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points, scalars): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, scalar)| {
            !bool::from(point.is_identity()) && !bool::from(scalar.is_zero())
        })
        .map(|(point, scalar)| (G1Projective::from(point), *scalar))
        .unzip();

    if points.is_empty() {
        return Some(G1Projective::identity());
    }

    Some(G1Projective::multi_exp(&points, &scalars))
}
