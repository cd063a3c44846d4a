use bls12_381::{G1Point, G2Point};
use serde::Deserialize;

use crate::errors::{SetupError, SetupField};

/// The `encoding` value selecting uncompressed affine coordinates.
pub(crate) const FAST_V1_ENCODING: &str = "fast_v1";

/// The trusted setup as it appears on disk.
///
/// The points are `0x`-prefixed hex strings, compressed unless `encoding` is
/// `fast_v1`. An example of the compressed layout is the mainnet file:
/// https://github.com/ethereum/consensus-specs/blob/dev/presets/mainnet/trusted_setups/trusted_setup_4096.json
#[derive(Deserialize, Debug)]
pub(crate) struct TrustedSetupJson {
    pub(crate) g1_lagrange: Vec<String>,
    pub(crate) g2_monomial: Vec<String>,
    #[serde(default)]
    pub(crate) g1_monomial: Option<Vec<String>>,
    /// Precomputed FK20 columns, flattened column after column.
    #[serde(default)]
    pub(crate) fk20: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) encoding: Option<String>,
}

/// How the points of a setup are encoded and how much they are trusted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum PointEncoding {
    /// Compressed and checked for subgroup membership.
    Compressed,
    /// Compressed, only checked to be on the curve.
    CompressedUnchecked,
    /// Uncompressed `x || y`, not checked at all.
    Uncompressed,
}

fn decode_hex<const N: usize>(
    field: SetupField,
    index: usize,
    hex_str: &str,
) -> Result<[u8; N], SetupError> {
    let bytes = hex_str
        .strip_prefix("0x")
        .and_then(|digits| hex::decode(digits).ok())
        .ok_or(SetupError::InvalidHex { field, index })?;

    let length = bytes.len();
    bytes
        .try_into()
        .map_err(|_| SetupError::PointHasInvalidLength {
            field,
            index,
            length,
            expected: N,
        })
}

pub(crate) fn deserialize_g1_points<T: AsRef<str>>(
    field: SetupField,
    points: &[T],
    encoding: PointEncoding,
) -> Result<Vec<G1Point>, SetupError> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let point = point.as_ref();
            let decoded: Option<G1Point> = match encoding {
                PointEncoding::Compressed => {
                    G1Point::from_compressed(&decode_hex(field, index, point)?).into()
                }
                PointEncoding::CompressedUnchecked => {
                    G1Point::from_compressed_unchecked(&decode_hex(field, index, point)?).into()
                }
                PointEncoding::Uncompressed => {
                    G1Point::from_uncompressed_unchecked(&decode_hex(field, index, point)?).into()
                }
            };
            decoded.ok_or(SetupError::InvalidPoint { field, index })
        })
        .collect()
}

pub(crate) fn deserialize_g2_points<T: AsRef<str>>(
    points: &[T],
    encoding: PointEncoding,
) -> Result<Vec<G2Point>, SetupError> {
    let field = SetupField::G2Monomial;
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let point = point.as_ref();
            let decoded: Option<G2Point> = match encoding {
                PointEncoding::Compressed => {
                    G2Point::from_compressed(&decode_hex(field, index, point)?).into()
                }
                PointEncoding::CompressedUnchecked => {
                    G2Point::from_compressed_unchecked(&decode_hex(field, index, point)?).into()
                }
                PointEncoding::Uncompressed => {
                    G2Point::from_uncompressed_unchecked(&decode_hex(field, index, point)?).into()
                }
            };
            decoded.ok_or(SetupError::InvalidPoint { field, index })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;

    use super::*;

    fn g1_hex(point: &G1Point) -> String {
        format!("0x{}", hex::encode(point.to_compressed()))
    }

    #[test]
    fn compressed_and_uncompressed_agree() {
        let point = G1Point::from(G1Point::generator() * bls12_381::Scalar::from(7u64));
        let compressed = [g1_hex(&point)];
        let uncompressed = [format!("0x{}", hex::encode(point.to_uncompressed()))];

        let checked =
            deserialize_g1_points(SetupField::G1Lagrange, &compressed, PointEncoding::Compressed);
        let fast = deserialize_g1_points(
            SetupField::G1Lagrange,
            &uncompressed,
            PointEncoding::Uncompressed,
        );
        assert_eq!(checked.unwrap(), vec![point]);
        assert_eq!(fast.unwrap(), vec![point]);
    }

    #[test]
    fn reports_position_of_bad_point() {
        let good = g1_hex(&G1Point::generator());
        let points = [good.clone(), good, "0x1234".to_owned()];
        let err = deserialize_g1_points(SetupField::G1Monomial, &points, PointEncoding::Compressed)
            .unwrap_err();
        assert!(matches!(
            err,
            SetupError::PointHasInvalidLength {
                field: SetupField::G1Monomial,
                index: 2,
                length: 2,
                expected: 48
            }
        ));

        let err = deserialize_g2_points(&["abcd"], PointEncoding::Compressed).unwrap_err();
        assert!(matches!(
            err,
            SetupError::InvalidHex {
                field: SetupField::G2Monomial,
                index: 0
            }
        ));
    }

    #[test]
    fn rejects_points_off_the_curve() {
        // Compression flag set, x is larger than the base field modulus
        let mut bytes = [0xff; 48];
        bytes[0] = 0x9f;
        let points = [format!("0x{}", hex::encode(bytes))];

        for encoding in [PointEncoding::Compressed, PointEncoding::CompressedUnchecked] {
            let err = deserialize_g1_points(SetupField::FK20, &points, encoding).unwrap_err();
            assert!(matches!(
                err,
                SetupError::InvalidPoint {
                    field: SetupField::FK20,
                    index: 0
                }
            ));
        }
    }
}
