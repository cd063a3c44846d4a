//! Loads the KZG trusted setup.
//!
//! The setup is the only configuration the engines take. It is parsed once,
//! validated, and then shared read-only by every prover and verifier built from it.

mod errors;
mod json;

use bls12_381::{G1Point, G2Point};
use polynomial::reverse_bit_order;
use serialization::constants::{
    CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL,
};

pub use errors::{MissingSetupMaterial, PointGroup, SetupError, SetupField};
use json::{deserialize_g1_points, deserialize_g2_points, PointEncoding, TrustedSetupJson};

/// A single-point opening is checked against `[1]G₂` and `[τ]G₂`.
const MIN_G2_POINTS: usize = 2;

/// Cell proofs are checked against `[τ^64]G₂`.
const PEERDAS_G2_POINTS: usize = FIELD_ELEMENTS_PER_CELL + 1;

/// Number of points in the precomputed FK20 table.
const FK20_TABLE_SIZE: usize = CELLS_PER_EXT_BLOB * FIELD_ELEMENTS_PER_CELL;

/// A decoded trusted setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedSetup {
    /// `[L_i(τ)]G₁`, stored in bit-reversed order.
    g1_lagrange_brp: Vec<G1Point>,
    /// `[τ^i]G₂`
    g2_monomial: Vec<G2Point>,
    /// `[τ^i]G₁`, needed for cells.
    g1_monomial: Option<Vec<G1Point>>,
    /// FK20 columns; column `j` holds the `j`-th output of the circulant FFT for
    /// every offset within a cell.
    fk20_columns: Option<Vec<Vec<G1Point>>>,
}

/// What the PeerDAS cell engine reads from the setup.
#[derive(Debug, Clone, Copy)]
pub struct PeerDasMaterial<'a> {
    /// Exactly `FIELD_ELEMENTS_PER_BLOB` monomial points.
    pub g1_monomial: &'a [G1Point],
    /// Exactly `FIELD_ELEMENTS_PER_CELL + 1` monomial points.
    pub g2_monomial: &'a [G2Point],
    pub fk20_columns: Option<&'a [Vec<G1Point>]>,
}

impl TrustedSetup {
    /// Parses a setup in the JSON format of the Ethereum trusted setup, checking
    /// that every point lies in its prime order subgroup.
    ///
    /// ```json
    /// {
    ///   "g1_lagrange": ["0xa0413c0d...", ...],
    ///   "g2_monomial": ["0x93e02b60...", ...],
    ///   "g1_monomial": ["0x97f1d3a7...", ...]
    /// }
    /// ```
    ///
    /// `g1_monomial` and `fk20` are optional. The uncompressed `fast_v1`
    /// encoding cannot be checked cheaply and is rejected here.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let setup: TrustedSetupJson = serde_json::from_str(json)?;
        match setup.encoding.as_deref() {
            None => Self::from_parsed_json(&setup, PointEncoding::Compressed),
            Some(json::FAST_V1_ENCODING) => Err(SetupError::UncheckedEncodingNotAllowed),
            Some(other) => Err(SetupError::UnknownEncoding {
                encoding: other.to_owned(),
            }),
        }
    }

    /// Parses a setup without subgroup checks.
    ///
    /// Only use this on a setup that is already trusted, for example one shipped
    /// and checksummed alongside the binary. A malicious setup can make
    /// the verifiers accept invalid proofs.
    ///
    /// With `"encoding": "fast_v1"` points are uncompressed `x || y` coordinates.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_json_unchecked(json: &str) -> Result<Self, SetupError> {
        let setup: TrustedSetupJson = serde_json::from_str(json)?;
        let encoding = match setup.encoding.as_deref() {
            None => PointEncoding::CompressedUnchecked,
            Some(json::FAST_V1_ENCODING) => PointEncoding::Uncompressed,
            Some(other) => {
                return Err(SetupError::UnknownEncoding {
                    encoding: other.to_owned(),
                })
            }
        };
        Self::from_parsed_json(&setup, encoding)
    }

    fn from_parsed_json(
        setup: &TrustedSetupJson,
        encoding: PointEncoding,
    ) -> Result<Self, SetupError> {
        let g1_lagrange =
            deserialize_g1_points(SetupField::G1Lagrange, &setup.g1_lagrange, encoding)?;
        let g2_monomial = deserialize_g2_points(&setup.g2_monomial, encoding)?;
        let g1_monomial = setup
            .g1_monomial
            .as_ref()
            .map(|points| deserialize_g1_points(SetupField::G1Monomial, points, encoding))
            .transpose()?;
        let fk20 = setup
            .fk20
            .as_ref()
            .map(|points| deserialize_g1_points(SetupField::FK20, points, encoding))
            .transpose()?;

        Self::from_points(g1_lagrange, g2_monomial, g1_monomial, fk20)
    }

    /// Builds a setup from decoded points.
    ///
    /// `g1_lagrange` is in natural order. `fk20` is the flattened table,
    /// `FIELD_ELEMENTS_PER_CELL` points per column.
    pub fn from_points(
        mut g1_lagrange: Vec<G1Point>,
        g2_monomial: Vec<G2Point>,
        g1_monomial: Option<Vec<G1Point>>,
        fk20: Option<Vec<G1Point>>,
    ) -> Result<Self, SetupError> {
        if !g1_lagrange.len().is_power_of_two() {
            return Err(SetupError::LagrangeLengthNotPowerOfTwo {
                length: g1_lagrange.len(),
            });
        }
        if g2_monomial.len() < MIN_G2_POINTS {
            return Err(SetupError::NotEnoughG2Points {
                found: g2_monomial.len(),
                required: MIN_G2_POINTS,
            });
        }

        let fk20_columns = match fk20 {
            Some(points) if points.len() != FK20_TABLE_SIZE => {
                return Err(SetupError::FK20TableHasInvalidSize {
                    found: points.len(),
                    expected: FK20_TABLE_SIZE,
                })
            }
            Some(points) => Some(
                points
                    .chunks_exact(FIELD_ELEMENTS_PER_CELL)
                    .map(<[G1Point]>::to_vec)
                    .collect(),
            ),
            None => None,
        };

        reverse_bit_order(&mut g1_lagrange);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            poly_num = g1_lagrange.len(),
            g2_points = g2_monomial.len(),
            has_g1_monomial = g1_monomial.is_some(),
            has_fk20 = fk20_columns.is_some(),
            "loaded trusted setup"
        );

        Ok(Self {
            g1_lagrange_brp: g1_lagrange,
            g2_monomial,
            g1_monomial,
            fk20_columns,
        })
    }

    /// The number of field elements in a blob committed to with this setup.
    pub fn poly_num(&self) -> usize {
        self.g1_lagrange_brp.len()
    }

    pub fn g1_lagrange_brp(&self) -> &[G1Point] {
        &self.g1_lagrange_brp
    }

    pub fn g2_monomial(&self) -> &[G2Point] {
        &self.g2_monomial
    }

    pub fn g1_monomial(&self) -> Option<&[G1Point]> {
        self.g1_monomial.as_deref()
    }

    pub fn fk20_columns(&self) -> Option<&[Vec<G1Point>]> {
        self.fk20_columns.as_deref()
    }

    /// Returns the points needed for cells, or what is missing.
    pub fn peerdas_material(&self) -> Result<PeerDasMaterial<'_>, MissingSetupMaterial> {
        if self.poly_num() != FIELD_ELEMENTS_PER_BLOB {
            return Err(MissingSetupMaterial::BlobSize {
                found: self.poly_num(),
                required: FIELD_ELEMENTS_PER_BLOB,
            });
        }

        let g1_monomial = self.g1_monomial().unwrap_or_default();
        if g1_monomial.len() < FIELD_ELEMENTS_PER_BLOB {
            return Err(MissingSetupMaterial::G1Monomial {
                found: g1_monomial.len(),
                required: FIELD_ELEMENTS_PER_BLOB,
            });
        }
        if self.g2_monomial.len() < PEERDAS_G2_POINTS {
            return Err(MissingSetupMaterial::G2Monomial {
                found: self.g2_monomial.len(),
                required: PEERDAS_G2_POINTS,
            });
        }

        Ok(PeerDasMaterial {
            g1_monomial: &g1_monomial[..FIELD_ELEMENTS_PER_BLOB],
            g2_monomial: &self.g2_monomial[..PEERDAS_G2_POINTS],
            fk20_columns: self.fk20_columns(),
        })
    }
}
