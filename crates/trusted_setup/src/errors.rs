/// The JSON field a point was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    G1Lagrange,
    G1Monomial,
    G2Monomial,
    FK20,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointGroup {
    G1,
    G2,
}

impl SetupField {
    pub const fn group(self) -> PointGroup {
        match self {
            Self::G2Monomial => PointGroup::G2,
            Self::G1Lagrange | Self::G1Monomial | Self::FK20 => PointGroup::G1,
        }
    }
}

/// Errors from loading a trusted setup.
#[derive(Debug)]
pub enum SetupError {
    MalformedJson(serde_json::Error),
    /// `encoding: "fast_v1"` skips subgroup checks and is only accepted by
    /// `TrustedSetup::from_json_unchecked`.
    UncheckedEncodingNotAllowed,
    UnknownEncoding {
        encoding: String,
    },
    InvalidHex {
        field: SetupField,
        index: usize,
    },
    PointHasInvalidLength {
        field: SetupField,
        index: usize,
        length: usize,
        expected: usize,
    },
    /// The bytes are not a point on the curve, or, when checked, not in the
    /// prime order subgroup.
    InvalidPoint {
        field: SetupField,
        index: usize,
    },
    LagrangeLengthNotPowerOfTwo {
        length: usize,
    },
    NotEnoughG2Points {
        found: usize,
        required: usize,
    },
    FK20TableHasInvalidSize {
        found: usize,
        expected: usize,
    },
    MissingSetupMaterial(MissingSetupMaterial),
}

/// The setup lacks what the PeerDAS cell operations need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSetupMaterial {
    /// Cells are only defined for blobs of `FIELD_ELEMENTS_PER_BLOB` elements.
    BlobSize { found: usize, required: usize },
    G1Monomial { found: usize, required: usize },
    G2Monomial { found: usize, required: usize },
}

impl From<serde_json::Error> for SetupError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedJson(value)
    }
}

impl From<MissingSetupMaterial> for SetupError {
    fn from(value: MissingSetupMaterial) -> Self {
        Self::MissingSetupMaterial(value)
    }
}
