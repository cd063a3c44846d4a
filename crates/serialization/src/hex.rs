//! `0x`-prefixed hex encodings for callers that pass scalars, blobs,
//! commitments and proofs around as strings.

use bls12_381::Scalar;

use crate::{
    constants::{BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT},
    deserialize_bytes_to_scalar, SerializationError,
};

fn decode_prefixed(hex_str: &str) -> Result<Vec<u8>, SerializationError> {
    let invalid = || SerializationError::InvalidHex {
        hex: hex_str.to_owned(),
    };
    let digits = hex_str.strip_prefix("0x").ok_or_else(invalid)?;
    hex::decode(digits).map_err(|_| invalid())
}

fn encode_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parses a 32 byte big-endian field element.
pub fn scalar_from_hex(hex_str: &str) -> Result<Scalar, SerializationError> {
    deserialize_bytes_to_scalar(&decode_prefixed(hex_str)?)
}

pub fn scalar_to_hex(scalar: &Scalar) -> String {
    encode_prefixed(&scalar.to_bytes_be())
}

/// Decodes a blob given as one concatenated hex string.
///
/// Only the hex itself is checked here; the blob length and the field
/// elements are validated when the blob is handed to an engine.
pub fn blob_from_hex(hex_str: &str) -> Result<Vec<u8>, SerializationError> {
    decode_prefixed(hex_str)
}

/// Builds blob bytes from one hex string per field element.
///
/// Each element must be a canonical field element.
pub fn blob_from_scalar_hex<S: AsRef<str>>(scalars: &[S]) -> Result<Vec<u8>, SerializationError> {
    let mut blob = Vec::with_capacity(scalars.len() * BYTES_PER_FIELD_ELEMENT);
    for scalar in scalars {
        let scalar = scalar_from_hex(scalar.as_ref())?;
        blob.extend_from_slice(&scalar.to_bytes_be());
    }
    Ok(blob)
}

/// Encodes a commitment or proof.
pub fn bytes48_to_hex(bytes: &[u8; BYTES_PER_G1_POINT]) -> String {
    encode_prefixed(bytes)
}

/// Parses a commitment or proof. The point itself is not validated.
pub fn bytes48_from_hex(hex_str: &str) -> Result<[u8; BYTES_PER_G1_POINT], SerializationError> {
    let bytes = decode_prefixed(hex_str)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| SerializationError::G1PointHasInvalidLength {
            length: bytes.len(),
            bytes,
        })
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn scalar_hex_needs_prefix() {
        let no_prefix = "00".repeat(32);
        assert!(matches!(
            scalar_from_hex(&no_prefix),
            Err(SerializationError::InvalidHex { .. })
        ));
        assert!(scalar_from_hex(&format!("0x{no_prefix}")).is_ok());
    }

    #[test]
    fn scalar_hex_rejects_bad_digits_and_lengths() {
        assert!(matches!(
            scalar_from_hex(&format!("0x{}", "zz".repeat(32))),
            Err(SerializationError::InvalidHex { .. })
        ));
        assert!(matches!(
            scalar_from_hex("0x0102"),
            Err(SerializationError::ScalarHasInvalidLength { length: 2, .. })
        ));
        assert!(matches!(
            scalar_from_hex(&format!("0x{}", "ff".repeat(32))),
            Err(SerializationError::CouldNotDeserializeScalar { .. })
        ));
    }

    #[test]
    fn scalar_hex_is_big_endian() {
        let one = format!("0x{}01", "00".repeat(31));
        assert_eq!(scalar_from_hex(&one).unwrap(), Scalar::ONE);
        assert_eq!(scalar_to_hex(&Scalar::ONE), one);
    }

    #[test]
    fn blob_from_per_element_hex() {
        let elements = [scalar_to_hex(&Scalar::ONE), scalar_to_hex(&Scalar::from(2u64))];
        let blob = blob_from_scalar_hex(&elements).unwrap();
        assert_eq!(blob.len(), 2 * BYTES_PER_FIELD_ELEMENT);
        assert_eq!(blob_from_hex(&format!("0x{}", hex::encode(&blob))).unwrap(), blob);

        let too_big = format!("0x{}", "ff".repeat(32));
        assert!(blob_from_scalar_hex(&[too_big]).is_err());
    }

    #[test]
    fn bytes48_length_is_checked() {
        let identity = format!("0xc0{}", "00".repeat(47));
        let bytes = bytes48_from_hex(&identity).unwrap();
        assert_eq!(bytes48_to_hex(&bytes), identity);

        assert!(matches!(
            bytes48_from_hex("0xc0"),
            Err(SerializationError::G1PointHasInvalidLength { length: 1, .. })
        ));
    }

    proptest! {
        #[test]
        fn scalar_hex_round_trip(limbs in any::<[u64; 4]>()) {
            let scalar = Scalar::from(limbs[0])
                + Scalar::from(limbs[1]) * Scalar::from(u64::MAX)
                + Scalar::from(limbs[2]).square()
                - Scalar::from(limbs[3]);
            prop_assert_eq!(scalar_from_hex(&scalar_to_hex(&scalar)).unwrap(), scalar);
        }
    }
}
