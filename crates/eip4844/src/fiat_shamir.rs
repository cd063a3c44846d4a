use bls12_381::{reduce_bytes_to_scalar_bias, Scalar};
use serialization::constants::BYTES_PER_COMMITMENT;
use sha2::{Digest, Sha256};

use crate::KZGCommitment;

/// Domain separator for the evaluation point of a blob proof.
///
/// See: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#blob
pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8; 16] = b"FSBLOBVERIFY_V1_";

/// Derives the point a blob is opened at from the blob and its commitment.
///
/// The hash covers the domain separator, the number of field elements in the blob
/// as a 16 byte big-endian integer, the blob, and the commitment.
///
/// See: https://github.com/ethereum/consensus-specs/blob/dev/specs/deneb/polynomial-commitments.md#compute_challenge
pub(crate) fn compute_fiat_shamir_challenge(
    blob: &[u8],
    commitment: &KZGCommitment,
    field_elements_per_blob: usize,
) -> Scalar {
    let hash_input_size = FIAT_SHAMIR_PROTOCOL_DOMAIN.len()
        + 2 * size_of::<u64>()
        + blob.len()
        + BYTES_PER_COMMITMENT;

    let mut hash_input: Vec<u8> = Vec::with_capacity(hash_input_size);
    hash_input.extend(FIAT_SHAMIR_PROTOCOL_DOMAIN);
    hash_input.extend(u64_to_byte_array_16(field_elements_per_blob as u64));
    hash_input.extend(blob);
    hash_input.extend(commitment);
    debug_assert_eq!(hash_input.len(), hash_input_size);

    let result: [u8; 32] = Sha256::digest(hash_input).into();

    // The 256 bit digest is reduced with a negligible bias.
    reduce_bytes_to_scalar_bias(result)
}

/// Big-endian, so the first 8 bytes are always 0.
fn u64_to_byte_array_16(number: u64) -> [u8; 16] {
    let mut bytes = [0; 16];
    bytes[8..].copy_from_slice(&number.to_be_bytes());
    bytes
}
