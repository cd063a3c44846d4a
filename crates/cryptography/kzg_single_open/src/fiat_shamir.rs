use bls12_381::{ff::Field, reduce_bytes_to_scalar_bias, Scalar};
use sha2::{Digest, Sha256};

/// Domain separator of the random linear combination used in batch verification.
pub const RANDOM_CHALLENGE_KZG_BATCH_DOMAIN: &[u8; 16] = b"RCKZGBATCH___V1_";

const BYTES_PER_G1_POINT: usize = 48;
const BYTES_PER_SCALAR: usize = 32;

/// Derives `[1, r, r^2, ..., r^{n-1}]` for batch verification of `n` opening proofs.
///
/// `r` is the hash of the domain separator, the domain size, `n` and every
/// `(commitment, z, y, proof)` tuple in order, reduced into the field.
pub fn compute_r_powers_for_verify_kzg_proof_batch(
    domain_size: usize,
    commitments: &[[u8; BYTES_PER_G1_POINT]],
    zs: &[Scalar],
    ys: &[Scalar],
    proofs: &[[u8; BYTES_PER_G1_POINT]],
) -> Vec<Scalar> {
    let n = commitments.len();
    assert!(zs.len() == n && ys.len() == n && proofs.len() == n);

    let mut hash_input = Vec::with_capacity(
        RANDOM_CHALLENGE_KZG_BATCH_DOMAIN.len()
            + 2 * size_of::<u64>()
            + n * (2 * BYTES_PER_G1_POINT + 2 * BYTES_PER_SCALAR),
    );
    hash_input.extend_from_slice(RANDOM_CHALLENGE_KZG_BATCH_DOMAIN);
    hash_input.extend_from_slice(&(domain_size as u64).to_be_bytes());
    hash_input.extend_from_slice(&(n as u64).to_be_bytes());
    for (((commitment, z), y), proof) in commitments.iter().zip(zs).zip(ys).zip(proofs) {
        hash_input.extend_from_slice(commitment);
        hash_input.extend_from_slice(&z.to_bytes_be());
        hash_input.extend_from_slice(&y.to_bytes_be());
        hash_input.extend_from_slice(proof);
    }

    let digest: [u8; 32] = Sha256::digest(&hash_input).into();
    // The reduction is biased, which is irrelevant here since only ~128 bits of
    // unpredictability are needed from a batching randomizer.
    let r = reduce_bytes_to_scalar_bias(digest);

    std::iter::successors(Some(Scalar::ONE), |power| Some(*power * r))
        .take(n)
        .collect()
}
