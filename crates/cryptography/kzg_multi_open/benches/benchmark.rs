use bls12_381::{
    ff::Field, g1_batch_normalize, group::Group, G1Projective, G2Point, G2Projective, Scalar,
};
use criterion::{criterion_group, criterion_main, Criterion};
use ebk_kzg_multi_open::{
    commit_key::CommitKey, verification_key::VerificationKey, Prover, ProverInput, Verifier,
};
use polynomial::poly_coeff::PolyCoeff;
use rand::{rngs::StdRng, SeedableRng};

const POLYNOMIAL_LEN: usize = 4096;
const NUMBER_OF_POINTS_TO_EVALUATE: usize = 2 * POLYNOMIAL_LEN;
const NUMBER_OF_POINTS_PER_PROOF: usize = 64;

pub fn bench_compute_proof_fk20(c: &mut Criterion) {
    let polynomial = random_polynomial(POLYNOMIAL_LEN);
    let (ck, _) = create_insecure_commit_verification_keys();

    let prover = Prover::new(
        ck,
        POLYNOMIAL_LEN,
        NUMBER_OF_POINTS_PER_PROOF,
        NUMBER_OF_POINTS_TO_EVALUATE,
    );
    let points = prover_points();
    c.bench_function("fk20 toeplitz precomputation", |b| {
        b.iter(|| {
            Prover::new(
                CommitKey::new(points.clone()),
                POLYNOMIAL_LEN,
                NUMBER_OF_POINTS_PER_PROOF,
                NUMBER_OF_POINTS_TO_EVALUATE,
            )
            .precompute()
        })
    });

    prover.precompute();
    c.bench_function(
        &format!(
            "computing proofs with fk20. POLY_SIZE {}, POINTS_PER_PROOF {}, NUM_PROOFS {}",
            POLYNOMIAL_LEN,
            NUMBER_OF_POINTS_PER_PROOF,
            prover.num_proofs()
        ),
        |b| b.iter(|| prover.compute_multi_opening_proofs(ProverInput::PolyCoeff(polynomial.clone()))),
    );
}

pub fn bench_verify_proof_fk20(c: &mut Criterion) {
    let polynomial = random_polynomial(POLYNOMIAL_LEN);
    let (ck, vk) = create_insecure_commit_verification_keys();

    let prover = Prover::new(
        ck,
        POLYNOMIAL_LEN,
        NUMBER_OF_POINTS_PER_PROOF,
        NUMBER_OF_POINTS_TO_EVALUATE,
    );
    let num_proofs = prover.num_proofs();
    let commitment = prover.commit(ProverInput::PolyCoeff(polynomial.clone()));
    let verifier = Verifier::new(vk, NUMBER_OF_POINTS_TO_EVALUATE, num_proofs);

    let (proofs, coset_evals) =
        prover.compute_multi_opening_proofs(ProverInput::PolyCoeff(polynomial));
    let commitment_indices = vec![0; num_proofs];
    let coset_indices: Vec<_> = (0..num_proofs as u64).collect();

    c.bench_function(
        &format!("verifying {num_proofs} proofs of one polynomial"),
        |b| {
            b.iter(|| {
                verifier.verify_multi_opening(
                    &[commitment],
                    &commitment_indices,
                    &coset_indices,
                    &coset_evals,
                    &proofs,
                )
            })
        },
    );
}

fn random_polynomial(size: usize) -> PolyCoeff {
    let mut rng = StdRng::seed_from_u64(0);
    PolyCoeff((0..size).map(|_| Scalar::random(&mut rng)).collect())
}

fn secret() -> Scalar {
    Scalar::from(0x5eed_1234_u64)
}

fn prover_points() -> Vec<bls12_381::G1Point> {
    let points: Vec<_> = std::iter::successors(Some(Scalar::ONE), |power| Some(power * secret()))
        .take(POLYNOMIAL_LEN)
        .map(|power| G1Projective::generator() * power)
        .collect();
    g1_batch_normalize(&points)
}

// Duplicated from the crate, where it is only compiled for tests
fn create_insecure_commit_verification_keys() -> (CommitKey, VerificationKey) {
    let g1_points = prover_points();
    let g2_points: Vec<_> = std::iter::successors(Some(Scalar::ONE), |power| Some(power * secret()))
        .take(NUMBER_OF_POINTS_PER_PROOF + 1)
        .map(|power| G2Point::from(G2Projective::generator() * power))
        .collect();

    let vk = VerificationKey::new(
        g1_points[..=NUMBER_OF_POINTS_PER_PROOF].to_vec(),
        g2_points,
        NUMBER_OF_POINTS_PER_PROOF,
        POLYNOMIAL_LEN,
    );
    (CommitKey::new(g1_points), vk)
}

criterion_group!(benches, bench_compute_proof_fk20, bench_verify_proof_fk20);
criterion_main!(benches);
