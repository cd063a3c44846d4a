use bls12_381::Scalar;
use criterion::{criterion_group, criterion_main, Criterion};
use ebk_eip4844::Context;

#[path = "../../eip7594/tests/common.rs"]
mod common;

pub fn bench_blob_methods(c: &mut Criterion) {
    let ctx = Context::new(common::insecure_trusted_setup());
    let blob = common::random_blob(0);
    let commitment = ctx.blob_to_kzg_commitment(&blob).unwrap();
    let proof = ctx.compute_blob_kzg_proof(&blob, commitment).unwrap();
    let z = Scalar::from(0x1234_5678_u64).to_bytes_be();
    let (point_proof, y) = ctx.compute_kzg_proof(&blob, z).unwrap();

    c.bench_function("blob_to_kzg_commitment", |b| {
        b.iter(|| ctx.blob_to_kzg_commitment(&blob))
    });
    c.bench_function("compute_kzg_proof", |b| b.iter(|| ctx.compute_kzg_proof(&blob, z)));
    c.bench_function("compute_blob_kzg_proof", |b| {
        b.iter(|| ctx.compute_blob_kzg_proof(&blob, commitment))
    });
    c.bench_function("verify_kzg_proof", |b| {
        b.iter(|| ctx.verify_kzg_proof(commitment, z, y, point_proof))
    });
    c.bench_function("verify_blob_kzg_proof", |b| {
        b.iter(|| ctx.verify_blob_kzg_proof(&blob, commitment, proof))
    });
}

pub fn bench_verify_blob_kzg_proof_batch(c: &mut Criterion) {
    let ctx = Context::new(common::insecure_trusted_setup());

    for batch_size in [1, 4, 16] {
        let blobs: Vec<_> = (0..batch_size).map(common::random_blob).collect();
        let commitments: Vec<_> = blobs
            .iter()
            .map(|blob| ctx.blob_to_kzg_commitment(blob).unwrap())
            .collect();
        let proofs: Vec<_> = blobs
            .iter()
            .zip(&commitments)
            .map(|(blob, commitment)| ctx.compute_blob_kzg_proof(blob, *commitment).unwrap())
            .collect();
        let blob_refs: Vec<_> = blobs.iter().map(Vec::as_slice).collect();

        c.bench_function(&format!("verify_blob_kzg_proof_batch - {batch_size}"), |b| {
            b.iter(|| ctx.verify_blob_kzg_proof_batch(&blob_refs, &commitments, &proofs))
        });
    }
}

criterion_group!(benches, bench_blob_methods, bench_verify_blob_kzg_proof_batch);
criterion_main!(benches);
