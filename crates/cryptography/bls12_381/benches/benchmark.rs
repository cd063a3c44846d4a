use ebk_bls12_381::{
    batch_inversion::batch_inverse, ff::Field, group::Group, lincomb::g1_lincomb, G1Point,
    G1Projective, Scalar,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_batch_inverse(c: &mut Criterion) {
    let elements: Vec<_> = (0..8192)
        .map(|_| Scalar::random(&mut rand::thread_rng()))
        .collect();

    c.bench_function("batch_inverse 8192", |b| {
        b.iter(|| {
            let mut elements = elements.clone();
            batch_inverse(&mut elements);
        });
    });
}

fn bench_g1_lincomb(c: &mut Criterion) {
    let points: Vec<G1Point> = (0..4096)
        .map(|_| G1Projective::random(&mut rand::thread_rng()).into())
        .collect();
    let dense: Vec<_> = (0..4096)
        .map(|_| Scalar::random(&mut rand::thread_rng()))
        .collect();
    let mut sparse = vec![Scalar::ZERO; 4096];
    sparse[..64].copy_from_slice(&dense[..64]);

    c.bench_function("g1_lincomb 4096 dense", |b| {
        b.iter(|| g1_lincomb(&points, &dense));
    });
    c.bench_function("g1_lincomb 4096 sparse", |b| {
        b.iter(|| g1_lincomb(&points, &sparse));
    });
}

criterion_group!(benches, bench_batch_inverse, bench_g1_lincomb);
criterion_main!(benches);
