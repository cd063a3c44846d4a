use criterion::{criterion_group, criterion_main, Criterion};
use ebk_polynomial::{
    barycentric::evaluate_lagrange_form, domain::Domain, poly_coeff::PolyCoeff,
};
use bls12_381::{ff::Field, group::Group, G1Projective, Scalar};

fn random_scalars(size: usize) -> Vec<Scalar> {
    (0..size)
        .map(|_| Scalar::random(&mut rand::thread_rng()))
        .collect()
}

fn bench_fft(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 8192;
    let domain = Domain::new(NUM_ELEMENTS);
    let polynomial = PolyCoeff(random_scalars(NUM_ELEMENTS));

    c.bench_function(&format!("fft_scalars of size {NUM_ELEMENTS}"), |b| {
        b.iter(|| domain.fft_scalars(polynomial.clone()));
    });

    let circulant_domain = Domain::new(128);
    let points: Vec<_> = (0..128)
        .map(|_| G1Projective::random(&mut rand::thread_rng()))
        .collect();
    c.bench_function("fft_g1 of size 128", |b| {
        b.iter(|| circulant_domain.fft_g1(points.clone()));
    });
}

fn bench_lagrange_evaluation(c: &mut Criterion) {
    let domain = Domain::new(4096);
    let evaluations = random_scalars(4096);
    let z = Scalar::random(&mut rand::thread_rng());

    c.bench_function("evaluate_lagrange_form 4096", |b| {
        b.iter(|| evaluate_lagrange_form(&domain.roots, &evaluations, z));
    });
}

criterion_group!(benches, bench_fft, bench_lagrange_evaluation);
criterion_main!(benches);
