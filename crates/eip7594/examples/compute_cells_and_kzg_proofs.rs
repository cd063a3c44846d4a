use eth_blob_kzg::{constants::CELLS_PER_EXT_BLOB, DASContext};
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[path = "../tests/common.rs"]
mod common;

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let ctx = DASContext::new(common::insecure_trusted_setup());
    let blob = common::random_blob(0);

    let commitment = ctx
        .blob_to_kzg_commitment(&blob)
        .expect("failed to commit to blob");

    // The first call also runs the FK20 precomputation.
    let (cells, proofs) = ctx
        .compute_cells_and_kzg_proofs(&blob)
        .expect("failed to compute cells and proofs");
    let (cells_again, _) = ctx
        .compute_cells_and_kzg_proofs(&blob)
        .expect("failed to compute cells and proofs");
    assert_eq!(cells, cells_again);

    let cell_indices: Vec<u64> = (0..CELLS_PER_EXT_BLOB as u64).collect();
    let valid = ctx
        .verify_cell_kzg_proof_batch(
            vec![&commitment; CELLS_PER_EXT_BLOB],
            &cell_indices,
            cells.iter().map(|cell| &**cell).collect(),
            proofs.iter().collect(),
        )
        .expect("well formed batch");

    println!(
        "commitment {}: {CELLS_PER_EXT_BLOB} cells, proofs valid: {valid}",
        eth_blob_kzg::hex::bytes48_to_hex(&commitment)
    );
}
