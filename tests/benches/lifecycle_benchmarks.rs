//! # SignedPost Lifecycle Benchmarks
//!
//! | Path | Expectation |
//! |------|-------------|
//! | sp-02 sign / receive | one Ed25519 operation per transaction |
//! | sp-01 commit | snapshot copy plus root hash, linear in store size |
//! | sp-05 append_tx | decode, verify, apply |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use sp_01_merkle_store::{MemoryMerkleStore, MerkleStore};
use sp_02_signature_envelope::{Action, Codec, EnvelopeCodecApi};
use sp_05_application::ApplicationApi;
use sp_tests::fixtures::{fresh_app, keypair, sign};
use std::time::Duration;

// ============================================================================
// SP-02: Envelope signing and verification
// ============================================================================

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("sp-02-envelope");
    group.measurement_time(Duration::from_secs(5));

    let codec = Codec::standard();
    let key = keypair(0);
    let action = Action::add_post("Good post", "Some important info");
    let tx = sign(&action, &key);

    group.bench_function("sign", |b| {
        b.iter(|| black_box(codec.sign(&action, &key).is_ok()))
    });
    group.bench_function("receive", |b| {
        b.iter(|| black_box(codec.receive(&tx).is_ok()))
    });

    for size in [10usize, 100, 500] {
        let batch: Vec<Vec<u8>> = (0..size)
            .map(|i| sign(&Action::add_post(format!("post {i}"), "..."), &key))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("receive_batch", size), &batch, |b, batch| {
            b.iter(|| batch.iter().filter(|tx| codec.receive(tx).is_ok()).count())
        });
    }

    group.finish();
}

// ============================================================================
// SP-01: Commit cost against store size
// ============================================================================

fn filled_store(entries: usize) -> MemoryMerkleStore {
    let mut store = MemoryMerkleStore::new();
    let mut rng = rand::thread_rng();
    for _ in 0..entries {
        let key: [u8; 21] = rng.gen();
        let value: [u8; 32] = rng.gen();
        // random keys are never empty or oversized
        let _ = store.set(key.to_vec(), value.to_vec());
    }
    store
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("sp-01-commit");

    for entries in [100usize, 1_000, 10_000] {
        let store = filled_store(entries);

        group.bench_with_input(BenchmarkId::new("copy", entries), &store, |b, store| {
            b.iter(|| black_box(store.copy().size()))
        });
        group.bench_with_input(BenchmarkId::new("root_hash", entries), &store, |b, store| {
            b.iter(|| black_box(store.root_hash()))
        });
        group.bench_with_input(BenchmarkId::new("copy_then_write", entries), &store, |b, store| {
            b.iter(|| {
                let mut snapshot = store.copy();
                black_box(snapshot.set(b"\x00detach".to_vec(), b"x".to_vec()).is_ok())
            })
        });
    }

    group.finish();
}

// ============================================================================
// SP-05: Full transaction path
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("sp-05-append");
    group.sample_size(20);

    let author = keypair(0);
    let create = sign(&Action::create_account("Writer"), &author);
    let posts: Vec<Vec<u8>> = (0..100)
        .map(|i| sign(&Action::add_post(format!("post {i}"), "..."), &author))
        .collect();

    group.throughput(Throughput::Elements(posts.len() as u64));
    group.bench_function("append_100_posts", |b| {
        b.iter(|| {
            let mut app = fresh_app();
            app.append_tx(&create);
            for tx in &posts {
                app.append_tx(tx);
            }
            black_box(app.commit())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_envelope, bench_commit, bench_append);

criterion_main!(benches);
