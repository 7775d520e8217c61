use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gf_codes::ecc::{Code, CodeConfig, CodeStrategy};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

const CONFIGS: [&str; 4] = ["hamming", "bch:5:3", "bch:8:8", "rs:8:8:8"];

fn configured(name: &str) -> Code {
    name.parse::<CodeConfig>()
        .and_then(|config| config.configure())
        .unwrap()
}

fn random_message(rng: &mut StdRng, len: usize) -> Vec<bool> {
    (0..len).map(|_| rng.gen()).collect()
}

/// Encoded block with `weight` flipped bits
fn noisy_block(code: &Code, rng: &mut StdRng, weight: usize) -> Vec<bool> {
    let message = random_message(rng, code.message_length());
    let mut block = code.encode(&message);
    for idx in sample(rng, block.len(), weight).into_iter() {
        block[idx] = !block[idx];
    }
    block
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for name in CONFIGS {
        let code = configured(name);
        let message = random_message(&mut rng, code.message_length());
        group.throughput(Throughput::Elements(code.message_length() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(code.name()), &message, |b, m| {
            b.iter(|| code.encode(black_box(m)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for name in CONFIGS {
        let code = configured(name);
        for weight in [0, code.correction_capability()] {
            let block = noisy_block(&code, &mut rng, weight);
            let id = BenchmarkId::new(code.name(), format!("{weight}_errors"));
            group.throughput(Throughput::Elements(code.block_length() as u64));
            group.bench_with_input(id, &block, |b, block| {
                b.iter(|| code.decode(black_box(block)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
