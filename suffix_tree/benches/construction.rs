use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use suffix_tree::SuffixTree;

const SIZES: [usize; 4] = [1 << 10, 1 << 12, 1 << 14, 1 << 16];

// DNA-like text, small alphabet with plenty of repeats
fn random_text(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..len).map(|_| b"acgt"[rng.gen_range(0, 4)]).collect()
}

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for &size in SIZES.iter() {
        let text = random_text(size);
        group
            .throughput(Throughput::Bytes(size as u64))
            .bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
                b.iter(|| SuffixTree::new(text).unwrap());
            });
    }

    group.finish();
}

fn suffix_array(c: &mut Criterion) {
    let text = random_text(1 << 16);
    let tree = SuffixTree::new(&text).unwrap();

    c.bench_function("suffix_array", |b| b.iter(|| tree.suffix_array()));
}

criterion_group!(benches, construct, suffix_array);
criterion_main!(benches);
