use criterion::{criterion_group, criterion_main, Criterion};
use huffman::{analyze, decode, encode, CodeTable, CodeTree};

fn skewed_input(len: usize) -> Vec<u8> {
    // Roughly geometric: symbol k appears about half as often as k - 1.
    (0..len)
        .map(|i| (i.trailing_ones() as u8).min(15) + b'a')
        .collect()
}

fn bench_huffman_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    let input = skewed_input(10_000);

    group.bench_function("analyze", |b| b.iter(|| analyze(&input)));

    let freq = analyze(&input);
    group.bench_function("build", |b| b.iter(|| CodeTree::build(&freq)));

    let tree = CodeTree::build(&freq).unwrap();
    let table = CodeTable::generate(&tree);

    group.bench_function("encode", |b| b.iter(|| encode(&input, &table).unwrap()));

    let bits = encode(&input, &table).unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| decode(&bits, &tree, Some(input.len())).unwrap())
    });
}

fn bench_huffman_alphabet(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_alphabet");
    let input = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect::<Vec<_>>();
    let freq = analyze(&input);

    group.bench_function("build_251", |b| b.iter(|| CodeTree::build(&freq)));
    group.bench_function("generate_251", |b| {
        let tree = CodeTree::build(&freq).unwrap();
        b.iter(|| CodeTable::generate(&tree))
    });
}

criterion_group!(benches, bench_huffman_pipeline, bench_huffman_alphabet);
criterion_main!(benches);
