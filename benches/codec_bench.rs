use abits::{AlphabetTable, BitWidth, SymbolCodec};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::hint::black_box;

fn random_text(rng: &mut impl Rng, width: BitWidth, len: usize) -> String {
    let table = AlphabetTable::canonical();
    (0..len)
        .map(|_| {
            let code = rng.random_range(0..width.alphabet_len()) as u8;
            table.symbol_of(code).unwrap()
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut rng = rand::rng();

    let widths = [BitWidth::Base2, BitWidth::Base16, BitWidth::Base64];
    let sizes = [("Small", 64), ("Medium", 4_096), ("Large", 262_144)];

    for (size_name, size) in sizes {
        let mut group_encode = c.benchmark_group(format!("Encode_{size_name}"));
        group_encode.throughput(Throughput::Bytes(size as u64));
        for width in widths {
            let text = random_text(&mut rng, width, size);
            group_encode.bench_with_input(
                BenchmarkId::new(width.name(), size),
                &text,
                |b, t| b.iter(|| SymbolCodec::encode(black_box(t), width).unwrap()),
            );
        }
        group_encode.finish();

        let mut group_decode = c.benchmark_group(format!("Decode_{size_name}"));
        group_decode.throughput(Throughput::Bytes(size as u64));
        for width in widths {
            let text = random_text(&mut rng, width, size);
            let codec = SymbolCodec::encode(&text, width).unwrap();
            group_decode.bench_with_input(
                BenchmarkId::new(width.name(), size),
                &codec,
                |b, codec| b.iter(|| black_box(codec).decode()),
            );
        }
        group_decode.finish();
    }
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
