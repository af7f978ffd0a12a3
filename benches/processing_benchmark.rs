use cnefe2josm::models::{DecodedRow, Layout};
use cnefe2josm::processors::RowTransformer;
use cnefe2josm::readers::decode_fixed_width;
use cnefe2josm::utils::{DmsCoordinate, SignConvention, FIXED_WIDTH_FIELDS};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Create district records for benchmarking
fn create_district_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut chars: Vec<char> = vec![' '; 560];
            let fields = [
                (0, format!("{:015}", i)),
                (16, "RUA".to_string()),
                (36, "DOUTOR".to_string()),
                (66, format!("JOAQUIM  NABUCO {}", i % 97)),
                (129, format!("{}", i % 1000)),
                (321, format!("{:02} {:02} {:02} S", i % 33, i % 60, (i * 7) % 60)),
                (336, format!("{:02} {:02} {:02} O", 35 + i % 38, i % 60, (i * 11) % 60)),
                (473, "CENTRO".to_string()),
            ];
            for (offset, value) in fields {
                for (j, ch) in value.chars().enumerate() {
                    chars[offset + j] = ch;
                }
            }
            chars.into_iter().collect()
        })
        .collect()
}

fn benchmark_coordinates(c: &mut Criterion) {
    let coordinate = DmsCoordinate::parse("23 32 51.48 S").unwrap();

    c.bench_function("format_symbolic", |b| {
        b.iter(|| black_box(coordinate).format_symbolic())
    });

    c.bench_function("to_decimal_degrees", |b| {
        b.iter(|| {
            black_box(coordinate)
                .to_decimal_degrees(SignConvention::AlwaysNegative)
                .unwrap()
        })
    });
}

fn benchmark_district_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("district_decoding");
    let transformer = RowTransformer::new(Layout::District.descriptor(), SignConvention::default());

    for line_count in [100, 1000].iter() {
        let lines = create_district_lines(*line_count);

        group.bench_with_input(
            BenchmarkId::new("decode_and_transform", line_count),
            &lines,
            |b, lines| {
                b.iter(|| {
                    for (i, line) in lines.iter().enumerate() {
                        let fields = decode_fixed_width(black_box(line), &FIXED_WIDTH_FIELDS);
                        let row = DecodedRow::new(i + 1, fields);
                        black_box(transformer.transform(&row).unwrap());
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_coordinates, benchmark_district_decoding);
criterion_main!(benches);
