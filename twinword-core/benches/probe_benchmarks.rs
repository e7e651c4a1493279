use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twinword_core::{evaluate, test_one_input};

fn bench_test_one_input(c: &mut Criterion) {
	let equal = [0xA5u8; 16];
	let mut distinct = [0xA5u8; 16];
	distinct[15] ^= 1;
	let short = [0u8; 15];
	c.bench_function("test_one_input equal", |b| b.iter(|| black_box(test_one_input(black_box(&equal)))));
	c.bench_function("test_one_input distinct", |b| b.iter(|| black_box(test_one_input(black_box(&distinct)))));
	c.bench_function("test_one_input wrong length", |b| b.iter(|| black_box(test_one_input(black_box(&short)))));
}

fn bench_evaluate_mixed(c: &mut Criterion) {
	let inputs: Vec<Vec<u8>> = (0..64u8).map(|i| vec![i; usize::from(i % 20)]).collect();
	c.bench_function("evaluate 64 mixed inputs", |b| {
		b.iter(|| {
			let mut total = 0u64;
			for input in &inputs { total = total.wrapping_add(evaluate(input).code()); }
			black_box(total)
		})
	});
}

criterion_group!(benches, bench_test_one_input, bench_evaluate_mixed);
criterion_main!(benches);
