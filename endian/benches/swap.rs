use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hostend::swap::{swap_bytes, swap_bytes_portable};
use hostend::{to_host_from_big, to_host_from_little};

fn bench_swap(c: &mut Criterion) {
    let values: Vec<u16> = (0..=u16::MAX).collect();
    let mut group = c.benchmark_group("swap_all_u16");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("portable", |b| {
        b.iter(|| values.iter().fold(0u16, |acc, &x| acc ^ swap_bytes_portable(black_box(x))))
    });
    group.bench_function("configured", |b| {
        b.iter(|| values.iter().fold(0u16, |acc, &x| acc ^ swap_bytes(black_box(x))))
    });
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let raw: Vec<u16> = (0..=u16::MAX).collect();
    c.bench_function("to_host_from_big", |b| {
        b.iter(|| raw.iter().map(|&x| to_host_from_big(black_box(x)) as u32).sum::<u32>())
    });
    c.bench_function("to_host_from_little", |b| {
        b.iter(|| raw.iter().map(|&x| to_host_from_little(black_box(x)) as u32).sum::<u32>())
    });
}

criterion_group!(benches, bench_swap, bench_convert);
criterion_main!(benches);
