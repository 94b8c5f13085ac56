use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rbrutils::{PHONE_UTIL, PhoneType};

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "11994029275",
        "1635014415",
        "333333",
        "11894029275",
        "(11)99402-9275",
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Validation and formatting");

    group.bench_function("is_valid(any)", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = PHONE_UTIL.is_valid(black_box(number), None);
            }
        })
    });

    group.bench_function("is_valid(mobile)", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = PHONE_UTIL.is_valid(black_box(number), Some(PhoneType::Mobile));
            }
        })
    });

    group.bench_function("format_phone()", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = PHONE_UTIL.format_phone(black_box(number));
            }
        })
    });

    group.bench_function("remove_symbols()", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = PHONE_UTIL.remove_symbols(black_box(number));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
