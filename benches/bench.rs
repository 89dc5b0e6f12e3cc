use std::env;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::Lazy;
use regex::Regex;

use bubble_sort_rs::stable::{rust_bubble, rust_std};
use sort_test_tools::{patterns, Sort};

// Benchmarks are named `<sort>-<pattern>-<type>-<len>`, e.g. `rust_bubble_stable-random-i32-100`.
// Set BENCH_REGEX to only run the matching ones.
static BENCH_FILTER: Lazy<Option<Regex>> = Lazy::new(|| {
    env::var("BENCH_REGEX")
        .ok()
        .map(|filter| Regex::new(&filter).expect("BENCH_REGEX is not a valid regex"))
});

const BENCH_SIZES: [usize; 4] = [10, 100, 1_000, 4_000];

fn pin_thread_to_core() {
    if env::var("BENCH_PIN_CORE").is_err() {
        return;
    }

    // Less noise when the bench thread does not migrate between cores.
    if let Some(core_id) = core_affinity::get_core_ids().and_then(|ids| ids.first().copied()) {
        let _ = core_affinity::set_for_current(core_id);
    }
}

fn bench_sort<S: Sort>(
    c: &mut Criterion,
    len: usize,
    pattern_name: &str,
    pattern_provider: &dyn Fn(usize) -> Vec<i32>,
) {
    let bench_name = format!("{}-{pattern_name}-i32-{len}", S::name());
    if let Some(filter) = BENCH_FILTER.as_ref() {
        if !filter.is_match(&bench_name) {
            return;
        }
    }

    let input = pattern_provider(len);

    c.bench_function(&bench_name, |b| {
        b.iter_batched_ref(
            || input.clone(),
            |test_data| S::sort(black_box(test_data.as_mut_slice())),
            BatchSize::SmallInput,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    pin_thread_to_core();

    let pattern_providers: [(&str, &dyn Fn(usize) -> Vec<i32>); 6] = [
        ("random", &patterns::random),
        ("random_d20", &|len| patterns::random_uniform(len, 0..20)),
        ("ascending", &patterns::ascending),
        ("descending", &patterns::descending),
        ("saw_mixed", &|len| patterns::saw_mixed(len, 8)),
        ("pipe_organ", &patterns::pipe_organ),
    ];

    for len in BENCH_SIZES {
        for (pattern_name, pattern_provider) in pattern_providers {
            bench_sort::<rust_bubble::SortImpl>(c, len, pattern_name, pattern_provider);
            bench_sort::<rust_std::SortImpl>(c, len, pattern_name, pattern_provider);
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
