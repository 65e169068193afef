use criterion::{black_box, criterion_group, criterion_main, Criterion};
use physalia_text::{longest_palindrome, Matcher, MatcherKind};

fn random_text(n: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            alphabet[(state >> 33) as usize % alphabet.len()]
        })
        .collect()
}

fn bench_matchers(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all");
    let text = random_text(1 << 20, b"ab", 42);
    let pattern = b"abbaba";

    for kind in [MatcherKind::Kmp, MatcherKind::RabinKarp] {
        let matcher = Matcher::new(pattern, kind);
        group.bench_function(format!("{kind:?}_1MiB"), |b| {
            b.iter(|| matcher.occurrences(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_manacher(c: &mut Criterion) {
    let mut group = c.benchmark_group("manacher");
    let text = random_text(1 << 18, b"ab", 7);

    group.bench_function("256k_binary_alphabet", |b| {
        b.iter(|| longest_palindrome(black_box(&text)))
    });

    group.finish();
}

criterion_group!(benches, bench_matchers, bench_manacher);
criterion_main!(benches);
