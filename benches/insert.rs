use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depthtrie::trie::{DepthIndexedTrie, PathTrie};

fn wordlist(count: usize) -> Vec<String> {
    // Deterministic pseudo-words over a small alphabet.
    let mut state: u32 = 0x9e37_79b9;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 3)) % 16) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for count in [1_000, 10_000] {
        let words = wordlist(count);
        group.bench_with_input(BenchmarkId::new("depth", count), &words, |b, words| {
            b.iter(|| {
                let trie: DepthIndexedTrie<char> = words.iter().collect();
                black_box(trie)
            })
        });
        group.bench_with_input(BenchmarkId::new("path", count), &words, |b, words| {
            b.iter(|| {
                let trie: PathTrie<char> = words.iter().collect();
                black_box(trie)
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let words = wordlist(10_000);
    let depth: DepthIndexedTrie<char> = words.iter().collect();
    let path: PathTrie<char> = words.iter().collect();

    let mut group = c.benchmark_group("search");
    group.bench_function("depth", |b| {
        b.iter(|| words.iter().filter(|w| depth.search(*w)).count())
    });
    group.bench_function("path", |b| {
        b.iter(|| words.iter().filter(|w| path.search(*w)).count())
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
