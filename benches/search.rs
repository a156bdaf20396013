//! Benchmarks for the lineage search loop.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use lineage::{MutationKind, Search, SearchConfig};

fn count_a(genes: &[char]) -> usize {
    genes.iter().filter(|&&g| g == 'A').count()
}

fn bench_substitution_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitution_search");

    for length in [8usize, 16, 32, 64] {
        let target = length / 2;

        group.bench_with_input(
            BenchmarkId::from_parameter(length),
            &length,
            |b, &length| {
                b.iter(|| {
                    let config = SearchConfig {
                        genome_length: length,
                        mutation: MutationKind::Substitution,
                        max_age: Some(50),
                        random_seed: 42,
                    };
                    let search =
                        Search::new(vec!['A', 'T', 'G', 'C'], count_a, target, config).unwrap();
                    black_box(search.run())
                });
            },
        );
    }

    group.finish();
}

fn bench_transposition_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("transposition_search");

    for length in [8usize, 16, 32] {
        // Seeding scatters length/4 'A's through the genome; the search has
        // to gather them into the front half by swapping.
        let target = length / 4;
        let front_a =
            move |genes: &[char]| genes[..length / 2].iter().filter(|&&g| g == 'A').count();

        group.bench_with_input(
            BenchmarkId::from_parameter(length),
            &length,
            |b, &length| {
                b.iter(|| {
                    let config = SearchConfig {
                        genome_length: length,
                        mutation: MutationKind::Transposition,
                        max_age: Some(50),
                        random_seed: 42,
                    };
                    let search =
                        Search::new(vec!['A', 'T', 'G', 'C'], front_a, target, config).unwrap();
                    black_box(search.run())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_substitution_search, bench_transposition_search);
criterion_main!(benches);
