use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persona_core::{AdminCriteria, Person, UserCriteria};
use persona_filter::{filter_admins, filter_users};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_persons(n: usize) -> Vec<Person> {
    (0..n)
        .map(|i| {
            let age = 18 + (i % 50) as u32;
            if i % 3 == 0 {
                Person::admin(format!("admin-{i}"), age, "Administrator")
            } else {
                Person::user(format!("user-{i}"), age, "Astronaut")
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmark: tag selection + field match
// ---------------------------------------------------------------------------

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    for count in [10, 1_000, 100_000] {
        let persons = make_persons(count);

        group.bench_with_input(BenchmarkId::new("users_by_age", count), &persons, |b, p| {
            let criteria = UserCriteria::new().with_age(23);
            b.iter(|| filter_users(black_box(p), black_box(&criteria)))
        });

        group.bench_with_input(BenchmarkId::new("admins_any", count), &persons, |b, p| {
            let criteria = AdminCriteria::new();
            b.iter(|| filter_admins(black_box(p), black_box(&criteria)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
