use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_ladder::{Dictionary, LadderSolver};

fn bench_search(c: &mut Criterion) {
    let dict = Dictionary::load_from_path("dictionary.txt", 3).unwrap();
    let solver = LadderSolver::new(&dict);

    c.bench_function("greedy_steps cot->dog", |b| {
        b.iter(|| solver.greedy_steps(black_box("cot"), black_box("dog")))
    });

    c.bench_function("shortest_ladder cat->dog", |b| {
        b.iter(|| solver.shortest_ladder(black_box("cat"), black_box("dog")))
    });

    c.bench_function("solve cat->dog", |b| {
        b.iter(|| solver.solve(black_box("cat"), black_box("dog")))
    });
}

fn bench_dictionary(c: &mut Criterion) {
    c.bench_function("load_from_path len 3", |b| {
        b.iter(|| Dictionary::load_from_path(black_box("dictionary.txt"), 3))
    });
}

criterion_group!(benches, bench_search, bench_dictionary);
criterion_main!(benches);
