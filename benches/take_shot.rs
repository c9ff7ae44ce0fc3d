use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grid_golf::course::generate;
use grid_golf::{ClubKind, CourseSize, Direction, GameMode, GameRng, SessionBuilder};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_long_course", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| generate(black_box(CourseSize::Long), &mut rng))
    });
}

fn bench_take_shot(c: &mut Criterion) {
    let session = SessionBuilder::new()
        .mode(GameMode::DiceGolf)
        .size(CourseSize::Medium)
        .seed(7)
        .build();

    c.bench_function("take_shot_dice", |b| {
        b.iter_batched(
            || session.clone(),
            |mut s| s.take_shot(black_box(ClubKind::Driver), black_box(Direction::NORTH)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_reachable(c: &mut Criterion) {
    let session = SessionBuilder::new().size(CourseSize::Long).seed(7).build();
    c.bench_function("reachable_iron", |b| {
        b.iter(|| session.reachable(black_box(ClubKind::Iron)))
    });
}

criterion_group!(benches, bench_generate, bench_take_shot, bench_reachable);
criterion_main!(benches);
