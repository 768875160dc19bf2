use criterion::{black_box, criterion_group, criterion_main, Criterion};

use questlog_core::{Goal, ProgressLedger, QuestEngine};

fn seeded_engine(goal_count: usize) -> QuestEngine {
    let mut engine = QuestEngine::new();
    for i in 0..goal_count {
        engine
            .add_goal(Goal::eternal(format!("goal-{i}"), "bench", 10))
            .unwrap();
    }
    engine
}

fn bench_ledger_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_apply");

    group.bench_function("no_level_up", |b| {
        b.iter(|| {
            let mut ledger = ProgressLedger::new();
            ledger.apply(black_box(500))
        })
    });

    group.bench_function("ten_level_ups", |b| {
        b.iter(|| {
            let mut ledger = ProgressLedger::new();
            ledger.apply(black_box(10_000))
        })
    });

    group.finish();
}

fn bench_record_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_event");

    for goal_count in [10, 100, 1000] {
        group.bench_function(format!("lookup_among_{goal_count}"), |b| {
            let mut engine = seeded_engine(goal_count);
            let last = format!("goal-{}", goal_count - 1);
            b.iter(|| engine.record_event(black_box(&last)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ledger_apply, bench_record_event);
criterion_main!(benches);
