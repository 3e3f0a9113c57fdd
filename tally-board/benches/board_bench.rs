use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tally_board::{Scoreboard, TickContext, WorldHost};
use tally_types::{EntityRef, EntityUid};

struct BenchWorld;

impl WorldHost for BenchWorld {
    fn tick(&self) -> u64 {
        0
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn entity(&self, _uid: EntityUid) -> Option<EntityRef> {
        None
    }
}

fn populate(board: &mut Scoreboard, ctx: &TickContext<'_>) -> tally_board::Objective {
    let objective = board.add_objective(ctx, "bench", "Bench").unwrap();
    for i in 0..1_000 {
        board
            .set_score(ctx, &objective, format!("player_{i}"), f64::from(i))
            .unwrap();
    }
    objective
}

fn bench_set_scores(c: &mut Criterion) {
    let world = BenchWorld;
    c.bench_function("set_score_1k_fake_players", |b| {
        b.iter(|| {
            let ctx = TickContext::new(&world);
            let mut board = Scoreboard::new();
            populate(&mut board, &ctx);
            black_box(board);
        });
    });
}

fn bench_score_lookup(c: &mut Criterion) {
    let world = BenchWorld;
    let ctx = TickContext::new(&world);
    let mut board = Scoreboard::new();
    let objective = populate(&mut board, &ctx);
    c.bench_function("score_lookup", |b| {
        b.iter(|| black_box(board.score(&ctx, &objective, "player_500").unwrap()));
    });
}

fn bench_scores_snapshot(c: &mut Criterion) {
    let world = BenchWorld;
    let ctx = TickContext::new(&world);
    let mut board = Scoreboard::new();
    let objective = populate(&mut board, &ctx);
    c.bench_function("scores_snapshot_1k", |b| {
        b.iter(|| black_box(board.scores(&objective).unwrap()));
    });
}

fn bench_remint_churn(c: &mut Criterion) {
    let world = BenchWorld;
    let ctx = TickContext::new(&world);
    let mut board = Scoreboard::new();
    let objective = board.add_objective(&ctx, "bench", "Bench").unwrap();
    board.set_score(&ctx, &objective, "churn", 0.0).unwrap();
    c.bench_function("remove_then_remint", |b| {
        b.iter(|| {
            board.remove_participant(&ctx, &objective, "churn").unwrap();
            board.set_score(&ctx, &objective, "churn", 1.0).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_set_scores,
    bench_score_lookup,
    bench_scores_snapshot,
    bench_remint_churn
);
criterion_main!(benches);
