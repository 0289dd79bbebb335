use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tictactoe::{Board, INFINITY, MinimaxBot, Player, RandomBot, minimax, select_best_move, simulate};

fn bench_select_best_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_best_move");

    group.bench_function("empty_board", |b| {
        b.iter(|| {
            let mut board = Board::new();
            select_best_move(black_box(&mut board), Player::Computer)
        })
    });

    let reply: Board = "x../.../...".parse().unwrap();
    group.bench_function("reply_to_corner", |b| {
        b.iter(|| {
            let mut board = reply.clone();
            select_best_move(black_box(&mut board), Player::Computer)
        })
    });

    let mid_game: Board = "xo./.x./...".parse().unwrap();
    group.bench_function("mid_game", |b| {
        b.iter(|| {
            let mut board = mid_game.clone();
            select_best_move(black_box(&mut board), Player::Computer)
        })
    });

    group.finish();
}

fn bench_minimax(c: &mut Criterion) {
    c.bench_function("minimax_full_tree", |b| {
        let mut board = Board::new();
        b.iter(|| minimax(black_box(&mut board), false, -INFINITY, INFINITY))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board: Board = "xox/oxo/.x.".parse().unwrap();
    c.bench_function("evaluate", |b| b.iter(|| black_box(&board).evaluate()));
}

fn bench_simulated_match(c: &mut Criterion) {
    c.bench_function("simulate_10_rounds", |b| {
        b.iter(|| {
            let mut stand_in = RandomBot::seeded(3);
            simulate(Box::new(MinimaxBot::new()), &mut stand_in, 10)
        })
    });
}

criterion_group!(
    benches,
    bench_select_best_move,
    bench_minimax,
    bench_evaluate,
    bench_simulated_match
);
criterion_main!(benches);
