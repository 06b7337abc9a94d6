use chess_sim::{Board, Color, Game};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn stupid_game(mut game: Game, max_steps: usize, rng: &mut StdRng) -> Game {
    for _ in 0..max_steps {
        game.random_move_with(rng);
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    let board = Board::filled();
    c.bench_function("start moves", |b| {
        b.iter(|| black_box(&board).available_moves(Color::White))
    });
    c.bench_function("start evaluated moves", |b| {
        b.iter(|| black_box(&board).evaluated_moves(Color::White))
    });
    c.bench_function("stupid game 100", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| stupid_game(Game::default(), 100, &mut rng))
    });
    let mut rng = StdRng::seed_from_u64(1);
    let middle_game = stupid_game(Game::default(), 30, &mut rng);
    c.bench_function("best moves", |b| {
        b.iter(|| black_box(&middle_game).evaluate_best_moves())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
