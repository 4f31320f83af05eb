criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        cloning_opening_table,
        deriving_pool_snapshot,
        planning_purchase,
        enumerating_legal_actions,
        playing_token_rounds,
}

use splendor_engine::game::transitions;
use splendor_engine::{Action, Game, GameRng, GameState, Gem, Level, PlayerState, RulesConfig};

fn opening() -> GameState {
    GameState::setup(4, &RulesConfig::default(), &GameRng::new(7)).unwrap()
}

fn cloning_opening_table(c: &mut criterion::Criterion) {
    let state = opening();
    c.bench_function("clone a 4-player opening table", |b| {
        b.iter(|| state.clone())
    });
}

fn deriving_pool_snapshot(c: &mut criterion::Criterion) {
    let state = opening();
    c.bench_function("derive a table with a new token pool", |b| {
        b.iter(|| {
            let mut pool = *state.pool();
            pool.add(Gem::Red, 1);
            state.with_pool(pool)
        })
    });
}

fn planning_purchase(c: &mut criterion::Criterion) {
    let config = RulesConfig::default();
    let state = opening();
    let mut tokens = splendor_engine::PlayerTokenCache::new(config.player_token_limit);
    tokens.add(Gem::Yellow, 10);
    let player = PlayerState::empty(&config).with_tokens(tokens);
    let card = state.deck(Level::One).facing()[0].clone();
    let action = Action::PurchaseCard(card);

    c.bench_function("plan a level 1 purchase", |b| {
        b.iter(|| transitions::plan(&config, &state, &player, &action))
    });
}

fn enumerating_legal_actions(c: &mut criterion::Criterion) {
    let mut game = Game::new(4, 7).unwrap();
    let player = game.add_player("bench").unwrap();
    for _ in 1..4 {
        game.add_random_player().unwrap();
    }
    c.bench_function("enumerate opening legal actions", |b| {
        b.iter(|| game.legal_actions(player))
    });
}

fn playing_token_rounds(c: &mut criterion::Criterion) {
    c.bench_function("play a round of token takes with 4 players", |b| {
        b.iter(|| {
            let mut game = Game::new(4, 7).unwrap();
            let players: Vec<_> = (0..4).map(|_| game.add_random_player().unwrap()).collect();
            let picks = [
                [Gem::Black, Gem::Blue, Gem::Green],
                [Gem::Red, Gem::White, Gem::Black],
                [Gem::Blue, Gem::Green, Gem::Red],
                [Gem::White, Gem::Black, Gem::Blue],
            ];
            for (player, colors) in players.into_iter().zip(picks) {
                game.take_three_tokens(player, colors).unwrap();
            }
            game
        })
    });
}
