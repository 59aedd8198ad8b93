use std::collections::BTreeSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use tswap::config::Config;
use tswap::game::{
    find_matches, CascadeReport, ClickOutcome, Game, GameEvent, Grid, NullSink, Phase, Pos,
};
use tswap::logging;
use tswap::GameError;

fn small_game() -> Game {
    Game::from_grid(
        Grid::from_rows(&["PPBP", "GUOY", "OYGU", "YGUO"]).unwrap(),
        StdRng::seed_from_u64(5),
    )
}

mod selection {
    use super::*;

    #[test]
    fn distant_second_click_is_rejected_without_mutation() {
        let mut game = Game::with_rng(10, 10, StdRng::seed_from_u64(11)).unwrap();
        let before = game.grid().clone();
        let mut events = Vec::new();

        assert_eq!(game.click(Pos::new(3, 3), &mut events).unwrap(), ClickOutcome::Selected);
        assert_eq!(game.click(Pos::new(3, 5), &mut events).unwrap(), ClickOutcome::Rejected);

        assert_eq!(
            events,
            vec![GameEvent::InvalidSwap { a: Pos::new(3, 3), b: Pos::new(3, 5) }]
        );
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn diagonal_click_is_not_a_swap() {
        let mut game = small_game();
        game.click(Pos::new(1, 1), &mut NullSink).unwrap();
        assert_eq!(
            game.click(Pos::new(2, 2), &mut NullSink).unwrap(),
            ClickOutcome::Rejected
        );
    }

    #[test]
    fn adjacent_click_queues_the_swap_for_the_next_step() {
        let mut game = small_game();
        let mut events = Vec::new();
        game.click(Pos::new(0, 2), &mut events).unwrap();
        assert_eq!(game.click(Pos::new(0, 3), &mut events).unwrap(), ClickOutcome::SwapQueued);
        assert_eq!(game.phase(), Phase::Swapping(Pos::new(0, 2), Pos::new(0, 3)));
        assert!(events.is_empty());

        assert_eq!(game.step(&mut events).unwrap(), Phase::Resolving);
        assert_eq!(game.grid().to_rows()[0], "PPPB");
        assert_eq!(&events[..2], &[
            GameEvent::TileSet { pos: Pos::new(0, 2), color: tswap::Color::Pink },
            GameEvent::TileSet { pos: Pos::new(0, 3), color: tswap::Color::Blue },
        ]);
    }
}

mod cascade {
    use super::*;

    #[test]
    fn first_pass_clears_exactly_the_new_run() {
        let mut game = small_game();
        let mut events = Vec::new();
        game.click(Pos::new(0, 2), &mut NullSink).unwrap();
        game.click(Pos::new(0, 3), &mut NullSink).unwrap();
        game.step(&mut NullSink).unwrap();

        assert_eq!(game.step(&mut events).unwrap(), Phase::ApplyingGravity);
        let cleared: BTreeSet<Pos> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::TileCleared { pos } => Some(*pos),
                _ => None,
            })
            .collect();
        let expected: BTreeSet<Pos> = [(0, 0), (0, 1), (0, 2)]
            .into_iter()
            .map(|(r, c)| Pos::new(r, c))
            .collect();
        assert_eq!(cleared, expected);
        assert_eq!(events.last(), Some(&GameEvent::ScoreChanged { score: 3 }));
        assert_eq!(game.grid().count_empty(), 3);
    }

    #[test]
    fn non_matching_swap_is_kept_and_scores_nothing() {
        let mut game = small_game();
        game.click(Pos::new(1, 0), &mut NullSink).unwrap();
        game.click(Pos::new(1, 1), &mut NullSink).unwrap();
        let report = game.settle(&mut NullSink).unwrap();

        assert_eq!(report, CascadeReport { passes: 0, removed: 0 });
        assert_eq!(game.grid().to_rows()[1], "UGOY");
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn score_is_the_sum_of_every_pass() {
        let mut game = small_game();
        let mut events = Vec::new();
        game.click(Pos::new(0, 2), &mut events).unwrap();
        game.click(Pos::new(0, 3), &mut events).unwrap();
        let report = game.settle(&mut events).unwrap();

        let cleared = events
            .iter()
            .filter(|e| matches!(e, GameEvent::TileCleared { .. }))
            .count() as u64;
        let passes = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ScoreChanged { .. }))
            .count() as u32;

        assert_eq!(game.score(), cleared);
        assert_eq!(report.removed, cleared);
        assert_eq!(report.passes, passes);
        assert!(report.passes >= 1);
        assert_eq!(game.longest_chain(), report.passes);
        assert_eq!(
            events.last(),
            Some(&GameEvent::CascadeFinished { passes: report.passes, removed: report.removed })
        );
    }

    #[test]
    fn random_play_always_settles_into_a_stable_full_board() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = Game::with_rng(10, 10, StdRng::seed_from_u64(3)).unwrap();
        let mut total = 0;

        for _ in 0..200 {
            let a = Pos::new(rng.gen_range(0..10), rng.gen_range(0..9));
            let b = Pos::new(a.row, a.col + 1);
            game.click(a, &mut NullSink).unwrap();
            game.click(b, &mut NullSink).unwrap();
            let report = game.settle(&mut NullSink).unwrap();
            total += report.removed;

            assert_eq!(game.phase(), Phase::Idle);
            assert!(find_matches(game.grid()).is_empty());
            assert_eq!(game.grid().count_empty(), 0);
        }

        assert_eq!(game.score(), total);
        assert_eq!(game.moves(), 200);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let config = Config {
            seed: Some(2024),
            ..Config::default()
        };
        let a = Game::new(&config).unwrap();
        let b = Game::new(&config).unwrap();
        assert_eq!(a.grid(), b.grid());
    }
}

#[test]
fn verbose_log_records_the_cascade() {
    let path = std::env::temp_dir().join(format!("tswap-log-{}.txt", std::process::id()));
    logging::init_log_file(&path).unwrap();
    logging::enable_verbose_logging();

    let mut game = small_game();
    game.click(Pos::new(0, 2), &mut NullSink).unwrap();
    game.click(Pos::new(0, 3), &mut NullSink).unwrap();
    game.settle(&mut NullSink).unwrap();

    logging::disable_verbose_logging();
    let contents = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(contents.contains("swap"));
    assert!(contents.contains("cascade done"));
}

#[test]
fn log_file_that_cannot_be_opened_is_an_io_error() {
    // A directory cannot be opened as a log file
    let result = logging::init_log_file(&std::env::temp_dir());
    assert!(matches!(result, Err(GameError::Io(_))));
}
