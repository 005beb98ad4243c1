#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use tictactoe_core::{EngineConfig, GameEngine, GameStatus, Move};

    #[derive(Debug, Default)]
    struct Outcomes {
        engine_wins: u32,
        ties: u32,
        engine_losses: u32,
    }

    impl Outcomes {
        fn record(&mut self, game: &GameEngine) {
            match game.status() {
                GameStatus::Won(_) if game.winner().is_some_and(|p| p.is_human) => {
                    self.engine_losses += 1;
                }
                GameStatus::Won(_) => self.engine_wins += 1,
                GameStatus::Tied => self.ties += 1,
                status => panic!("recorded an unfinished game: {status:?}"),
            }
        }
    }

    fn is_over(game: &GameEngine) -> bool {
        game.has_winner() || game.is_tied()
    }

    /// Tries every human reply at every turn; the engine answers with its
    /// search.
    fn explore(game: &GameEngine, outcomes: &mut Outcomes) {
        if game.current_player().is_human {
            let label = game.current_player().label;
            for coord in game.board().empty_cells() {
                let mut next = game.clone();
                next.apply_move(Move::played(coord.row, coord.col, label))
                    .unwrap();
                advance(next, outcomes);
            }
        } else {
            let mut next = game.clone();
            next.select_computer_move().unwrap();
            advance(next, outcomes);
        }
    }

    fn advance(mut game: GameEngine, outcomes: &mut Outcomes) {
        if is_over(&game) {
            outcomes.record(&game);
        } else {
            game.toggle_player();
            explore(&game, outcomes);
        }
    }

    #[test]
    fn test_engine_never_loses_moving_second() {
        let game = GameEngine::default();
        let mut outcomes = Outcomes::default();
        explore(&game, &mut outcomes);

        assert_eq!(outcomes.engine_losses, 0, "{outcomes:?}");
        assert!(outcomes.engine_wins > 0);
        assert!(outcomes.ties > 0);
    }

    #[test]
    fn test_engine_never_loses_moving_first() {
        let game = GameEngine::new(EngineConfig {
            human_first: false,
            ..Default::default()
        })
        .unwrap();
        let mut outcomes = Outcomes::default();
        explore(&game, &mut outcomes);

        assert_eq!(outcomes.engine_losses, 0, "{outcomes:?}");
        assert!(outcomes.engine_wins > 0);
    }

    #[test]
    fn test_engine_against_itself_always_ties() {
        let players = [
            tictactoe_core::Player::computer('X', "blue", -10),
            tictactoe_core::Player::computer('O', "green", 10),
        ];
        let mut game = GameEngine::new(EngineConfig {
            players,
            ..Default::default()
        })
        .unwrap();

        while !is_over(&game) {
            game.select_computer_move().unwrap();
            if !is_over(&game) {
                game.toggle_player();
            }
        }
        assert_eq!(game.status(), GameStatus::Tied);
    }

    #[test]
    fn test_random_opponent_never_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GameEngine::default();
        let mut outcomes = Outcomes::default();

        for round in 0..200 {
            game.reset_with(round % 2 == 0);
            while !is_over(&game) {
                if game.current_player().is_human {
                    let label = game.current_player().label;
                    let empties: Vec<_> = game.board().empty_cells().collect();
                    let coord = *empties.choose(&mut rng).unwrap();
                    game.apply_move(Move::played(coord.row, coord.col, label))
                        .unwrap();
                } else {
                    game.select_computer_move().unwrap();
                }
                if !is_over(&game) {
                    game.toggle_player();
                }
            }
            outcomes.record(&game);
        }

        assert_eq!(outcomes.engine_losses, 0, "{outcomes:?}");
        assert_eq!(outcomes.engine_wins + outcomes.ties, 200);
    }
}
