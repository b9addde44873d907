use std::{collections::HashSet, time::Duration};

use gomoku::{Game, Grid, Outcome, Piece, Pos};
use rand::{rngs::StdRng, SeedableRng};

use super::{node::Node, Search};
use crate::{config::SearchConfig, decide, error::SearchError, heuristics};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn check_counts<const N: usize>(node: &Node<N>) {
    assert!(node.rewards <= node.visits);
    let child_visits: u32 = node.children().iter().map(|child| child.visits).sum();
    assert!(child_visits <= node.visits);
    for child in node.children() {
        check_counts(child);
    }
}

#[test]
fn the_search_picks_an_empty_cell() {
    let mut game = Game::<11>::default();
    game.play(Pos { row: 5, col: 5 }).unwrap();

    let mut search = Search::new(game.clone());
    search.run_iterations(200, &mut rng()).unwrap();
    let pos = search.best_move().unwrap();
    assert_eq!(game.grid.get(pos), None);
}

#[test]
fn root_visits_count_the_iterations() {
    let mut game = Game::<11>::default();
    game.play(Pos { row: 5, col: 5 }).unwrap();

    let mut search = Search::new(game);
    search.run_iterations(137, &mut rng()).unwrap();
    assert_eq!(search.iterations(), 137);
    assert_eq!(search.root().visits, 137);
}

#[test]
fn rewards_never_exceed_visits() {
    let mut game = Game::<11>::default();
    game.play(Pos { row: 4, col: 7 }).unwrap();
    game.play(Pos { row: 5, col: 7 }).unwrap();

    let mut search = Search::new(game);
    search.run_iterations(300, &mut rng()).unwrap();
    check_counts(search.root());
}

#[test]
fn seeded_searches_repeat_themselves() {
    let mut game = Game::<11>::default();
    game.play(Pos { row: 5, col: 5 }).unwrap();

    let mut first = Search::new(game.clone());
    first.run_iterations(100, &mut rng()).unwrap();
    let mut second = Search::new(game);
    second.run_iterations(100, &mut rng()).unwrap();
    assert_eq!(first.best_move().unwrap(), second.best_move().unwrap());
}

#[test]
fn uct_ties_go_to_the_first_child() {
    let mut root = Node::new(Game::<11>::default());
    let first = Pos { row: 5, col: 5 };
    let second = Pos { row: 5, col: 6 };
    root.expand(first).unwrap().record(Piece::Black);
    root.expand(second).unwrap().record(Piece::Black);
    root.record(Piece::Black);
    root.record(Piece::Black);

    let best = root.best_child().unwrap();
    assert_eq!(best.last_move, Some(first));
}

#[test]
fn decision_ties_go_to_the_first_expansion() {
    let mut search = Search::new(Game::<11>::default());
    let first = Pos { row: 4, col: 4 };
    let second = Pos { row: 6, col: 6 };
    search.root.expand(first).unwrap().record(Piece::Black);
    search.root.expand(second).unwrap().record(Piece::Black);
    assert_eq!(search.best_move().unwrap(), first);
}

#[test]
fn a_decided_root_reports_no_children() {
    let mut game = Game::<11>::default();
    for col in 0..4 {
        game.play(Pos { row: 5, col }).unwrap();
        game.play(Pos { row: 0, col }).unwrap();
    }
    game.play(Pos { row: 5, col: 4 }).unwrap();
    assert_eq!(game.outcome, Outcome::Winner(Piece::Black));

    let mut search = Search::new(game);
    assert_eq!(search.run(&mut rng()), Err(SearchError::NoChildren));
}

#[test]
fn simulating_a_decided_node_returns_its_winner() {
    let mut game = Game::<11>::default();
    for col in 0..4 {
        game.play(Pos { row: 5, col }).unwrap();
        game.play(Pos { row: 0, col }).unwrap();
    }
    game.play(Pos { row: 5, col: 4 }).unwrap();

    let node = Node::new(game);
    assert_eq!(node.simulate(&mut rng()), Piece::Black);
}

#[test]
fn decide_returns_a_move_within_the_budget() {
    let mut game = Game::<11>::default();
    game.play(Pos { row: 5, col: 5 }).unwrap();
    let grid = game.grid.clone();

    let config = SearchConfig {
        budget: Duration::from_millis(50),
    };
    let pos = decide(&grid, Piece::White, config, &mut rng())
        .unwrap()
        .expect("an almost empty board always has a move");
    assert_eq!(grid.get(pos), None);
}

#[test]
fn decide_signals_a_board_with_nothing_left() {
    // Stripes of period four, shifted two per row: no five in any axis,
    // and no empty cell anywhere.
    let even = "b b w w b b w w b b w";
    let odd = "w w b b w w b b w w b";
    let rows = [
        even, odd, even, odd, even, odd, even, odd, even, odd, even,
    ];
    let grid: Grid<11> = Grid::from_rows(&rows).unwrap();
    assert!(grid.full());

    let game = Game::from_grid(grid.clone(), Piece::Black);
    assert!(heuristics::candidate_moves(&game, &HashSet::new()).is_empty());

    let config = SearchConfig {
        budget: Duration::from_millis(10),
    };
    assert_eq!(decide(&grid, Piece::Black, config, &mut rng()), Ok(None));
}
