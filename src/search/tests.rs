//! Search tests on small hand-built boards, plus comparisons against an
//! unpruned walk over the same candidate moves.

use super::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plain negamax over `candidate_moves`, no window. Counts visited positions.
fn exhaustive(
    board: &Board,
    player: Player,
    depth: u8,
    max_depth: u8,
    positions: &mut usize,
) -> (Option<TileColor>, i32) {
    *positions += 1;
    let mut best = (None, NEG_INFINITY);

    for color in candidate_moves(board, player) {
        let next = board.apply_move(color, player);
        let score = if depth >= max_depth {
            next.score(player)
        } else {
            -exhaustive(&next, player.opposite(), depth + 1, max_depth, positions).1
        };
        if score > best.1 {
            best = (Some(color), score);
        }
    }

    best
}

/// A seeded 8x7 board after `plies` random candidate moves.
fn midgame_position(seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::random_with_rng(&mut rng);
    let mut player = Player::Human;

    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let moves = candidate_moves(&board, player);
        let color = *moves.choose(&mut rng).unwrap();
        board = board.apply_move(color, player);
        player = player.opposite();
    }

    (board, player)
}

fn board(layout: &str) -> Board {
    layout.parse().unwrap()
}

#[test]
fn test_two_by_two_human_then_computer() {
    // r g
    // b y
    let start = board("rg/by");
    let after_human = start.apply_move(TileColor::Red, Player::Human);

    let mut agent = SearchAgent::new(1);
    let computer_move = agent.search(&after_human, Player::Computer).unwrap();
    assert_eq!(computer_move, TileColor::Yellow);
    assert_eq!(agent.stats().last_score, Some(0));

    let end = after_human.apply_move(computer_move, Player::Computer);
    assert!(end.is_terminal());
    assert_eq!(end.owned_count(Player::Human), 2);
    assert_eq!(end.owned_count(Player::Computer), 2);
}

#[test]
fn test_falls_back_to_first_legal_move() {
    // the computer walls the human into its corner, leaving one tile open
    let board = board("grwy/bgpr")
        .apply_move(TileColor::White, Player::Computer)
        .apply_move(TileColor::Red, Player::Computer)
        .apply_move(TileColor::Green, Player::Computer);
    assert_eq!(board.unowned_count(), 1);
    assert!(board.good_moves(Player::Human).is_empty());
    assert_eq!(board.legal_moves(Player::Human)[0], TileColor::Red);

    let mut agent = SearchAgent::new(0);
    assert_eq!(
        agent.choose_move(&board, Player::Human, 0, NEG_INFINITY, INFINITY),
        (Some(TileColor::Red), -5)
    );

    // the computer takes the last tile, then the human is stuck again
    let mut agent = SearchAgent::new(2);
    assert_eq!(
        agent.choose_move(&board, Player::Human, 0, NEG_INFINITY, INFINITY),
        (Some(TileColor::Red), -6)
    );
}

#[test]
fn test_finished_board_still_yields_a_move() {
    let board = board("rg/by")
        .apply_move(TileColor::Red, Player::Human)
        .apply_move(TileColor::Yellow, Player::Computer);
    assert!(board.is_terminal());

    let mut agent = SearchAgent::new(0);
    assert_eq!(
        agent.choose_move(&board, Player::Computer, 0, NEG_INFINITY, INFINITY),
        (Some(TileColor::Green), 0)
    );
}

#[test]
fn test_ties_keep_the_earliest_candidate() {
    // red and white each capture one tile for the human
    let board = board("gyp/wgr/brg");
    let mut agent = SearchAgent::new(0);
    assert_eq!(agent.search(&board, Player::Human), Ok(TileColor::Red));
    assert_eq!(agent.stats().last_score, Some(1));
}

#[test]
fn test_prefers_the_larger_capture() {
    // w r P
    // y g P
    // b r g
    let board = board("wrp/ygp/brg").with_territory(Player::Computer, &[5]);
    assert_eq!(
        board.good_moves(Player::Computer).as_slice(),
        &[TileColor::Red, TileColor::Green]
    );

    let mut agent = SearchAgent::new(0);
    assert_eq!(agent.search(&board, Player::Computer), Ok(TileColor::Green));
    assert_eq!(agent.stats().last_score, Some(3));
}

#[test]
fn test_minimizer_cuts_on_alpha_bound() {
    // y g P P
    // r w y P
    // g r g y
    // B B B g
    let board = board("ygpp/rwyp/grgy/bbbg")
        .with_territory(Player::Human, &[13, 14])
        .with_territory(Player::Computer, &[2, 7]);
    assert_eq!(
        board.good_moves(Player::Computer).as_slice(),
        &[TileColor::Green, TileColor::Yellow]
    );

    // Green scores 0 and sets alpha. After Yellow the human's first reply, red,
    // scores -1 for the human, which is below alpha, so green (worth +1 to the
    // human) is never tried and yellow comes back as +1 for the computer.
    let mut agent = SearchAgent::new(1);
    let pruned = agent.choose_move(&board, Player::Computer, 0, NEG_INFINITY, INFINITY);
    assert_eq!(pruned, (Some(TileColor::Yellow), 1));
    assert_eq!(agent.stats().cutoffs, 1);
    assert_eq!(agent.stats().positions_searched, 3);

    let mut positions = 0;
    let unpruned = exhaustive(&board, Player::Computer, 0, 1, &mut positions);
    assert_eq!(unpruned, (Some(TileColor::Green), 0));
    assert_eq!(positions, 3);
}

#[test]
fn test_matches_exhaustive_search_at_max_depth_zero() {
    for seed in 0..30 {
        let (board, player) = midgame_position(seed, (seed % 12) as usize);
        let mut agent = SearchAgent::new(0);
        let mut positions = 0;
        assert_eq!(
            agent.choose_move(&board, player, 0, NEG_INFINITY, INFINITY),
            exhaustive(&board, player, 0, 0, &mut positions),
            "seed {}\n{}",
            seed,
            board
        );
    }
}

#[test]
fn test_matches_exhaustive_search_when_nothing_is_cut() {
    for seed in 0..30 {
        let (board, player) = midgame_position(seed, 6);
        let mut agent = SearchAgent::new(2);
        let pruned = agent.choose_move(&board, player, 0, NEG_INFINITY, INFINITY);

        let mut positions = 0;
        let unpruned = exhaustive(&board, player, 0, 2, &mut positions);

        assert!(agent.stats().positions_searched <= positions);
        if agent.stats().cutoffs == 0 {
            assert_eq!(agent.stats().positions_searched, positions);
            assert_eq!(pruned, unpruned, "seed {}\n{}", seed, board);
        }
    }
}

#[test]
fn test_single_candidate_lines_match_exhaustive_search() {
    let board = board("rg/by").apply_move(TileColor::Red, Player::Human);
    for max_depth in 0..4 {
        let mut agent = SearchAgent::new(max_depth);
        let mut positions = 0;
        assert_eq!(
            agent.choose_move(&board, Player::Computer, 0, NEG_INFINITY, INFINITY),
            exhaustive(&board, Player::Computer, 0, max_depth, &mut positions),
            "max depth {}",
            max_depth
        );
    }
}

#[test]
fn test_search_leaves_board_untouched_and_records_stats() {
    let (board, player) = midgame_position(11, 4);
    let snapshot = board;

    let mut agent = SearchAgent::new(3);
    let best = agent.search(&board, player).unwrap();

    assert_eq!(board, snapshot);
    assert!(candidate_moves(&board, player).contains(&best));
    assert!(agent.stats().positions_searched > 1);
    assert!(agent.stats().last_score.is_some());
    assert!(agent.stats().last_search_duration.is_some());

    agent.reset_stats();
    assert_eq!(agent.stats().positions_searched, 0);
    assert_eq!(agent.stats().last_score, None);
}

#[test]
fn test_candidate_moves_prefer_good_moves() {
    let board = board("gyp/wgr/brg");
    assert_eq!(
        candidate_moves(&board, Player::Human).as_slice(),
        &[TileColor::Red, TileColor::White]
    );
}
