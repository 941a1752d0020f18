//! Win condition checking
//!
//! A move wins when it completes five or more same-colored stones along one
//! of the four axes through it. Overlines count; there is no capture rule.
//!
//! The scan walks outward from the placed stone in both directions of each
//! axis, stopping at the first foreign cell, the board edge, or
//! [`SEARCH_RADIUS`] cells away.

use crate::board::{Board, Cell, Player, Pos};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// How far the scan looks in each direction
pub const SEARCH_RADIUS: isize = 5;

/// Direction vectors for line checking (4 axes, one half each)
const DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal up-right
];

/// Count same-colored stones from `pos` along `(dx, dy)`, origin excluded
fn count_direction(board: &Board, pos: Pos, dx: isize, dy: isize, color: Cell) -> usize {
    (1..=SEARCH_RADIUS)
        .map_while(|dist| pos.offset(dx, dy, dist, board.size()))
        .take_while(|&p| board.get(p) == color)
        .count()
}

/// Neighbour counts per axis: `(negative side, positive side)`
///
/// Order follows horizontal, vertical, down-right diagonal, up-right diagonal.
/// An empty origin yields all zeros.
pub fn axis_counts(board: &Board, pos: Pos) -> [(usize, usize); 4] {
    let color = board.get(pos);
    let mut counts = [(0, 0); 4];
    if color == Cell::Empty {
        return counts;
    }
    for (slot, (dx, dy)) in counts.iter_mut().zip(DIRECTIONS) {
        *slot = (
            count_direction(board, pos, -dx, -dy, color),
            count_direction(board, pos, dx, dy, color),
        );
    }
    counts
}

/// Check whether the stone at `pos` completes a five.
///
/// Returns the owner of that stone on a win. Pure read of the board.
pub fn check_win(board: &Board, pos: Pos) -> Option<Player> {
    let player = board.get(pos).player()?;
    axis_counts(board, pos)
        .iter()
        .any(|&(neg, pos_side)| neg + pos_side + 1 >= WIN_LENGTH)
        .then_some(player)
}

/// Positions of the winning run through `pos`, ordered along its axis.
///
/// Only the first winning axis is reported. `None` if the stone does not win.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let counts = axis_counts(board, pos);
    let size = board.size();
    DIRECTIONS
        .iter()
        .zip(counts)
        .find(|(_, (neg, pos_side))| neg + pos_side + 1 >= WIN_LENGTH)
        .map(|(&(dx, dy), (neg, pos_side))| {
            (-(neg as isize)..=pos_side as isize)
                .filter_map(|dist| pos.offset(dx, dy, dist, size))
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(9);
        for &(x, y, player) in stones {
            board.place(x, y, player).unwrap();
        }
        board
    }

    #[test]
    fn test_lone_stone_no_win() {
        let board = board_with(&[(4, 4, Player::One)]);
        assert_eq!(axis_counts(&board, Pos::new(4, 4)), [(0, 0); 4]);
        assert_eq!(check_win(&board, Pos::new(4, 4)), None);
    }

    #[test]
    fn test_empty_origin_no_win() {
        let board = board_with(&[(0, 0, Player::One), (1, 0, Player::One)]);
        assert_eq!(check_win(&board, Pos::new(2, 0)), None);
    }

    #[test]
    fn test_horizontal_five_wins_on_fifth() {
        let mut board = Board::new(9);
        for x in 0..4 {
            board.place(x, 3, Player::Two).unwrap();
        }
        assert_eq!(check_win(&board, Pos::new(3, 3)), None);

        board.place(4, 3, Player::Two).unwrap();
        assert_eq!(check_win(&board, Pos::new(4, 3)), Some(Player::Two));
    }

    #[test]
    fn test_vertical_scenario() {
        let mut board = Board::new(9);
        for y in 0..4 {
            board.place(4, y, Player::One).unwrap();
        }
        assert_eq!(check_win(&board, Pos::new(4, 3)), None);

        board.place(4, 4, Player::One).unwrap();
        assert_eq!(check_win(&board, Pos::new(4, 4)), Some(Player::One));
    }

    #[test]
    fn test_middle_stone_completes_five() {
        let board = board_with(&[
            (2, 2, Player::One),
            (3, 3, Player::One),
            (4, 4, Player::One),
            (5, 5, Player::One),
            (6, 6, Player::One),
        ]);
        assert_eq!(axis_counts(&board, Pos::new(4, 4))[2], (2, 2));
        assert_eq!(check_win(&board, Pos::new(4, 4)), Some(Player::One));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[
            (0, 8, Player::Two),
            (1, 7, Player::Two),
            (2, 6, Player::Two),
            (3, 5, Player::Two),
            (4, 4, Player::Two),
        ]);
        assert_eq!(check_win(&board, Pos::new(0, 8)), Some(Player::Two));
        assert_eq!(check_win(&board, Pos::new(2, 6)), Some(Player::Two));
    }

    #[test]
    fn test_overline_counts() {
        let board = board_with(&[
            (0, 1, Player::One),
            (1, 1, Player::One),
            (2, 1, Player::One),
            (3, 1, Player::One),
            (4, 1, Player::One),
            (5, 1, Player::One),
        ]);
        assert_eq!(check_win(&board, Pos::new(5, 1)), Some(Player::One));
    }

    #[test]
    fn test_broken_line_no_win() {
        let board = board_with(&[
            (0, 0, Player::One),
            (1, 0, Player::One),
            (2, 0, Player::Two),
            (3, 0, Player::One),
            (4, 0, Player::One),
            (5, 0, Player::One),
        ]);
        assert_eq!(check_win(&board, Pos::new(4, 0)), None);
        assert_eq!(check_win(&board, Pos::new(1, 0)), None);
    }

    #[test]
    fn test_corner_stones_never_win() {
        let board = board_with(&[
            (0, 0, Player::One),
            (1, 0, Player::One),
            (0, 1, Player::One),
            (8, 0, Player::Two),
            (0, 8, Player::One),
            (8, 8, Player::Two),
            (7, 7, Player::Two),
        ]);
        for (x, y) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
            assert_eq!(check_win(&board, Pos::new(x, y)), None);
        }
    }

    #[test]
    fn test_check_is_idempotent() {
        let board = board_with(&[
            (1, 1, Player::Two),
            (1, 2, Player::Two),
            (1, 3, Player::Two),
            (1, 4, Player::Two),
            (1, 5, Player::Two),
        ]);
        let before = board.clone();
        let first = check_win(&board, Pos::new(1, 3));
        let second = check_win(&board, Pos::new(1, 3));
        assert_eq!(first, second);
        assert_eq!(first, Some(Player::Two));
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_radius_limits_count() {
        let mut board = Board::new(19);
        for x in 0..12 {
            board.place(x, 0, Player::One).unwrap();
        }
        assert_eq!(axis_counts(&board, Pos::new(6, 0))[0], (5, 5));
    }

    #[test]
    fn test_winning_line_positions() {
        let board = board_with(&[
            (2, 7, Player::One),
            (3, 7, Player::One),
            (4, 7, Player::One),
            (5, 7, Player::One),
            (6, 7, Player::One),
        ]);
        let line = winning_line(&board, Pos::new(4, 7)).unwrap();
        let xs: Vec<usize> = line.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2, 3, 4, 5, 6]);
        assert!(line.iter().all(|p| p.y == 7));

        assert_eq!(winning_line(&board_with(&[(0, 0, Player::One)]), Pos::new(0, 0)), None);
    }
}
