//! End-of-round results: ordering, winners, medals.
//!
//! ## Medal assignment
//!
//! Position 0 takes gold. A later position with the same score as the one
//! before it inherits that position's medal, looked up recursively so a run
//! of ties all share the medal of the first player in the run. Any other
//! position gets `min(position, 2)`: ranks saturate at bronze and never go
//! past it, however many players or distinct scores there are.
//!
//! ```
//! use memory_match::engine::medal_ranks;
//!
//! assert_eq!(medal_ranks(&[10, 10, 5, 5, 5, 1]), vec![0, 0, 2, 2, 2, 2]);
//! assert_eq!(medal_ranks(&[9, 7, 7, 3]), vec![0, 1, 1, 2]);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Podium position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a saturated rank index (0, 1 or 2).
    #[must_use]
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Medal::Gold,
            1 => Medal::Silver,
            _ => Medal::Bronze,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

/// One line of the results table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub seat: PlayerId,
    pub name: String,
    pub score: u32,
    pub rank: u8,
}

impl RankedPlayer {
    #[must_use]
    pub fn medal(&self) -> Medal {
        Medal::from_rank(self.rank)
    }
}

/// Seats ordered by score, highest first. Ties keep seat order.
#[must_use]
pub fn sort_by_score(players: &[Player]) -> Vec<(PlayerId, &Player)> {
    let mut sorted: Vec<_> = players
        .iter()
        .enumerate()
        .map(|(seat, player)| (PlayerId::new(seat as u8), player))
        .collect();
    // Stable sort
    sorted.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));
    sorted
}

/// Medal rank of `position` within scores sorted highest first.
///
/// Returns `None` when `position` is past the end.
#[must_use]
pub fn medal_index(sorted_scores: &[u32], position: usize) -> Option<u8> {
    if position >= sorted_scores.len() {
        return None;
    }
    if position == 0 {
        return Some(0);
    }
    if sorted_scores[position] == sorted_scores[position - 1] {
        return medal_index(sorted_scores, position - 1);
    }
    Some(position.min(2) as u8)
}

/// Medal rank for every position of a descending score list.
#[must_use]
pub fn medal_ranks(sorted_scores: &[u32]) -> Vec<u8> {
    (0..sorted_scores.len())
        .filter_map(|position| medal_index(sorted_scores, position))
        .collect()
}

/// Full results table, best first.
#[must_use]
pub fn rank_players(players: &[Player]) -> Vec<RankedPlayer> {
    let sorted = sort_by_score(players);
    let scores: Vec<u32> = sorted.iter().map(|(_, p)| p.score).collect();

    sorted
        .into_iter()
        .zip(medal_ranks(&scores))
        .map(|((seat, player), rank)| RankedPlayer {
            seat,
            name: player.name.clone(),
            score: player.score,
            rank,
        })
        .collect()
}

/// Every player holding the top score, in seat order.
#[must_use]
pub fn winners(players: &[Player]) -> Vec<&Player> {
    let Some(best) = players.iter().map(|p| p.score).max() else {
        return Vec::new();
    };
    players.iter().filter(|p| p.score == best).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players_with(scores: &[u32]) -> Vec<Player> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut p = Player::new(format!("P{}", i));
                p.score = score;
                p
            })
            .collect()
    }

    #[test]
    fn test_rank_saturation() {
        assert_eq!(medal_ranks(&[10, 10, 5, 5, 5, 1]), vec![0, 0, 2, 2, 2, 2]);
    }

    #[test]
    fn test_distinct_scores() {
        assert_eq!(medal_ranks(&[5, 4, 3, 2, 1]), vec![0, 1, 2, 2, 2]);
    }

    #[test]
    fn test_all_tied() {
        assert_eq!(medal_ranks(&[3, 3, 3, 3, 3]), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_tie_for_second() {
        assert_eq!(medal_ranks(&[8, 4, 4, 4, 0]), vec![0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_single_player() {
        assert_eq!(medal_ranks(&[4]), vec![0]);
        assert_eq!(medal_index(&[4], 1), None);
    }

    #[test]
    fn test_winners_with_tie() {
        let players = players_with(&[7, 7, 3]);
        let names: Vec<_> = winners(&players).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P0", "P1"]);
    }

    #[test]
    fn test_winners_empty() {
        assert!(winners(&[]).is_empty());
    }

    #[test]
    fn test_rank_players_is_stable() {
        let players = players_with(&[1, 5, 1, 5]);
        let ranked = rank_players(&players);

        let seats: Vec<_> = ranked.iter().map(|r| r.seat.index()).collect();
        assert_eq!(seats, vec![1, 3, 0, 2]);

        let medals: Vec<_> = ranked.iter().map(RankedPlayer::medal).collect();
        assert_eq!(
            medals,
            vec![Medal::Gold, Medal::Gold, Medal::Bronze, Medal::Bronze]
        );
    }
}
