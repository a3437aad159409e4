use std::collections::HashSet;

use game_types::{GameError, Golfer, GolferId};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

pub struct PuzzleSelector;

impl PuzzleSelector {
    /// Golfers that can be a daily target: only those with highlight videos.
    pub fn eligible(pool: &[Golfer]) -> Vec<&Golfer> {
        pool.iter().filter(|golfer| golfer.has_videos).collect()
    }

    /// Pick a target golfer uniformly at random, skipping golfers already used
    /// by earlier puzzles. Once every eligible golfer has been used the whole
    /// eligible pool becomes available again.
    pub fn select<'a, R: Rng + ?Sized>(
        pool: &'a [Golfer],
        used_ids: &HashSet<GolferId>,
        rng: &mut R,
    ) -> Result<&'a Golfer, GameError> {
        let eligible = Self::eligible(pool);
        if eligible.is_empty() {
            return Err(GameError::EmptyPool);
        }

        let mut available: Vec<&Golfer> = eligible
            .iter()
            .copied()
            .filter(|golfer| !used_ids.contains(&golfer.id))
            .collect();

        if available.is_empty() {
            info!("All {} eligible golfers used, resetting pool", eligible.len());
            available = eligible;
        } else {
            debug!(
                "{} of {} eligible golfers still unused",
                available.len(),
                eligible.len()
            );
        }

        available.choose(rng).copied().ok_or(GameError::EmptyPool)
    }
}
