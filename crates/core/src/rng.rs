//! RNG module - spawn order policies
//!
//! Two policies decide which kind spawns next:
//!
//! - **Round-robin**: catalog order I, O, T, S, Z, J, L, repeating.
//! - **Bag**: the "7-bag" randomizer. Each bag holds one of each kind,
//!   shuffled with a seeded LCG, and is drawn until empty.
//!
//! Both are deterministic: the same policy and seed give the same sequence.

use crate::pieces;
use crate::types::{PieceKind, DEFAULT_SEED};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// How the next kind is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOrder {
    /// Catalog order, starting from I
    RoundRobin,
    /// Seeded 7-bag
    Bag { seed: u32 },
}

impl Default for SpawnOrder {
    fn default() -> Self {
        SpawnOrder::Bag { seed: DEFAULT_SEED }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum QueueState {
    RoundRobin {
        next: PieceKind,
    },
    Bag {
        bag: [PieceKind; 7],
        bag_index: usize,
        rng: SimpleRng,
    },
}

/// Spawn queue for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    order: SpawnOrder,
    state: QueueState,
}

impl PieceQueue {
    /// Create a fresh queue for the given policy
    pub fn new(order: SpawnOrder) -> Self {
        let state = match order {
            SpawnOrder::RoundRobin => QueueState::RoundRobin {
                next: PieceKind::I,
            },
            SpawnOrder::Bag { seed } => {
                let mut rng = SimpleRng::new(seed);
                let mut bag = PieceKind::ALL;
                rng.shuffle(&mut bag);
                QueueState::Bag {
                    bag,
                    bag_index: 0,
                    rng,
                }
            }
        };
        Self { order, state }
    }

    pub fn order(&self) -> SpawnOrder {
        self.order
    }

    /// Peek at the next kind without consuming it
    pub fn peek(&self) -> PieceKind {
        match &self.state {
            QueueState::RoundRobin { next } => *next,
            QueueState::Bag {
                bag,
                bag_index,
                rng,
            } => {
                if *bag_index < bag.len() {
                    return bag[*bag_index];
                }
                // Preview the next bag on a copy of the RNG so draw() agrees
                let mut preview_rng = rng.clone();
                let mut next_bag = PieceKind::ALL;
                preview_rng.shuffle(&mut next_bag);
                next_bag[0]
            }
        }
    }

    /// Draw the next kind
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.state {
            QueueState::RoundRobin { next } => {
                let kind = *next;
                *next = pieces::next(kind);
                kind
            }
            QueueState::Bag {
                bag,
                bag_index,
                rng,
            } => {
                if *bag_index >= bag.len() {
                    *bag = PieceKind::ALL;
                    rng.shuffle(bag);
                    *bag_index = 0;
                }
                let kind = bag[*bag_index];
                *bag_index += 1;
                kind
            }
        }
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(SpawnOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut queue = PieceQueue::new(SpawnOrder::Bag { seed: 1 });

        let mut drawn: Vec<_> = (0..7).map(|_| queue.draw()).collect();
        drawn.sort_by_key(|k| k.index());
        assert_eq!(drawn, PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_bag_same_seed_same_sequence() {
        let mut a = PieceQueue::new(SpawnOrder::Bag { seed: 99 });
        let mut b = PieceQueue::new(SpawnOrder::Bag { seed: 99 });
        for _ in 0..30 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_peek_matches_draw_across_bag_boundary() {
        let mut queue = PieceQueue::new(SpawnOrder::Bag { seed: 7 });
        for _ in 0..20 {
            let peeked = queue.peek();
            assert_eq!(peeked, queue.draw());
        }
    }

    #[test]
    fn test_round_robin_sequence() {
        let mut queue = PieceQueue::new(SpawnOrder::RoundRobin);
        let drawn: Vec<_> = (0..8).map(|_| queue.draw()).collect();
        assert_eq!(&drawn[..7], &PieceKind::ALL);
        assert_eq!(drawn[7], PieceKind::I);
    }
}
