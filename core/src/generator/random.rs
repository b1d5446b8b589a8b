use hashbrown::HashSet;
use rand::rngs::SmallRng;
use rand::seq::{SliceRandom, index};
use rand::{Rng, SeedableRng};

use super::*;

/// Picks `size.pair_count()` distinct faces from `pool` uniformly without replacement, doubles them and shuffles the
/// result. Repeated ids in `pool` only count once.
pub fn build_deck<R>(size: BoardSize, pool: &[ImageId], rng: &mut R) -> Result<Vec<ImageId>>
where
    R: Rng + ?Sized,
{
    let mut seen = HashSet::with_capacity(pool.len());
    let distinct: Vec<&ImageId> = pool.iter().filter(|&id| seen.insert(id)).collect();

    let pairs = size.pair_count();
    if distinct.len() < usize::from(pairs) {
        return Err(GameError::InsufficientAssets {
            required: pairs,
            available: distinct.len(),
        });
    }

    let mut deck = Vec::with_capacity(usize::from(size.total_cards()));
    for picked in index::sample(rng, distinct.len(), usize::from(pairs)) {
        deck.push(distinct[picked].clone());
        deck.push(distinct[picked].clone());
    }
    deck.shuffle(rng);

    Ok(deck)
}

/// Seeded generation strategy, the same seed and pool always produce the same deck.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, size: BoardSize, pool: &[ImageId]) -> Result<Vec<ImageId>> {
        log::debug!("building {} deck from {} images, seed {}", size, pool.len(), self.seed);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        build_deck(size, pool, &mut rng)
    }
}
