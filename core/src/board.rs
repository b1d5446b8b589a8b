use hashbrown::HashMap;
use ndarray::Array2;

use crate::*;

/// The grid of cards for one game, laid out row-major.
///
/// Holds every face, hidden or not. Hand [`Observation`] to anything outside the engine instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    size: BoardSize,
    cards: Array2<Card>,
}

impl Board {
    /// Lays `faces` out row-major. Every face must appear exactly twice.
    pub fn from_faces(size: BoardSize, faces: Vec<ImageId>) -> Result<Self> {
        if !is_valid_pairing(size, &faces) {
            return Err(GameError::InvalidDeck);
        }

        let cards: Vec<Card> = faces
            .into_iter()
            .zip(0..)
            .map(|(face, index)| Card::new(index, face))
            .collect();
        let shape = (usize::from(size.height()), usize::from(size.width()));
        let cards = Array2::from_shape_vec(shape, cards).map_err(|_| GameError::InvalidDeck)?;

        Ok(Self { size, cards })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> CellCount {
        self.size.pair_count()
    }

    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        let coords = self.size.coords_of(index)?;
        self.cards.get(coords.to_nd_index())
    }

    pub(crate) fn get_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        let coords = self.size.coords_of(index)?;
        self.cards.get_mut(coords.to_nd_index())
    }

    pub fn card_at(&self, coords: Coord2) -> Option<&Card> {
        self.get(self.size.index_of(coords)?)
    }

    /// Cards in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    pub fn count_in(&self, state: CardState) -> usize {
        self.iter().filter(|card| card.state() == state).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.iter().all(Card::is_matched)
    }
}

pub(crate) fn is_valid_pairing(size: BoardSize, faces: &[ImageId]) -> bool {
    if faces.len() != usize::from(size.total_cards()) {
        return false;
    }

    let mut counts: HashMap<&ImageId, u8> = HashMap::with_capacity(faces.len() / 2);
    for face in faces {
        let count = counts.entry(face).or_insert(0);
        *count = count.saturating_add(1);
    }
    counts.values().all(|&count| count == 2)
}
