use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    /// Produces the face sequence for a board of `size`, drawing faces from `pool`.
    fn generate(self, size: BoardSize, pool: &[ImageId]) -> Result<Vec<ImageId>>;
}

/// Pre-arranged deck, handed out as-is once it is checked to be a valid pairing.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedDeck {
    faces: Vec<ImageId>,
}

impl FixedDeck {
    pub fn new<I>(faces: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
        }
    }
}

impl DeckGenerator for FixedDeck {
    fn generate(self, size: BoardSize, _pool: &[ImageId]) -> Result<Vec<ImageId>> {
        if !crate::board::is_valid_pairing(size, &self.faces) {
            return Err(GameError::InvalidDeck);
        }
        Ok(self.faces)
    }
}
