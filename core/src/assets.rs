use serde::{Deserialize, Serialize};

use crate::*;

/// Supplies the images a deck is drawn from.
pub trait AssetSource {
    fn image_pool(&self) -> Result<Vec<ImageId>>;
}

/// Fixed list of images. The default pool is `images/1.png` to `images/8.png`, enough for the largest preset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePool {
    images: Vec<ImageId>,
}

impl ImagePool {
    pub const DEFAULT_SIZE: usize = 8;

    pub fn new(images: Vec<ImageId>) -> Self {
        Self { images }
    }

    pub fn images(&self) -> &[ImageId] {
        &self.images
    }
}

impl Default for ImagePool {
    fn default() -> Self {
        Self::new(
            (1..=Self::DEFAULT_SIZE)
                .map(|i| ImageId::new(format!("images/{i}.png")))
                .collect(),
        )
    }
}

impl AssetSource for ImagePool {
    fn image_pool(&self) -> Result<Vec<ImageId>> {
        Ok(self.images.clone())
    }
}

impl AssetSource for Vec<ImageId> {
    fn image_pool(&self) -> Result<Vec<ImageId>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_covers_largest_preset() {
        let pool = ImagePool::default().image_pool().unwrap();

        assert_eq!(pool.len(), ImagePool::DEFAULT_SIZE);
        assert_eq!(pool[0], ImageId::from("images/1.png"));
        assert_eq!(pool[7], ImageId::from("images/8.png"));
        assert!(pool.len() >= usize::from(BoardSize::LARGE.pair_count()));
    }

    #[test]
    fn pool_deserializes_from_a_plain_list() {
        let pool: ImagePool = serde_json::from_str(r#"["cat.png","dog.png"]"#).unwrap();

        assert_eq!(pool.images(), ["cat.png", "dog.png"].map(ImageId::from));
    }
}
