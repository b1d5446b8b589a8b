use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Single coordinate axis used for board width, height, rows and columns.
pub type Coord = u8;

/// Count type used for card and pair counts.
pub type CellCount = u16;

/// Stable position of a card on the board, `0..width * height`.
pub type CardIndex = CellCount;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Identifier of a card face image, usually a relative asset path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Board dimensions. Always holds an even, non-zero number of cards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardSize", into = "RawBoardSize")]
pub struct BoardSize {
    width: Coord,
    height: Coord,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
struct RawBoardSize {
    width: Coord,
    height: Coord,
}

impl BoardSize {
    /// 2x2, two pairs.
    pub const SMALL: Self = Self::new_unchecked(2, 2);
    /// 4x2, four pairs.
    pub const MEDIUM: Self = Self::new_unchecked(4, 2);
    /// 4x4, eight pairs.
    pub const LARGE: Self = Self::new_unchecked(4, 4);

    pub const PRESETS: [Self; 3] = [Self::SMALL, Self::MEDIUM, Self::LARGE];

    const fn new_unchecked(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        let cells = mult(width, height);
        if cells == 0 || cells % 2 != 0 {
            return Err(GameError::InvalidBoardSize { width, height });
        }
        Ok(Self::new_unchecked(width, height))
    }

    pub const fn width(self) -> Coord {
        self.width
    }

    pub const fn height(self) -> Coord {
        self.height
    }

    pub const fn total_cards(self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn pair_count(self) -> CellCount {
        self.total_cards() / 2
    }

    /// Row-major coordinates of `index`, or `None` when it is off the board.
    pub fn coords_of(self, index: CardIndex) -> Option<Coord2> {
        if index >= self.total_cards() {
            return None;
        }
        let width = CellCount::from(self.width);
        let row = (index / width).try_into().ok()?;
        let col = (index % width).try_into().ok()?;
        Some((row, col))
    }

    pub fn index_of(self, (row, col): Coord2) -> Option<CardIndex> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(CellCount::from(row) * CellCount::from(self.width) + CellCount::from(col))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl TryFrom<RawBoardSize> for BoardSize {
    type Error = GameError;

    fn try_from(raw: RawBoardSize) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl From<BoardSize> for RawBoardSize {
    fn from(size: BoardSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepts the preset names (`small`/`easy`, `medium`, `large`/`hard`) or `WxH`.
impl FromStr for BoardSize {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "small" | "easy" => return Ok(Self::SMALL),
            "medium" => return Ok(Self::MEDIUM),
            "large" | "hard" => return Ok(Self::LARGE),
            _ => {}
        }

        let unknown = || GameError::UnknownBoardSize(s.to_owned());
        let (width, height) = name.split_once('x').ok_or_else(unknown)?;
        let width = width.trim().parse().map_err(|_| unknown())?;
        let height = height.trim().parse().map_err(|_| unknown())?;
        Self::new(width, height)
    }
}
