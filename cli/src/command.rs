use memorama_core::{BoardSize, CardIndex, Coord2};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Index(CardIndex),
    Coords(Coord2),
}

impl Target {
    pub fn to_index(self, size: BoardSize) -> Option<CardIndex> {
        match self {
            Self::Index(index) => (index < size.total_cards()).then_some(index),
            Self::Coords(coords) => size.index_of(coords),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Flip(Target),
    New(Option<BoardSize>),
    Restart,
    Abandon,
    Board,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  <n>            flip card number n
  <row> <col>    flip the card at row, col
  new [size]     deal a new board (small, medium, large or WxH)
  restart        clear a finished game
  abandon        drop the current game
  board          show the board again
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Self::Board);
        };
        let rest: Vec<&str> = words.collect();

        if let Ok(first) = first.parse::<u16>() {
            return match rest.as_slice() {
                [] => Ok(Self::Flip(Target::Index(first))),
                [col] => {
                    let row = u8::try_from(first).map_err(|_| format!("row {first} is off the board"))?;
                    let col = col.parse().map_err(|_| format!("{col:?} is not a column"))?;
                    Ok(Self::Flip(Target::Coords((row, col))))
                }
                _ => Err(format!("{line:?} is not a card")),
            };
        }

        match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("new" | "n", []) => Ok(Self::New(None)),
            ("new" | "n", [size]) => size
                .parse()
                .map(|size| Self::New(Some(size)))
                .map_err(|err| format!("{err}")),
            ("restart" | "r", []) => Ok(Self::Restart),
            ("abandon" | "a", []) => Ok(Self::Abandon),
            ("board" | "b", []) => Ok(Self::Board),
            ("help" | "h" | "?", []) => Ok(Self::Help),
            ("quit" | "q" | "exit", []) => Ok(Self::Quit),
            _ => Err(format!("Unknown command {line:?}, try \"help\"")),
        }
    }
}
