use {
    crate::*,
    nom::{
        branch::alt,
        character::complete::{char, digit1},
        combinator::{map, map_res, value},
        IResult,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// A single cell label. The textual encoding is one delimited field: `X`, `S`, `E`, one space, or
/// a non-negative decimal integer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    Wall,
    Start,
    End,
    #[default]
    Open,
    Distance(u32),
}

impl Cell {
    pub const WALL: char = 'X';
    pub const START: char = 'S';
    pub const END: char = 'E';
    pub const OPEN: char = ' ';

    /// Whether a neighbor holding this label counts as an open path for adjacency purposes. A
    /// `Distance` label does not: once labeled, a cell no longer reads as open.
    pub fn is_open_passage(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Open)
    }

    /// Walls and the two landmarks are never rewritten by any rule.
    pub fn is_permanent(self) -> bool {
        matches!(self, Self::Wall | Self::Start | Self::End)
    }

    pub fn distance(self) -> Option<u32> {
        match self {
            Self::Distance(distance) => Some(distance),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Wall => f.write_str("X"),
            Self::Start => f.write_str("S"),
            Self::End => f.write_str("E"),
            Self::Open => f.write_str(" "),
            Self::Distance(distance) => write!(f, "{distance}"),
        }
    }
}

impl Parse for Cell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            value(Self::Wall, char(Self::WALL)),
            value(Self::Start, char(Self::START)),
            value(Self::End, char(Self::END)),
            value(Self::Open, char(Self::OPEN)),
            map(map_res(digit1, u32::from_str), Self::Distance),
        ))(input)
    }
}
