use std::fmt;

use super::types::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeError {
    InvalidGlyph { line: usize, column: usize, glyph: char },
    RaggedRow { line: usize, expected: usize, found: usize },
    EmptyGrid,
    MissingStart,
    MultipleStarts(Pos, Pos),
    AmbiguousStart(usize),
    BrokenLoop(Pos),
}

impl fmt::Display for PipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGlyph { line, column, glyph } => {
                write!(f, "invalid glyph {:?} at line {}, column {}", glyph, line, column)
            }
            Self::RaggedRow { line, expected, found } => {
                write!(f, "line {} has {} cells, expected {}", line, found, expected)
            }
            Self::EmptyGrid => write!(f, "empty grid"),
            Self::MissingStart => write!(f, "no start marker"),
            Self::MultipleStarts(a, b) => write!(f, "multiple start markers: {} and {}", a, b),
            Self::AmbiguousStart(n) => {
                write!(f, "start has {} connecting neighbours, expected 2", n)
            }
            Self::BrokenLoop(pos) => write!(f, "loop breaks at {}", pos),
        }
    }
}

impl std::error::Error for PipeError {}

pub type Result<T> = std::result::Result<T, PipeError>;
