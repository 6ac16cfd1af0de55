use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::West, Direction::East, Direction::North, Direction::South];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// (dx, dy) with y growing downward.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Neighbour of `pos` in this direction, or None when it falls off a
    /// `width` x `height` grid.
    pub fn step(self, pos: Pos, width: usize, height: usize) -> Option<Pos> {
        let (dx, dy) = self.delta();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        if x < width && y < height { Some(Pos::new(x, y)) } else { None }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::East => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::new();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Pipe {
    Vertical,
    Horizontal,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Pipe {
    pub const ALL: [Pipe; 6] = [
        Pipe::Vertical,
        Pipe::Horizontal,
        Pipe::NorthEast,
        Pipe::NorthWest,
        Pipe::SouthWest,
        Pipe::SouthEast,
    ];

    pub fn openings(self) -> [Direction; 2] {
        use Direction::*;
        match self {
            Pipe::Vertical => [North, South],
            Pipe::Horizontal => [West, East],
            Pipe::NorthEast => [North, East],
            Pipe::NorthWest => [North, West],
            Pipe::SouthWest => [South, West],
            Pipe::SouthEast => [South, East],
        }
    }

    pub fn opens(self, dir: Direction) -> bool {
        self.openings().contains(&dir)
    }

    pub fn from_openings(set: DirectionSet) -> Option<Pipe> {
        if set.len() != 2 { return None; }
        Pipe::ALL.into_iter().find(|p| p.openings().iter().all(|&d| set.contains(d)))
    }

    pub fn glyph(self) -> char {
        match self {
            Pipe::Vertical => '|',
            Pipe::Horizontal => '-',
            Pipe::NorthEast => 'L',
            Pipe::NorthWest => 'J',
            Pipe::SouthWest => '7',
            Pipe::SouthEast => 'F',
        }
    }

    pub fn from_glyph(c: char) -> Option<Pipe> {
        match c {
            '|' => Some(Pipe::Vertical),
            '-' => Some(Pipe::Horizontal),
            'L' => Some(Pipe::NorthEast),
            'J' => Some(Pipe::NorthWest),
            '7' => Some(Pipe::SouthWest),
            'F' => Some(Pipe::SouthEast),
            _ => None,
        }
    }
}

impl fmt::Display for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Tile {
    Ground,
    Start,
    Pipe(Pipe),
}

impl Tile {
    pub fn from_glyph(c: char) -> Option<Tile> {
        match c {
            '.' => Some(Tile::Ground),
            'S' => Some(Tile::Start),
            c => Pipe::from_glyph(c).map(Tile::Pipe),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Ground => '.',
            Tile::Start => 'S',
            Tile::Pipe(p) => p.glyph(),
        }
    }

    pub fn pipe(self) -> Option<Pipe> {
        match self {
            Tile::Pipe(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
