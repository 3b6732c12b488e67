// File: src/core/glyphs.rs
use serde::{Deserialize, Serialize};

/// The closed alphabet of Gregg stroke primitives.
///
/// Every recognizable mark is built from these fourteen symbols; there is no
/// way to construct a primitive outside the set, so anything the parser or
/// keyboard cannot map to a variant simply never reaches the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    T,
    D,
    N,
    M,
    P,
    B,
    F,
    V,
    R,
    L,
    E,
    A,
    S,
    Space,
}

/// Geometric meaning of a primitive, for keeping an external stroke renderer
/// consistent with recognition without coupling the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeClass {
    /// Straight stroke along an axis.
    Line { axis: Axis, length: Length },
    /// Curved stroke bending to one side.
    Curve { bend: Bend, length: Length },
    /// Closed loop.
    Circle { size: CircleSize },
    /// The tiny comma stroke for S.
    Tick,
    /// Word gap, no ink.
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Downward,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bend {
    Left,
    Right,
    Upward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleSize {
    Small,
    Large,
}

impl Primitive {
    /// Every primitive, in keyboard order.
    pub const ALL: [Primitive; 14] = [
        Primitive::T,
        Primitive::D,
        Primitive::N,
        Primitive::M,
        Primitive::P,
        Primitive::B,
        Primitive::F,
        Primitive::V,
        Primitive::R,
        Primitive::L,
        Primitive::E,
        Primitive::A,
        Primitive::S,
        Primitive::Space,
    ];

    /// Maps a single-character code to a primitive. Unknown codes are simply
    /// not primitives, never an error.
    pub fn from_code(code: char) -> Option<Primitive> {
        match code {
            't' => Some(Primitive::T),
            'd' => Some(Primitive::D),
            'n' => Some(Primitive::N),
            'm' => Some(Primitive::M),
            'p' => Some(Primitive::P),
            'b' => Some(Primitive::B),
            'f' => Some(Primitive::F),
            'v' => Some(Primitive::V),
            'r' => Some(Primitive::R),
            'l' => Some(Primitive::L),
            'e' => Some(Primitive::E),
            'a' => Some(Primitive::A),
            's' => Some(Primitive::S),
            ' ' => Some(Primitive::Space),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Primitive::T => 't',
            Primitive::D => 'd',
            Primitive::N => 'n',
            Primitive::M => 'm',
            Primitive::P => 'p',
            Primitive::B => 'b',
            Primitive::F => 'f',
            Primitive::V => 'v',
            Primitive::R => 'r',
            Primitive::L => 'l',
            Primitive::E => 'e',
            Primitive::A => 'a',
            Primitive::S => 's',
            Primitive::Space => ' ',
        }
    }

    /// The backslash-command spelling understood by the grammar parser.
    pub fn command(&self) -> &'static str {
        match self {
            Primitive::T => "\\t",
            Primitive::D => "\\d",
            Primitive::N => "\\n",
            Primitive::M => "\\m",
            Primitive::P => "\\p",
            Primitive::B => "\\b",
            Primitive::F => "\\f",
            Primitive::V => "\\v",
            Primitive::R => "\\r",
            Primitive::L => "\\l",
            Primitive::E => "\\e",
            Primitive::A => "\\a",
            Primitive::S => "\\s",
            Primitive::Space => "\\space",
        }
    }

    pub fn class(&self) -> StrokeClass {
        use StrokeClass::*;
        match self {
            Primitive::T => Line { axis: Axis::Downward, length: Length::Short },
            Primitive::D => Line { axis: Axis::Downward, length: Length::Long },
            Primitive::N => Line { axis: Axis::Horizontal, length: Length::Short },
            Primitive::M => Line { axis: Axis::Horizontal, length: Length::Long },
            Primitive::P => Curve { bend: Bend::Left, length: Length::Short },
            Primitive::B => Curve { bend: Bend::Left, length: Length::Long },
            Primitive::F => Curve { bend: Bend::Right, length: Length::Short },
            Primitive::V => Curve { bend: Bend::Right, length: Length::Long },
            Primitive::R => Curve { bend: Bend::Upward, length: Length::Short },
            Primitive::L => Curve { bend: Bend::Upward, length: Length::Long },
            Primitive::E => Circle { size: CircleSize::Small },
            Primitive::A => Circle { size: CircleSize::Large },
            Primitive::S => Tick,
            Primitive::Space => Gap,
        }
    }
}
