use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::log_data::LogRepresentable;
use crate::orientation::SimpleOrientation;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalDirection {
    #[default]
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    // clockwise order, turning is stepping through this cycle
    const CYCLE: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    fn cycle_index(&self) -> usize {
        match self {
            CardinalDirection::North => 0,
            CardinalDirection::East => 1,
            CardinalDirection::South => 2,
            CardinalDirection::West => 3,
        }
    }

    fn rotated(&self, quarter_turns_cw: usize) -> CardinalDirection {
        Self::CYCLE[(self.cycle_index() + quarter_turns_cw) % 4]
    }
}

impl SimpleOrientation for CardinalDirection {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }

    fn opposite_of(&self, other: &Self) -> bool {
        self.rotated(2) == *other
    }

    fn left_of(&self, other: &Self) -> bool {
        let diff = (4 + self.cycle_index() - other.cycle_index()) % 4;
        diff == 3 || diff == 2
    }

    fn right_of(&self, other: &Self) -> bool {
        let diff = (4 + self.cycle_index() - other.cycle_index()) % 4;
        diff == 1 || diff == 2
    }

    fn turn_cw(&self) -> Self {
        self.rotated(1)
    }

    fn turn_ccw(&self) -> Self {
        self.rotated(3)
    }

    fn opposite(&self) -> Self {
        self.rotated(2)
    }
}

impl FromStr for CardinalDirection {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" | "up" => Ok(CardinalDirection::North),
            "e" | "east" | "right" => Ok(CardinalDirection::East),
            "s" | "south" | "down" => Ok(CardinalDirection::South),
            "w" | "west" | "left" => Ok(CardinalDirection::West),
            _ => Err(SimError::BadDirection(s.to_owned())),
        }
    }
}

impl LogRepresentable for CardinalDirection {
    fn log_repr(&self) -> String {
        match self {
            CardinalDirection::North => "north",
            CardinalDirection::East => "east",
            CardinalDirection::South => "south",
            CardinalDirection::West => "west",
        }
        .to_owned()
    }
}
