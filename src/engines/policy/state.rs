use serde::{Deserialize, Serialize};

/// Category counts for the three observation axes. The state encoding
/// is a base-4 positional code over these, so they are fixed at compile
/// time and cross-checked against the genome length at configuration.
pub const DIRECTION_CATEGORIES: usize = 4;
pub const THREAT_CATEGORIES: usize = 4;
pub const WALL_CATEGORIES: usize = 4;

/// Total number of distinct discrete states, and therefore the genome
/// length a policy needs to cover every state.
pub const STATE_COUNT: usize = DIRECTION_CATEGORIES * THREAT_CATEGORIES * WALL_CATEGORIES;

/// Bearing of the active hazard relative to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelativeDirection {
    Ahead,
    Right,
    Behind,
    Left,
}

/// Urgency of the active hazard, combining distance and closing speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatLevel {
    Critical,
    High,
    Medium,
    Low,
}

/// Distance from the nearest arena boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallProximity {
    None,
    Near,
    VeryNear,
    Critical,
}

impl RelativeDirection {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl ThreatLevel {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl WallProximity {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One fully classified observation triple.
///
/// `id` is a mixed-radix (base-4) code: direction is the high digit,
/// threat the middle, wall proximity the low. The mapping is a
/// bijection between the 64 triples and `[0, STATE_COUNT)`, and gene
/// `i` of a policy genome corresponds to state id `i`, so the digit
/// order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedState {
    pub direction: RelativeDirection,
    pub threat: ThreatLevel,
    pub wall: WallProximity,
}

impl ObservedState {
    pub fn new(direction: RelativeDirection, threat: ThreatLevel, wall: WallProximity) -> Self {
        Self {
            direction,
            threat,
            wall,
        }
    }

    /// Dense state id in `[0, STATE_COUNT)`.
    pub fn id(&self) -> usize {
        (THREAT_CATEGORIES * WALL_CATEGORIES) * self.direction.index()
            + WALL_CATEGORIES * self.threat.index()
            + self.wall.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS: [RelativeDirection; 4] = [
        RelativeDirection::Ahead,
        RelativeDirection::Right,
        RelativeDirection::Behind,
        RelativeDirection::Left,
    ];
    const THREATS: [ThreatLevel; 4] = [
        ThreatLevel::Critical,
        ThreatLevel::High,
        ThreatLevel::Medium,
        ThreatLevel::Low,
    ];
    const WALLS: [WallProximity; 4] = [
        WallProximity::None,
        WallProximity::Near,
        WallProximity::VeryNear,
        WallProximity::Critical,
    ];

    #[test]
    fn test_state_count() {
        assert_eq!(STATE_COUNT, 64);
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(
            ObservedState::new(DIRECTIONS[0], THREATS[0], WALLS[0]).id(),
            0
        );
        assert_eq!(
            ObservedState::new(DIRECTIONS[3], THREATS[3], WALLS[3]).id(),
            63
        );
        // 16*1 + 4*2 + 3
        assert_eq!(
            ObservedState::new(DIRECTIONS[1], THREATS[2], WALLS[3]).id(),
            27
        );
    }

    #[test]
    fn test_encoding_is_a_bijection() {
        let mut seen = [false; STATE_COUNT];
        for direction in DIRECTIONS {
            for threat in THREATS {
                for wall in WALLS {
                    let id = ObservedState::new(direction, threat, wall).id();
                    assert!(id < STATE_COUNT);
                    assert!(!seen[id], "state id {} produced twice", id);
                    seen[id] = true;
                }
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }
}
