pub mod state;
pub mod action;

pub use action::{Action, Motion, Policy, ACTION_COUNT};
pub use state::{
    ObservedState, RelativeDirection, ThreatLevel, WallProximity, DIRECTION_CATEGORIES,
    STATE_COUNT, THREAT_CATEGORIES, WALL_CATEGORIES,
};
