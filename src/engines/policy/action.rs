use crate::engines::generation::{Gene, Genome};
use crate::error::{EvopilotError, Result};

/// Number of distinct actions a gene can decode to.
pub const ACTION_COUNT: usize = 13;

pub const SPEED_STOP: f64 = 0.0;
pub const SPEED_SLOW: f64 = 1.0;
pub const SPEED_FAST: f64 = 2.0;
pub const SPEED_REVERSE: f64 = -0.5;

pub const TURN_NORMAL: f64 = 45.0;
pub const TURN_SHARP: f64 = 90.0;

/// Discrete control outputs. Movement variants combine a speed setting
/// with a heading change; `Fire` launches a projectile subject to the
/// agent's ammo and cooldown gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stop,
    SlowForward,
    FastForward,
    SlowLeft,
    FastLeft,
    SlowRight,
    FastRight,
    SlowSharpLeft,
    FastSharpLeft,
    SlowSharpRight,
    FastSharpRight,
    Reverse,
    Fire,
}

/// Movement command decoded from an action: a speed magnitude and a
/// heading change in degrees (negative turns left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub speed: f64,
    pub turn: f64,
}

impl Action {
    /// Reduce a raw gene value onto the action space.
    pub fn from_gene(gene: Gene) -> Action {
        match gene as usize % ACTION_COUNT {
            0 => Action::Stop,
            1 => Action::SlowForward,
            2 => Action::FastForward,
            3 => Action::SlowLeft,
            4 => Action::FastLeft,
            5 => Action::SlowRight,
            6 => Action::FastRight,
            7 => Action::SlowSharpLeft,
            8 => Action::FastSharpLeft,
            9 => Action::SlowSharpRight,
            10 => Action::FastSharpRight,
            11 => Action::Reverse,
            _ => Action::Fire,
        }
    }

    /// Static movement lookup. `None` for `Fire`, which moves nothing.
    pub fn motion(self) -> Option<Motion> {
        let motion = match self {
            Action::Stop => Motion { speed: SPEED_STOP, turn: 0.0 },
            Action::SlowForward => Motion { speed: SPEED_SLOW, turn: 0.0 },
            Action::FastForward => Motion { speed: SPEED_FAST, turn: 0.0 },
            Action::SlowLeft => Motion { speed: SPEED_SLOW, turn: -TURN_NORMAL },
            Action::FastLeft => Motion { speed: SPEED_FAST, turn: -TURN_NORMAL },
            Action::SlowRight => Motion { speed: SPEED_SLOW, turn: TURN_NORMAL },
            Action::FastRight => Motion { speed: SPEED_FAST, turn: TURN_NORMAL },
            Action::SlowSharpLeft => Motion { speed: SPEED_SLOW, turn: -TURN_SHARP },
            Action::FastSharpLeft => Motion { speed: SPEED_FAST, turn: -TURN_SHARP },
            Action::SlowSharpRight => Motion { speed: SPEED_SLOW, turn: TURN_SHARP },
            Action::FastSharpRight => Motion { speed: SPEED_FAST, turn: TURN_SHARP },
            Action::Reverse => Motion { speed: SPEED_REVERSE, turn: 0.0 },
            Action::Fire => return None,
        };
        Some(motion)
    }

    pub fn is_fire(self) -> bool {
        self == Action::Fire
    }
}

/// A genome decoded into per-state actions.
///
/// Gene `i` (reduced modulo `ACTION_COUNT`) is the action for state id
/// `i`. The decode happens once here; lookups during the episode are
/// plain indexing.
#[derive(Debug, Clone)]
pub struct Policy {
    actions: Vec<Action>,
}

impl Policy {
    /// Decode the first `state_count` genes of `genome`. Fails when the
    /// genome cannot cover the state space; the caller is expected to
    /// treat that as a validation warning and fall back to a default
    /// action rather than abort.
    pub fn from_genome(genome: &Genome, state_count: usize) -> Result<Policy> {
        if genome.len() < state_count {
            return Err(EvopilotError::Policy(format!(
                "Genome length {} is insufficient for state space {}",
                genome.len(),
                state_count
            )));
        }

        let actions = genome.genes()[..state_count]
            .iter()
            .map(|&gene| Action::from_gene(gene))
            .collect();

        Ok(Policy { actions })
    }

    /// Action for a state id, `None` when the id is out of range. The
    /// caller keeps its previous action in that case.
    pub fn action_for(&self, state_id: usize) -> Option<Action> {
        self.actions.get(state_id).copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_gene_wraps_modulo_action_count() {
        assert_eq!(Action::from_gene(0), Action::Stop);
        assert_eq!(Action::from_gene(12), Action::Fire);
        assert_eq!(Action::from_gene(13), Action::Stop);
        assert_eq!(Action::from_gene(999), Action::Reverse);
    }

    #[test]
    fn test_motion_table() {
        assert_eq!(
            Action::Stop.motion(),
            Some(Motion { speed: SPEED_STOP, turn: 0.0 })
        );
        assert_eq!(
            Action::FastSharpLeft.motion(),
            Some(Motion { speed: SPEED_FAST, turn: -TURN_SHARP })
        );
        assert_eq!(
            Action::SlowRight.motion(),
            Some(Motion { speed: SPEED_SLOW, turn: TURN_NORMAL })
        );
        assert_eq!(
            Action::Reverse.motion(),
            Some(Motion { speed: SPEED_REVERSE, turn: 0.0 })
        );
        assert_eq!(Action::Fire.motion(), None);
    }

    #[test]
    fn test_policy_from_genome() {
        let genome = Genome::from_genes(vec![0, 12, 13, 25]);
        let policy = Policy::from_genome(&genome, 4).unwrap();

        assert_eq!(policy.action_for(0), Some(Action::Stop));
        assert_eq!(policy.action_for(1), Some(Action::Fire));
        assert_eq!(policy.action_for(2), Some(Action::Stop));
        assert_eq!(policy.action_for(3), Some(Action::Fire));
        assert_eq!(policy.action_for(4), None);
    }

    #[test]
    fn test_policy_rejects_short_genome() {
        let genome = Genome::from_genes(vec![1, 2]);
        assert!(Policy::from_genome(&genome, 4).is_err());
    }
}
