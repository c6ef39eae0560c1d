// Copyright 2025 Cowboy AI, LLC.

//! State machine traits for workflow statuses
//!
//! A transaction's workflow is a Mealy machine: the legal targets of a
//! status depend on the status itself AND on an input describing the
//! transaction (its type, its document type, the registry rules that
//! classify them). The machine has no hidden state; the input carries
//! everything a transition needs.

use std::fmt::Debug;

/// Input to a state machine transition
pub trait TransitionInput: Debug + Send + Sync {
    /// Get a description of this input for logging
    fn description(&self) -> String;
}

/// Trait for types that can be used as states in a state machine
pub trait State: Debug + Clone + PartialEq + Eq + Send + Sync {
    /// Get the name of this state for logging/debugging
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Mealy Machine: legal targets depend on current state AND input
///
/// # Examples
///
/// ```rust
/// use land_workflow::state_machine::{MealyStateTransitions, State, TransitionInput};
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// #[derive(Debug)]
/// struct HasKey(bool);
///
/// impl TransitionInput for HasKey {
///     fn description(&self) -> String {
///         format!("has key: {}", self.0)
///     }
/// }
///
/// impl State for Door {
///     fn name(&self) -> &'static str {
///         match self {
///             Door::Open => "Open",
///             Door::Closed => "Closed",
///             Door::Locked => "Locked",
///         }
///     }
/// }
///
/// impl MealyStateTransitions for Door {
///     type Input = HasKey;
///
///     fn valid_transitions(&self, input: &HasKey) -> Vec<Self> {
///         match (self, input.0) {
///             (Door::Open, _) => vec![Door::Closed],
///             (Door::Closed, true) => vec![Door::Open, Door::Locked],
///             (Door::Closed, false) => vec![Door::Open],
///             (Door::Locked, true) => vec![Door::Closed],
///             (Door::Locked, false) => vec![],
///         }
///     }
/// }
///
/// assert!(Door::Closed.can_transition_to(&Door::Locked, &HasKey(true)));
/// assert!(!Door::Closed.can_transition_to(&Door::Locked, &HasKey(false)));
/// ```
pub trait MealyStateTransitions: State {
    /// The input type for transitions
    type Input: TransitionInput;

    /// Get valid transitions for a given input, in presentation order
    fn valid_transitions(&self, input: &Self::Input) -> Vec<Self>;

    /// Check if a transition is valid given the input
    fn can_transition_to(&self, target: &Self, input: &Self::Input) -> bool {
        !self.is_terminal() && self.valid_transitions(input).contains(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
        Off,
    }

    #[derive(Debug)]
    struct Powered(bool);

    impl TransitionInput for Powered {
        fn description(&self) -> String {
            format!("powered={}", self.0)
        }
    }

    impl State for Light {
        fn name(&self) -> &'static str {
            match self {
                Light::Red => "Red",
                Light::Green => "Green",
                Light::Off => "Off",
            }
        }

        fn is_terminal(&self) -> bool {
            matches!(self, Light::Off)
        }
    }

    impl MealyStateTransitions for Light {
        type Input = Powered;

        fn valid_transitions(&self, input: &Powered) -> Vec<Self> {
            match (self, input.0) {
                (Light::Red, true) => vec![Light::Green, Light::Off],
                (Light::Green, true) => vec![Light::Red, Light::Off],
                (Light::Off, _) => vec![Light::Red],
                (_, false) => vec![Light::Off],
            }
        }
    }

    #[test]
    fn test_can_transition_follows_valid_transitions() {
        assert!(Light::Red.can_transition_to(&Light::Green, &Powered(true)));
        assert!(!Light::Red.can_transition_to(&Light::Green, &Powered(false)));
        assert!(Light::Green.can_transition_to(&Light::Off, &Powered(false)));
    }

    #[test]
    fn test_terminal_state_blocks_transitions() {
        // Off lists Red as a target but is terminal
        assert_eq!(Light::Off.valid_transitions(&Powered(true)), vec![Light::Red]);
        assert!(!Light::Off.can_transition_to(&Light::Red, &Powered(true)));
    }

    #[test]
    fn test_input_description() {
        assert_eq!(Powered(true).description(), "powered=true");
    }
}
