use std::fmt;

/// Main error type for the skirmish simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Error raised while resolving a scripted command
    Engine(EngineError),
    /// Error raised while loading or parsing a scenario definition
    Scenario(ScenarioError),
}

/// Errors raised by the battle engine for malformed commands.
///
/// Failed attack preconditions are not errors: they resolve to a rejection
/// event. These variants cover driver bugs such as out-of-range indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Combatant index is out of range for the roster
    UnknownCombatant(usize),
    /// Ability index is out of range for the combatant's learned sequence
    UnknownAbility { combatant: String, index: usize },
    /// A combatant was scripted to attack itself
    SelfTargetedAttack(usize),
}

/// Errors related to scenario definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The scenario file could not be read
    FileRead { path: String, details: String },
    /// The scenario data is not valid RON for the expected shape
    Malformed(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Engine(err) => write!(f, "Engine error: {}", err),
            SimulationError::Scenario(err) => write!(f, "Scenario error: {}", err),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownCombatant(index) => {
                write!(f, "Unknown combatant index: {}", index)
            }
            EngineError::UnknownAbility { combatant, index } => {
                write!(f, "{} has no ability at index {}", combatant, index)
            }
            EngineError::SelfTargetedAttack(index) => {
                write!(f, "Combatant {} cannot target itself", index)
            }
        }
    }
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::FileRead { path, details } => {
                write!(f, "Failed to read scenario file {}: {}", path, details)
            }
            ScenarioError::Malformed(details) => {
                write!(f, "Malformed scenario data: {}", details)
            }
        }
    }
}

impl std::error::Error for SimulationError {}
impl std::error::Error for EngineError {}
impl std::error::Error for ScenarioError {}

impl From<EngineError> for SimulationError {
    fn from(err: EngineError) -> Self {
        SimulationError::Engine(err)
    }
}

impl From<ScenarioError> for SimulationError {
    fn from(err: ScenarioError) -> Self {
        SimulationError::Scenario(err)
    }
}

/// Type alias for Results using SimulationError
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using ScenarioError
pub type ScenarioResult<T> = Result<T, ScenarioError>;
