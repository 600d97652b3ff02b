// In: src/lib.rs

//! Skirmish Duel Engine
//!
//! A turn-based battle simulation in which combatants exchange scripted
//! attacks until a win condition triggers. The resolution core emits
//! structured events; presentation is a separate, replaceable layer.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod ability;
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod scenario;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `skirmish` crate,
// making it easy for users to import the most important types directly.

// Core battle engine functions and state.
pub use battle::engine::{evaluate_win_condition, resolve_attack, resolve_regeneration, AttackOutcome};
pub use battle::runner::{BattleSummary, ScenarioRunner, StepResult};
pub use battle::state::{BattleEvent, BattleState, EventBus, TurnRng, MAX_REGEN_ROLL};

// Core runtime types for a battle.
pub use ability::Ability;
pub use combatant::{Combatant, CombatantReport};

// Scenario definitions and the scripted driver surface.
pub use scenario::{AbilityDef, CombatantDef, Scenario, ScriptCommand};

// Crate-specific error and result types.
pub use errors::{
    EngineError, EngineResult, ScenarioError, ScenarioResult, SimulationError, SimulationResult,
};
