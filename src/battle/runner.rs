use crate::battle::engine::{resolve_attack, resolve_regeneration, AttackOutcome};
use crate::battle::state::{BattleEvent, BattleState, EventBus, TurnRng};
use crate::combatant::{Combatant, CombatantReport};
use crate::errors::EngineResult;
use crate::scenario::{Scenario, ScriptCommand};

/// Drives a scripted scenario against a battle state, one command at a time.
///
/// The engine's victory signal is advisory; the runner is where it becomes
/// concrete. Once a combatant's win flag is set, its remaining scripted
/// commands are skipped (recorded as silent events) while everyone else's
/// still execute.
#[derive(Debug)]
pub struct ScenarioRunner {
    state: BattleState,
    script: Vec<ScriptCommand>,
    cursor: usize,
    rng: TurnRng,
    bus: EventBus,
}

/// Result of executing a single script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// An attack command ran to a resolution.
    Attack(AttackOutcome),
    /// A regeneration command ran; carries the new resource total.
    Regenerated(i32),
    /// The command was skipped because its combatant has already won.
    Suppressed,
}

/// Final accounting of a completed script.
#[derive(Debug, Clone)]
pub struct BattleSummary {
    pub events: Vec<BattleEvent>,
    pub victor: Option<String>,
    pub reports: Vec<CombatantReport>,
}

impl ScenarioRunner {
    pub fn new(scenario: &Scenario, rng: TurnRng) -> Self {
        let combatants: Vec<Combatant> =
            scenario.combatants.iter().map(|def| def.build()).collect();
        Self {
            state: BattleState::new(combatants),
            script: scenario.script.clone(),
            cursor: 0,
            rng,
            bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn events(&self) -> &[BattleEvent] {
        self.bus.events()
    }

    /// First combatant whose win flag is set, if any.
    pub fn victor(&self) -> Option<&Combatant> {
        self.state.combatants.iter().find(|c| c.has_won())
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.len()
    }

    /// Executes the next script command. Returns `Ok(None)` once the script
    /// is exhausted.
    pub fn step(&mut self) -> EngineResult<Option<StepResult>> {
        let Some(command) = self.script.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor += 1;

        let result = match command {
            ScriptCommand::Attack {
                attacker,
                ability,
                defender,
            } => {
                if self.state.combatant(attacker)?.has_won() {
                    let name = self.state.combatant(attacker)?.name().to_string();
                    self.bus.push(BattleEvent::ActionSuppressed { combatant: name });
                    StepResult::Suppressed
                } else {
                    let (attacker, defender) = self.state.pair_mut(attacker, defender)?;
                    let outcome = resolve_attack(attacker, ability, defender, &mut self.bus)?;
                    StepResult::Attack(outcome)
                }
            }
            ScriptCommand::Regenerate { combatant } => {
                if self.state.combatant(combatant)?.has_won() {
                    let name = self.state.combatant(combatant)?.name().to_string();
                    self.bus.push(BattleEvent::ActionSuppressed { combatant: name });
                    StepResult::Suppressed
                } else {
                    let combatant = self.state.combatant_mut(combatant)?;
                    let new_total = resolve_regeneration(combatant, &mut self.rng, &mut self.bus);
                    StepResult::Regenerated(new_total)
                }
            }
        };

        Ok(Some(result))
    }

    /// Runs the remaining script to the end and summarizes the battle.
    pub fn run(&mut self) -> EngineResult<BattleSummary> {
        while self.step()?.is_some() {}

        Ok(BattleSummary {
            events: self.bus.events().to_vec(),
            victor: self.victor().map(|c| c.name().to_string()),
            reports: self.state.combatants.iter().map(|c| c.report()).collect(),
        })
    }
}
