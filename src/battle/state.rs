use crate::combatant::{Combatant, CombatantReport};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Upper bound of a single resource regeneration roll, inclusive.
pub const MAX_REGEN_ROLL: u8 = 20;

/// Structured record of something that happened during resolution.
///
/// The engine only pushes these; all human-readable text lives in
/// [`BattleEvent::format`], so the resolution logic stays decoupled from any
/// output format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// An attack passed every precondition and was applied.
    AttackLanded {
        attacker: String,
        defender: String,
        ability: String,
    },

    /// An attack attempt failed a precondition. Deliberately generic: the
    /// notice never says which precondition failed.
    AttackRejected { attacker: String },

    /// A combatant's win flag transitioned to true. Emitted at most once
    /// per combatant.
    BattleWon { winner: String },

    /// Snapshot of both participants, emitted after every landed attack.
    StatusSnapshot { reports: [CombatantReport; 2] },

    /// A combatant rolled resource regeneration.
    ResourceRegenerated {
        combatant: String,
        gained: u8,
        new_total: i32,
    },

    /// The runner skipped a scripted command because the acting combatant
    /// had already won. Silent: bookkeeping only, no user-visible text.
    ActionSuppressed { combatant: String },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::AttackLanded {
                attacker,
                defender,
                ability,
            } => Some(format!("{} attacks {} with {}.", attacker, defender, ability)),

            BattleEvent::AttackRejected { attacker } => Some(format!(
                "{} cannot carry out this attack. Check combatant status.",
                attacker
            )),

            BattleEvent::BattleWon { winner } => Some(format!(
                "Congratulations, {}! You have won the battle.",
                winner
            )),

            BattleEvent::StatusSnapshot { reports } => {
                Some(format!("{}\n{}", reports[0], reports[1]))
            }

            BattleEvent::ResourceRegenerated {
                combatant,
                gained,
                new_total,
            } => Some(format!(
                "{} recovers {} resource ({} total).",
                combatant, gained, new_total
            )),

            BattleEvent::ActionSuppressed { .. } => None,
        }
    }
}

/// Event bus for collecting and managing battle events.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Print all events using their formatted text. Silent events are skipped.
    pub fn print_formatted(&self) {
        for event in &self.events {
            if let Some(formatted) = event.format() {
                println!("{}", formatted);
            }
        }
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Pre-rolled regeneration outcomes, injected into resolution so tests can
/// pin every roll while production code draws from the thread RNG.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // Pre-generate a generous number of uniform rolls in [0, 20].
        let outcomes: Vec<u8> = (0..100).map(|_| rng.random_range(0..=MAX_REGEN_ROLL)).collect();
        Self { outcomes, index: 0 }
    }

    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}

/// The full roster of a running battle.
///
/// A scenario may define more combatants than ever fight; the script decides
/// who acts against whom.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub combatants: Vec<Combatant>,
}

impl BattleState {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self { combatants }
    }

    pub fn combatant(&self, index: usize) -> EngineResult<&Combatant> {
        self.combatants
            .get(index)
            .ok_or(EngineError::UnknownCombatant(index))
    }

    pub fn combatant_mut(&mut self, index: usize) -> EngineResult<&mut Combatant> {
        self.combatants
            .get_mut(index)
            .ok_or(EngineError::UnknownCombatant(index))
    }

    /// Borrows two distinct combatants mutably at once, in argument order.
    pub fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> EngineResult<(&mut Combatant, &mut Combatant)> {
        if first == second {
            return Err(EngineError::SelfTargetedAttack(first));
        }
        let len = self.combatants.len();
        if first >= len {
            return Err(EngineError::UnknownCombatant(first));
        }
        if second >= len {
            return Err(EngineError::UnknownCombatant(second));
        }

        if first < second {
            let (head, tail) = self.combatants.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.combatants.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }
}

#[cfg(test)]
mod event_formatting_tests {
    use super::*;
    use crate::combatant::CombatantReport;

    fn sample_report(name: &str, vitality: i32, has_won: bool) -> CombatantReport {
        CombatantReport {
            name: name.to_string(),
            vitality,
            resource: 50,
            has_won,
        }
    }

    #[test]
    fn test_silent_events_return_none() {
        let event = BattleEvent::ActionSuppressed {
            combatant: "Cinder".to_string(),
        };
        assert!(event.format().is_none(), "suppression events must stay silent");
    }

    #[test]
    fn test_event_text_samples() {
        let narration = BattleEvent::AttackLanded {
            attacker: "Cinder".to_string(),
            defender: "Briar".to_string(),
            ability: "Flame Lash".to_string(),
        };
        assert_eq!(
            narration.format(),
            Some("Cinder attacks Briar with Flame Lash.".to_string())
        );

        let rejection = BattleEvent::AttackRejected {
            attacker: "Briar".to_string(),
        };
        assert_eq!(
            rejection.format(),
            Some("Briar cannot carry out this attack. Check combatant status.".to_string())
        );

        let win = BattleEvent::BattleWon {
            winner: "Cinder".to_string(),
        };
        assert_eq!(
            win.format(),
            Some("Congratulations, Cinder! You have won the battle.".to_string())
        );

        let regen = BattleEvent::ResourceRegenerated {
            combatant: "Squall".to_string(),
            gained: 12,
            new_total: 92,
        };
        assert_eq!(
            regen.format(),
            Some("Squall recovers 12 resource (92 total).".to_string())
        );
    }

    #[test]
    fn test_snapshot_formats_both_reports() {
        let snapshot = BattleEvent::StatusSnapshot {
            reports: [sample_report("Cinder", 25, true), sample_report("Briar", 15, false)],
        };
        let text = snapshot.format().expect("snapshots are never silent");
        assert!(text.contains("Name: Cinder"));
        assert!(text.contains("Name: Briar"));
        assert!(text.contains("Won battle: Yes"));
        assert!(text.contains("Won battle: No"));
        assert!(text.contains("Vitality: 25"));
    }

    #[test]
    fn test_event_bus_collects_and_prints() {
        let mut event_bus = EventBus::new();
        assert!(event_bus.is_empty());

        event_bus.push(BattleEvent::AttackRejected {
            attacker: "Briar".to_string(),
        });
        event_bus.push(BattleEvent::ActionSuppressed {
            combatant: "Cinder".to_string(),
        });

        assert!(!event_bus.is_empty());
        assert_eq!(event_bus.len(), 2);

        // These should not panic.
        event_bus.print_debug();
        event_bus.print_debug_with_message("Bus contents:");
        event_bus.print_formatted();

        let display_output = format!("{}", event_bus);
        assert!(display_output.contains("AttackRejected"));
        assert!(display_output.contains("ActionSuppressed"));
    }

    #[test]
    fn test_pair_mut_rejects_bad_indices() {
        use crate::ability::Ability;
        use crate::errors::EngineError;

        let mut state = BattleState::new(vec![
            Combatant::new("Cinder".to_string(), 100, 100),
            Combatant::new("Briar".to_string(), 100, 100),
        ]);

        assert_eq!(
            state.pair_mut(0, 0).unwrap_err(),
            EngineError::SelfTargetedAttack(0)
        );
        assert_eq!(
            state.pair_mut(0, 2).unwrap_err(),
            EngineError::UnknownCombatant(2)
        );
        assert_eq!(
            state.pair_mut(5, 1).unwrap_err(),
            EngineError::UnknownCombatant(5)
        );

        // Order of the returned pair follows argument order.
        let (second, first) = state.pair_mut(1, 0).expect("valid pair");
        second.learn(Ability::new("Thorn Volley".to_string(), 25, 15));
        assert_eq!(second.name(), "Briar");
        assert_eq!(first.name(), "Cinder");
    }
}
