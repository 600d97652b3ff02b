use crate::ability::Ability;
use crate::battle::state::TurnRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A battle participant: vitality and resource pools, a learned sequence of
/// abilities, and a running tally of landed attacks.
///
/// Fields are private so that stats can only change through the engine's
/// resolution functions and `regenerate_resource`. Vitality and resource are
/// signed and never clamped; both are allowed to go negative.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Combatant {
    name: String,
    vitality: i32,
    resource: i32,
    abilities: Vec<Ability>,
    success_count: u32,
    has_won: bool,
}

impl Combatant {
    pub fn new(name: String, vitality: i32, resource: i32) -> Self {
        Self {
            name,
            vitality,
            resource,
            abilities: Vec::new(),
            success_count: 0,
            has_won: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vitality(&self) -> i32 {
        self.vitality
    }

    pub fn resource(&self) -> i32 {
        self.resource
    }

    /// Number of attacks this combatant has landed so far.
    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    /// True once the win condition has been met. Never resets.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Appends an ability to the learned sequence. Insertion order is
    /// preserved and duplicates are allowed; the position in this sequence
    /// is the only way a driver can select an ability deterministically.
    pub fn learn(&mut self, ability: Ability) {
        self.abilities.push(ability);
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn ability(&self, index: usize) -> Option<&Ability> {
        self.abilities.get(index)
    }

    /// Adds a uniformly random amount in `[0, 20]` to the resource pool and
    /// returns the new total.
    pub fn regenerate_resource(&mut self, rng: &mut TurnRng) -> i32 {
        let gained = rng.next_outcome("resource regeneration");
        self.resource += i32::from(gained);
        self.resource
    }

    /// Whether the resource pool covers the ability's cost. Inclusive: a
    /// combatant with exactly `cost` resource can still attack.
    pub fn has_sufficient_resource(&self, ability: &Ability) -> bool {
        self.resource >= i32::from(ability.cost())
    }

    /// A combatant stays active while vitality is above zero.
    pub fn is_active(&self) -> bool {
        self.vitality > 0
    }

    /// Read-only snapshot for status notifications.
    pub fn report(&self) -> CombatantReport {
        CombatantReport {
            name: self.name.clone(),
            vitality: self.vitality,
            resource: self.resource,
            has_won: self.has_won,
        }
    }

    // === Engine-only mutators ===

    pub(crate) fn spend_resource(&mut self, cost: u16) {
        self.resource -= i32::from(cost);
    }

    pub(crate) fn take_damage(&mut self, damage: u16) {
        self.vitality -= i32::from(damage);
    }

    pub(crate) fn record_success(&mut self) {
        self.success_count += 1;
    }

    /// Sets the win flag. Returns true only on the false-to-true transition,
    /// which is what gates the win notification.
    pub(crate) fn mark_won(&mut self) -> bool {
        if self.has_won {
            return false;
        }
        self.has_won = true;
        true
    }
}

/// Snapshot of a combatant's reportable state at a point in time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CombatantReport {
    pub name: String,
    pub vitality: i32,
    pub resource: i32,
    pub has_won: bool,
}

impl fmt::Display for CombatantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Vitality: {}", self.vitality)?;
        writeln!(f, "Resource: {}", self.resource)?;
        write!(f, "Won battle: {}", if self.has_won { "Yes" } else { "No" })
    }
}
