use serde::{Deserialize, Serialize};

/// A named attack skill with a fixed damage output and resource cost.
///
/// Abilities are immutable once constructed and carry no link back to the
/// combatant that learned them. Two abilities with identical stats are still
/// distinct entries in whatever list holds them; selection is always by
/// position in the learned sequence, so there is no equality impl.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ability {
    name: String,
    damage: u16,
    cost: u16,
}

impl Ability {
    pub fn new(name: String, damage: u16, cost: u16) -> Self {
        Self { name, damage, cost }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount subtracted from a target's vitality when this ability lands.
    pub fn damage(&self) -> u16 {
        self.damage
    }

    /// Amount subtracted from the user's resource when this ability lands.
    pub fn cost(&self) -> u16 {
        self.cost
    }
}
