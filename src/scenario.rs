//! Scenario definitions: the parameterized replacement for a hardcoded
//! driver. A scenario lists the combatants, the abilities each one learns,
//! and the scripted command sequence to run against them.

use crate::ability::Ability;
use crate::combatant::Combatant;
use crate::errors::{ScenarioError, ScenarioResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AbilityDef {
    pub name: String,
    pub damage: u16,
    pub cost: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CombatantDef {
    pub name: String,
    pub vitality: i32,
    pub resource: i32,
    pub abilities: Vec<AbilityDef>,
}

impl CombatantDef {
    /// Builds the runtime combatant, learning abilities in listed order.
    pub fn build(&self) -> Combatant {
        let mut combatant = Combatant::new(self.name.clone(), self.vitality, self.resource);
        for ability in &self.abilities {
            combatant.learn(Ability::new(
                ability.name.clone(),
                ability.damage,
                ability.cost,
            ));
        }
        combatant
    }
}

/// One step of a scripted battle. All references are positional: combatants
/// by roster index, abilities by learned order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    Attack {
        attacker: usize,
        ability: usize,
        defender: usize,
    },
    Regenerate {
        combatant: usize,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub combatants: Vec<CombatantDef>,
    pub script: Vec<ScriptCommand>,
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> ScenarioResult<Scenario> {
        let content = fs::read_to_string(path).map_err(|err| ScenarioError::FileRead {
            path: path.display().to_string(),
            details: err.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> ScenarioResult<Scenario> {
        ron::from_str(content).map_err(|err| ScenarioError::Malformed(err.to_string()))
    }

    /// The built-in exhibition match: three combatants with full pools, one
    /// of which never fights, and a five-attack script that ends with Cinder
    /// winning on the three-landed-attacks clause.
    pub fn grudge_match() -> Scenario {
        Scenario {
            combatants: vec![
                CombatantDef {
                    name: "Cinder".to_string(),
                    vitality: 100,
                    resource: 100,
                    abilities: vec![
                        AbilityDef {
                            name: "Flame Lash".to_string(),
                            damage: 30,
                            cost: 20,
                        },
                        AbilityDef {
                            name: "Quick Jab".to_string(),
                            damage: 15,
                            cost: 10,
                        },
                        AbilityDef {
                            name: "Ember Burst".to_string(),
                            damage: 40,
                            cost: 30,
                        },
                    ],
                },
                CombatantDef {
                    name: "Briar".to_string(),
                    vitality: 100,
                    resource: 100,
                    abilities: vec![
                        AbilityDef {
                            name: "Vine Grip".to_string(),
                            damage: 20,
                            cost: 20,
                        },
                        AbilityDef {
                            name: "Thorn Volley".to_string(),
                            damage: 25,
                            cost: 15,
                        },
                        AbilityDef {
                            name: "Sunflare".to_string(),
                            damage: 50,
                            cost: 35,
                        },
                    ],
                },
                CombatantDef {
                    name: "Squall".to_string(),
                    vitality: 100,
                    resource: 100,
                    abilities: vec![
                        AbilityDef {
                            name: "Gale Cut".to_string(),
                            damage: 30,
                            cost: 20,
                        },
                        AbilityDef {
                            name: "Talon Swipe".to_string(),
                            damage: 15,
                            cost: 10,
                        },
                        AbilityDef {
                            name: "Cyclone".to_string(),
                            damage: 20,
                            cost: 15,
                        },
                    ],
                },
            ],
            script: vec![
                ScriptCommand::Attack {
                    attacker: 0,
                    ability: 0,
                    defender: 1,
                },
                ScriptCommand::Attack {
                    attacker: 1,
                    ability: 1,
                    defender: 0,
                },
                ScriptCommand::Attack {
                    attacker: 0,
                    ability: 1,
                    defender: 1,
                },
                ScriptCommand::Regenerate { combatant: 1 },
                ScriptCommand::Attack {
                    attacker: 1,
                    ability: 2,
                    defender: 0,
                },
                ScriptCommand::Attack {
                    attacker: 0,
                    ability: 2,
                    defender: 1,
                },
            ],
        }
    }
}
