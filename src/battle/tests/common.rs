use crate::ability::Ability;
use crate::battle::state::TurnRng;
use crate::combatant::Combatant;
use crate::errors::EngineResult;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```
/// let combatant = TestCombatantBuilder::new("Cinder")
///     .with_vitality(40)
///     .with_ability("Flame Lash", 30, 20)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    vitality: i32,
    resource: i32,
    abilities: Vec<Ability>,
}

impl TestCombatantBuilder {
    /// Creates a new builder with full pools (100 vitality, 100 resource).
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vitality: 100,
            resource: 100,
            abilities: Vec::new(),
        }
    }

    pub fn with_vitality(mut self, vitality: i32) -> Self {
        self.vitality = vitality;
        self
    }

    pub fn with_resource(mut self, resource: i32) -> Self {
        self.resource = resource;
        self
    }

    /// Appends an ability; call order is learn order.
    pub fn with_ability(mut self, name: &str, damage: u16, cost: u16) -> Self {
        self.abilities
            .push(Ability::new(name.to_string(), damage, cost));
        self
    }

    pub fn build(self) -> Combatant {
        let mut combatant = Combatant::new(self.name, self.vitality, self.resource);
        for ability in self.abilities {
            combatant.learn(ability);
        }
        combatant
    }
}

/// Creates a `TurnRng` with a generous buffer of mid-range regeneration
/// rolls, for tests where the specific outcome is not important.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![7; 32])
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: EngineResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
