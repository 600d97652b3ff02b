use crate::battle::state::{BattleEvent, EventBus, TurnRng};
use crate::combatant::Combatant;
use crate::errors::{EngineError, EngineResult};

/// Landed attacks needed for the streak half of the win condition.
const WIN_SUCCESS_COUNT: u32 = 3;

/// The streak half of the win condition also requires vitality strictly
/// above this floor.
const WIN_VITALITY_FLOOR: i32 = 20;

/// What a single attack command resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Every precondition held and the attack was applied. `victory` advises
    /// the driver that the attacker's win flag is now set and no further
    /// commands should be issued for it.
    Landed { victory: bool },

    /// A precondition failed; nothing was mutated.
    Rejected,
}

/// Resolves one attack from `attacker` against `defender`.
///
/// Preconditions: the attacker is active, the defender is active, and the
/// attacker can cover the ability's cost. If any fails, the only effect is a
/// rejection event. Otherwise the ability's cost and damage are applied, the
/// attacker's success count increments, and the win condition is evaluated
/// before a status snapshot of both participants is pushed.
///
/// An out-of-range ability index is a driver bug, not a combat outcome, and
/// surfaces as an error.
pub fn resolve_attack(
    attacker: &mut Combatant,
    ability_index: usize,
    defender: &mut Combatant,
    bus: &mut EventBus,
) -> EngineResult<AttackOutcome> {
    let ability = attacker
        .ability(ability_index)
        .ok_or_else(|| EngineError::UnknownAbility {
            combatant: attacker.name().to_string(),
            index: ability_index,
        })?
        .clone();

    if !attacker.is_active() || !defender.is_active() || !attacker.has_sufficient_resource(&ability)
    {
        bus.push(BattleEvent::AttackRejected {
            attacker: attacker.name().to_string(),
        });
        return Ok(AttackOutcome::Rejected);
    }

    attacker.spend_resource(ability.cost());
    defender.take_damage(ability.damage());
    attacker.record_success();

    bus.push(BattleEvent::AttackLanded {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        ability: ability.name().to_string(),
    });

    let victory = evaluate_win_condition(attacker, defender, bus);

    bus.push(BattleEvent::StatusSnapshot {
        reports: [attacker.report(), defender.report()],
    });

    Ok(AttackOutcome::Landed { victory })
}

/// Evaluates the asymmetric win condition for `combatant` against `opponent`:
/// the opponent is defeated, or the combatant has landed three attacks while
/// keeping its own vitality strictly above the floor.
///
/// The win notification fires only on the flag's false-to-true transition;
/// re-evaluating after a win changes nothing. Returns the flag after
/// evaluation.
pub fn evaluate_win_condition(
    combatant: &mut Combatant,
    opponent: &Combatant,
    bus: &mut EventBus,
) -> bool {
    let condition_met = !opponent.is_active()
        || (combatant.success_count() >= WIN_SUCCESS_COUNT
            && combatant.vitality() > WIN_VITALITY_FLOOR);

    if condition_met && combatant.mark_won() {
        bus.push(BattleEvent::BattleWon {
            winner: combatant.name().to_string(),
        });
    }

    combatant.has_won()
}

/// Rolls resource regeneration for a combatant and records the outcome.
/// Returns the new resource total.
pub fn resolve_regeneration(
    combatant: &mut Combatant,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> i32 {
    let before = combatant.resource();
    let new_total = combatant.regenerate_resource(rng);
    // The roll fits in u8; new_total - before is the roll itself.
    let gained = (new_total - before) as u8;

    bus.push(BattleEvent::ResourceRegenerated {
        combatant: combatant.name().to_string(),
        gained,
        new_total,
    });

    new_total
}
