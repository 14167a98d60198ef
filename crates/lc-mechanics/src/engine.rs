//! The command surface.
//!
//! [`Engine`] owns the random source and the configuration. Each command
//! validates first, then changes the in-memory [`Character`] and reports
//! the field updates a host must persist, so a failed command changes
//! nothing anywhere.

use serde_json::Value;

use crate::check::{self, CheckModifiers, CheckResult, SelectedSide, SidePick};
use crate::config::EngineConfig;
use crate::dice::{self, DicePool, DieChange, DieRange, RandomSource, RngSource};
use crate::distribution::TraitSide;
use crate::error::{MechError, MechResult};
use crate::meter::{
    Aspect, ConvictionChange, Damage, DespairChange, HopeRecovery, ModificationChange,
    ReflectionChange, Strength,
};
use crate::session::SessionContext;
use crate::sheet::{Character, Condition, FameRank, Item, ItemId, StatusRank};
use crate::store::{Applied, FieldUpdate, item_path};

/// A trait's ranges after its distribution changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitRanges {
    /// Faces on the left side.
    pub left: DieRange,
    /// Faces on the right side.
    pub right: DieRange,
}

/// The mechanics engine.
#[derive(Debug)]
pub struct Engine<R = RngSource> {
    config: EngineConfig,
    source: R,
}

impl Engine<RngSource> {
    /// An engine rolling real dice, seeded from the config when it names a seed.
    pub fn from_config(config: EngineConfig) -> Self {
        let source = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        Self { config, source }
    }
}

impl Default for Engine<RngSource> {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl<R: RandomSource> Engine<R> {
    /// An engine drawing from `source`.
    pub fn with_source(config: EngineConfig, source: R) -> Self {
        Self { config, source }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The random source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Resolve a check against already-selected sides. A missing or zero
    /// difficulty falls back to the configured default.
    pub fn resolve_check(
        &mut self,
        sides: &[SelectedSide],
        difficulty: Option<u32>,
        modifiers: &CheckModifiers,
    ) -> MechResult<CheckResult> {
        let difficulty = difficulty
            .filter(|&d| d > 0)
            .unwrap_or(self.config.default_difficulty);
        check::resolve_check(sides, difficulty, modifiers, &mut self.source)
    }

    /// Turn a trait key and a side into a named selection.
    pub fn select_side(
        &self,
        character: &Character,
        trait_key: &str,
        side: TraitSide,
    ) -> MechResult<SelectedSide> {
        character.side(trait_key, side)
    }

    /// Resolve a check for `character`. The sheet is only read.
    pub fn check(
        &mut self,
        character: &Character,
        picks: &[SidePick],
        difficulty: Option<u32>,
        modifiers: &CheckModifiers,
    ) -> MechResult<CheckResult> {
        let sides = character.select(picks)?;
        let result = self.resolve_check(&sides, difficulty, modifiers)?;
        tracing::info!(
            character = %character.id,
            hits = result.hits,
            difficulty = result.difficulty,
            success = result.success,
            "check"
        );
        Ok(result)
    }

    /// Roll Hope: one die per Conviction held, highest face comes off Despair.
    pub fn hope_recovery(&mut self, character: &mut Character) -> MechResult<Applied<HopeRecovery>> {
        let count = character.conviction_count();
        let recovery = character.despair.hope_recovery(count, &mut self.source)?;
        let updates = vec![FieldUpdate::set(character.id, "despair", recovery.value)];
        Ok(Applied::new(recovery, updates))
    }

    /// Move Despair by `delta`, clamped to the meter's bounds.
    pub fn adjust_despair(&self, character: &mut Character, delta: i32) -> Applied<DespairChange> {
        let change = character.despair.adjust(delta);
        let updates = vec![FieldUpdate::set(character.id, "despair", change.value)];
        let signals = change.signals.clone();
        Applied::new(change, updates).with_signals(signals)
    }

    /// Damage (positive) or heal (negative) a Conviction.
    pub fn adjust_conviction_damage(
        &self,
        character: &mut Character,
        id: ItemId,
        delta: i32,
    ) -> MechResult<Applied<ConvictionChange>> {
        let entity = character.id;
        let change = character.conviction_mut(id)?.adjust_damage(id, delta);
        let updates = vec![FieldUpdate::set(
            entity,
            item_path(id, "damage.value"),
            change.value,
        )];
        let signals = change.signals.clone();
        Ok(Applied::new(change, updates).with_signals(signals))
    }

    /// Override a Conviction's damage maximum.
    pub fn set_conviction_max(
        &self,
        character: &mut Character,
        id: ItemId,
        new_max: i32,
    ) -> MechResult<Applied<Damage>> {
        let entity = character.id;
        let damage = character.conviction_mut(id)?.set_damage_max(new_max)?;
        let updates = vec![
            FieldUpdate::set(entity, item_path(id, "damage.max"), damage.max()),
            FieldUpdate::set(entity, item_path(id, "damage.value"), damage.value()),
        ];
        Ok(Applied::new(damage, updates))
    }

    /// Put one mark on the Reflection track.
    pub fn mark_reflection(
        &self,
        character: &mut Character,
        aspect: Aspect,
    ) -> Applied<ReflectionChange> {
        let change = character.reflection.mark(aspect);
        let mut updates = Vec::new();
        if change.marked {
            let (path, value) = match aspect {
                Aspect::Ethical => ("reflection.ethical", change.ethical),
                Aspect::Shadow => ("reflection.shadow", change.shadow),
            };
            updates.push(FieldUpdate::set(character.id, path, value));
        }
        let signals = change.signals.clone();
        Applied::new(change, updates).with_signals(signals)
    }

    /// Activate a Modification during `session`.
    pub fn activate_modification(
        &self,
        character: &mut Character,
        session: &SessionContext,
        id: ItemId,
    ) -> MechResult<Applied<ModificationChange>> {
        let entity = character.id;
        let (modification, despair) = character.modification_and_despair(id)?;
        let change = modification.activate(id, session, despair);
        let updates = if change.overused {
            vec![FieldUpdate::set(entity, "despair", change.despair)]
        } else {
            vec![FieldUpdate::set(
                entity,
                item_path(id, "usedInSession"),
                session.number(),
            )]
        };
        let signals = change.signals.clone();
        Ok(Applied::new(change, updates).with_signals(signals))
    }

    /// Clear Modification markers from sessions before `session`.
    pub fn reset_session(
        &self,
        character: &mut Character,
        session: &SessionContext,
    ) -> Applied<Vec<ItemId>> {
        let cleared = character.reset_session(session);
        tracing::debug!(%session, cleared = cleared.len(), "session reset");
        let updates = cleared
            .iter()
            .map(|id| FieldUpdate::set(character.id, item_path(*id, "usedInSession"), Value::Null))
            .collect();
        Applied::new(cleared, updates)
    }

    /// Move a trait's split: `left_count` faces go to the left side.
    pub fn set_trait_distribution(
        &self,
        character: &mut Character,
        trait_key: &str,
        left_count: u32,
    ) -> MechResult<Applied<TraitRanges>> {
        Character::check_trait_key(trait_key)?;
        let entity = character.id;
        let character_trait = character.character_trait_mut(trait_key)?;
        character_trait.distribution.set_left_count(left_count)?;
        let ranges = TraitRanges {
            left: character_trait.distribution.left_range(),
            right: character_trait.distribution.right_range(),
        };
        tracing::debug!(trait_key, left = %ranges.left, right = %ranges.right, "distribution set");
        let updates = vec![FieldUpdate::set(
            entity,
            format!("traits.{trait_key}.distribution"),
            left_count,
        )];
        Ok(Applied::new(ranges, updates))
    }

    /// Reroll one die of a pool. Hits are not recounted.
    pub fn reroll_die(&mut self, pool: &DicePool, index: usize) -> MechResult<DieChange> {
        dice::reroll_die(pool, index, &mut self.source)
    }

    /// A Conviction flip of a single face.
    pub fn flip_die(&self, value: u32) -> u32 {
        dice::flip_value(value)
    }

    /// Flip one die of a pool. Hits are not recounted.
    pub fn flip_pool_die(&self, pool: &DicePool, index: usize) -> MechResult<DieChange> {
        dice::flip_pool_die(pool, index)
    }

    /// Use a piece of equipment; it needs repair afterwards.
    pub fn use_equipment(&self, character: &mut Character, id: ItemId) -> MechResult<Applied<()>> {
        let entity = character.id;
        let equipment = character.equipment_mut(id)?;
        equipment.needs_repair = true;
        tracing::debug!(%id, "equipment used");
        Ok(Applied::new(
            (),
            vec![FieldUpdate::set(entity, item_path(id, "needsRepair"), true)],
        ))
    }

    /// Repair a piece of equipment back to working order.
    pub fn repair_equipment(
        &self,
        character: &mut Character,
        id: ItemId,
    ) -> MechResult<Applied<()>> {
        let entity = character.id;
        let equipment = character.equipment_mut(id)?;
        equipment.needs_repair = false;
        equipment.condition = Condition::Working;
        tracing::debug!(%id, "equipment repaired");
        Ok(Applied::new(
            (),
            vec![
                FieldUpdate::set(entity, item_path(id, "needsRepair"), false),
                FieldUpdate::set(
                    entity,
                    item_path(id, "condition"),
                    Condition::Working.to_string(),
                ),
            ],
        ))
    }

    /// Set the Fame rank.
    pub fn set_fame_rank(&self, character: &mut Character, rank: FameRank) -> Applied<FameRank> {
        character.authority.fame_rank = rank;
        Applied::new(
            rank,
            vec![FieldUpdate::set(
                character.id,
                "authority.fameRank",
                rank.to_string(),
            )],
        )
    }

    /// Set the Status rank.
    pub fn set_status_rank(
        &self,
        character: &mut Character,
        rank: StatusRank,
    ) -> Applied<StatusRank> {
        character.authority.status_rank = rank;
        Applied::new(
            rank,
            vec![FieldUpdate::set(
                character.id,
                "authority.statusRank",
                rank.to_string(),
            )],
        )
    }

    /// Flip the authority drain flag. Returns the new value.
    pub fn toggle_drain(&self, character: &mut Character) -> Applied<bool> {
        let drain = !character.authority.drain;
        character.authority.drain = drain;
        Applied::new(
            drain,
            vec![FieldUpdate::set(character.id, "authority.drain", drain)],
        )
    }

    /// Give the character a new item.
    pub fn add_item(&self, character: &mut Character, item: Item) -> MechResult<Applied<ItemId>> {
        let id = ItemId::new();
        let value = serde_json::to_value(&item)?;
        tracing::info!(%id, kind = item.kind.name(), name = %item.name, "item added");
        character.items.insert(id, item);
        Ok(Applied::new(
            id,
            vec![FieldUpdate::set(character.id, item_path(id, ""), value)],
        ))
    }

    /// Give the character a fresh Conviction.
    pub fn add_conviction(
        &self,
        character: &mut Character,
        name: &str,
        strength: Strength,
    ) -> MechResult<Applied<ItemId>> {
        self.add_item(character, Item::conviction(name, strength))
    }

    /// Give the character working equipment.
    pub fn add_equipment(
        &self,
        character: &mut Character,
        name: &str,
    ) -> MechResult<Applied<ItemId>> {
        self.add_item(character, Item::equipment(name))
    }

    /// Give the character an unused Modification.
    pub fn add_modification(
        &self,
        character: &mut Character,
        name: &str,
    ) -> MechResult<Applied<ItemId>> {
        self.add_item(character, Item::modification(name))
    }

    /// Take an item away. Lost Convictions are only removed this way.
    pub fn remove_item(&self, character: &mut Character, id: ItemId) -> MechResult<Applied<Item>> {
        let entity = character.id;
        let item = character
            .items
            .remove(&id)
            .ok_or(MechError::ItemNotFound(id))?;
        tracing::info!(%id, name = %item.name, "item removed");
        Ok(Applied::new(
            item,
            vec![FieldUpdate::remove(entity, item_path(id, ""))],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedSource;
    use crate::distribution::{CharacterTrait, TraitDistribution};
    use crate::signal::Signal;
    use crate::store::FieldChange;

    fn engine(faces: &[u32]) -> Engine<ScriptedSource> {
        Engine::with_source(EngineConfig::default(), ScriptedSource::new(faces.to_vec()))
    }

    fn mira() -> Character {
        Character::new("Mira")
            .with_trait(
                "temper",
                CharacterTrait::from_label("Calm - Fierce", TraitDistribution::new(3).unwrap())
                    .unwrap(),
            )
            .with_trait("drive", CharacterTrait::new("Doubt", "Resolve"))
    }

    fn set_value(update: &FieldUpdate) -> (&str, &Value) {
        match &update.change {
            FieldChange::Set { path, value } => (path.as_str(), value),
            FieldChange::Remove { path } => panic!("unexpected removal of {path}"),
        }
    }

    #[test]
    fn check_uses_default_difficulty() {
        let mut e = engine(&[2, 6]);
        let c = mira();
        let result = e
            .check(
                &c,
                &[SidePick::new("temper", TraitSide::Left)],
                None,
                &CheckModifiers::default(),
            )
            .unwrap();
        assert_eq!(result.difficulty, 1);
        assert_eq!(result.hits, 1);
        assert!(result.success);
        assert_eq!(result.sides[0].name, "Calm");
    }

    #[test]
    fn zero_difficulty_uses_configured_default() {
        let config = EngineConfig::default().with_default_difficulty(2);
        let mut e = Engine::with_source(config, ScriptedSource::new(vec![2, 6]));
        let result = e
            .check(
                &mira(),
                &[SidePick::new("temper", TraitSide::Left)],
                Some(0),
                &CheckModifiers::default(),
            )
            .unwrap();
        assert_eq!(result.difficulty, 2);
        assert!(!result.success);
    }

    #[test]
    fn check_with_unknown_trait_draws_nothing() {
        let mut e = engine(&[2, 6]);
        let err = e
            .check(
                &mira(),
                &[SidePick::new("luck", TraitSide::Left)],
                Some(2),
                &CheckModifiers::default(),
            )
            .unwrap_err();
        assert!(matches!(err, MechError::UnknownTrait(_)));
        assert_eq!(e.source().draws(), 0);
    }

    #[test]
    fn check_carries_conviction_descriptor() {
        let mut e = engine(&[4, 4, 4, 4]);
        let modifiers = CheckModifiers {
            signature_used: true,
            help_used: true,
            conviction: Some("Never again".to_string()),
        };
        let result = e
            .check(
                &mira(),
                &[SidePick::new("temper", TraitSide::Right)],
                Some(4),
                &modifiers,
            )
            .unwrap();
        assert_eq!(result.dice.len(), 4);
        assert_eq!(result.hits, 4);
        assert_eq!(result.conviction.as_deref(), Some("Never again"));
    }

    #[test]
    fn hope_rolls_one_die_per_conviction() {
        let mut e = engine(&[2, 5]);
        let mut c = mira();
        c.despair = crate::meter::DespairMeter::new(7).unwrap();
        e.add_conviction(&mut c, "a", Strength::Weak).unwrap();
        e.add_conviction(&mut c, "b", Strength::Strong).unwrap();

        let applied = e.hope_recovery(&mut c).unwrap();
        assert_eq!(applied.result.reduction, 5);
        assert_eq!(c.despair.value(), 2);
        assert_eq!(set_value(&applied.updates[0]), ("despair", &Value::from(2)));
    }

    #[test]
    fn hope_without_convictions_fails() {
        let mut e = engine(&[6]);
        let mut c = mira();
        assert!(matches!(
            e.hope_recovery(&mut c),
            Err(MechError::InvalidSelection(_))
        ));
        assert_eq!(e.source().draws(), 0);
    }

    #[test]
    fn despair_breakdown_signal() {
        let e = engine(&[]);
        let mut c = mira();
        let applied = e.adjust_despair(&mut c, 12);
        assert_eq!(applied.result.value, 10);
        assert_eq!(applied.signals, vec![Signal::BreakdownTriggered]);
        assert_eq!(set_value(&applied.updates[0]).1, &Value::from(10));
    }

    #[test]
    fn conviction_damage_and_loss() {
        let e = engine(&[]);
        let mut c = mira();
        let id = e.add_conviction(&mut c, "hold", Strength::Stable).unwrap().result;

        let applied = e.adjust_conviction_damage(&mut c, id, 5).unwrap();
        assert_eq!(applied.result.value, 2);
        assert_eq!(applied.signals, vec![Signal::ConvictionLost(id)]);
        assert_eq!(
            set_value(&applied.updates[0]).0,
            format!("items.{}.damage.value", id.0)
        );
        // Lost Convictions stay on the sheet.
        assert!(c.item(id).is_ok());
    }

    #[test]
    fn conviction_max_override() {
        let e = engine(&[]);
        let mut c = mira();
        let id = e.add_conviction(&mut c, "hold", Strength::Strong).unwrap().result;
        e.adjust_conviction_damage(&mut c, id, 3).unwrap();

        let applied = e.set_conviction_max(&mut c, id, 1).unwrap();
        assert_eq!(applied.result.max(), 1);
        assert_eq!(applied.result.value(), 1);
        assert_eq!(applied.updates.len(), 2);

        assert!(matches!(
            e.set_conviction_max(&mut c, id, -1),
            Err(MechError::OutOfRangeValue(_))
        ));
    }

    #[test]
    fn conviction_command_on_wrong_item() {
        let e = engine(&[]);
        let mut c = mira();
        let id = e.add_equipment(&mut c, "Deck").unwrap().result;
        assert!(matches!(
            e.adjust_conviction_damage(&mut c, id, 1),
            Err(MechError::WrongItemKind { .. })
        ));
    }

    #[test]
    fn reflection_writes_marked_counter() {
        let e = engine(&[]);
        let mut c = mira();
        let applied = e.mark_reflection(&mut c, Aspect::Shadow);
        assert_eq!(
            set_value(&applied.updates[0]),
            ("reflection.shadow", &Value::from(1))
        );
        for _ in 0..5 {
            e.mark_reflection(&mut c, Aspect::Ethical);
        }
        let full = e.mark_reflection(&mut c, Aspect::Ethical);
        assert!(!full.result.marked);
        assert!(full.updates.is_empty());
        assert_eq!(full.signals, vec![Signal::ReflectionTrackFull]);
    }

    #[test]
    fn modification_overuse_costs_despair() {
        let e = engine(&[]);
        let mut c = mira();
        let session = SessionContext::default();
        let id = e.add_modification(&mut c, "Overclock").unwrap().result;

        let first = e.activate_modification(&mut c, &session, id).unwrap();
        assert_eq!(first.signals, vec![Signal::ModificationActivated(id)]);
        assert_eq!(
            set_value(&first.updates[0]),
            (item_path(id, "usedInSession").as_str(), &Value::from(1))
        );

        let second = e.activate_modification(&mut c, &session, id).unwrap();
        assert_eq!(second.signals, vec![Signal::ModificationOverused(id)]);
        assert_eq!(c.despair.value(), 4);
        assert_eq!(set_value(&second.updates[0]), ("despair", &Value::from(4)));
    }

    #[test]
    fn overuse_into_breakdown_orders_signals() {
        let e = engine(&[]);
        let mut c = mira();
        c.despair = crate::meter::DespairMeter::new(8).unwrap();
        let session = SessionContext::default();
        let id = e.add_modification(&mut c, "Overclock").unwrap().result;
        e.activate_modification(&mut c, &session, id).unwrap();

        let applied = e.activate_modification(&mut c, &session, id).unwrap();
        assert_eq!(
            applied.signals,
            vec![Signal::ModificationOverused(id), Signal::BreakdownTriggered]
        );
    }

    #[test]
    fn new_session_allows_another_use() {
        let e = engine(&[]);
        let mut c = mira();
        let first = SessionContext::default();
        let id = e.add_modification(&mut c, "Overclock").unwrap().result;
        e.activate_modification(&mut c, &first, id).unwrap();

        let second = first.next();
        let reset = e.reset_session(&mut c, &second);
        assert_eq!(reset.result, vec![id]);
        assert_eq!(set_value(&reset.updates[0]).1, &Value::Null);

        let applied = e.activate_modification(&mut c, &second, id).unwrap();
        assert!(applied.result.activated);
        assert_eq!(c.despair.value(), 0);
    }

    #[test]
    fn trait_distribution_update() {
        let e = engine(&[]);
        let mut c = mira();
        let applied = e.set_trait_distribution(&mut c, "temper", 4).unwrap();
        assert_eq!(applied.result.left, DieRange::new(1, 4));
        assert_eq!(applied.result.right, DieRange::new(5, 6));
        assert_eq!(
            set_value(&applied.updates[0]),
            ("traits.temper.distribution", &Value::from(4))
        );
    }

    #[test]
    fn trait_distribution_rejects_out_of_range() {
        let e = engine(&[]);
        let mut c = mira();
        for bad in [0, 6] {
            assert!(matches!(
                e.set_trait_distribution(&mut c, "temper", bad),
                Err(MechError::OutOfRangeValue(_))
            ));
        }
        assert_eq!(c.traits["temper"].distribution.left_count(), 3);
        assert!(matches!(
            e.set_trait_distribution(&mut c, "luck", 2),
            Err(MechError::UnknownTrait(_))
        ));
    }

    #[test]
    fn trait_distribution_rejects_dotted_key() {
        let e = engine(&[]);
        let broken = CharacterTrait::new("Calm", "Fierce");
        let mut c = mira().with_trait("a.b", broken.clone());
        let err = e.set_trait_distribution(&mut c, "a.b", 4).unwrap_err();
        assert!(matches!(err, MechError::InvalidTraitKey(_)));
        assert_eq!(c.traits["a.b"], broken);
    }

    #[test]
    fn reroll_and_flip_return_plain_totals() {
        let mut e = engine(&[6]);
        let pool = DicePool::from_values([2, 3]);
        let rerolled = e.reroll_die(&pool, 0).unwrap();
        assert_eq!(rerolled.pool.values(), &[6, 3]);
        assert_eq!(rerolled.total, 9);

        let flipped = e.flip_pool_die(&pool, 1).unwrap();
        assert_eq!(flipped.pool.values(), &[2, 4]);
        assert_eq!(flipped.total, 6);
        assert_eq!(e.flip_die(1), 6);
        assert!(matches!(
            e.flip_pool_die(&pool, 2),
            Err(MechError::OutOfRangeValue(_))
        ));
    }

    #[test]
    fn equipment_use_and_repair() {
        let e = engine(&[]);
        let mut c = mira();
        let id = e.add_equipment(&mut c, "Deck").unwrap().result;

        e.use_equipment(&mut c, id).unwrap();
        assert!(c.equipment_mut(id).unwrap().needs_repair);

        let repaired = e.repair_equipment(&mut c, id).unwrap();
        let equipment = c.equipment_mut(id).unwrap();
        assert!(!equipment.needs_repair);
        assert_eq!(equipment.condition, Condition::Working);
        assert_eq!(repaired.updates.len(), 2);
    }

    #[test]
    fn authority_commands() {
        let e = engine(&[]);
        let mut c = mira();
        e.set_fame_rank(&mut c, FameRank::Storm);
        let status = e.set_status_rank(&mut c, StatusRank::Guru);
        assert_eq!(
            set_value(&status.updates[0]),
            ("authority.statusRank", &Value::from("guru"))
        );
        assert!(e.toggle_drain(&mut c).result);
        assert!(!e.toggle_drain(&mut c).result);
        assert_eq!(c.authority.fame_rank, FameRank::Storm);
    }

    #[test]
    fn add_and_remove_items() {
        let e = engine(&[]);
        let mut c = mira();
        let added = e.add_item(&mut c, Item::signature("Cold read")).unwrap();
        let id = added.result;
        let (path, value) = set_value(&added.updates[0]);
        assert_eq!(path, format!("items.{}", id.0));
        assert_eq!(value["type"], "signature");

        let removed = e.remove_item(&mut c, id).unwrap();
        assert_eq!(removed.result.name, "Cold read");
        assert!(matches!(
            removed.updates[0].change,
            FieldChange::Remove { .. }
        ));
        assert!(matches!(
            e.remove_item(&mut c, id),
            Err(MechError::ItemNotFound(_))
        ));
    }

    #[test]
    fn seeded_engines_agree() {
        let config = EngineConfig::default().with_seed(42);
        let mut a = Engine::from_config(config.clone());
        let mut b = Engine::from_config(config);
        let sides = [SelectedSide::unnamed(1, 3)];
        let modifiers = CheckModifiers::default();
        for _ in 0..10 {
            let x = a.resolve_check(&sides, None, &modifiers).unwrap();
            let y = b.resolve_check(&sides, None, &modifiers).unwrap();
            assert_eq!(x.dice, y.dice);
        }
    }
}
