use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::types::MonsterKindId;

pub mod keys {
    pub const MONSTER_GOBLIN: &str = "goblin";
    pub const MONSTER_ORC: &str = "orc";
    pub const MONSTER_TROLL: &str = "troll";
    pub const MONSTER_BAT: &str = "bat";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub key: String,
    pub color: [u8; 3],
    pub max_hp: i32,
    pub damage: i32,
    /// Tiles per tick.
    pub speed: f32,
    /// Relative; weights need not sum to any particular total.
    pub spawn_weight: u32,
}

/// Fixed monster type table, indexed by [`MonsterKindId`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterTable {
    templates: Vec<MonsterTemplate>,
}

impl MonsterTable {
    pub fn new(templates: Vec<MonsterTemplate>) -> Self {
        Self { templates }
    }

    pub fn build_default() -> Self {
        Self::new(vec![
            MonsterTemplate {
                key: keys::MONSTER_GOBLIN.to_owned(),
                color: [40, 180, 60],
                max_hp: 20,
                damage: 5,
                speed: 2.0 / 32.0,
                spawn_weight: 50,
            },
            MonsterTemplate {
                key: keys::MONSTER_ORC.to_owned(),
                color: [200, 120, 40],
                max_hp: 35,
                damage: 10,
                speed: 1.5 / 32.0,
                spawn_weight: 30,
            },
            MonsterTemplate {
                key: keys::MONSTER_TROLL.to_owned(),
                color: [130, 40, 160],
                max_hp: 60,
                damage: 15,
                speed: 1.0 / 32.0,
                spawn_weight: 10,
            },
            MonsterTemplate {
                key: keys::MONSTER_BAT.to_owned(),
                color: [255, 0, 0],
                max_hp: 10,
                damage: 3,
                speed: 3.0 / 32.0,
                spawn_weight: 10,
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Panics on an id that is not in the table; ids only come from this table.
    pub fn get(&self, id: MonsterKindId) -> &MonsterTemplate {
        match self.templates.get(usize::from(id.0)) {
            Some(template) => template,
            None => panic!("monster type {id:?} is not in the type table"),
        }
    }

    pub fn id_of(&self, key: &str) -> Option<MonsterKindId> {
        self.templates
            .iter()
            .position(|template| template.key == key)
            .map(|index| MonsterKindId(index as u16))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MonsterKindId, &MonsterTemplate)> {
        self.templates
            .iter()
            .enumerate()
            .map(|(index, template)| (MonsterKindId(index as u16), template))
    }

    pub fn total_weight(&self) -> u64 {
        self.templates.iter().map(|template| u64::from(template.spawn_weight)).sum()
    }

    /// Maps a uniform random value onto a type in proportion to spawn weights.
    pub fn pick_weighted(&self, roll: u64) -> MonsterKindId {
        let total = self.total_weight();
        assert!(total > 0, "monster type table has no positive spawn weight");
        let mut remaining = roll % total;
        for (id, template) in self.iter() {
            let weight = u64::from(template.spawn_weight);
            if remaining < weight {
                return id;
            }
            remaining -= weight;
        }
        unreachable!("roll is always below the total weight")
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.templates.is_empty() {
            return Err(ConfigError::EmptyMonsterTable);
        }
        if self.templates.len() > usize::from(u16::MAX) {
            return Err(ConfigError::TooManyMonsterTypes(self.templates.len()));
        }
        if self.total_weight() == 0 {
            return Err(ConfigError::ZeroSpawnWeight);
        }
        for template in &self.templates {
            if template.max_hp <= 0 {
                return Err(ConfigError::NonPositive("monster max_hp"));
            }
            if template.speed.is_nan() || template.speed < 0.0 {
                return Err(ConfigError::NonPositive("monster speed"));
            }
            if template.damage < 0 {
                return Err(ConfigError::Negative("monster damage"));
            }
        }
        Ok(())
    }
}

impl Default for MonsterTable {
    fn default() -> Self {
        Self::build_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_pick_follows_cumulative_weights() {
        let table = MonsterTable::default();
        let goblin = table.id_of(keys::MONSTER_GOBLIN).expect("goblin is in the default table");
        let orc = table.id_of(keys::MONSTER_ORC).expect("orc is in the default table");
        let bat = table.id_of(keys::MONSTER_BAT).expect("bat is in the default table");

        assert_eq!(table.pick_weighted(0), goblin);
        assert_eq!(table.pick_weighted(49), goblin);
        assert_eq!(table.pick_weighted(50), orc);
        assert_eq!(table.pick_weighted(99), bat);
        assert_eq!(table.pick_weighted(100), goblin, "rolls wrap around the total weight");
    }

    #[test]
    fn zero_weight_types_are_never_picked() {
        let mut table = MonsterTable::default();
        table.templates[1].spawn_weight = 0;
        for roll in 0..table.total_weight() {
            assert_ne!(table.pick_weighted(roll), MonsterKindId(1));
        }
    }

    #[test]
    #[should_panic(expected = "not in the type table")]
    fn unknown_type_id_is_fatal() {
        MonsterTable::default().get(MonsterKindId(99));
    }

    #[test]
    fn negative_damage_fails_validation() {
        let mut table = MonsterTable::default();
        table.templates[2].damage = -1;
        assert_eq!(table.validate(), Err(ConfigError::Negative("monster damage")));
        table.templates[2].damage = 0;
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn empty_table_fails_validation() {
        assert_eq!(MonsterTable::new(Vec::new()).validate(), Err(ConfigError::EmptyMonsterTable));
    }
}
