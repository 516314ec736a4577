//! GearSource - Flat bonuses from equipped items

use crate::config::BalanceConfig;
use crate::source::StatSource;
use crate::unit::UnitStats;
use serde::{Deserialize, Serialize};

/// An inventory item with flat combat bonuses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    pub is_equipped: bool,
    #[serde(default)]
    pub bonus_hp: i32,
    #[serde(default)]
    pub bonus_attack: i32,
    #[serde(default)]
    pub bonus_defense: i32,
}

/// Stats from one item; unequipped items contribute nothing
pub struct GearSource<'a> {
    pub item: &'a EquipmentItem,
}

impl<'a> GearSource<'a> {
    pub fn new(item: &'a EquipmentItem) -> Self {
        GearSource { item }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        &self.item.name
    }

    fn apply(&self, stats: &mut UnitStats, _balance: &BalanceConfig) {
        if !self.item.is_equipped {
            return;
        }
        stats.hp += self.item.bonus_hp;
        stats.max_hp += self.item.bonus_hp;
        stats.base_attack += self.item.bonus_attack;
        stats.target_defense += self.item.bonus_defense;
    }
}
