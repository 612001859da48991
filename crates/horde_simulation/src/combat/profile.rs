//! TypeProfile — боевые статы зомби (archetype roll при активации)
//!
//! Архитектура:
//! - Статы = фиксированный массив из 4 i32: damage, defense (= текущее HP), move speed, sight range
//! - Archetype выбирается равновероятно при каждой активации из пула
//! - move speed → NavigationAgent, sight range → BehaviorController

use std::ops::{Index, IndexMut};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::ai::{BehaviorController, NavigationAgent};

/// Archetype зомби (определяет tuple статов)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Archetype {
    #[default]
    Aggressive,
    Defensive,
    Speedy,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Aggressive, Archetype::Defensive, Archetype::Speedy];

    /// Равновероятный выбор (1/3 каждый)
    pub fn roll(rng: &mut dyn RngCore) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Фиксированные статы archetype'а
    ///
    /// | Archetype  | damage | defense | move speed | sight range |
    /// |------------|--------|---------|------------|-------------|
    /// | Aggressive | 40     | 20      | 3          | 10          |
    /// | Defensive  | 10     | 50      | 2          | 15          |
    /// | Speedy     | 20     | 25      | 5          | 10          |
    pub fn stats(self) -> ZombieStats {
        match self {
            Archetype::Aggressive => ZombieStats::new(40, 20, 3, 10),
            Archetype::Defensive => ZombieStats::new(10, 50, 2, 15),
            Archetype::Speedy => ZombieStats::new(20, 25, 5, 10),
        }
    }
}

/// Индекс слота в `ZombieStats`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSlot {
    Damage = 0,
    /// Используется как текущее здоровье
    Defense = 1,
    MoveSpeed = 2,
    SightRange = 3,
}

/// Вектор статов: `[damage, defense, move_speed, sight_range]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZombieStats([i32; 4]);

impl ZombieStats {
    pub fn new(damage: i32, defense: i32, move_speed: i32, sight_range: i32) -> Self {
        Self([damage, defense, move_speed, sight_range])
    }

    pub fn as_array(&self) -> [i32; 4] {
        self.0
    }
}

impl Index<StatSlot> for ZombieStats {
    type Output = i32;

    fn index(&self, slot: StatSlot) -> &i32 {
        &self.0[slot as usize]
    }
}

impl IndexMut<StatSlot> for ZombieStats {
    fn index_mut(&mut self, slot: StatSlot) -> &mut i32 {
        &mut self.0[slot as usize]
    }
}

/// Профиль зомби: archetype + статы
///
/// Мутации статов только через: roll при активации, `set_stats`, входящий урон.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeProfile {
    archetype: Archetype,
    stats: ZombieStats,
}

impl TypeProfile {
    /// Activation roll: новый archetype + статы, push в navigation/controller
    pub fn on_activate(
        &mut self,
        rng: &mut dyn RngCore,
        navigation: &mut dyn NavigationAgent,
        controller: &mut BehaviorController,
    ) {
        let archetype = Archetype::roll(rng);
        self.set_archetype(archetype, navigation, controller);
    }

    /// Применяет archetype детерминированно (без roll)
    pub fn set_archetype(
        &mut self,
        archetype: Archetype,
        navigation: &mut dyn NavigationAgent,
        controller: &mut BehaviorController,
    ) {
        self.archetype = archetype;
        self.stats = archetype.stats();

        navigation.set_speed(self.stats[StatSlot::MoveSpeed] as f32);
        controller.set_sight_range(self.stats[StatSlot::SightRange] as f32);
    }

    /// Прямая перезапись статов (archetype не меняется)
    pub fn set_stats(&mut self, damage: i32, defense: i32, move_speed: i32, sight_range: i32) {
        self.stats = ZombieStats::new(damage, defense, move_speed, sight_range);
    }

    /// Входящий урон: без clamp, HP может уйти в минус до health check
    pub fn apply_damage(&mut self, amount: i32) {
        self.stats[StatSlot::Defense] -= amount;
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn stats(&self) -> ZombieStats {
        self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats[StatSlot::Defense]
    }

    pub fn damage(&self) -> i32 {
        self.stats[StatSlot::Damage]
    }

    pub fn is_alive(&self) -> bool {
        self.health() > 0
    }
}

/// Helper для логов: компактное описание профиля
pub fn describe_profile(profile: &TypeProfile) -> String {
    let stats = profile.stats();
    format!(
        "{:?} (dmg {}, hp {}, speed {}, sight {})",
        profile.archetype(),
        stats[StatSlot::Damage],
        stats[StatSlot::Defense],
        stats[StatSlot::MoveSpeed],
        stats[StatSlot::SightRange],
    )
}
