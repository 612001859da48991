//! Zombie — агрегат агента: BehaviorController + TypeProfile
//!
//! Оба под-объекта принадлежат агрегату (constructor injection),
//! runtime поиска компонентов друг друга нет.

use bevy::prelude::*;
use rand::RngCore;

use crate::ai::{
    BehaviorController, BehaviorState, ColliderTag, ControllerConfig, NavigationAgent,
    ReactivationPolicy, Surroundings, TickOutcome,
};
use crate::combat::{describe_profile, TypeProfile};
use crate::components::NavAgent;

/// Pooling коллаборатор: зомби просит вернуть себя в пул, сам себя не уничтожает
pub trait AgentPool {
    fn deactivate(&mut self, agent: Entity);
}

/// ECS сторона: собираем деактивированных за тик, потом пишем события
impl AgentPool for Vec<Entity> {
    fn deactivate(&mut self, agent: Entity) {
        self.push(agent);
    }
}

/// Зомби-агент (pooled: создаётся один раз, активируется много раз)
#[derive(Component, Debug, Clone, Default)]
#[require(NavAgent, Transform)]
pub struct Zombie {
    controller: BehaviorController,
    profile: TypeProfile,
    active: bool,
}

impl Zombie {
    /// Новый зомби лежит в пуле (inactive) до первого `activate`
    ///
    /// Config не валидируется: вызывающий отвечает за `ControllerConfig::validate`
    /// (`spawn_zombie` делает это сам).
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            controller: BehaviorController::new(config),
            profile: TypeProfile::default(),
            active: false,
        }
    }

    pub fn controller(&self) -> &BehaviorController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut BehaviorController {
        &mut self.controller
    }

    pub fn profile(&self) -> &TypeProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut TypeProfile {
        &mut self.profile
    }

    pub fn state(&self) -> BehaviorState {
        self.controller.state()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Выход из пула: reactivation policy → reroll archetype → active
    ///
    /// Уже активный зомби не трогается (false): reroll только при переходе inactive → active.
    pub fn activate(&mut self, rng: &mut dyn RngCore, navigation: &mut dyn NavigationAgent) -> bool {
        if self.active {
            return false;
        }
        if self.controller.reactivation_policy() == ReactivationPolicy::Reset {
            self.controller.reset();
        }
        self.profile.on_activate(rng, navigation, &mut self.controller);
        self.active = true;
        true
    }

    /// Тик агента. Inactive → no-op
    pub fn tick(
        &mut self,
        agent: Entity,
        delta: f32,
        navigation: &mut dyn NavigationAgent,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
        pool: &mut dyn AgentPool,
    ) -> TickOutcome {
        if !self.active {
            return TickOutcome::default();
        }

        let previous = self.controller.state();
        let outcome = self
            .controller
            .update(delta, &self.profile, navigation, surroundings, rng);

        let current = self.controller.state();
        if previous != current {
            crate::log(&format!("AI: {:?} {:?} → {:?}", agent, previous, current));
        }
        if outcome.attack_started {
            crate::log(&format!("AI: {:?} swing (damage {})", agent, self.profile.damage()));
        }

        if outcome.deactivation_requested {
            self.deactivate(agent, pool);
        }

        outcome
    }

    /// Возврат в пул. Повторный вызов на неактивном — no-op (false)
    pub fn deactivate(&mut self, agent: Entity, pool: &mut dyn AgentPool) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        pool.deactivate(agent);
        crate::log_info(&format!(
            "AI: {:?} deactivated (hp {})",
            agent,
            self.profile.health()
        ));
        true
    }

    /// Collision контакт. Урон только от снарядов и только у активного зомби
    pub fn on_collision(&mut self, source: ColliderTag, damage: i32) -> bool {
        if !self.active || source != ColliderTag::Projectile {
            return false;
        }
        self.profile.apply_damage(damage);
        true
    }

    /// Строка для логов активации
    pub fn describe(&self) -> String {
        describe_profile(&self.profile)
    }
}
