//! BehaviorController — FSM зомби (Patrol / Chase / Attack)
//!
//! Каждый тик:
//! 1. cooldown атаки уменьшается на delta
//! 2. evaluate_behavior — слоёная перепроверка состояний (см. ниже)
//! 3. health check — HP <= 0 → запрос деактивации
//!
//! Слоёная оценка: ветка текущего состояния делает early return, поэтому
//! регресс в Patrol ловится только через eval_patrol, а апгрейд (Chase → Attack)
//! может случиться в том же тике что и шаг преследования. Порядок вызовов
//! определяет поведение на границах радиусов — не менять.

use bevy::prelude::*;
use rand::{Rng, RngCore};

use super::config::{ControllerConfig, ReactivationPolicy};
use crate::ai::perception::{ColliderTag, NavigationAgent, Surroundings};
use crate::combat::TypeProfile;

/// Состояние FSM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BehaviorState {
    /// Бродим между случайными точками NavMesh
    #[default]
    Patrol,
    /// Цель видна, но вне радиуса атаки — идём к ней
    Chase,
    /// Цель в радиусе атаки — стоим, смотрим на неё, бьём по cooldown
    Attack,
}

/// Итог одного тика контроллера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Начался новый swing (cooldown был свободен)
    pub attack_started: bool,
    /// HP <= 0 — нужно вернуть агента в пул
    pub deactivation_requested: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorController {
    config: ControllerConfig,
    state: BehaviorState,
    sight_range: f32,
    /// Валидированная (NavMesh) и ещё не достигнутая patrol точка
    patrol_point: Option<Vec3>,
    /// Оставшееся время cooldown атаки (None = можно бить)
    attack_cooldown: Option<f32>,
}

impl Default for BehaviorController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl BehaviorController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            sight_range: config.sight_range,
            config,
            state: BehaviorState::Patrol,
            patrol_point: None,
            attack_cooldown: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> BehaviorState {
        self.state
    }

    pub fn sight_range(&self) -> f32 {
        self.sight_range
    }

    /// Пишется TypeProfile при активации
    pub fn set_sight_range(&mut self, sight_range: f32) {
        self.sight_range = sight_range;
    }

    pub fn attack_range(&self) -> f32 {
        self.config.attack_range
    }

    pub fn reactivation_policy(&self) -> ReactivationPolicy {
        self.config.reactivation
    }

    pub fn patrol_point(&self) -> Option<Vec3> {
        self.patrol_point
    }

    pub fn patrol_point_set(&self) -> bool {
        self.patrol_point.is_some()
    }

    pub fn attack_cooldown_active(&self) -> bool {
        self.attack_cooldown.is_some()
    }

    pub fn cooldown_remaining(&self) -> Option<f32> {
        self.attack_cooldown
    }

    /// Сброс runtime state (ReactivationPolicy::Reset). Sight range не трогаем —
    /// его всё равно перепишет activation roll
    pub fn reset(&mut self) {
        self.state = BehaviorState::Patrol;
        self.patrol_point = None;
        self.attack_cooldown = None;
    }

    /// Полный тик: cooldown → FSM → health check
    pub fn update(
        &mut self,
        delta: f32,
        profile: &TypeProfile,
        navigation: &mut dyn NavigationAgent,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
    ) -> TickOutcome {
        self.tick_cooldown(delta);
        let attack_started = self.evaluate_behavior(navigation, surroundings, rng);

        TickOutcome {
            attack_started,
            deactivation_requested: profile.health() <= 0,
        }
    }

    pub fn tick_cooldown(&mut self, delta: f32) {
        let Some(remaining) = self.attack_cooldown else {
            return;
        };
        let remaining = remaining - delta;
        self.attack_cooldown = (remaining > 0.0).then_some(remaining);
    }

    /// Слоёная оценка FSM. Возвращает true если начался новый swing
    pub fn evaluate_behavior(
        &mut self,
        navigation: &mut dyn NavigationAgent,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
    ) -> bool {
        match self.state {
            BehaviorState::Patrol => {
                self.eval_patrol(navigation, surroundings, rng);
                self.eval_chase(navigation, surroundings);
                false
            }
            BehaviorState::Chase => {
                self.eval_patrol(navigation, surroundings, rng);
                self.eval_chase(navigation, surroundings);
                self.eval_attack(navigation, surroundings)
            }
            BehaviorState::Attack => {
                self.eval_chase(navigation, surroundings);
                self.eval_attack(navigation, surroundings)
            }
        }
    }

    // ========== Perception ==========

    pub fn in_attack_range(&self, position: Vec3, target: Vec3) -> bool {
        position.distance(target) < self.config.attack_range
    }

    pub fn in_sight_range(&self, position: Vec3, target: Vec3) -> bool {
        position.distance(target) < self.sight_range
    }

    /// Луч к цели длиной sight range; видно только если ПЕРВЫЙ hit — цель
    pub fn target_visible(&self, position: Vec3, surroundings: &Surroundings<'_>) -> bool {
        let Some(direction) = (surroundings.target_position - position).try_normalize() else {
            // Агент внутри цели — направления нет, луч не пускаем
            return false;
        };

        matches!(
            surroundings.sight.raycast_first_hit(position, direction, self.sight_range),
            Some(hit) if hit.tag == ColliderTag::Target
        )
    }

    fn target_acquired(&self, position: Vec3, surroundings: &Surroundings<'_>) -> bool {
        self.in_sight_range(position, surroundings.target_position)
            && self.target_visible(position, surroundings)
    }

    // ========== State branches ==========

    fn eval_patrol(
        &mut self,
        navigation: &mut dyn NavigationAgent,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
    ) {
        if self.state == BehaviorState::Patrol {
            self.run_patrol_step(navigation, surroundings, rng);
            return;
        }

        // Цель потеряна (далеко или загорожена) → назад в патруль
        if !self.target_acquired(navigation.position(), surroundings) {
            self.state = BehaviorState::Patrol;
        }
    }

    fn eval_chase(&mut self, navigation: &mut dyn NavigationAgent, surroundings: &Surroundings<'_>) {
        if self.state == BehaviorState::Chase {
            navigation.set_destination(surroundings.target_position);
            return;
        }

        let position = navigation.position();
        if self.in_sight_range(position, surroundings.target_position)
            && !self.in_attack_range(position, surroundings.target_position)
            && self.target_visible(position, surroundings)
        {
            self.state = BehaviorState::Chase;
        }
    }

    fn eval_attack(&mut self, navigation: &mut dyn NavigationAgent, surroundings: &Surroundings<'_>) -> bool {
        let position = navigation.position();
        // Видимость тут НЕ проверяется: в упор атакуем даже через мгновенную окклюзию
        if self.in_sight_range(position, surroundings.target_position)
            && self.in_attack_range(position, surroundings.target_position)
        {
            self.state = BehaviorState::Attack;
            return self.perform_attack(navigation, surroundings.target_position);
        }
        false
    }

    // ========== Actions ==========

    /// Шаг патруля: sample точки (если нет) → move → проверка прибытия
    pub fn run_patrol_step(
        &mut self,
        navigation: &mut dyn NavigationAgent,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
    ) {
        let position = navigation.position();

        if self.patrol_point.is_none() {
            self.patrol_point = self.sample_patrol_point(position, surroundings, rng);
        }

        let Some(point) = self.patrol_point else {
            // NavMesh не нашёл точку — повторим в следующем тике
            return;
        };

        navigation.set_destination(point);

        if position.distance(point) < self.config.patrol_arrival_distance {
            self.patrol_point = None;
        }
    }

    /// Случайная точка в квадрате ±range по X/Z, snap к NavMesh
    fn sample_patrol_point(
        &self,
        position: Vec3,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<Vec3> {
        let range = self.config.patrol_point_range;
        // Невалидный (не прошедший validate) range: точки нет, gen_range не зовём
        if !range.is_finite() || range < 0.0 {
            return None;
        }
        let offset_x = rng.gen_range(-range..=range);
        let offset_z = rng.gen_range(-range..=range);
        let candidate = Vec3::new(position.x + offset_x, position.y, position.z + offset_z);

        surroundings
            .nav_mesh
            .sample_nearest_point(candidate, self.config.patrol_snap_radius)
    }

    /// Атака: стоп + разворот к цели; swing только если cooldown свободен
    ///
    /// Возвращает true если запущен новый cooldown.
    pub fn perform_attack(&mut self, navigation: &mut dyn NavigationAgent, target: Vec3) -> bool {
        let position = navigation.position();
        navigation.set_destination(position);
        navigation.face_towards(target);

        if self.attack_cooldown.is_some() {
            return false;
        }

        self.attack_cooldown = Some(self.config.time_between_attacks);
        true
    }
}
