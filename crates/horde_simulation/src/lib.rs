//! Horde Simulation Core
//!
//! ECS-симуляция зомби на Bevy 0.16 (headless strategic layer)
//!
//! Разделение ответственности:
//! - ECS/core = решения AI (Patrol/Chase/Attack), статы, cooldown, смерть
//! - Движок = NavMesh, physics raycast, collision события, pooling

use std::time::Duration;

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod error;
pub mod logger;
pub mod physics;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export базовых типов для удобства
pub use ai::{
    ActivateZombie, BehaviorController, BehaviorState, ColliderTag, CollisionContact,
    ControllerConfig, ReactivationPolicy, ZombieAIPlugin, ZombieAttacked, ZombieDeactivated,
};
pub use combat::{Archetype, StatSlot, TypeProfile, ZombieStats};
pub use components::*;
pub use error::{ConfigError, SetupError};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use physics::{FlatNavMesh, HeadlessWorldPlugin, NavMeshService, SightScene};

/// Fixed timestep симуляции (Гц)
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (clock + RNG + AI)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed мог поставить create_headless_app — не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .add_plugins(ZombieAIPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins((SimulationPlugin, HeadlessWorldPlugin));

    app
}

/// Один fixed тик вручную (без привязки к real time)
///
/// Продвигает `Time<Fixed>` на `delta`, прогоняет FixedUpdate и свапает буферы событий.
/// Событие живёт два шага: читать (или drain) его нужно сразу после тика, в котором оно записано.
pub fn step_simulation(app: &mut App, delta: Duration) {
    let world = app.world_mut();
    world.resource_mut::<Time<Fixed>>().advance_by(delta);
    world.run_schedule(FixedUpdate);

    // First (event_update_system) тут не запускается — свапаем сами
    update_events::<ActivateZombie>(world);
    update_events::<CollisionContact>(world);
    update_events::<ZombieAttacked>(world);
    update_events::<ZombieDeactivated>(world);
}

fn update_events<E: Event>(world: &mut World) {
    if let Some(mut events) = world.get_resource_mut::<Events<E>>() {
        events.update();
    }
}

/// Fixed timestep как Duration
pub fn fixed_timestep() -> Duration {
    Duration::from_secs_f64(1.0 / SIMULATION_HZ)
}

/// Спавнит зомби в пуле (inactive). Активация — через `ActivateZombie`
///
/// Невалидный config отклоняется до спавна.
pub fn spawn_zombie(
    world: &mut World,
    position: Vec3,
    config: ControllerConfig,
) -> Result<Entity, ConfigError> {
    config.validate()?;
    let entity = world
        .spawn((Zombie::new(config), Transform::from_translation(position)))
        .id();
    Ok(entity)
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
