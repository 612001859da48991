//! Headless симуляция орды
//!
//! Запускает Bevy App без рендера: цель ходит по кругу, зомби патрулируют,
//! преследуют и атакуют; "игрок" отстреливается, мёртвые зомби возвращаются в пул
//! и через паузу респавнятся.
//!
//! Usage: horde_simulation [config.ron]

use std::collections::HashMap;
use std::process::ExitCode;

use bevy::prelude::*;
use rand::Rng;
use horde_simulation::{
    create_headless_app, fixed_timestep, log_error, log_info, resolve_target, spawn_zombie,
    step_simulation, ActivateZombie, BehaviorState, ColliderTag, CollisionContact,
    ConfigError, ControllerConfig, DeterministicRng, SightScene, TrackedTarget, Zombie, ZombieAttacked,
    ZombieDeactivated,
};

const SEED: u64 = 42;
const ZOMBIE_COUNT: usize = 12;
const TICKS: u32 = 3600;
/// Тиков в пуле до респавна
const RESPAWN_DELAY_TICKS: u32 = 120;
/// Урон пули игрока
const BULLET_DAMAGE: i32 = 10;

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match ControllerConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log_error(&format!("Failed to load config {}: {}", path, err));
                return ExitCode::FAILURE;
            }
        },
        None => ControllerConfig::default(),
    };

    log_info(&format!("Starting horde headless simulation (seed: {})", SEED));

    let mut app = create_headless_app(SEED);
    if let Err(err) = setup_scene(&mut app, &config) {
        log_error(&format!("Failed to spawn zombies: {}", err));
        return ExitCode::FAILURE;
    }

    if let Err(err) = resolve_target(app.world_mut()) {
        log_error(&format!("Scene setup failed: {}", err));
        return ExitCode::FAILURE;
    }

    let mut pool: HashMap<Entity, u32> = HashMap::new();
    let mut kills = 0usize;
    let mut swings = 0usize;

    for tick in 0..TICKS {
        move_target(&mut app, tick);
        player_fires(&mut app);
        respawn_from_pool(&mut app, &mut pool, tick);

        step_simulation(&mut app, fixed_timestep());

        for event in drain_events::<ZombieDeactivated>(&mut app) {
            kills += 1;
            pool.insert(event.entity, tick + RESPAWN_DELAY_TICKS);
        }
        swings += drain_events::<ZombieAttacked>(&mut app).len();

        if tick % 600 == 0 {
            log_info(&format!("Tick {}: {}", tick, state_summary(&mut app)));
        }
    }

    log_info(&format!(
        "Simulation complete: {} swings, {} kills, final {}",
        swings,
        kills,
        state_summary(&mut app)
    ));
    ExitCode::SUCCESS
}

/// Цель, пара колонн-окклюдеров и зомби по кругу
fn setup_scene(app: &mut App, config: &ControllerConfig) -> Result<(), ConfigError> {
    let world = app.world_mut();
    world.spawn((TrackedTarget, Transform::from_xyz(0.0, 0.0, 0.0)));

    {
        let mut scene = world.resource_mut::<SightScene>();
        scene.add_obstacle(Vec3::new(6.0, 0.0, 0.0), 1.5);
        scene.add_obstacle(Vec3::new(-4.0, 0.0, 8.0), 2.0);
    }

    for i in 0..ZOMBIE_COUNT {
        let angle = i as f32 / ZOMBIE_COUNT as f32 * std::f32::consts::TAU;
        let position = Vec3::new(angle.cos() * 25.0, 0.0, angle.sin() * 25.0);
        let entity = spawn_zombie(world, position, config.clone())?;
        world.send_event(ActivateZombie { entity, position: None });
    }
    Ok(())
}

/// Цель медленно ходит по кругу радиуса 12
fn move_target(app: &mut App, tick: u32) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&mut Transform, With<TrackedTarget>>();
    let angle = tick as f32 * fixed_timestep().as_secs_f32() * 0.2;
    for mut transform in query.iter_mut(world) {
        transform.translation = Vec3::new(angle.cos() * 12.0, 0.0, angle.sin() * 12.0);
    }
}

/// Игрок стреляет в одного атакующего зомби с шансом 5% за тик
fn player_fires(app: &mut App) {
    let world = app.world_mut();
    let mut query = world.query::<(Entity, &Zombie)>();
    let attackers: Vec<Entity> = query
        .iter(world)
        .filter(|(_, zombie)| zombie.is_active() && zombie.state() == BehaviorState::Attack)
        .map(|(entity, _)| entity)
        .collect();

    let hit = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        if attackers.is_empty() || !rng.rng.gen_bool(0.05) {
            None
        } else {
            Some(attackers[rng.rng.gen_range(0..attackers.len())])
        }
    };

    if let Some(entity) = hit {
        world.send_event(CollisionContact {
            entity,
            source: ColliderTag::Projectile,
            damage: BULLET_DAMAGE,
        });
    }
}

/// Pool: возвращаем зомби на край карты после задержки
fn respawn_from_pool(app: &mut App, pool: &mut HashMap<Entity, u32>, tick: u32) {
    let ready: Vec<Entity> = pool
        .iter()
        .filter(|(_, respawn_at)| **respawn_at <= tick)
        .map(|(entity, _)| *entity)
        .collect();

    for entity in ready {
        pool.remove(&entity);
        let angle = (entity.index() as f32) * 1.7;
        app.world_mut().send_event(ActivateZombie {
            entity,
            position: Some(Vec3::new(angle.cos() * 30.0, 0.0, angle.sin() * 30.0)),
        });
    }
}

fn drain_events<E: Event + Clone>(app: &mut App) -> Vec<E> {
    app.world_mut().resource_mut::<Events<E>>().drain().collect()
}

fn state_summary(app: &mut App) -> String {
    let world = app.world_mut();
    let mut query = world.query::<&Zombie>();
    let (mut patrol, mut chase, mut attack, mut pooled) = (0, 0, 0, 0);
    for zombie in query.iter(world) {
        match (zombie.is_active(), zombie.state()) {
            (false, _) => pooled += 1,
            (true, BehaviorState::Patrol) => patrol += 1,
            (true, BehaviorState::Chase) => chase += 1,
            (true, BehaviorState::Attack) => attack += 1,
        }
    }
    format!(
        "patrol {}, chase {}, attack {}, pooled {}",
        patrol, chase, attack, pooled
    )
}
