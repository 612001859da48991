//! FSM AI system: тик всех активных зомби

use bevy::prelude::*;

use crate::ai::{Surroundings, ZombieAttacked, ZombieDeactivated};
use crate::components::{NavAgent, NavigationHandle, TargetActor, TrackedTarget, Zombie};
use crate::physics::{NavMeshService, SightScene};
use crate::DeterministicRng;

/// Система: тик BehaviorController каждого активного зомби
///
/// Порядок внутри тика (на агента): cooldown → Patrol/Chase/Attack → health check.
/// Выход:
/// - NavAgent.destination / Transform.rotation (через NavigationHandle)
/// - ZombieAttacked при старте swing
/// - ZombieDeactivated при HP <= 0 (ровно одно событие — дальше агент inactive)
pub fn tick_zombies(
    mut zombies: Query<(Entity, &mut Zombie, &mut Transform, &mut NavAgent)>,
    targets: Query<&Transform, (With<TrackedTarget>, Without<Zombie>)>,
    target_actor: Option<Res<TargetActor>>,
    nav_mesh: Res<NavMeshService>,
    scene: Res<SightScene>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
    mut attacked_events: EventWriter<ZombieAttacked>,
    mut deactivated_events: EventWriter<ZombieDeactivated>,
) {
    // Цель резолвится на setup (resolve_target); без неё AI стоит
    let Some(target_actor) = target_actor else {
        return;
    };
    let Ok(target_transform) = targets.get(target_actor.entity) else {
        return;
    };

    let delta = time.delta_secs();
    let target_position = target_transform.translation;
    let sight = scene.view(target_position);
    let surroundings = Surroundings {
        target_position,
        nav_mesh: nav_mesh.query(),
        sight: &sight,
    };

    let mut deactivated: Vec<Entity> = Vec::new();

    for (entity, mut zombie, mut transform, mut nav_agent) in zombies.iter_mut() {
        if !zombie.is_active() {
            continue;
        }

        let outcome = {
            let mut navigation = NavigationHandle::new(&mut transform, &mut nav_agent);
            zombie.tick(
                entity,
                delta,
                &mut navigation,
                &surroundings,
                &mut rng.rng,
                &mut deactivated,
            )
        };

        if outcome.attack_started {
            attacked_events.write(ZombieAttacked {
                attacker: entity,
                target: target_actor.entity,
                damage: zombie.profile().damage(),
            });
        }

        if !zombie.is_active() {
            // Мёртвый зомби не должен продолжать путь
            nav_agent.stop();
        }
    }

    for entity in deactivated {
        deactivated_events.write(ZombieDeactivated { entity });
    }
}
