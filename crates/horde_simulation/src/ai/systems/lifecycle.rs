//! Pool lifecycle: активация зомби (reroll archetype)

use bevy::prelude::*;

use crate::ai::ActivateZombie;
use crate::components::{NavAgent, NavigationHandle, Zombie};
use crate::DeterministicRng;

/// Система: ActivateZombie → reroll профиля, опциональный респавн в точке
///
/// Reactivation policy (Preserve/Reset) применяет сам Zombie::activate.
pub fn activate_zombies(
    mut events: EventReader<ActivateZombie>,
    mut zombies: Query<(&mut Zombie, &mut Transform, &mut NavAgent)>,
    mut rng: ResMut<DeterministicRng>,
) {
    for event in events.read() {
        let Ok((mut zombie, mut transform, mut nav_agent)) = zombies.get_mut(event.entity) else {
            crate::log_warning(&format!("ActivateZombie: {:?} is not a zombie", event.entity));
            continue;
        };

        if zombie.is_active() {
            crate::log_warning(&format!("ActivateZombie: {:?} is already active, ignored", event.entity));
            continue;
        }

        if let Some(position) = event.position {
            transform.translation = position;
            nav_agent.stop();
        }

        {
            let mut navigation = NavigationHandle::new(&mut transform, &mut nav_agent);
            zombie.activate(&mut rng.rng, &mut navigation);
        }

        crate::log_info(&format!(
            "AI: {:?} activated as {} at {:?}",
            event.entity,
            zombie.describe(),
            transform.translation
        ));
    }
}
