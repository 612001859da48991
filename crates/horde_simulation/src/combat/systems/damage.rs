//! Damage intake system.

use bevy::prelude::*;

use crate::ai::CollisionContact;
use crate::components::Zombie;

/// Система: CollisionContact → вычитание из defense слота
///
/// Нераспознанные теги и неактивные зомби игнорируются.
/// HP может уйти в минус — деактивацию сделает health check в tick_zombies.
pub fn apply_contact_damage(
    mut contacts: EventReader<CollisionContact>,
    mut zombies: Query<&mut Zombie>,
) {
    for contact in contacts.read() {
        let Ok(mut zombie) = zombies.get_mut(contact.entity) else {
            continue;
        };

        if zombie.on_collision(contact.source, contact.damage) {
            crate::log(&format!(
                "💥 {:?} hit by {:?} for {} → hp {}",
                contact.entity,
                contact.source,
                contact.damage,
                zombie.profile().health()
            ));
        }
    }
}
