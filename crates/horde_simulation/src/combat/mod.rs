//! Combat module: статы зомби (TypeProfile) и входящий урон
//!
//! ECS ответственность:
//! - Game state: archetype + stat vector (defense = текущее HP)
//! - Combat rules: урон только от снарядов, без clamp до health check
//!
//! Physics ответственность (вне core):
//! - collision detection → CollisionContact события

pub mod profile;
pub mod systems;


// Re-export основных типов
pub use profile::{describe_profile, Archetype, StatSlot, TypeProfile, ZombieStats};
pub use systems::apply_contact_damage;
