//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - zombie: агрегат агента (BehaviorController + TypeProfile), AgentPool
//! - movement: NavMesh агент (NavAgent) и адаптер NavigationAgent
//! - world: цель преследования (TrackedTarget, TargetActor)

pub mod movement;
pub mod world;
pub mod zombie;


// Re-exports для удобного импорта
pub use movement::*;
pub use world::*;
pub use zombie::*;
