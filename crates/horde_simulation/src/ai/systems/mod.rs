//! AI systems (FSM tick, pool lifecycle)

pub mod fsm;
pub mod lifecycle;

// Re-export all systems
pub use fsm::*;
pub use lifecycle::*;
