// ============================================================================
// Engine Module
// Contains the mask state machine and its construction helpers
// ============================================================================

mod mask_engine;
mod session;
mod tick_queue;

pub mod factory;

pub use factory::{create_from_config, MaskEngineBuilder};
pub use mask_engine::MaskEngine;
pub use tick_queue::{Deferred, TickQueue};
