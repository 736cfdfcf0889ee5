//! Combat module - health, the sword swing and contact damage.

mod components;
mod systems;

pub use components::{AttackState, Health};
pub use systems::{apply_contact_damage, resolve_hits, sword_hitbox, try_attack, AttackOutcome};
