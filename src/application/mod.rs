//! Application layer: lifecycle primitives and the component controllers
//! built on them. Controllers are framework independent; the Leptos views in
//! `app` only render them and forward input.

pub mod components;
pub mod effects;
pub mod task;

pub use effects::{Deps, Dispose, EffectSlot};
pub use task::{BrowserSpawner, Liveness, Spawner, TaskGuard, guarded};
