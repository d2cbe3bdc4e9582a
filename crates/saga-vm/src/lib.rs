//! SAGA interpreter.
//!
//! Replays compiled behaviors once per entity per simulation tick,
//! single-threaded and in stable entity order. Per-entity execution
//! state lives in [`AiState`]; everything outside it goes through the
//! [`World`] trait, which the surrounding game supplies.

mod alerts;
mod arena;
mod builtins;
mod context;
mod interp;
mod state;
mod symbols;
mod vars;
mod world;

pub use alerts::Alerts;
pub use arena::{EntityRef, SlotArena};
pub use builtins::{code_of, lookup, Builtin, BuiltinDef, BUILTINS};
pub use context::Ctx;
pub use interp::{run_tick, think};
pub use state::{
    AiState, Registers, TurnMode, LATCH_JUMP, LATCH_LEFT, LATCH_RIGHT, MAX_WAYPOINTS,
    MOVE_CHARGE, MOVE_FOLLOW, MOVE_RETREAT, STORAGE_SLOTS,
};
pub use symbols::standard_symbols;
pub use vars::{variable_code, VARIABLE_NAMES};
pub use world::{Gender, IdszKind, TargetScope, World};
