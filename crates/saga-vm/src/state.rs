//! Per-entity execution state.
//!
//! Owned by the entity record and reached through the world. Scratch
//! registers persist across ticks (they are only volatile across
//! recompiles); alerts live for one tick; the waypoint list, storage
//! slots, and social handles live as long as the entity.

use crate::alerts::Alerts;
use crate::arena::EntityRef;
use arrayvec::ArrayVec;
use saga_types::BehaviorId;

/// Waypoint slots per entity.
pub const MAX_WAYPOINTS: usize = 8;

/// SetXY/GetXY/AddXY storage slots; the slot argument is masked to this.
pub const STORAGE_SLOTS: usize = 4;

/// Divisor turning a waypoint offset into a movement latch.
pub const LATCH_DIVISOR: f32 = 1000.0;

/// Latch button bits pressed by scripts.
pub const LATCH_LEFT: u32 = 1 << 0;
pub const LATCH_RIGHT: u32 = 1 << 1;
pub const LATCH_JUMP: u32 = 1 << 2;

/// Movement intents understood by FindPath.
pub const MOVE_FOLLOW: i32 = 0;
pub const MOVE_CHARGE: i32 = 1;
pub const MOVE_RETREAT: i32 = 2;

/// The script's working memory: five signed scratch values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub x: i32,
    pub y: i32,
    pub distance: i32,
    pub turn: i32,
    pub argument: i32,
}

/// How the engine turns the entity while it moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnMode {
    #[default]
    Velocity,
    Watch,
    Spin,
    WatchTarget,
}

/// Everything a behavior keeps on its entity between ticks.
#[derive(Debug, Clone)]
pub struct AiState {
    pub behavior: BehaviorId,
    pub regs: Registers,
    pub target: EntityRef,
    pub old_target: EntityRef,
    pub owner: EntityRef,
    pub child: EntityRef,
    pub state: i32,
    pub content: i32,
    /// Countdown polled by IfTimeOut; set by SetTime.
    pub timer: u32,
    pub alerts: Alerts,
    pub storage: [(i32, i32); STORAGE_SLOTS],
    pub waypoints: ArrayVec<(f32, f32), MAX_WAYPOINTS>,
    pub waypoint_cursor: usize,
    pub turn_mode: TurnMode,
    /// Movement input derived in the tick epilogue.
    pub latch: (f32, f32),
    pub latch_buttons: u32,
    pub order: u32,
    pub order_counter: u32,
    /// Deferred removal: set mid-script, acted on after the run.
    pub poof_requested: bool,
}

impl AiState {
    /// Fresh state for a just-spawned entity. Target, owner, and child
    /// all start pointing back at the entity itself.
    pub fn new(behavior: BehaviorId, me: EntityRef) -> Self {
        Self {
            behavior,
            regs: Registers::default(),
            target: me,
            old_target: me,
            owner: me,
            child: me,
            state: 0,
            content: 0,
            timer: 0,
            alerts: Alerts::SPAWNED,
            storage: [(0, 0); STORAGE_SLOTS],
            waypoints: ArrayVec::new(),
            waypoint_cursor: 0,
            turn_mode: TurnMode::default(),
            latch: (0.0, 0.0),
            latch_buttons: 0,
            order: 0,
            order_counter: 0,
            poof_requested: false,
        }
    }

    /// The waypoint the entity is heading for, if any.
    pub fn current_waypoint(&self) -> Option<(f32, f32)> {
        self.waypoints
            .get(self.waypoint_cursor)
            .or_else(|| self.waypoints.last())
            .copied()
    }

    /// Append a waypoint; once full, the last slot is overwritten.
    pub fn push_waypoint(&mut self, x: f32, y: f32) {
        if self.waypoints.is_full() {
            let last = self.waypoints.len() - 1;
            self.waypoints[last] = (x, y);
        } else {
            self.waypoints.push((x, y));
        }
    }

    /// Drop all waypoints and hold position at (x, y).
    pub fn clear_waypoints(&mut self, x: f32, y: f32) {
        self.waypoints.clear();
        self.waypoints.push((x, y));
        self.waypoint_cursor = 0;
    }
}
