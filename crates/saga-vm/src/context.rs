//! The execution context handed to every builtin and variable read.
//!
//! One shared contract: a builtin gets the entity being run, its scratch
//! registers, and the world, and answers pass/fail. No hierarchy, no
//! per-builtin state.

use crate::arena::EntityRef;
use crate::state::{AiState, Registers};
use crate::world::World;
use saga_types::Word;

pub struct Ctx<'a> {
    /// The entity whose behavior is running.
    pub ent: EntityRef,
    /// Its scratch registers, written back after the run.
    pub regs: &'a mut Registers,
    pub world: &'a mut dyn World,
    /// The function word being executed (Else inspects its indent).
    pub current: Word,
    /// The previously executed instruction's first word.
    pub last_word: Word,
    /// Set when a builtin materially changed the entity (polymorph);
    /// reseeds the CHANGED alert in the epilogue.
    pub changed: bool,
    /// Deferred removal request; honored after the run completes.
    pub poof: bool,
}

impl<'a> Ctx<'a> {
    pub fn ai(&self) -> &AiState {
        self.world.ai(self.ent)
    }

    pub fn ai_mut(&mut self) -> &mut AiState {
        self.world.ai_mut(self.ent)
    }

    pub fn target(&self) -> EntityRef {
        self.world.ai(self.ent).target
    }

    pub fn set_target(&mut self, target: EntityRef) {
        self.world.ai_mut(self.ent).target = target;
    }

    /// This entity's x/y.
    pub fn xy(&self) -> (f32, f32) {
        let (x, y, _) = self.world.position(self.ent);
        (x, y)
    }

    /// The target's x/y.
    pub fn target_xy(&self) -> (f32, f32) {
        let (x, y, _) = self.world.position(self.target());
        (x, y)
    }
}

/// Direction from `from` toward `to`, in 16-bit turn units.
pub fn turn_between(from: (f32, f32), to: (f32, f32)) -> i32 {
    let angle = (to.1 - from.1).atan2(to.0 - from.0) as f64;
    let turn = (angle * 65535.0 / std::f64::consts::TAU) as i32 + 32768;
    turn & 65535
}

/// Script distances are Manhattan.
pub fn manhattan(a: (f32, f32), b: (f32, f32)) -> i32 {
    ((a.0 - b.0) as i32).abs() + ((a.1 - b.1) as i32).abs()
}

/// Sine of a quarter-resolution turn (turn units / 4, a 14-bit circle).
pub fn turn_sin(quarter_turn: i32) -> f32 {
    let idx = (quarter_turn & 16383) as f32;
    (idx * std::f32::consts::TAU / 16384.0).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_between_cardinal_directions() {
        // Toward +x is half a circle after the +32768 bias.
        assert_eq!(turn_between((0.0, 0.0), (10.0, 0.0)), 32768);
        // Toward -x lands just shy of the wrap (truncating cast).
        assert_eq!(turn_between((0.0, 0.0), (-10.0, 0.0)), 65535);
        // Toward +y.
        assert_eq!(turn_between((0.0, 0.0), (0.0, 10.0)), 49151);
    }

    #[test]
    fn manhattan_is_absolute_sum() {
        assert_eq!(manhattan((3.0, 4.0), (0.0, 0.0)), 7);
        assert_eq!(manhattan((0.0, 0.0), (3.0, 4.0)), 7);
    }
}
