//! The per-entity, per-tick fetch-dispatch loop.
//!
//! One entity's behavior runs to completion inside its tick slot — no
//! suspension, no yielding. Effects made by entity N are visible to
//! entity N+1 in the same tick, never the other way around.

use crate::alerts::Alerts;
use crate::arena::EntityRef;
use crate::builtins;
use crate::context::Ctx;
use crate::state::LATCH_DIVISOR;
use crate::vars::read_variable;
use crate::world::World;
use saga_types::{Op, ScriptStore, Word, DEFAULT_BEHAVIOR};

/// Run every thinking entity's behavior once.
pub fn run_tick(store: &ScriptStore, world: &mut dyn World) {
    for ent in world.entities() {
        if !world.exists(ent) {
            continue;
        }
        let alerts = world.ai(ent).alerts;
        let stowed = world.is_stowed(ent);
        let dead_but_pending =
            !world.is_alive(ent) && !alerts.intersects(Alerts::CLEANED_UP | Alerts::CRUSHED);
        if stowed || dead_but_pending {
            continue;
        }
        // A crushed or cleaned-up entity hears nothing else this tick.
        if alerts.contains(Alerts::CRUSHED) {
            world.ai_mut(ent).alerts = Alerts::CRUSHED;
        } else if alerts.contains(Alerts::CLEANED_UP) {
            world.ai_mut(ent).alerts = Alerts::CLEANED_UP;
        }
        think(store, world, ent);
    }
}

/// Execute one entity's behavior for this tick.
pub fn think(store: &ScriptStore, world: &mut dyn World, ent: EntityRef) {
    let behavior = world.ai(ent).behavior;

    // ── prologue ─────────────────────────────────────────────────────
    let target = world.ai(ent).target;
    world.ai_mut(ent).old_target = target;

    if !world.is_player(ent) {
        world.ai_mut(ent).latch_buttons = 0;
    }

    // Lose an invisible target unless this entity can see it.
    if world.is_alive(ent) && !world.can_see_invisible(ent) && world.is_invisible(target) {
        world.ai_mut(ent).target = ent;
    }

    // Registers persist across ticks; run on a copy, write back after.
    let mut regs = world.ai(ent).regs;
    let mut ctx = Ctx {
        ent,
        regs: &mut regs,
        world: &mut *world,
        current: Word::raw(0),
        last_word: Word::raw(0),
        changed: false,
        poof: false,
    };

    // ── fetch-dispatch ───────────────────────────────────────────────
    let mut cursor = store.start_of(behavior);
    loop {
        let word = store.word(cursor);
        if word.is_end() {
            break;
        }
        if word.is_function() {
            ctx.current = word;
            let code = word.value();
            let passed = match builtins::lookup(code) {
                Some(builtin) => builtin(&mut ctx),
                None => {
                    tracing::warn!(
                        behavior = behavior.0,
                        code,
                        "unhandled script function, skipping"
                    );
                    false
                }
            };
            let jump = store.word(cursor + 1).0;
            if passed {
                cursor += 2;
            } else {
                cursor = jump;
            }
        } else {
            let count = store.word(cursor + 1).0 & 255;
            let mut sum: i32 = 0;
            for i in 0..count {
                sum = apply_operand(&mut ctx, sum, store.word(cursor + 2 + i));
            }
            store_register(&mut ctx, word.value(), sum);
            cursor += 2 + count;
        }
        ctx.last_word = word;
    }

    let changed = ctx.changed;
    let poof = ctx.poof;

    // ── epilogue ─────────────────────────────────────────────────────
    world.ai_mut(ent).regs = regs;

    if !world.is_player(ent) && behavior != DEFAULT_BEHAVIOR {
        let latch = if world.is_mount(ent) {
            // A ridden mount steers by its rider's latch.
            world
                .holding(ent, 0)
                .map(|rider| world.ai(rider).latch)
        } else {
            None
        };
        let latch = latch.unwrap_or_else(|| match world.ai(ent).current_waypoint() {
            Some((wx, wy)) => {
                let (x, y, _) = world.position(ent);
                ((wx - x) / LATCH_DIVISOR, (wy - y) / LATCH_DIVISOR)
            }
            None => (0.0, 0.0),
        });
        world.ai_mut(ent).latch = latch;
    }

    {
        let ai = world.ai_mut(ent);
        if ai.timer > 0 {
            ai.timer -= 1;
        }
        // Alerts live one tick; a material change is the only reseed.
        ai.alerts = if changed {
            Alerts::CHANGED
        } else {
            Alerts::empty()
        };
    }

    // Deferred removal happens here, once, after the whole run — the
    // script above always saw a valid entity.
    if poof {
        if world.attached_to(ent).is_some() {
            world.detach(ent, true, false);
        }
        for hand in 0..2 {
            if let Some(held) = world.holding(ent, hand) {
                world.detach(held, true, false);
            }
        }
        world.despawn(ent);
    }
}

fn apply_operand(ctx: &mut Ctx<'_>, sum: i32, word: Word) -> i32 {
    let operand = if word.is_literal_operand() {
        word.value() as i32
    } else {
        read_variable(ctx, word.value())
    };
    match Op::from_bits(word.op_bits()) {
        Some(Op::Add) => sum.wrapping_add(operand),
        Some(Op::Sub) => sum.wrapping_sub(operand),
        Some(Op::And) => sum & operand,
        Some(Op::Shr) => sum.wrapping_shr(operand as u32),
        Some(Op::Shl) => sum.wrapping_shl(operand as u32),
        Some(Op::Mul) => sum.wrapping_mul(operand),
        Some(Op::Div) => {
            if operand != 0 {
                sum.wrapping_div(operand)
            } else {
                tracing::warn!("script divides by zero, operation skipped");
                sum
            }
        }
        Some(Op::Mod) => {
            if operand != 0 {
                sum.wrapping_rem(operand)
            } else {
                sum
            }
        }
        None => {
            tracing::warn!(bits = word.op_bits(), "unknown operator in compiled script");
            sum
        }
    }
}

/// Store an arithmetic result into the destination register named by
/// the group header.
fn store_register(ctx: &mut Ctx<'_>, code: u32, sum: i32) {
    match code & 0xFF {
        0 => ctx.regs.x = sum,
        1 => ctx.regs.y = sum,
        2 => ctx.regs.distance = sum,
        3 => ctx.regs.turn = sum,
        4 => ctx.regs.argument = sum,
        other => tracing::debug!(register = other, "assignment to non-register dropped"),
    }
}
