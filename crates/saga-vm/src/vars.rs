//! Variable reads for arithmetic operands.
//!
//! A non-literal operand word names one of these by code: a scratch
//! register, a world query about the entity, its target, leader, or
//! owner, or a derived value like a turn-to direction. Unknown codes log
//! once and contribute 1, which is what an uninitialized read always
//! produced.

use crate::context::{manhattan, turn_between, Ctx};
use crate::world::IdszKind;

/// Variable names by code, for the symbol table and disassembly.
pub const VARIABLE_NAMES: &[&str] = &[
    "tmpx",             // 0
    "tmpy",             // 1
    "tmpdistance",      // 2
    "tmpturn",          // 3
    "tmpargument",      // 4
    "rand",             // 5
    "selfx",            // 6
    "selfy",            // 7
    "selfturn",         // 8
    "selfcounter",      // 9
    "selforder",        // 10
    "selfmorale",       // 11
    "selflife",         // 12
    "targetx",          // 13
    "targety",          // 14
    "targetdistance",   // 15
    "targetturn",       // 16
    "leaderx",          // 17
    "leadery",          // 18
    "leaderdistance",   // 19
    "leaderturn",       // 20
    "gotox",            // 21
    "gotoy",            // 22
    "gotodistance",     // 23
    "targetturnto",     // 24
    "passage",          // 25
    "weight",           // 26
    "selfaltitude",     // 27
    "selfid",           // 28
    "selfhateid",       // 29
    "selfmana",         // 30
    "targetstr",        // 31
    "targetwis",        // 32
    "targetint",        // 33
    "targetdex",        // 34
    "targetlife",       // 35
    "targetmana",       // 36
    "targetlevel",      // 37
    "targetspeedx",     // 38
    "targetspeedy",     // 39
    "targetspeedz",     // 40
    "selfspawnx",       // 41
    "selfspawny",       // 42
    "selfstate",        // 43
    "selfstr",          // 44
    "selfwis",          // 45
    "selfint",          // 46
    "selfdex",          // 47
    "selfmanaflow",     // 48
    "targetmanaflow",   // 49
    "selfattached",     // 50
    "swingturn",        // 51
    "xydistance",       // 52
    "selfz",            // 53
    "targetaltitude",   // 54
    "targetz",          // 55
    "selfindex",        // 56
    "ownerx",           // 57
    "ownery",           // 58
    "ownerturn",        // 59
    "ownerdistance",    // 60
    "ownerturnto",      // 61
    "xyturnto",         // 62
    "selfmoney",        // 63
    "selfaccel",        // 64
    "targetexp",        // 65
    "selfammo",         // 66
    "targetammo",       // 67
    "targetmoney",      // 68
    "targetturnaway",   // 69
    "selflevel",        // 70
    "targetreloadtime", // 71
];

/// Code of a named variable, mainly for tests and table generation.
pub fn variable_code(name: &str) -> Option<u32> {
    VARIABLE_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as u32)
}

/// Read one variable into the running sum's operand.
pub fn read_variable(ctx: &mut Ctx<'_>, code: u32) -> i32 {
    let ent = ctx.ent;
    let target = ctx.target();
    match code {
        0 => ctx.regs.x,
        1 => ctx.regs.y,
        2 => ctx.regs.distance,
        3 => ctx.regs.turn,
        4 => ctx.regs.argument,
        5 => (ctx.world.rand() & 0xFFFF) as i32,
        6 => ctx.xy().0 as i32,
        7 => ctx.xy().1 as i32,
        8 => ctx.world.turn(ent) as i32,
        9 => ctx.ai().order_counter as i32,
        10 => ctx.ai().order as i32,
        11 => ctx.world.morale(ctx.world.team(ent)),
        12 => ctx.world.life(ent),
        13 => ctx.target_xy().0 as i32,
        14 => ctx.target_xy().1 as i32,
        15 => manhattan(ctx.target_xy(), ctx.xy()),
        16 => ctx.world.turn(target) as i32,
        17 => match ctx.world.leader_of(ctx.world.team(ent)) {
            Some(leader) => ctx.world.position(leader).0 as i32,
            None => ctx.xy().0 as i32,
        },
        18 => match ctx.world.leader_of(ctx.world.team(ent)) {
            Some(leader) => ctx.world.position(leader).1 as i32,
            None => ctx.xy().1 as i32,
        },
        19 => match ctx.world.leader_of(ctx.world.team(ent)) {
            Some(leader) => {
                let (lx, ly, _) = ctx.world.position(leader);
                manhattan((lx, ly), ctx.xy())
            }
            // No leader reads as hopelessly far away.
            None => 10000,
        },
        20 => match ctx.world.leader_of(ctx.world.team(ent)) {
            Some(leader) => ctx.world.turn(leader) as i32,
            None => ctx.world.turn(ent) as i32,
        },
        21 => ctx.ai().current_waypoint().map_or(0, |w| w.0 as i32),
        22 => ctx.ai().current_waypoint().map_or(0, |w| w.1 as i32),
        23 => ctx
            .ai()
            .current_waypoint()
            .map_or(0, |w| manhattan(w, ctx.xy())),
        24 => turn_between(ctx.xy(), ctx.target_xy()),
        25 => ctx.world.passage_of(ent),
        26 => ctx.world.holding_weight(ent),
        27 => {
            let (_, _, z) = ctx.world.position(ent);
            (z - ctx.world.ground_level(ent)) as i32
        }
        28 => ctx.world.idsz(ent, IdszKind::Type).0 as i32,
        29 => ctx.world.idsz(ent, IdszKind::Hate).0 as i32,
        30 => {
            let mut mana = ctx.world.mana(ent);
            if ctx.world.can_channel(ent) {
                mana += ctx.world.life(ent);
            }
            mana
        }
        31 => ctx.world.strength(target),
        32 => ctx.world.wisdom(target),
        33 => ctx.world.intelligence(target),
        34 => ctx.world.dexterity(target),
        35 => ctx.world.life(target),
        36 => {
            let mut mana = ctx.world.mana(target);
            if ctx.world.can_channel(target) {
                mana += ctx.world.life(target);
            }
            mana
        }
        37 => ctx.world.experience_level(target),
        38 => ctx.world.velocity(target).0 as i32,
        39 => ctx.world.velocity(target).1 as i32,
        40 => ctx.world.velocity(target).2 as i32,
        41 => ctx.world.spawn_point(ent).0 as i32,
        42 => ctx.world.spawn_point(ent).1 as i32,
        43 => ctx.ai().state,
        44 => ctx.world.strength(ent),
        45 => ctx.world.wisdom(ent),
        46 => ctx.world.intelligence(ent),
        47 => ctx.world.dexterity(ent),
        48 => ctx.world.mana_flow(ent),
        49 => ctx.world.mana_flow(target),
        50 => ctx.world.attached_particle_count(ent),
        51 => ctx.world.camera_swing() << 2,
        52 => {
            let x = ctx.regs.x as i64;
            let y = ctx.regs.y as i64;
            (((x * x + y * y) as f64).sqrt()) as i32
        }
        53 => ctx.world.position(ent).2 as i32,
        54 => {
            let (_, _, z) = ctx.world.position(target);
            (z - ctx.world.ground_level(target)) as i32
        }
        55 => ctx.world.position(target).2 as i32,
        56 => ent.index() as i32,
        57 => {
            let owner = ctx.ai().owner;
            ctx.world.position(owner).0 as i32
        }
        58 => {
            let owner = ctx.ai().owner;
            ctx.world.position(owner).1 as i32
        }
        59 => {
            let owner = ctx.ai().owner;
            ctx.world.turn(owner) as i32
        }
        60 => {
            let owner = ctx.ai().owner;
            let (ox, oy, _) = ctx.world.position(owner);
            manhattan((ox, oy), ctx.xy())
        }
        61 => {
            let owner = ctx.ai().owner;
            let (ox, oy, _) = ctx.world.position(owner);
            turn_between(ctx.xy(), (ox, oy))
        }
        62 => turn_between(ctx.xy(), (ctx.regs.x as f32, ctx.regs.y as f32)),
        63 => ctx.world.money(ent),
        64 => (ctx.world.accel(ent) * 100.0) as i32,
        65 => ctx.world.experience(target),
        66 => ctx.world.ammo(ent),
        67 => ctx.world.ammo(target),
        68 => ctx.world.money(target),
        // Turn away from the target: turn-to plus an unwrapped half
        // circle, deliberately left unmasked.
        69 => turn_between(ctx.xy(), ctx.target_xy()) + 65535,
        70 => ctx.world.experience_level(ent),
        71 => ctx.world.reload_time(target),
        _ => {
            tracing::warn!(code, "unknown variable in compiled script");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_codes_agree() {
        assert_eq!(variable_code("tmpx"), Some(0));
        assert_eq!(variable_code("tmpargument"), Some(4));
        assert_eq!(variable_code("rand"), Some(5));
        assert_eq!(variable_code("selfx"), Some(6));
        assert_eq!(variable_code("selfstate"), Some(43));
        assert_eq!(variable_code("targetreloadtime"), Some(71));
        assert_eq!(variable_code("nonsense"), None);
        assert_eq!(VARIABLE_NAMES.len(), 72);
    }
}
