//! The builtin dispatch table.
//!
//! One flat table keyed by function code. Every entry is a plain
//! function over the shared [`Ctx`] contract returning pass/fail; a
//! failed predicate makes the interpreter take the instruction's jump.
//! The code of a builtin is its index in [`BUILTINS`], which is also the
//! order the standard symbol table registers them in — `End` sits at
//! [`saga_types::word::FN_END`] by construction, pinned by a test.
//!
//! A few entries reproduce long-standing quirks of the scripting
//! language on purpose (noted inline); scripts in the wild are tuned
//! against them.

use crate::alerts::Alerts;
use crate::arena::EntityRef;
use crate::context::{turn_between, turn_sin, Ctx};
use crate::state::{TurnMode, LATCH_LEFT, LATCH_RIGHT, MOVE_CHARGE, MOVE_FOLLOW, MOVE_RETREAT};
use crate::world::{Gender, IdszKind, TargetScope};
use saga_types::Idsz;

/// The shared calling contract for every builtin.
pub type Builtin = fn(&mut Ctx<'_>) -> bool;

pub struct BuiltinDef {
    pub name: &'static str,
    pub run: Builtin,
}

const fn b(name: &'static str, run: Builtin) -> BuiltinDef {
    BuiltinDef { name, run }
}

/// Dispatch by function code.
pub fn lookup(code: u32) -> Option<Builtin> {
    BUILTINS.get(code as usize).map(|def| def.run)
}

/// Function code of a named builtin.
pub fn code_of(name: &str) -> Option<u32> {
    BUILTINS
        .iter()
        .position(|def| def.name == name)
        .map(|i| i as u32)
}

// Facing quadrant centers, in turn units.
const DIR_FRONT: i32 = 0;
const DIR_RIGHT: i32 = 16384;
const DIR_BEHIND: i32 = 32768;
const DIR_LEFT: i32 = 49152;

/// "Hurt" means at least this far below full life (8.8 fixed point).
const HURT_MARGIN: i32 = 256;

/// Money caps at this on any transfer.
const MAX_MONEY: i32 = 9999;

// ═══════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════

fn alert(ctx: &Ctx<'_>, flag: Alerts) -> bool {
    ctx.ai().alerts.contains(flag)
}

fn retarget(ctx: &mut Ctx<'_>, found: Option<EntityRef>) -> bool {
    match found {
        Some(ent) => {
            ctx.set_target(ent);
            true
        }
        None => false,
    }
}

/// Shift tmpx/tmpy around the circle described by tmpturn/tmpdistance.
fn compass_adjust(ctx: &mut Ctx<'_>) {
    let turn = ctx.regs.turn;
    let distance = ctx.regs.distance as f32;
    ctx.regs.x -= (turn_sin((turn + 16384) >> 2) * distance) as i32;
    ctx.regs.y -= (turn_sin(turn >> 2) * distance) as i32;
}

// ═══════════════════════════════════════════════════════════════════════
// Builtins
// ═══════════════════════════════════════════════════════════════════════

fn if_spawned(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::SPAWNED)
}

fn if_time_out(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().timer == 0
}

fn if_at_waypoint(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::AT_WAYPOINT)
}

fn if_at_last_waypoint(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::AT_LAST_WAYPOINT)
}

fn if_attacked(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::ATTACKED)
}

fn if_bumped(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::BUMPED)
}

fn if_ordered(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::ORDERED)
}

fn if_called_for_help(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::CALLED_FOR_HELP)
}

fn set_content(ctx: &mut Ctx<'_>) -> bool {
    let value = ctx.regs.argument;
    ctx.ai_mut().content = value;
    true
}

fn if_killed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::KILLED)
}

fn if_target_killed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::TARGET_KILLED)
}

fn clear_waypoints(ctx: &mut Ctx<'_>) -> bool {
    let (x, y) = ctx.xy();
    ctx.ai_mut().clear_waypoints(x, y);
    true
}

fn add_waypoint(ctx: &mut Ctx<'_>) -> bool {
    let (x, y) = (ctx.regs.x as f32, ctx.regs.y as f32);
    ctx.ai_mut().push_waypoint(x, y);
    true
}

fn find_path(ctx: &mut Ctx<'_>) -> bool {
    // Pathing to yourself is a no-op.
    if ctx.target() != ctx.ent {
        let (tx, ty) = ctx.target_xy();
        if ctx.regs.distance == MOVE_FOLLOW {
            ctx.regs.x = ((ctx.world.rand() & 1023) as i32 - 512) + tx as i32;
            ctx.regs.y = ((ctx.world.rand() & 1023) as i32 - 512) + ty as i32;
        } else {
            ctx.regs.x = tx as i32;
            ctx.regs.y = ty as i32;
        }
        if ctx.regs.distance == MOVE_RETREAT {
            ctx.regs.turn = (ctx.world.rand() & 32767) as i32 + ctx.regs.turn + 16384;
        } else {
            ctx.regs.turn = turn_between(ctx.xy(), (tx, ty));
        }
        // The charge-or-retreat test is degenerate — the second arm is
        // always true — so every path request resets to full speed.
        // Scripts are tuned against that, so it stays.
        if ctx.regs.distance == MOVE_CHARGE || MOVE_RETREAT != 0 {
            ctx.world.reset_accel(ctx.ent);
        }
        if ctx.regs.distance != MOVE_FOLLOW {
            compass_adjust(ctx);
        }
        let (x, y) = (ctx.regs.x as f32, ctx.regs.y as f32);
        ctx.ai_mut().push_waypoint(x, y);
    }
    true
}

fn compass(ctx: &mut Ctx<'_>) -> bool {
    compass_adjust(ctx);
    true
}

fn get_target_armor_price(ctx: &mut Ctx<'_>) -> bool {
    let skin = ctx.regs.argument & 3;
    let target = ctx.target();
    ctx.regs.x = ctx.world.armor_price(target, skin);
    true
}

fn set_time(ctx: &mut Ctx<'_>) -> bool {
    let value = ctx.regs.argument;
    if value > -1 {
        ctx.ai_mut().timer = value as u32;
    }
    true
}

fn get_content(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument = ctx.ai().content;
    true
}

fn join_target_team(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    if ctx.world.is_alive(target) {
        let team = ctx.world.team(target);
        ctx.world.switch_team(ctx.ent, team);
        true
    } else {
        false
    }
}

fn set_target_to_nearby_enemy(ctx: &mut Ctx<'_>) -> bool {
    let found = ctx
        .world
        .find_target(ctx.ent, TargetScope::Nearby, false, true, Idsz::NONE);
    retarget(ctx, found)
}

fn set_target_to_target_left_hand(ctx: &mut Ctx<'_>) -> bool {
    let held = ctx.world.holding(ctx.target(), 0);
    retarget(ctx, held)
}

fn set_target_to_target_right_hand(ctx: &mut Ctx<'_>) -> bool {
    let held = ctx.world.holding(ctx.target(), 1);
    retarget(ctx, held)
}

fn set_target_to_whoever_attacked(ctx: &mut Ctx<'_>) -> bool {
    let attacker = ctx.world.last_attacker(ctx.ent);
    retarget(ctx, attacker)
}

fn set_target_to_whoever_bumped(ctx: &mut Ctx<'_>) -> bool {
    if let Some(bumper) = ctx.world.last_bumper(ctx.ent) {
        ctx.set_target(bumper);
    }
    true
}

fn set_target_to_whoever_called_for_help(ctx: &mut Ctx<'_>) -> bool {
    let team = ctx.world.team(ctx.ent);
    if let Some(caller) = ctx.world.help_caller(team) {
        ctx.set_target(caller);
    }
    true
}

fn set_target_to_old_target(ctx: &mut Ctx<'_>) -> bool {
    let old = ctx.ai().old_target;
    ctx.set_target(old);
    true
}

fn set_turn_mode_to_velocity(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai_mut().turn_mode = TurnMode::Velocity;
    true
}

fn set_turn_mode_to_watch(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai_mut().turn_mode = TurnMode::Watch;
    true
}

fn set_turn_mode_to_spin(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai_mut().turn_mode = TurnMode::Spin;
    true
}

fn set_bump_height(ctx: &mut Ctx<'_>) -> bool {
    let height = ctx.regs.argument;
    ctx.world.set_bump_height(ctx.ent, height);
    true
}

fn if_target_has_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    ctx.world.has_idsz(ctx.target(), tag)
}

fn if_target_has_item_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    ctx.world.item_with_idsz(ctx.target(), tag).is_some()
}

fn if_target_holding_item_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    let target = ctx.target();
    for (hand, latch) in [(0, LATCH_LEFT), (1, LATCH_RIGHT)] {
        if let Some(item) = ctx.world.holding(target, hand) {
            if ctx.world.has_idsz(item, tag) {
                ctx.regs.argument = latch as i32;
                return true;
            }
        }
    }
    false
}

fn if_target_has_skill_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    ctx.world.idsz(ctx.target(), IdszKind::Skill) == tag
}

fn script_else(ctx: &mut Ctx<'_>) -> bool {
    // Fails only right after a deeper (passed) block: the previous
    // instruction's indent bits beat this one's.
    ctx.last_word.indent_bits() <= ctx.current.indent_bits()
}

fn run(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.reset_accel(ctx.ent);
    true
}

fn walk(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.reset_accel(ctx.ent);
    ctx.world.scale_accel(ctx.ent, 0.66);
    true
}

fn sneak(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.reset_accel(ctx.ent);
    ctx.world.scale_accel(ctx.ent, 0.33);
    true
}

fn do_action(ctx: &mut Ctx<'_>) -> bool {
    let action = ctx.regs.argument;
    ctx.world.action_ready(ctx.ent) && ctx.world.start_action(ctx.ent, action, false)
}

fn keep_action(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.keep_action(ctx.ent, true);
    true
}

fn issue_order(ctx: &mut Ctx<'_>) -> bool {
    let order = ctx.regs.argument as u32;
    ctx.world.issue_order(ctx.ent, order);
    true
}

fn drop_weapons(ctx: &mut Ctx<'_>) -> bool {
    for hand in 0..2 {
        if let Some(held) = ctx.world.holding(ctx.ent, hand) {
            // Riders get shoved clear of a mount, items just drop.
            let shove = ctx.world.is_mount(ctx.ent);
            ctx.world.detach(held, true, shove);
        }
    }
    true
}

fn target_do_action(ctx: &mut Ctx<'_>) -> bool {
    let action = ctx.regs.argument;
    let target = ctx.target();
    ctx.world.is_alive(target)
        && ctx.world.action_ready(target)
        && ctx.world.start_action(target, action, false)
}

fn open_passage(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.open_passage(ctx.regs.argument)
}

fn close_passage(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.close_passage(ctx.regs.argument)
}

fn if_passage_open(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.passage_open(ctx.regs.argument)
}

fn go_poof(ctx: &mut Ctx<'_>) -> bool {
    // Removal is deferred to the end of the run so the rest of this
    // script still sees a valid entity.
    if ctx.world.is_player(ctx.ent) {
        false
    } else {
        ctx.poof = true;
        true
    }
}

fn cost_target_item_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    match ctx.world.item_with_idsz(ctx.target(), tag) {
        Some(item) => {
            ctx.world.consume_item(item);
            true
        }
        None => false,
    }
}

fn do_action_override(ctx: &mut Ctx<'_>) -> bool {
    let action = ctx.regs.argument;
    ctx.world.start_action(ctx.ent, action, true)
}

fn if_healed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::HEALED)
}

fn send_message(ctx: &mut Ctx<'_>) -> bool {
    let offset = ctx.regs.argument;
    ctx.world.send_message(ctx.ent, offset);
    true
}

fn call_for_help(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.call_for_help(ctx.ent);
    true
}

fn do_nothing(_ctx: &mut Ctx<'_>) -> bool {
    true
}

fn end(_ctx: &mut Ctx<'_>) -> bool {
    // The fetch loop stops on the sentinel before dispatching it; this
    // body only runs if an End is ever jumped into mid-word.
    false
}

fn set_state(ctx: &mut Ctx<'_>) -> bool {
    let value = ctx.regs.argument;
    ctx.ai_mut().state = value;
    true
}

fn get_state(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument = ctx.ai().state;
    true
}

fn if_state_is(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument == ctx.ai().state
}

fn if_target_can_open_stuff(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.can_open_stuff(ctx.target())
}

fn if_grabbed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::GRABBED)
}

fn if_dropped(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::DROPPED)
}

fn set_target_to_whoever_is_holding(ctx: &mut Ctx<'_>) -> bool {
    let holder = ctx.world.attached_to(ctx.ent);
    retarget(ctx, holder)
}

fn damage_target(ctx: &mut Ctx<'_>) -> bool {
    let amount = ctx.regs.argument;
    let target = ctx.target();
    let damage_type = ctx.world.bump_damage_type(ctx.ent);
    ctx.world.damage(target, amount, damage_type, ctx.ent);
    true
}

fn if_x_is_less_than_y(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.x < ctx.regs.y
}

fn get_bump_height(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument = ctx.world.bump_height(ctx.ent);
    true
}

fn if_reaffirmed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::REAFFIRMED)
}

fn unkeep_action(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.keep_action(ctx.ent, false);
    true
}

fn if_target_is_on_other_team(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.world.is_alive(target) && ctx.world.team(target) != ctx.world.team(ctx.ent)
}

fn if_target_is_on_hated_team(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.world.is_alive(target)
        && ctx
            .world
            .team_hates(ctx.world.team(ctx.ent), ctx.world.team(target))
        && !ctx.world.is_invincible(target)
}

fn press_latch_button(ctx: &mut Ctx<'_>) -> bool {
    let buttons = ctx.regs.argument as u32;
    ctx.ai_mut().latch_buttons |= buttons;
    true
}

fn set_target_to_target_of_leader(ctx: &mut Ctx<'_>) -> bool {
    let team = ctx.world.team(ctx.ent);
    match ctx.world.leader_of(team) {
        Some(leader) => {
            let target = ctx.world.ai(leader).target;
            ctx.set_target(target);
            true
        }
        None => false,
    }
}

fn if_leader_killed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::LEADER_KILLED)
}

fn become_leader(ctx: &mut Ctx<'_>) -> bool {
    let team = ctx.world.team(ctx.ent);
    ctx.world.set_leader(team, ctx.ent);
    true
}

fn change_target_armor(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    let old = ctx.world.armor_skin(target);
    let skin = ctx.regs.argument;
    ctx.regs.x = ctx.world.change_armor(target, skin);
    ctx.regs.argument = old;
    true
}

fn give_money_to_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    let mut mine = ctx.world.money(ctx.ent);
    let mut theirs = ctx.world.money(target);
    let mut moved = ctx.regs.argument;

    mine -= moved;
    theirs += moved;
    if mine < 0 {
        theirs += mine;
        moved += mine;
        mine = 0;
    }
    if theirs < 0 {
        mine += theirs;
        moved += theirs;
        theirs = 0;
    }
    mine = mine.min(MAX_MONEY);
    theirs = theirs.min(MAX_MONEY);

    ctx.world.set_money(ctx.ent, mine);
    ctx.world.set_money(target, theirs);
    ctx.regs.argument = moved;
    true
}

fn if_leader_is_alive(ctx: &mut Ctx<'_>) -> bool {
    let team = ctx.world.team(ctx.ent);
    ctx.world.leader_of(team).is_some()
}

fn if_target_is_old_target(ctx: &mut Ctx<'_>) -> bool {
    ctx.target() == ctx.ai().old_target
}

fn set_target_to_leader(ctx: &mut Ctx<'_>) -> bool {
    let team = ctx.world.team(ctx.ent);
    let leader = ctx.world.leader_of(team);
    retarget(ctx, leader)
}

fn spawn_character(ctx: &mut Ctx<'_>) -> bool {
    let (x, y) = (ctx.regs.x as f32, ctx.regs.y as f32);
    let turn = (ctx.regs.turn & 0xFFFF) as u16;
    match ctx.world.spawn_character(x, y, 0.0, turn, ctx.ent) {
        Some(spawned) if !ctx.world.hit_a_wall(spawned) => {
            let quarter = (ctx.world.turn(ctx.ent) as i32) >> 2;
            let distance = ctx.regs.distance as f32;
            ctx.world.add_velocity(
                spawned,
                turn_sin((quarter + 12288) & 16383) * distance,
                turn_sin((quarter + 8192) & 16383) * distance,
            );
            ctx.world.set_kursed(spawned, false);
            let owner = ctx.ai().owner;
            ctx.world.ai_mut(spawned).owner = owner;
            ctx.ai_mut().child = spawned;
            true
        }
        Some(spawned) => {
            ctx.world.despawn(spawned);
            false
        }
        None => false,
    }
}

fn respawn_character(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.respawn(ctx.ent);
    true
}

fn if_used(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::USED)
}

fn drop_money(ctx: &mut Ctx<'_>) -> bool {
    let amount = ctx.regs.argument;
    ctx.world.drop_money(ctx.ent, amount);
    true
}

fn set_old_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.ai_mut().old_target = target;
    true
}

fn detach_from_holder(ctx: &mut Ctx<'_>) -> bool {
    if ctx.world.attached_to(ctx.ent).is_some() {
        ctx.world.detach(ctx.ent, true, true);
        true
    } else {
        false
    }
}

fn if_target_has_vulnerability_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    ctx.world.idsz(ctx.target(), IdszKind::Vulnerability) == tag
}

fn if_cleaned_up(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::CLEANED_UP)
}

fn if_sitting(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.attached_to(ctx.ent).is_some()
}

fn if_target_is_hurt(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.world.is_alive(target)
        && ctx.world.life(target) <= ctx.world.life_max(target) - HURT_MARGIN
}

fn if_target_is_a_player(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_player(ctx.target())
}

fn play_sound(ctx: &mut Ctx<'_>) -> bool {
    let sound = ctx.regs.argument;
    ctx.world.play_sound(ctx.ent, sound);
    true
}

fn spawn_particle(ctx: &mut Ctx<'_>) -> bool {
    let owner = ctx.world.attached_to(ctx.ent).unwrap_or(ctx.ent);
    let (x, y, z) = ctx.world.position(ctx.ent);
    let profile = ctx.regs.argument;
    let (dx, dy) = (ctx.regs.x as f32, ctx.regs.y as f32);
    ctx.world.spawn_particle(owner, profile, x + dx, y + dy, z);
    true
}

fn if_target_is_alive(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_alive(ctx.target())
}

fn stop(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.scale_accel(ctx.ent, 0.0);
    true
}

fn if_target_is_self(ctx: &mut Ctx<'_>) -> bool {
    ctx.target() == ctx.ent
}

fn if_target_is_male(ctx: &mut Ctx<'_>) -> bool {
    // Reads the running entity, not the target. Kept as scripts expect.
    ctx.world.gender(ctx.ent) == Gender::Male
}

fn if_target_is_female(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.gender(ctx.ent) == Gender::Female
}

fn set_target_to_self(ctx: &mut Ctx<'_>) -> bool {
    ctx.set_target(ctx.ent);
    true
}

fn set_target_to_rider(ctx: &mut Ctx<'_>) -> bool {
    let rider = ctx.world.holding(ctx.ent, 0);
    retarget(ctx, rider)
}

fn get_attack_turn(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.turn = ctx.world.attack_direction(ctx.ent);
    true
}

fn get_damage_type(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument = ctx.world.last_damage_type(ctx.ent);
    true
}

fn if_scored_a_hit(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::SCORED_A_HIT)
}

fn if_disaffirmed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::DISAFFIRMED)
}

fn translate_order(ctx: &mut Ctx<'_>) -> bool {
    let order = ctx.ai().order;
    if let Some(sender) = ctx.world.entity_by_index(order >> 24) {
        ctx.set_target(sender);
    }
    ctx.regs.x = (((order >> 14) & 1023) << 6) as i32;
    ctx.regs.y = (((order >> 4) & 1023) << 6) as i32;
    ctx.regs.argument = (order & 15) as i32;
    true
}

fn set_target_to_whoever_was_hit(ctx: &mut Ctx<'_>) -> bool {
    if let Some(victim) = ctx.world.last_hit_victim(ctx.ent) {
        ctx.set_target(victim);
    }
    true
}

fn set_target_to_wide_enemy(ctx: &mut Ctx<'_>) -> bool {
    let found = ctx
        .world
        .find_target(ctx.ent, TargetScope::Wide, false, true, Idsz::NONE);
    retarget(ctx, found)
}

fn if_changed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::CHANGED)
}

fn if_in_water(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::IN_WATER)
}

fn if_bored(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::BORED)
}

fn if_too_much_baggage(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::TOO_MUCH_BAGGAGE)
}

fn if_grogged(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::GROGGED)
}

fn if_dazed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::DAZED)
}

fn press_target_latch_button(ctx: &mut Ctx<'_>) -> bool {
    let buttons = ctx.regs.argument as u32;
    let target = ctx.target();
    ctx.world.ai_mut(target).latch_buttons |= buttons;
    true
}

fn if_invisible(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_invisible(ctx.ent)
}

fn if_armor_is(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.armor_skin(ctx.ent) == ctx.regs.argument
}

fn get_target_grog_time(ctx: &mut Ctx<'_>) -> bool {
    // Reads the running entity's grog, despite the name.
    ctx.regs.argument = ctx.world.grog_time(ctx.ent);
    ctx.regs.argument != 0
}

fn get_target_daze_time(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument = ctx.world.daze_time(ctx.ent);
    ctx.regs.argument != 0
}

fn set_damage_type(ctx: &mut Ctx<'_>) -> bool {
    let damage_type = ctx.regs.argument & 7;
    ctx.world.set_bump_damage_type(ctx.ent, damage_type);
    true
}

fn set_water_level(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.set_water_level(ctx.regs.argument);
    true
}

fn teleport_target(ctx: &mut Ctx<'_>) -> bool {
    let (x, y) = (ctx.regs.x as f32, ctx.regs.y as f32);
    if !ctx.world.on_map(x, y) {
        return false;
    }
    let target = ctx.target();
    let (old_x, old_y, old_z) = ctx.world.position(target);
    let old_turn = ctx.world.turn(target);

    ctx.world.detach(target, true, false);
    ctx.world.set_position(target, x, y, ctx.regs.distance as f32);
    ctx.world.set_turn(target, (ctx.regs.turn & 0xFFFF) as u16);
    if ctx.world.hit_a_wall(target) {
        ctx.world.set_position(target, old_x, old_y, old_z);
        ctx.world.set_turn(target, old_turn);
        false
    } else {
        true
    }
}

fn give_experience_to_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    let amount = ctx.regs.argument;
    let kind = ctx.regs.distance;
    ctx.world.give_experience(target, amount, kind);
    true
}

fn increase_ammo(ctx: &mut Ctx<'_>) -> bool {
    let ammo = ctx.world.ammo(ctx.ent);
    if ammo < ctx.world.ammo_max(ctx.ent) {
        ctx.world.set_ammo(ctx.ent, ammo + 1);
    }
    true
}

fn unkurse_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.world.set_kursed(target, false);
    true
}

fn if_unarmed(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.holding(ctx.ent, 0).is_none() && ctx.world.holding(ctx.ent, 1).is_none()
}

fn flash_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.world.flash(target, 255);
    true
}

fn set_alpha(ctx: &mut Ctx<'_>) -> bool {
    let alpha = ctx.regs.argument;
    ctx.world.set_alpha(ctx.ent, alpha);
    true
}

fn if_hit_from_behind(ctx: &mut Ctx<'_>) -> bool {
    let dir = ctx.world.attack_direction(ctx.ent);
    dir >= DIR_BEHIND - 8192 && dir < DIR_BEHIND + 8192
}

fn if_hit_from_front(ctx: &mut Ctx<'_>) -> bool {
    let dir = ctx.world.attack_direction(ctx.ent);
    // Asymmetric wrap bounds — one side pinned off the left quadrant —
    // kept verbatim; scripts are tuned against them.
    dir >= 49152 + 8192 || dir < DIR_FRONT + 8192
}

fn if_hit_from_left(ctx: &mut Ctx<'_>) -> bool {
    let dir = ctx.world.attack_direction(ctx.ent);
    dir >= DIR_LEFT - 8192 && dir < DIR_LEFT + 8192
}

fn if_hit_from_right(ctx: &mut Ctx<'_>) -> bool {
    let dir = ctx.world.attack_direction(ctx.ent);
    dir >= DIR_RIGHT - 8192 && dir < DIR_RIGHT + 8192
}

fn if_target_is_on_same_team(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.team(ctx.target()) == ctx.world.team(ctx.ent)
}

fn kill_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.world.kill(target, ctx.ent);
    true
}

fn get_water_level(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument = ctx.world.water_level();
    true
}

fn cost_target_mana(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    let amount = ctx.regs.argument;
    ctx.world.cost_mana(target, amount, ctx.ent)
}

fn if_target_has_any_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    ctx.world.any_idsz_matches(ctx.target(), tag)
}

fn if_not_dropped(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::NOT_DROPPED)
}

fn if_y_is_less_than_x(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.y < ctx.regs.x
}

fn set_fly_height(ctx: &mut Ctx<'_>) -> bool {
    let height = ctx.regs.argument;
    ctx.world.set_fly_height(ctx.ent, height);
    true
}

fn if_blocked(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::BLOCKED)
}

fn if_target_is_defending(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_defending(ctx.target())
}

fn if_target_is_attacking(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_attacking(ctx.target())
}

fn if_state_is_0(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 0
}

fn if_state_is_1(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 1
}

fn if_state_is_2(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 2
}

fn if_state_is_3(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 3
}

fn if_state_is_4(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 4
}

fn if_state_is_5(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 5
}

fn if_state_is_6(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 6
}

fn if_state_is_7(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state == 7
}

fn if_content_is(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument == ctx.ai().content
}

fn set_turn_mode_to_watch_target(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai_mut().turn_mode = TurnMode::WatchTarget;
    true
}

fn if_state_is_not(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.argument != ctx.ai().state
}

fn if_x_is_equal_to_y(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.x == ctx.regs.y
}

fn debug_message(ctx: &mut Ctx<'_>) -> bool {
    let state = ctx.ai().state;
    let content = ctx.ai().content;
    let target = ctx.target().index();
    let turn = ctx.world.turn(ctx.ent);
    ctx.world
        .debug_message(format!("state {state}, content {content}, target {target}"));
    let (x, y) = (ctx.regs.x, ctx.regs.y);
    ctx.world.debug_message(format!("tmpx {x}, tmpy {y}"));
    let (distance, tmpturn) = (ctx.regs.distance, ctx.regs.turn);
    ctx.world
        .debug_message(format!("tmpdistance {distance}, tmpturn {tmpturn}"));
    let argument = ctx.regs.argument;
    ctx.world
        .debug_message(format!("tmpargument {argument}, selfturn {turn}"));
    true
}

fn send_message_near(ctx: &mut Ctx<'_>) -> bool {
    let offset = ctx.regs.argument;
    ctx.world.send_message_near(ctx.ent, offset);
    true
}

fn if_hit_ground(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::HIT_GROUND)
}

fn if_name_is_known(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.name_known(ctx.ent)
}

fn if_holding_item_id(ctx: &mut Ctx<'_>) -> bool {
    let tag = Idsz(ctx.regs.argument as u32);
    let mut found = false;
    let mut latch = 0u32;
    for (hand, button) in [(0, LATCH_LEFT), (1, LATCH_RIGHT)] {
        if let Some(item) = ctx.world.holding(ctx.ent, hand) {
            if ctx.world.has_idsz(item, tag) {
                if found {
                    // Both hands match; pick one at random.
                    latch = LATCH_LEFT << (ctx.world.rand() & 1);
                } else {
                    latch = button;
                }
                found = true;
            }
        }
    }
    if found {
        ctx.regs.argument = latch as i32;
    }
    found
}

fn if_kursed(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_kursed(ctx.ent)
}

fn if_target_is_kursed(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_kursed(ctx.target())
}

fn if_over_water(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.over_water(ctx.ent)
}

fn if_thrown(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::THROWN)
}

fn make_name_known(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.set_name_known(ctx.ent, true);
    true
}

fn stop_target_movement(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.world.stop_motion(target);
    true
}

fn set_xy(ctx: &mut Ctx<'_>) -> bool {
    let slot = (ctx.regs.argument as usize) & (crate::state::STORAGE_SLOTS - 1);
    let value = (ctx.regs.x, ctx.regs.y);
    ctx.ai_mut().storage[slot] = value;
    true
}

fn get_xy(ctx: &mut Ctx<'_>) -> bool {
    let slot = (ctx.regs.argument as usize) & (crate::state::STORAGE_SLOTS - 1);
    let (x, y) = ctx.ai().storage[slot];
    ctx.regs.x = x;
    ctx.regs.y = y;
    true
}

fn add_xy(ctx: &mut Ctx<'_>) -> bool {
    let slot = (ctx.regs.argument as usize) & (crate::state::STORAGE_SLOTS - 1);
    let (x, y) = (ctx.regs.x, ctx.regs.y);
    let stored = &mut ctx.world.ai_mut(ctx.ent).storage[slot];
    stored.0 += x;
    stored.1 += y;
    true
}

fn spawn_exact_particle(ctx: &mut Ctx<'_>) -> bool {
    let owner = ctx.world.attached_to(ctx.ent).unwrap_or(ctx.ent);
    let profile = ctx.regs.argument;
    let (x, y, z) = (
        ctx.regs.x as f32,
        ctx.regs.y as f32,
        ctx.regs.distance as f32,
    );
    ctx.world.spawn_particle(owner, profile, x, y, z);
    true
}

fn accelerate_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    let (dx, dy) = (ctx.regs.x as f32, ctx.regs.y as f32);
    ctx.world.add_velocity(target, dx, dy);
    true
}

fn if_distance_is_more_than_turn(ctx: &mut Ctx<'_>) -> bool {
    ctx.regs.distance > ctx.regs.turn
}

fn if_crushed(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::CRUSHED)
}

fn set_target_to_lowest_target(ctx: &mut Ctx<'_>) -> bool {
    // Walk down the holder chain to whoever ultimately carries the
    // target. Never fails.
    let mut lowest = ctx.target();
    while let Some(holder) = ctx.world.attached_to(lowest) {
        lowest = holder;
    }
    ctx.set_target(lowest);
    true
}

fn if_not_put_away(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::NOT_PUT_AWAY)
}

fn if_taken_out(ctx: &mut Ctx<'_>) -> bool {
    alert(ctx, Alerts::TAKEN_OUT)
}

fn if_ammo_out(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.ammo(ctx.ent) == 0
}

fn heal_self(ctx: &mut Ctx<'_>) -> bool {
    if ctx.world.is_alive(ctx.ent) {
        let healed = (ctx.world.life(ctx.ent) + ctx.regs.argument)
            .min(ctx.world.life_max(ctx.ent))
            .max(1);
        ctx.world.set_life(ctx.ent, healed);
    }
    true
}

fn set_owner_to_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    ctx.ai_mut().owner = target;
    true
}

fn set_target_to_owner(ctx: &mut Ctx<'_>) -> bool {
    let owner = ctx.ai().owner;
    ctx.set_target(owner);
    true
}

fn set_frame(ctx: &mut Ctx<'_>) -> bool {
    let frame = ctx.regs.argument;
    ctx.world.set_frame(ctx.ent, frame);
    true
}

fn set_reload_time(ctx: &mut Ctx<'_>) -> bool {
    let time = ctx.regs.argument.max(0);
    ctx.world.set_reload_time(ctx.ent, time);
    true
}

fn poof_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    if ctx.world.is_player(target) {
        return false;
    }
    if target == ctx.ent {
        // Own removal defers to the end of the run.
        ctx.poof = true;
    } else {
        ctx.world.detach(target, true, false);
        ctx.world.despawn(target);
    }
    true
}

fn set_speed_percent(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.reset_accel(ctx.ent);
    let factor = ctx.regs.argument as f32 / 100.0;
    ctx.world.scale_accel(ctx.ent, factor);
    true
}

fn set_child_state(ctx: &mut Ctx<'_>) -> bool {
    let child = ctx.ai().child;
    let state = ctx.regs.argument;
    ctx.world.ai_mut(child).state = state;
    true
}

fn if_facing_target(ctx: &mut Ctx<'_>) -> bool {
    let toward = turn_between(ctx.xy(), ctx.target_xy());
    let relative = (toward + 32768 - ctx.world.turn(ctx.ent) as i32) & 0xFFFF;
    relative > 55535 || relative < 10000
}

fn teleport(ctx: &mut Ctx<'_>) -> bool {
    let (x, y) = (ctx.regs.x as f32, ctx.regs.y as f32);
    if !ctx.world.on_map(x, y) {
        return false;
    }
    let (old_x, old_y, old_z) = ctx.world.position(ctx.ent);
    ctx.world.detach(ctx.ent, true, false);
    ctx.world.set_position(ctx.ent, x, y, old_z);
    if ctx.world.hit_a_wall(ctx.ent) {
        ctx.world.set_position(ctx.ent, old_x, old_y, old_z);
        false
    } else {
        true
    }
}

fn heal_target(ctx: &mut Ctx<'_>) -> bool {
    let target = ctx.target();
    if ctx.world.is_alive(target) {
        let healed = (ctx.world.life(target) + ctx.regs.argument).min(ctx.world.life_max(target));
        ctx.world.set_life(target, healed);
    }
    true
}

fn set_target_to_whoever_is_in_passage(ctx: &mut Ctx<'_>) -> bool {
    let passage = ctx.regs.argument;
    let found = ctx.world.entity_in_passage(passage, Idsz::NONE);
    retarget(ctx, found)
}

fn spawn_character_xyz(ctx: &mut Ctx<'_>) -> bool {
    let (x, y, z) = (
        ctx.regs.x as f32,
        ctx.regs.y as f32,
        ctx.regs.distance as f32,
    );
    let turn = (ctx.regs.turn & 0xFFFF) as u16;
    match ctx.world.spawn_character(x, y, z, turn, ctx.ent) {
        Some(spawned) if !ctx.world.hit_a_wall(spawned) => {
            ctx.world.set_kursed(spawned, false);
            let owner = ctx.ai().owner;
            ctx.world.ai_mut(spawned).owner = owner;
            ctx.ai_mut().child = spawned;
            true
        }
        Some(spawned) => {
            ctx.world.despawn(spawned);
            false
        }
        None => false,
    }
}

fn if_target_is_sneaking(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_sneaking(ctx.target())
}

fn respawn_target(ctx: &mut Ctx<'_>) -> bool {
    // Respawn in place: the target keeps its current position.
    let target = ctx.target();
    let (x, y, z) = ctx.world.position(target);
    ctx.world.respawn(target);
    ctx.world.set_position(target, x, y, z);
    true
}

fn if_target_can_see_invisible(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.can_see_invisible(ctx.target())
}

fn set_target_to_nearest_enemy(ctx: &mut Ctx<'_>) -> bool {
    let found = ctx
        .world
        .find_target(ctx.ent, TargetScope::Nearest, false, true, Idsz::NONE);
    retarget(ctx, found)
}

fn set_target_to_nearest_friend(ctx: &mut Ctx<'_>) -> bool {
    let found = ctx
        .world
        .find_target(ctx.ent, TargetScope::Nearest, true, false, Idsz::NONE);
    retarget(ctx, found)
}

fn set_target_to_nearest_lifeform(ctx: &mut Ctx<'_>) -> bool {
    let found = ctx
        .world
        .find_target(ctx.ent, TargetScope::Nearest, true, true, Idsz::NONE);
    retarget(ctx, found)
}

fn if_target_is_flying(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.fly_height(ctx.target()) > 0
}

fn if_state_is_odd(ctx: &mut Ctx<'_>) -> bool {
    ctx.ai().state & 1 == 1
}

fn order_target(ctx: &mut Ctx<'_>) -> bool {
    let order = ctx.regs.argument as u32;
    let target = ctx.target();
    let ai = ctx.world.ai_mut(target);
    ai.order = order;
    ai.order_counter = 0;
    ai.alerts |= Alerts::ORDERED;
    true
}

fn create_order(ctx: &mut Ctx<'_>) -> bool {
    let mut order = ctx.target().index() << 24;
    order |= (((ctx.regs.x >> 6) & 1023) as u32) << 14;
    order |= (((ctx.regs.y >> 6) & 1023) as u32) << 4;
    order |= (ctx.regs.argument & 15) as u32;
    ctx.regs.argument = order as i32;
    true
}

fn if_target_is_dressed_up(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.is_dressed_up(ctx.target())
}

fn if_target_is_mounted(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.attached_to(ctx.target()).is_some()
}

fn make_name_unknown(ctx: &mut Ctx<'_>) -> bool {
    ctx.world.set_name_known(ctx.ent, false);
    true
}

fn become_spell(ctx: &mut Ctx<'_>) -> bool {
    // A spellbook's content names the spell it turns into; state and
    // content reset so the new profile starts fresh.
    let spell = ctx.ai().content;
    ctx.world.morph(ctx.ent, spell, 0);
    {
        let ai = ctx.ai_mut();
        ai.content = 0;
        ai.state = 0;
    }
    ctx.changed = true;
    true
}

fn become_spellbook(ctx: &mut Ctx<'_>) -> bool {
    let profile = ctx.world.profile(ctx.ent);
    ctx.ai_mut().content = profile;
    let book = ctx.world.spellbook_profile();
    ctx.world.morph(ctx.ent, book, 0);
    ctx.changed = true;
    true
}

// ═══════════════════════════════════════════════════════════════════════
// The table
// ═══════════════════════════════════════════════════════════════════════

/// All builtins, in function-code order.
pub static BUILTINS: &[BuiltinDef] = &[
    b("IfSpawned", if_spawned),                                       // 0
    b("IfTimeOut", if_time_out),                                      // 1
    b("IfAtWaypoint", if_at_waypoint),                                // 2
    b("IfAtLastWaypoint", if_at_last_waypoint),                       // 3
    b("IfAttacked", if_attacked),                                     // 4
    b("IfBumped", if_bumped),                                         // 5
    b("IfOrdered", if_ordered),                                       // 6
    b("IfCalledForHelp", if_called_for_help),                         // 7
    b("SetContent", set_content),                                     // 8
    b("IfKilled", if_killed),                                         // 9
    b("IfTargetKilled", if_target_killed),                            // 10
    b("ClearWaypoints", clear_waypoints),                             // 11
    b("AddWaypoint", add_waypoint),                                   // 12
    b("FindPath", find_path),                                         // 13
    b("Compass", compass),                                            // 14
    b("GetTargetArmorPrice", get_target_armor_price),                 // 15
    b("SetTime", set_time),                                           // 16
    b("GetContent", get_content),                                     // 17
    b("JoinTargetTeam", join_target_team),                            // 18
    b("SetTargetToNearbyEnemy", set_target_to_nearby_enemy),          // 19
    b("SetTargetToTargetLeftHand", set_target_to_target_left_hand),   // 20
    b("SetTargetToTargetRightHand", set_target_to_target_right_hand), // 21
    b("SetTargetToWhoeverAttacked", set_target_to_whoever_attacked),  // 22
    b("SetTargetToWhoeverBumped", set_target_to_whoever_bumped),      // 23
    b(
        "SetTargetToWhoeverCalledForHelp",
        set_target_to_whoever_called_for_help,
    ), // 24
    b("SetTargetToOldTarget", set_target_to_old_target),              // 25
    b("SetTurnModeToVelocity", set_turn_mode_to_velocity),            // 26
    b("SetTurnModeToWatch", set_turn_mode_to_watch),                  // 27
    b("SetTurnModeToSpin", set_turn_mode_to_spin),                    // 28
    b("SetBumpHeight", set_bump_height),                              // 29
    b("IfTargetHasID", if_target_has_id),                             // 30
    b("IfTargetHasItemID", if_target_has_item_id),                    // 31
    b("IfTargetHoldingItemID", if_target_holding_item_id),            // 32
    b("IfTargetHasSkillID", if_target_has_skill_id),                  // 33
    b("Else", script_else),                                           // 34
    b("Run", run),                                                    // 35
    b("Walk", walk),                                                  // 36
    b("Sneak", sneak),                                                // 37
    b("DoAction", do_action),                                         // 38
    b("KeepAction", keep_action),                                     // 39
    b("IssueOrder", issue_order),                                     // 40
    b("DropWeapons", drop_weapons),                                   // 41
    b("TargetDoAction", target_do_action),                            // 42
    b("OpenPassage", open_passage),                                   // 43
    b("ClosePassage", close_passage),                                 // 44
    b("IfPassageOpen", if_passage_open),                              // 45
    b("GoPoof", go_poof),                                             // 46
    b("CostTargetItemID", cost_target_item_id),                       // 47
    b("DoActionOverride", do_action_override),                        // 48
    b("IfHealed", if_healed),                                         // 49
    b("SendMessage", send_message),                                   // 50
    b("CallForHelp", call_for_help),                                  // 51
    b("DoNothing", do_nothing),                                       // 52
    b("End", end),                                                    // 53 = FN_END
    b("SetState", set_state),                                         // 54
    b("GetState", get_state),                                         // 55
    b("IfStateIs", if_state_is),                                      // 56
    b("IfTargetCanOpenStuff", if_target_can_open_stuff),              // 57
    b("IfGrabbed", if_grabbed),                                       // 58
    b("IfDropped", if_dropped),                                       // 59
    b(
        "SetTargetToWhoeverIsHolding",
        set_target_to_whoever_is_holding,
    ), // 60
    b("DamageTarget", damage_target),                                 // 61
    b("IfXIsLessThanY", if_x_is_less_than_y),                         // 62
    b("GetBumpHeight", get_bump_height),                              // 63
    b("IfReaffirmed", if_reaffirmed),                                 // 64
    b("UnkeepAction", unkeep_action),                                 // 65
    b("IfTargetIsOnOtherTeam", if_target_is_on_other_team),           // 66
    b("IfTargetIsOnHatedTeam", if_target_is_on_hated_team),           // 67
    b("PressLatchButton", press_latch_button),                        // 68
    b("SetTargetToTargetOfLeader", set_target_to_target_of_leader),   // 69
    b("IfLeaderKilled", if_leader_killed),                            // 70
    b("BecomeLeader", become_leader),                                 // 71
    b("ChangeTargetArmor", change_target_armor),                      // 72
    b("GiveMoneyToTarget", give_money_to_target),                     // 73
    b("IfLeaderIsAlive", if_leader_is_alive),                         // 74
    b("IfTargetIsOldTarget", if_target_is_old_target),                // 75
    b("SetTargetToLeader", set_target_to_leader),                     // 76
    b("SpawnCharacter", spawn_character),                             // 77
    b("RespawnCharacter", respawn_character),                         // 78
    b("IfUsed", if_used),                                             // 79
    b("DropMoney", drop_money),                                       // 80
    b("SetOldTarget", set_old_target),                                // 81
    b("DetachFromHolder", detach_from_holder),                        // 82
    b(
        "IfTargetHasVulnerabilityID",
        if_target_has_vulnerability_id,
    ), // 83
    b("IfCleanedUp", if_cleaned_up),                                  // 84
    b("IfSitting", if_sitting),                                       // 85
    b("IfTargetIsHurt", if_target_is_hurt),                           // 86
    b("IfTargetIsAPlayer", if_target_is_a_player),                    // 87
    b("PlaySound", play_sound),                                       // 88
    b("SpawnParticle", spawn_particle),                               // 89
    b("IfTargetIsAlive", if_target_is_alive),                         // 90
    b("Stop", stop),                                                  // 91
    b("IfTargetIsSelf", if_target_is_self),                           // 92
    b("IfTargetIsMale", if_target_is_male),                           // 93
    b("IfTargetIsFemale", if_target_is_female),                       // 94
    b("SetTargetToSelf", set_target_to_self),                         // 95
    b("SetTargetToRider", set_target_to_rider),                       // 96
    b("GetAttackTurn", get_attack_turn),                              // 97
    b("GetDamageType", get_damage_type),                              // 98
    b("IfScoredAHit", if_scored_a_hit),                               // 99
    b("IfDisaffirmed", if_disaffirmed),                               // 100
    b("TranslateOrder", translate_order),                             // 101
    b("SetTargetToWhoeverWasHit", set_target_to_whoever_was_hit),     // 102
    b("SetTargetToWideEnemy", set_target_to_wide_enemy),              // 103
    b("IfChanged", if_changed),                                       // 104
    b("IfInWater", if_in_water),                                      // 105
    b("IfBored", if_bored),                                           // 106
    b("IfTooMuchBaggage", if_too_much_baggage),                       // 107
    b("IfGrogged", if_grogged),                                       // 108
    b("IfDazed", if_dazed),                                           // 109
    b("PressTargetLatchButton", press_target_latch_button),           // 110
    b("IfInvisible", if_invisible),                                   // 111
    b("IfArmorIs", if_armor_is),                                      // 112
    b("GetTargetGrogTime", get_target_grog_time),                     // 113
    b("GetTargetDazeTime", get_target_daze_time),                     // 114
    b("SetDamageType", set_damage_type),                              // 115
    b("SetWaterLevel", set_water_level),                              // 116
    b("TeleportTarget", teleport_target),                             // 117
    b("GiveExperienceToTarget", give_experience_to_target),           // 118
    b("IncreaseAmmo", increase_ammo),                                 // 119
    b("UnkurseTarget", unkurse_target),                               // 120
    b("IfUnarmed", if_unarmed),                                       // 121
    b("FlashTarget", flash_target),                                   // 122
    b("SetAlpha", set_alpha),                                         // 123
    b("IfHitFromBehind", if_hit_from_behind),                         // 124
    b("IfHitFromFront", if_hit_from_front),                           // 125
    b("IfHitFromLeft", if_hit_from_left),                             // 126
    b("IfHitFromRight", if_hit_from_right),                           // 127
    b("IfTargetIsOnSameTeam", if_target_is_on_same_team),             // 128
    b("KillTarget", kill_target),                                     // 129
    b("GetWaterLevel", get_water_level),                              // 130
    b("CostTargetMana", cost_target_mana),                            // 131
    b("IfTargetHasAnyID", if_target_has_any_id),                      // 132
    b("IfNotDropped", if_not_dropped),                                // 133
    b("IfYIsLessThanX", if_y_is_less_than_x),                         // 134
    b("SetFlyHeight", set_fly_height),                                // 135
    b("IfBlocked", if_blocked),                                       // 136
    b("IfTargetIsDefending", if_target_is_defending),                 // 137
    b("IfTargetIsAttacking", if_target_is_attacking),                 // 138
    b("IfStateIs0", if_state_is_0),                                   // 139
    b("IfStateIs1", if_state_is_1),                                   // 140
    b("IfStateIs2", if_state_is_2),                                   // 141
    b("IfStateIs3", if_state_is_3),                                   // 142
    b("IfStateIs4", if_state_is_4),                                   // 143
    b("IfStateIs5", if_state_is_5),                                   // 144
    b("IfStateIs6", if_state_is_6),                                   // 145
    b("IfStateIs7", if_state_is_7),                                   // 146
    b("IfContentIs", if_content_is),                                  // 147
    b("SetTurnModeToWatchTarget", set_turn_mode_to_watch_target),     // 148
    b("IfStateIsNot", if_state_is_not),                               // 149
    b("IfXIsEqualToY", if_x_is_equal_to_y),                           // 150
    b("DebugMessage", debug_message),                                 // 151
    b("SendMessageNear", send_message_near),                          // 152
    b("IfHitGround", if_hit_ground),                                  // 153
    b("IfNameIsKnown", if_name_is_known),                             // 154
    b("IfHoldingItemID", if_holding_item_id),                         // 155
    b("IfKursed", if_kursed),                                         // 156
    b("IfTargetIsKursed", if_target_is_kursed),                       // 157
    b("IfOverWater", if_over_water),                                  // 158
    b("IfThrown", if_thrown),                                         // 159
    b("MakeNameKnown", make_name_known),                              // 160
    b("StopTargetMovement", stop_target_movement),                    // 161
    b("SetXY", set_xy),                                               // 162
    b("GetXY", get_xy),                                               // 163
    b("AddXY", add_xy),                                               // 164
    b("SpawnExactParticle", spawn_exact_particle),                    // 165
    b("AccelerateTarget", accelerate_target),                         // 166
    b("IfDistanceIsMoreThanTurn", if_distance_is_more_than_turn),     // 167
    b("IfCrushed", if_crushed),                                       // 168
    b("SetTargetToLowestTarget", set_target_to_lowest_target),        // 169
    b("IfNotPutAway", if_not_put_away),                               // 170
    b("IfTakenOut", if_taken_out),                                    // 171
    b("IfAmmoOut", if_ammo_out),                                      // 172
    b("HealSelf", heal_self),                                         // 173
    b("SetOwnerToTarget", set_owner_to_target),                       // 174
    b("SetTargetToOwner", set_target_to_owner),                       // 175
    b("SetFrame", set_frame),                                         // 176
    b("SetReloadTime", set_reload_time),                              // 177
    b("PoofTarget", poof_target),                                     // 178
    b("SetSpeedPercent", set_speed_percent),                          // 179
    b("SetChildState", set_child_state),                              // 180
    b("IfFacingTarget", if_facing_target),                            // 181
    b("Teleport", teleport),                                          // 182
    b("HealTarget", heal_target),                                     // 183
    b(
        "SetTargetToWhoeverIsInPassage",
        set_target_to_whoever_is_in_passage,
    ), // 184
    b("SpawnCharacterXYZ", spawn_character_xyz),                      // 185
    b("IfTargetIsSneaking", if_target_is_sneaking),                   // 186
    b("RespawnTarget", respawn_target),                               // 187
    b("IfTargetCanSeeInvisible", if_target_can_see_invisible),        // 188
    b("SetTargetToNearestEnemy", set_target_to_nearest_enemy),        // 189
    b("SetTargetToNearestFriend", set_target_to_nearest_friend),      // 190
    b("SetTargetToNearestLifeform", set_target_to_nearest_lifeform),  // 191
    b("IfTargetIsFlying", if_target_is_flying),                       // 192
    b("IfStateIsOdd", if_state_is_odd),                               // 193
    b("OrderTarget", order_target),                                   // 194
    b("CreateOrder", create_order),                                   // 195
    b("IfTargetIsDressedUp", if_target_is_dressed_up),                // 196
    b("IfTargetIsMounted", if_target_is_mounted),                     // 197
    b("MakeNameUnknown", make_name_unknown),                          // 198
    b("BecomeSpell", become_spell),                                   // 199
    b("BecomeSpellbook", become_spellbook),                           // 200
];

#[cfg(test)]
mod tests {
    use super::*;
    use saga_types::word::FN_END;

    #[test]
    fn end_sits_at_the_sentinel_code() {
        assert_eq!(code_of("End"), Some(FN_END));
        assert_eq!(BUILTINS[FN_END as usize].name, "End");
    }

    #[test]
    fn names_are_unique() {
        for (i, def) in BUILTINS.iter().enumerate() {
            assert_eq!(
                code_of(def.name),
                Some(i as u32),
                "duplicate or misplaced name {}",
                def.name
            );
        }
    }

    #[test]
    fn lookup_bounds() {
        assert!(lookup(0).is_some());
        assert!(lookup(BUILTINS.len() as u32).is_none());
    }
}
