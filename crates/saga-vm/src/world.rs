//! The world: everything the interpreter may observe or do outside an
//! entity's own AI state.
//!
//! Builtins treat this as an opaque capability set — entity accessors
//! and mutators, spawn/despawn requests, and side-effecting subsystem
//! calls. Only a handful of methods are required; the rest default to
//! inert answers so hosts (and test worlds) implement just what their
//! game actually has.

use crate::arena::EntityRef;
use crate::state::AiState;
use saga_types::Idsz;

/// Which of an entity's registered tags a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdszKind {
    Parent,
    Type,
    Skill,
    Special,
    Hate,
    Vulnerability,
}

/// How far afield a target search looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetScope {
    Nearby,
    Wide,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Neuter,
}

#[allow(unused_variables)]
pub trait World {
    // ── scheduling & AI state ────────────────────────────────────────

    /// Live entities in stable slot order; the per-tick think order.
    fn entities(&self) -> Vec<EntityRef>;
    /// Resolve a bare slot index (as packed into orders) to the entity
    /// currently living there.
    fn entity_by_index(&self, index: u32) -> Option<EntityRef> {
        None
    }
    /// Whether the handle still refers to a live slot. An entity listed
    /// at tick start can be removed by an earlier entity's script.
    fn exists(&self, ent: EntityRef) -> bool {
        true
    }
    fn ai(&self, ent: EntityRef) -> &AiState;
    fn ai_mut(&mut self, ent: EntityRef) -> &mut AiState;

    // ── identity & liveness ──────────────────────────────────────────

    fn is_alive(&self, ent: EntityRef) -> bool;
    fn is_player(&self, ent: EntityRef) -> bool {
        false
    }
    /// Carried inside someone's pack (thinks only as equipment).
    fn is_stowed(&self, ent: EntityRef) -> bool {
        false
    }
    fn is_mount(&self, ent: EntityRef) -> bool {
        false
    }
    fn gender(&self, ent: EntityRef) -> Gender {
        Gender::Neuter
    }

    // ── transform & motion ───────────────────────────────────────────

    fn position(&self, ent: EntityRef) -> (f32, f32, f32);
    fn set_position(&mut self, ent: EntityRef, x: f32, y: f32, z: f32) {}
    fn spawn_point(&self, ent: EntityRef) -> (f32, f32) {
        let (x, y, _) = self.position(ent);
        (x, y)
    }
    fn velocity(&self, ent: EntityRef) -> (f32, f32, f32) {
        (0.0, 0.0, 0.0)
    }
    fn add_velocity(&mut self, ent: EntityRef, dx: f32, dy: f32) {}
    fn stop_motion(&mut self, ent: EntityRef) {}
    /// Facing, in 16-bit turn units (a full circle is 65536).
    fn turn(&self, ent: EntityRef) -> u16 {
        0
    }
    fn set_turn(&mut self, ent: EntityRef, turn: u16) {}
    fn ground_level(&self, ent: EntityRef) -> f32 {
        0.0
    }
    fn hit_a_wall(&self, ent: EntityRef) -> bool {
        false
    }
    /// Whether (x, y) lies inside the playable area.
    fn on_map(&self, x: f32, y: f32) -> bool {
        true
    }
    fn over_water(&self, ent: EntityRef) -> bool {
        false
    }

    // ── stats ────────────────────────────────────────────────────────

    fn life(&self, ent: EntityRef) -> i32 {
        0
    }
    fn life_max(&self, ent: EntityRef) -> i32 {
        0
    }
    fn set_life(&mut self, ent: EntityRef, life: i32) {}
    fn mana(&self, ent: EntityRef) -> i32 {
        0
    }
    fn mana_max(&self, ent: EntityRef) -> i32 {
        0
    }
    fn mana_flow(&self, ent: EntityRef) -> i32 {
        0
    }
    fn can_channel(&self, ent: EntityRef) -> bool {
        false
    }
    fn strength(&self, ent: EntityRef) -> i32 {
        0
    }
    fn wisdom(&self, ent: EntityRef) -> i32 {
        0
    }
    fn intelligence(&self, ent: EntityRef) -> i32 {
        0
    }
    fn dexterity(&self, ent: EntityRef) -> i32 {
        0
    }
    fn experience(&self, ent: EntityRef) -> i32 {
        0
    }
    fn experience_level(&self, ent: EntityRef) -> i32 {
        0
    }
    fn give_experience(&mut self, ent: EntityRef, amount: i32, kind: i32) {}
    fn money(&self, ent: EntityRef) -> i32 {
        0
    }
    fn set_money(&mut self, ent: EntityRef, money: i32) {}
    /// Scatter some of the entity's money onto the ground.
    fn drop_money(&mut self, ent: EntityRef, amount: i32) {}
    fn ammo(&self, ent: EntityRef) -> i32 {
        0
    }
    fn ammo_max(&self, ent: EntityRef) -> i32 {
        0
    }
    fn set_ammo(&mut self, ent: EntityRef, ammo: i32) {}
    fn reload_time(&self, ent: EntityRef) -> i32 {
        0
    }
    fn set_reload_time(&mut self, ent: EntityRef, time: i32) {}
    fn holding_weight(&self, ent: EntityRef) -> i32 {
        0
    }
    fn bump_height(&self, ent: EntityRef) -> i32 {
        0
    }
    fn set_bump_height(&mut self, ent: EntityRef, height: i32) {}

    // ── armor ────────────────────────────────────────────────────────

    fn armor_skin(&self, ent: EntityRef) -> i32 {
        0
    }
    /// Change armor, returning the skin now worn.
    fn change_armor(&mut self, ent: EntityRef, skin: i32) -> i32 {
        0
    }
    fn armor_price(&self, ent: EntityRef, skin: i32) -> i32 {
        0
    }

    // ── perception & appearance ──────────────────────────────────────

    fn can_see_invisible(&self, ent: EntityRef) -> bool {
        false
    }
    fn is_invisible(&self, ent: EntityRef) -> bool {
        false
    }
    fn set_alpha(&mut self, ent: EntityRef, alpha: i32) {}
    fn set_light(&mut self, ent: EntityRef, light: i32) {}
    fn flash(&mut self, ent: EntityRef, value: u8) {}
    fn is_kursed(&self, ent: EntityRef) -> bool {
        false
    }
    fn set_kursed(&mut self, ent: EntityRef, kursed: bool) {}
    fn name_known(&self, ent: EntityRef) -> bool {
        false
    }
    fn set_name_known(&mut self, ent: EntityRef, known: bool) {}
    fn can_open_stuff(&self, ent: EntityRef) -> bool {
        false
    }
    fn is_dressed_up(&self, ent: EntityRef) -> bool {
        false
    }
    fn is_sneaking(&self, ent: EntityRef) -> bool {
        false
    }
    fn fly_height(&self, ent: EntityRef) -> i32 {
        0
    }
    fn set_fly_height(&mut self, ent: EntityRef, height: i32) {}
    fn grog_time(&self, ent: EntityRef) -> i32 {
        0
    }
    fn add_grog(&mut self, ent: EntityRef, time: i32) {}
    fn daze_time(&self, ent: EntityRef) -> i32 {
        0
    }
    fn add_daze(&mut self, ent: EntityRef, time: i32) {}

    // ── teams & social ───────────────────────────────────────────────

    fn team(&self, ent: EntityRef) -> u8 {
        0
    }
    fn switch_team(&mut self, ent: EntityRef, team: u8) {}
    fn team_hates(&self, team: u8, other: u8) -> bool {
        false
    }
    fn leader_of(&self, team: u8) -> Option<EntityRef> {
        None
    }
    fn set_leader(&mut self, team: u8, ent: EntityRef) {}
    fn morale(&self, team: u8) -> i32 {
        0
    }
    fn call_for_help(&mut self, ent: EntityRef) {}
    /// The teammate who last called for help, if any.
    fn help_caller(&self, team: u8) -> Option<EntityRef> {
        None
    }
    /// Broadcast an order to the entity's teammates.
    fn issue_order(&mut self, ent: EntityRef, order: u32) {}

    // ── combat history ───────────────────────────────────────────────

    fn last_attacker(&self, ent: EntityRef) -> Option<EntityRef> {
        None
    }
    fn last_bumper(&self, ent: EntityRef) -> Option<EntityRef> {
        None
    }
    fn last_hit_victim(&self, ent: EntityRef) -> Option<EntityRef> {
        None
    }
    fn last_item_used(&self, ent: EntityRef) -> Option<EntityRef> {
        None
    }
    /// Direction the last attack came from, in turn units.
    fn attack_direction(&self, ent: EntityRef) -> i32 {
        0
    }
    fn last_damage_type(&self, ent: EntityRef) -> i32 {
        0
    }
    fn is_invincible(&self, ent: EntityRef) -> bool {
        false
    }
    /// Damage type this entity deals on contact.
    fn bump_damage_type(&self, ent: EntityRef) -> i32 {
        0
    }
    fn set_bump_damage_type(&mut self, ent: EntityRef, damage_type: i32) {}
    fn damage(&mut self, target: EntityRef, amount: i32, damage_type: i32, attacker: EntityRef) {}
    fn kill(&mut self, target: EntityRef, killer: EntityRef) {}
    fn cost_mana(&mut self, ent: EntityRef, amount: i32, blame: EntityRef) -> bool {
        false
    }

    // ── items, hands, mounts ─────────────────────────────────────────

    fn attached_to(&self, ent: EntityRef) -> Option<EntityRef> {
        None
    }
    fn holding(&self, ent: EntityRef, hand: usize) -> Option<EntityRef> {
        None
    }
    fn detach(&mut self, ent: EntityRef, ignore_kurse: bool, shove: bool) {}
    fn idsz(&self, ent: EntityRef, kind: IdszKind) -> Idsz {
        Idsz::NONE
    }
    /// Parent-or-type tag match, the usual item test.
    fn has_idsz(&self, ent: EntityRef, tag: Idsz) -> bool {
        self.idsz(ent, IdszKind::Parent) == tag || self.idsz(ent, IdszKind::Type) == tag
    }
    fn any_idsz_matches(&self, ent: EntityRef, tag: Idsz) -> bool {
        [
            IdszKind::Parent,
            IdszKind::Type,
            IdszKind::Skill,
            IdszKind::Special,
            IdszKind::Hate,
            IdszKind::Vulnerability,
        ]
        .iter()
        .any(|&k| self.idsz(ent, k) == tag)
    }
    /// Search hands then pack for a matching item.
    fn item_with_idsz(&self, owner: EntityRef, tag: Idsz) -> Option<EntityRef> {
        None
    }
    /// Spend one use of an item: decrement ammo or remove it outright.
    fn consume_item(&mut self, item: EntityRef) {}

    // ── profiles & polymorph ─────────────────────────────────────────

    /// The entity's character profile id.
    fn profile(&self, ent: EntityRef) -> i32 {
        0
    }
    /// The profile spellbooks morph back into.
    fn spellbook_profile(&self) -> i32 {
        0
    }
    /// Turn the entity into another profile (polymorph).
    fn morph(&mut self, ent: EntityRef, profile: i32, skin: i32) {}

    // ── spawning ─────────────────────────────────────────────────────

    /// Spawn a character of the same profile as `like`. None if the
    /// position is invalid or the population is full.
    fn spawn_character(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        turn: u16,
        like: EntityRef,
    ) -> Option<EntityRef> {
        None
    }
    fn spawn_particle(&mut self, owner: EntityRef, profile: i32, x: f32, y: f32, z: f32) {}
    fn despawn(&mut self, ent: EntityRef) {}
    fn respawn(&mut self, ent: EntityRef) {}

    // ── actions & animation ──────────────────────────────────────────

    fn action_ready(&self, ent: EntityRef) -> bool {
        true
    }
    /// Begin an animation action; false if invalid (or busy, unless
    /// forced).
    fn start_action(&mut self, ent: EntityRef, action: i32, force: bool) -> bool {
        false
    }
    fn keep_action(&mut self, ent: EntityRef, keep: bool) {}
    fn set_frame(&mut self, ent: EntityRef, frame: i32) {}
    fn is_defending(&self, ent: EntityRef) -> bool {
        false
    }
    fn is_attacking(&self, ent: EntityRef) -> bool {
        false
    }

    // ── movement tuning ──────────────────────────────────────────────

    fn accel(&self, ent: EntityRef) -> f32 {
        0.0
    }
    fn reset_accel(&mut self, ent: EntityRef) {}
    fn scale_accel(&mut self, ent: EntityRef, factor: f32) {}

    // ── passages ─────────────────────────────────────────────────────

    fn open_passage(&mut self, id: i32) -> bool {
        false
    }
    fn close_passage(&mut self, id: i32) -> bool {
        false
    }
    fn passage_open(&self, id: i32) -> bool {
        false
    }
    fn entity_in_passage(&self, id: i32, tag: Idsz) -> Option<EntityRef> {
        None
    }
    fn passage_of(&self, ent: EntityRef) -> i32 {
        0
    }

    // ── messages, sound, ambience ────────────────────────────────────

    fn send_message(&mut self, ent: EntityRef, offset: i32) {}
    /// Message shown only when the camera is close to the speaker.
    fn send_message_near(&mut self, ent: EntityRef, offset: i32) {}
    fn debug_message(&mut self, text: String) {}
    fn play_sound(&mut self, ent: EntityRef, sound: i32) {}
    fn water_level(&self) -> i32 {
        0
    }
    fn set_water_level(&mut self, level: i32) {}
    fn camera_swing(&self) -> i32 {
        0
    }
    fn attached_particle_count(&self, ent: EntityRef) -> i32 {
        0
    }

    // ── target searches ──────────────────────────────────────────────

    fn find_target(
        &self,
        ent: EntityRef,
        scope: TargetScope,
        friends: bool,
        enemies: bool,
        tag: Idsz,
    ) -> Option<EntityRef> {
        None
    }

    // ── randomness ───────────────────────────────────────────────────

    /// Host-supplied randomness; tests pin it for determinism.
    fn rand(&mut self) -> u32;
}
