//! Interpreter behavior over compiled scripts: guard jumps, Else,
//! arithmetic, deferred removal, tick ordering, latches.

use saga_compiler::Compiler;
use saga_types::{BehaviorId, ScriptStore, Word, END_WORD};
use saga_vm::{
    run_tick, standard_symbols, think, AiState, Alerts, EntityRef, SlotArena, World,
};

// ── test world ───────────────────────────────────────────────────────

struct Entity {
    ai: AiState,
    alive: bool,
    player: bool,
    mount: bool,
    rider: Option<EntityRef>,
    pos: (f32, f32, f32),
}

#[derive(Default)]
struct Log {
    events: Vec<String>,
}

struct TestWorld {
    arena: SlotArena<Entity>,
    passage_open: Vec<bool>,
    log: Log,
}

impl TestWorld {
    fn new() -> Self {
        Self {
            arena: SlotArena::new(16),
            passage_open: vec![false; 4],
            log: Log::default(),
        }
    }

    fn spawn(&mut self, behavior: BehaviorId) -> EntityRef {
        // Two-step insert so the AiState can hold its own handle.
        let placeholder = self
            .arena
            .insert(Entity {
                ai: AiState::new(behavior, dangling()),
                alive: true,
                player: false,
                mount: false,
                rider: None,
                pos: (0.0, 0.0, 0.0),
            })
            .expect("population limit");
        let me = placeholder;
        let entity = self.arena.get_mut(me).unwrap();
        entity.ai = AiState::new(behavior, me);
        me
    }

    fn ent(&self, handle: EntityRef) -> &Entity {
        self.arena.get(handle).expect("stale handle")
    }

    fn ent_mut(&mut self, handle: EntityRef) -> &mut Entity {
        self.arena.get_mut(handle).expect("stale handle")
    }
}

fn dangling() -> EntityRef {
    SlotArena::new(1).insert(()).unwrap()
}

impl World for TestWorld {
    fn entities(&self) -> Vec<EntityRef> {
        self.arena.handles()
    }

    fn exists(&self, ent: EntityRef) -> bool {
        self.arena.contains(ent)
    }

    fn ai(&self, ent: EntityRef) -> &AiState {
        &self.ent(ent).ai
    }

    fn ai_mut(&mut self, ent: EntityRef) -> &mut AiState {
        &mut self.ent_mut(ent).ai
    }

    fn is_alive(&self, ent: EntityRef) -> bool {
        self.arena.get(ent).is_some_and(|e| e.alive)
    }

    fn is_player(&self, ent: EntityRef) -> bool {
        self.ent(ent).player
    }

    fn is_mount(&self, ent: EntityRef) -> bool {
        self.ent(ent).mount
    }

    fn holding(&self, ent: EntityRef, hand: usize) -> Option<EntityRef> {
        if hand == 0 {
            self.ent(ent).rider
        } else {
            None
        }
    }

    fn position(&self, ent: EntityRef) -> (f32, f32, f32) {
        self.ent(ent).pos
    }

    fn open_passage(&mut self, id: i32) -> bool {
        let slot = &mut self.passage_open[id as usize];
        let was_closed = !*slot;
        *slot = true;
        was_closed
    }

    fn passage_open(&self, id: i32) -> bool {
        self.passage_open[id as usize]
    }

    fn despawn(&mut self, ent: EntityRef) {
        self.log.events.push(format!("despawn {}", ent.index()));
        self.arena.remove(ent);
    }

    fn debug_message(&mut self, text: String) {
        self.log.events.push(format!("msg {text}"));
    }

    fn rand(&mut self) -> u32 {
        // Deterministic for tests.
        4
    }
}

// ── fixtures ─────────────────────────────────────────────────────────

fn compile(sources: &[&str]) -> ScriptStore {
    let mut compiler = Compiler::new(standard_symbols());
    // Behavior 0 is the default; keep it empty like a real load does.
    compiler.compile("default.txt", "End\n").unwrap();
    for (i, source) in sources.iter().enumerate() {
        let (_, diags) = compiler.compile(&format!("script{i}.txt"), source).unwrap();
        assert!(!diags.has_any(), "unexpected diagnostics: {diags:?}");
    }
    compiler.into_store()
}

fn world_with(store_sources: &[&str]) -> (ScriptStore, TestWorld, Vec<EntityRef>) {
    let store = compile(store_sources);
    let mut world = TestWorld::new();
    let ents = (0..store_sources.len())
        .map(|i| world.spawn(BehaviorId(i as u32 + 1)))
        .collect();
    (store, world, ents)
}

// ── tests ────────────────────────────────────────────────────────────

#[test]
fn arithmetic_is_left_to_right_with_no_precedence() {
    let (store, mut world, ents) = world_with(&["tmpx = 3 + 4 * 2\nEnd\n"]);
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).regs.x, 14);
}

#[test]
fn failed_guard_skips_exactly_its_block() {
    let source = "\
IfSpawned
  tmpx = 111
  tmpdistance = 5
tmpy = 222
End
";
    // With the alert set, the block runs.
    let (store, mut world, ents) = world_with(&[source]);
    think(&store, &mut world, ents[0]);
    let regs = world.ai(ents[0]).regs;
    assert_eq!((regs.x, regs.distance, regs.y), (111, 5, 222));

    // Without it, the cursor lands on the trailing line, never inside.
    let (store, mut world, ents) = world_with(&[source]);
    world.ai_mut(ents[0]).alerts = Alerts::empty();
    think(&store, &mut world, ents[0]);
    let regs = world.ai(ents[0]).regs;
    assert_eq!((regs.x, regs.distance, regs.y), (0, 0, 222));
}

#[test]
fn else_fires_only_after_a_failed_sibling() {
    let source = "\
IfSpawned
  tmpx = 1
Else
  tmpx = 2
End
";
    // Failed sibling: Else proceeds.
    let (store, mut world, ents) = world_with(&[source]);
    world.ai_mut(ents[0]).alerts = Alerts::empty();
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).regs.x, 2);

    // Passed deeper block: Else fails and its block is skipped.
    let (store, mut world, ents) = world_with(&[source]);
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).regs.x, 1);
}

#[test]
fn registers_persist_across_ticks() {
    let (store, mut world, ents) = world_with(&["tmpx = tmpx + 1\nEnd\n"]);
    for _ in 0..3 {
        think(&store, &mut world, ents[0]);
    }
    assert_eq!(world.ai(ents[0]).regs.x, 3);
}

#[test]
fn old_target_is_captured_at_tick_start() {
    let source = "\
SetTargetToSelf
IfTargetIsOldTarget
  tmpx = 1
End
";
    let (store, mut world, ents) = world_with(&[source]);
    let other = world.spawn(BehaviorId(0));
    world.ai_mut(ents[0]).target = other;
    think(&store, &mut world, ents[0]);
    // Old target was `other`, current target is self: predicate fails.
    assert_eq!(world.ai(ents[0]).regs.x, 0);
    assert_eq!(world.ai(ents[0]).old_target, other);
}

#[test]
fn set_time_gates_if_time_out() {
    let source = "\
IfSpawned
  tmpargument = 2
  SetTime
IfTimeOut
  tmpx = 1
End
";
    let (store, mut world, ents) = world_with(&[source]);
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).regs.x, 0, "timer just set");
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).regs.x, 0, "still counting down");
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).regs.x, 1, "timer expired");
}

#[test]
fn alerts_clear_after_the_tick() {
    let (store, mut world, ents) = world_with(&["End\n"]);
    assert!(world.ai(ents[0]).alerts.contains(Alerts::SPAWNED));
    think(&store, &mut world, ents[0]);
    assert!(world.ai(ents[0]).alerts.is_empty());
}

#[test]
fn state_machine_round_trip() {
    let source = "\
IfStateIs0
  tmpargument = 3
  SetState
IfStateIs3
  tmpx = 33
End
";
    let (store, mut world, ents) = world_with(&[source]);
    think(&store, &mut world, ents[0]);
    // Both guards pass within one tick: state writes are immediate.
    assert_eq!(world.ai(ents[0]).state, 3);
    assert_eq!(world.ai(ents[0]).regs.x, 33);
}

#[test]
fn deferred_removal_runs_the_rest_of_the_script_first() {
    let source = "\
GoPoof
tmpx = 5
DebugMessage
End
";
    let (store, mut world, ents) = world_with(&[source]);
    run_tick(&store, &mut world);

    // The debug lines ran with valid state, and the despawn came last.
    let events = &world.log.events;
    assert!(events.iter().any(|e| e.contains("tmpx 5")));
    assert_eq!(events.last().unwrap(), &format!("despawn {}", ents[0].index()));
    assert!(!world.exists(ents[0]));
}

#[test]
fn players_do_not_poof() {
    let (store, mut world, ents) = world_with(&["GoPoof\n  tmpx = 5\nEnd\n"]);
    world.ent_mut(ents[0]).player = true;
    run_tick(&store, &mut world);
    // GoPoof fails for players: no removal, guarded block skipped.
    assert!(world.exists(ents[0]));
    assert_eq!(world.ai(ents[0]).regs.x, 0);
}

#[test]
fn earlier_entities_effects_are_visible_later_in_the_same_tick() {
    let opener = "tmpargument = 1\nOpenPassage\nEnd\n";
    let watcher = "tmpargument = 1\nIfPassageOpen\n  tmpx = 9\nEnd\n";

    // Opener scheduled first: the watcher sees the passage open.
    let (store, mut world, ents) = world_with(&[opener, watcher]);
    run_tick(&store, &mut world);
    assert_eq!(world.ai(ents[1]).regs.x, 9);

    // Watcher scheduled first: the effect lands after it already ran.
    let (store, mut world, ents) = world_with(&[watcher, opener]);
    run_tick(&store, &mut world);
    assert_eq!(world.ai(ents[0]).regs.x, 0);
    assert!(world.passage_open[1]);
}

#[test]
fn entity_removed_mid_tick_does_not_think() {
    let poofer = "PoofTarget\nEnd\n";
    let victim = "DebugMessage\nEnd\n";
    let (store, mut world, ents) = world_with(&[poofer, victim]);
    world.ai_mut(ents[0]).target = ents[1];
    run_tick(&store, &mut world);

    assert!(!world.exists(ents[1]));
    assert!(
        !world.log.events.iter().any(|e| e.starts_with("msg")),
        "a despawned entity still thought: {:?}",
        world.log.events
    );
}

#[test]
fn waypoint_drives_the_movement_latch() {
    let source = "\
tmpx = 1000
tmpy = 2000
AddWaypoint
End
";
    let (store, mut world, ents) = world_with(&[source]);
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).latch, (1.0, 2.0));
}

#[test]
fn ridden_mount_takes_its_riders_latch() {
    let (store, mut world, ents) = world_with(&["End\n"]);
    let rider = world.spawn(BehaviorId(0));
    world.ai_mut(rider).latch = (0.5, -0.25);
    {
        let mount = world.ent_mut(ents[0]);
        mount.mount = true;
        mount.rider = Some(rider);
    }
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).latch, (0.5, -0.25));
}

#[test]
fn unknown_function_code_skips_safely() {
    let mut store = ScriptStore::with_capacity(8);
    assert!(store.push(Word::function(0, 9999)));
    assert!(store.push(Word::raw(2)));
    assert!(store.push(END_WORD));
    assert!(store.push(Word::raw(0)));
    store.register(0).unwrap();

    let mut world = TestWorld::new();
    let ent = world.spawn(BehaviorId(0));
    // Terminates (no hang, no panic) with nothing mutated.
    think(&store, &mut world, ent);
    assert_eq!(world.ai(ent).regs.x, 0);
}

#[test]
fn division_by_zero_leaves_the_sum() {
    let (store, mut world, ents) = world_with(&["tmpx = 10 / 0 + 4\nEnd\n"]);
    think(&store, &mut world, ents[0]);
    // The divide is skipped, the add still applies.
    assert_eq!(world.ai(ents[0]).regs.x, 14);
}

#[test]
fn polymorph_reseeds_the_changed_alert() {
    let source = "\
IfSpawned
  BecomeSpell
End
";
    let (store, mut world, ents) = world_with(&[source]);
    think(&store, &mut world, ents[0]);
    assert_eq!(world.ai(ents[0]).alerts, Alerts::CHANGED);
    assert_eq!(world.ai(ents[0]).state, 0);

    // The reseed lives one tick like any other alert.
    think(&store, &mut world, ents[0]);
    assert!(world.ai(ents[0]).alerts.is_empty());
}

#[test]
fn storage_slots_round_trip() {
    let source = "\
tmpx = 7
tmpy = 11
tmpargument = 2
SetXY
tmpx = 0
tmpy = 0
GetXY
End
";
    let (store, mut world, ents) = world_with(&[source]);
    think(&store, &mut world, ents[0]);
    let regs = world.ai(ents[0]).regs;
    assert_eq!((regs.x, regs.y), (7, 11));
    assert_eq!(world.ai(ents[0]).storage[2], (7, 11));
}
