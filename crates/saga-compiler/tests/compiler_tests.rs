//! Compiler pipeline tests: emission layout, jump wiring, diagnostics.

use saga_compiler::{disassemble, Compiler};
use saga_types::{word, Idsz, Op, ScriptStore, SymbolKind, SymbolTable};

/// A small table in the shape of the real one: functions capitalized,
/// variables lowercase, operators registered as their glyphs.
fn table() -> SymbolTable {
    let mut t = SymbolTable::new();
    for (code, name) in [
        (0u32, "IfSpawned"),
        (1, "IfTimeOut"),
        (4, "IfAttacked"),
        (8, "SetContent"),
        (34, "Else"),
        (38, "DoAction"),
        (word::FN_END, "End"),
    ] {
        t.register(name, SymbolKind::Function, code);
    }
    for (code, name) in [
        (0u32, "tmpx"),
        (1, "tmpy"),
        (2, "tmpdistance"),
        (3, "tmpturn"),
        (4, "tmpargument"),
        (6, "selfx"),
    ] {
        t.register(name, SymbolKind::Variable, code);
    }
    for op in [Op::Add, Op::Sub, Op::And, Op::Shr, Op::Shl, Op::Mul, Op::Div, Op::Mod] {
        t.register(op.glyph().to_string(), SymbolKind::Operator, op as u32);
    }
    t.register("LATCHLEFT", SymbolKind::Constant, 1);
    t
}

#[test]
fn indentation_field_round_trips() {
    for k in 0u8..=15 {
        for extra in [0usize, 1] {
            let source = format!("{}IfSpawned\nEnd\n", " ".repeat(2 * k as usize + extra));
            let mut compiler = Compiler::new(table());
            let (id, diags) = compiler.compile("indent.txt", &source).unwrap();
            assert!(!diags.has_any());
            let start = compiler.store().start_of(id);
            assert_eq!(compiler.store().word(start).indent(), k, "depth {k}+{extra}");
        }
    }
}

#[test]
fn excess_indentation_clamps_with_one_diagnostic() {
    let source = format!("{}IfSpawned\nEnd\n", " ".repeat(40));
    let mut compiler = Compiler::new(table());
    let (id, diags) = compiler.compile("deep.txt", &source).unwrap();
    assert_eq!(diags.total, 1);
    let start = compiler.store().start_of(id);
    assert_eq!(compiler.store().word(start).indent(), 15);
}

#[test]
fn guard_jump_skips_its_block() {
    let source = "\
IfSpawned
  DoAction
  tmpx = 1
IfTimeOut
  SetContent
End
";
    let mut compiler = Compiler::new(table());
    let (id, _) = compiler.compile("guard.txt", source).unwrap();
    let store = compiler.store();
    let start = store.start_of(id);

    // Layout: IfSpawned@0 jump@1, DoAction@2 jump@3, group@4..6,
    // IfTimeOut@7 jump@8, SetContent@9 jump@10, End@11.
    assert_eq!(store.word(start + 1).0, start + 7);
    // DoAction guards nothing deeper; its failure lands on the sibling
    // arithmetic group right below it.
    assert_eq!(store.word(start + 3).0, start + 4);
    // IfTimeOut's failure skips SetContent and lands on End.
    assert_eq!(store.word(start + 8).0, start + 11);
}

#[test]
fn adjacent_guards_at_same_depth() {
    let source = "\
IfSpawned
IfAttacked
End
";
    let mut compiler = Compiler::new(table());
    let (id, _) = compiler.compile("flat.txt", source).unwrap();
    let store = compiler.store();
    let start = store.start_of(id);
    // No block to skip: both guards fail straight onto the next word.
    assert_eq!(store.word(start + 1).0, start + 2);
    assert_eq!(store.word(start + 3).0, start + 4);
}

#[test]
fn arithmetic_group_layout() {
    let source = "tmpx = 3 + 4 * 2\nEnd\n";
    let mut compiler = Compiler::new(table());
    let (id, diags) = compiler.compile("math.txt", source).unwrap();
    assert!(!diags.has_any());
    let store = compiler.store();
    let start = store.start_of(id);

    let header = store.word(start);
    assert!(!header.is_function());
    assert_eq!(header.value(), 0); // tmpx
    assert_eq!(store.word(start + 1).0, 3); // operand count

    let first = store.word(start + 2);
    assert!(first.is_literal_operand());
    assert_eq!(first.op_bits(), Op::Add as u8);
    assert_eq!(first.value(), 3);

    let second = store.word(start + 3);
    assert_eq!(second.op_bits(), Op::Add as u8);
    assert_eq!(second.value(), 4);

    let third = store.word(start + 4);
    assert_eq!(third.op_bits(), Op::Mul as u8);
    assert_eq!(third.value(), 2);
}

#[test]
fn variable_operands_clear_the_literal_bit() {
    let source = "tmpy = selfx + LATCHLEFT\nEnd\n";
    let mut compiler = Compiler::new(table());
    let (id, _) = compiler.compile("vars.txt", source).unwrap();
    let store = compiler.store();
    let start = store.start_of(id);

    let first = store.word(start + 2);
    assert!(!first.is_literal_operand());
    assert_eq!(first.value(), 6); // selfx reads at run time

    let second = store.word(start + 3);
    assert!(second.is_literal_operand()); // registered constants fold
    assert_eq!(second.value(), 1);
}

#[test]
fn idsz_operand_packs_to_documented_bits() {
    let source = "tmpargument = [ABCD]\ntmpx = [NONE]\nEnd\n";
    let mut compiler = Compiler::new(table());
    let (id, _) = compiler.compile("idsz.txt", source).unwrap();
    let store = compiler.store();
    let start = store.start_of(id);

    assert_eq!(
        store.word(start + 2).value(),
        Idsz::pack('A', 'B', 'C', 'D').0
    );
    assert_eq!(store.word(start + 5).value(), Idsz::NONE.0);
}

#[test]
fn unresolved_symbol_is_one_diagnostic_not_an_error() {
    let source = "IfUtterNonsense\n  DoAction\nEnd\n";
    let mut compiler = Compiler::new(table());
    let (id, diags) = compiler.compile("typo.txt", source).unwrap();
    assert_eq!(diags.total, 1);
    assert!(diags.entries[0].message.contains("IfUtterNonsense"));
    // The behavior registered and still terminates.
    let start = compiler.store().start_of(id);
    assert_eq!(start, 0);
}

#[test]
fn missing_end_is_supplied() {
    let source = "IfSpawned\n  DoAction\n";
    let mut compiler = Compiler::new(table());
    let (id, _) = compiler.compile("noend.txt", source).unwrap();
    let store = compiler.store();
    let start = store.start_of(id);
    // IfSpawned@0, DoAction@2, synthesized End@4.
    assert!(store.word(start + 4).is_end());
    assert_eq!(store.word(start + 1).0, start + 4);
}

#[test]
fn store_exhaustion_fails_one_script_and_keeps_the_rest() {
    let mut compiler = Compiler::with_store(table(), ScriptStore::with_capacity(6));
    let (first, _) = compiler.compile("small.txt", "End\n").unwrap();
    let len_before = compiler.store().len();

    let err = compiler
        .compile("big.txt", "IfSpawned\n  DoAction\n  SetContent\nEnd\n")
        .unwrap_err();
    assert!(err.to_string().contains("big.txt"));

    // Nothing of the failed script is reachable, and the earlier
    // behavior is untouched.
    assert_eq!(compiler.store().len(), len_before);
    assert_eq!(compiler.store().behavior_count(), 1);
    assert_eq!(compiler.store().start_of(first), 0);
}

#[test]
fn scripts_share_the_store_with_absolute_offsets() {
    let mut compiler = Compiler::new(table());
    let (a, _) = compiler.compile("a.txt", "IfSpawned\nEnd\n").unwrap();
    let (b, _) = compiler.compile("b.txt", "IfTimeOut\nEnd\n").unwrap();
    let store = compiler.store();
    assert_eq!(store.start_of(a), 0);
    assert_eq!(store.start_of(b), 4);
    // Second script's jump targets are absolute, not script-relative.
    assert_eq!(store.word(store.start_of(b) + 1).0, store.start_of(b) + 2);
}

#[test]
fn disassembly_matches_patched_words() {
    let source = "\
IfAttacked
  tmpx = selfx + 128
  DoAction
End
";
    let mut compiler = Compiler::new(table());
    let (id, _) = compiler.compile("disasm.txt", source).unwrap();
    let listing = disassemble(compiler.store(), compiler.symbols(), id);

    let guard = &listing.entries[0];
    assert_eq!(guard.jump, Some(compiler.store().word(listing.start + 1).0));
    assert!(guard.text.contains("IfAttacked"));

    let group = &listing.entries[1];
    assert!(group.text.contains("tmpx = selfx + 128"));

    assert!(listing.entries.last().unwrap().text.contains("End"));

    // The listing serializes for the CLI's JSON output.
    let json = serde_json::to_string(&listing).unwrap();
    assert!(json.contains("\"behavior\""));
}
