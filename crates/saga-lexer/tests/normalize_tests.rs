//! Normalizer behavior over whole-script inputs.

use saga_lexer::{indentation, normalize, space_operators, starts_with_capital};

#[test]
fn retains_only_meaningful_lines() {
    let source = "\
// The healer waits until hurt, then drinks.
IfSpawned
  SetState

// main loop
IfAttacked
  tmpargument = 1
  DoAction
";
    let lines = normalize(source);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "IfSpawned",
            "  SetState",
            "IfAttacked",
            "  tmpargument = 1",
            "  DoAction",
        ]
    );
    // Line numbers point at the raw source, not the retained sequence.
    assert_eq!(lines[0].number, 2);
    assert_eq!(lines[2].number, 6);
}

#[test]
fn indentation_floor_divides_by_two() {
    for k in 0u32..=15 {
        let even = format!("{}IfSpawned", " ".repeat(2 * k as usize));
        let odd = format!("{}IfSpawned", " ".repeat(2 * k as usize + 1));
        assert_eq!(indentation(&even), k);
        assert_eq!(indentation(&odd), k);
    }
}

#[test]
fn operators_become_standalone_words() {
    assert_eq!(space_operators("tmpx=selfx+5"), "tmpx = selfx + 5");
    assert_eq!(space_operators("tmpx = selfx + 5"), "tmpx = selfx + 5");
    assert_eq!(
        space_operators("tmpturn=targetturnto&65535"),
        "tmpturn = targetturnto & 65535"
    );
}

#[test]
fn operator_spacing_preserves_indent() {
    assert_eq!(space_operators("    tmpx=1"), "    tmpx = 1");
    assert_eq!(indentation(&space_operators("    tmpx=1")), 2);
}

#[test]
fn capital_flag_ignores_indent() {
    assert!(starts_with_capital("    IfTimeOut"));
    assert!(!starts_with_capital("    tmpx = 0"));
    assert!(!starts_with_capital("      "));
}

#[test]
fn tabs_and_crlf_do_not_leak_through() {
    let lines = normalize("IfSpawned\r\n\tDoAction\r\n");
    assert_eq!(lines[0].text, "IfSpawned");
    // A leading tab is not script indentation; it collapses away.
    assert_eq!(lines[1].text, "DoAction");
}
