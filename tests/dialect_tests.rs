//! Dialect loading tests: embedded table, TOML files, directory search.

use std::fs;

use gcode_machine::dialect::{self, DialectRegistry};
use gcode_machine::parser::{parse_block, Value};
use gcode_machine::Machine;

const CUSTOM_DIALECT: &str = r#"
[dialect]
name = "minimill"
description = "Three-axis mill with a trimmed-down word table"
default_mode = "G0 G90 G21"

[behavior]
persist_canned_cycle_repeats = true

[[words]]
letter = "G"
value = "code"
description = "preparatory command"

[[words]]
letter = "M"
value = "code"
description = "miscellaneous function"

[[words]]
letter = "F"
value = "number"
description = "feedrate"

[[words]]
letter = "X"
value = "number"
description = "X axis"

[[words]]
letter = "Y"
value = "number"
description = "Y axis"

[[words]]
letter = "Z"
value = "number"
description = "Z axis"
"#;

#[test]
fn embedded_dialect_has_the_full_letter_table() {
    let d = dialect::linuxcnc();
    assert_eq!(d.letters().len(), 26);
    let g = d.word_spec('G').unwrap();
    assert!(g.description().contains("preparatory"));
}

#[test]
fn custom_dialect_restricts_the_letter_set() {
    let mut registry = DialectRegistry::with_builtin();
    registry.add_dialect(
        dialect::schema::dialect_from_toml(CUSTOM_DIALECT).expect("custom dialect"),
    );
    assert!(registry.set_active("minimill"));
    let d = registry.active().unwrap();

    assert_eq!(d.letters(), vec!['F', 'G', 'M', 'X', 'Y', 'Z']);
    assert!(d.behavior.persist_canned_cycle_repeats);

    // S is not a letter here, so "S1000" cannot tokenize cleanly
    assert!(parse_block("S1000", d).is_err());
    // but ordinary motion still parses
    assert!(parse_block("G1 X1 Y2", d).is_ok());
}

#[test]
fn custom_dialect_drives_a_machine() {
    let d = dialect::schema::dialect_from_toml(CUSTOM_DIALECT).unwrap();
    let mut machine = Machine::new(d).unwrap();
    machine.process_text("G1 X3 Y4").unwrap();
    assert_eq!(machine.position().unwrap().get('X'), Some(3.0));
}

#[test]
fn dialect_directory_loading() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("minimill.toml"), CUSTOM_DIALECT).unwrap();
    fs::write(dir.path().join("broken.toml"), "not [valid toml").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let mut registry = DialectRegistry::with_builtin();
    let added = registry.load_dir(dir.path()).expect("load dir");

    // the broken file is skipped, the text file ignored
    assert_eq!(added, 1);
    assert!(registry.get("minimill").is_some());
    assert!(registry.set_active("minimill"));
}

#[test]
fn tool_words_keep_their_source_text() {
    let d = dialect::linuxcnc();
    let block = parse_block("M6 T01", &d).unwrap();
    let tool = block.commands()[0].get('T').unwrap();
    assert_eq!(tool.value(), &Value::Text("01".to_string()));
    assert_eq!(tool.to_string(), "T01");
}

#[test]
fn default_mode_is_configuration() {
    // a machine built from a dialect with a different startup block starts
    // in that mode
    let d = dialect::schema::dialect_from_toml(CUSTOM_DIALECT).unwrap();
    let machine = Machine::new(d).unwrap();
    assert_eq!(machine.mode().motion().unwrap().word().to_string(), "G00");
    assert!(machine.mode().units().is_some());
    assert!(machine.mode().plane_selection().is_none());
}
