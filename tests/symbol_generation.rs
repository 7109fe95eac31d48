//! End-to-end tests: ballout CSV on disk to symbol records.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use ballout_kicad::ballout::{BallTable, BalloutError};
use ballout_kicad::generator::{
    generate_all, generate_symbol, GeneratorOptions, SortGroup, UnassignedBank,
};
use ballout_kicad::kicad::writer::{encode_symbol, write_symbol};
use tempfile::TempDir;

const PINOUT: &str = "\
# ECP5U Family Pinout
# Pin/Ball Function column lists the primary function
,,,,,,,,,
PAD,Pin/Ball Function,Bank,Dual Function,Differential,High Speed,DQS,CABGA256,CSFBGA285
1,PL2A,7,,True_OF_PL2B,TRUE,-,C1,B1
2,PL2B,7,,Comp_OF_PL2A,TRUE,-,B1,-
3,PL11A,7,,True_OF_PL11B,FALSE,-,D2,C2
4,PL9A,7,,True_OF_PL9B,FALSE,-,D3,C3
5,VCCIO7,7,,-,FALSE,-,E5,D4
6,VCCIO7,7,,-,FALSE,-,F5,-
7,GND,7,,-,FALSE,-,E6,D5
8,PT4A,0,TRUE,-,FALSE,-,A2,A2
9,PT6B,0,,-,FALSE,-,A3,-
10,VCCIO0,0,,-,FALSE,-,E7,E7
11,NC,0,,-,FALSE,-,A4,A4
12,VCC,-,,-,FALSE,-,G7,G7
13,GND,-,,-,FALSE,-,G8,G8
14,GND,-,,-,FALSE,-,G9,-
15,DONE,-,TRUE,-,FALSE,-,H1,H1
16,RESERVED,-,,-,FALSE,-,H2,-
";

fn write_pinout(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pinout.csv");
    std::fs::write(&path, contents).expect("Failed to write pinout");
    (dir, path)
}

fn load() -> (TempDir, BallTable) {
    let (dir, path) = write_pinout(PINOUT);
    let table = BallTable::open(&path).expect("Failed to open pinout");
    (dir, table)
}

#[test]
fn package_names_from_header() {
    let (_dir, table) = load();
    let names: Vec<String> = table.package_names().into_iter().collect();
    assert_eq!(names, ["CABGA256", "CSFBGA285"]);
}

#[test]
fn every_bonded_pad_has_exactly_one_pin() {
    let (_dir, table) = load();
    let options = GeneratorOptions::default();

    for package in table.package_names() {
        let symbol = generate_symbol(&table, "LFE5U-25F", &package, &options).unwrap();

        let mut emitted: HashMap<(String, String), usize> = HashMap::new();
        for pin in symbol.pins() {
            *emitted
                .entry((pin.name.clone(), pin.number.clone()))
                .or_default() += 1;
        }

        let expected: HashSet<(String, String)> = table
            .pads()
            .filter(|pad| !pad.is_nc())
            .filter_map(|pad| {
                pad.ball(&package)
                    .map(|ball| (pad.pin_ball.clone(), ball.to_string()))
            })
            .collect();

        assert_eq!(emitted.len(), expected.len(), "package {package}");
        for key in &expected {
            assert_eq!(emitted.get(key), Some(&1), "{key:?} in {package}");
        }
    }
}

#[test]
fn one_visible_pin_per_net_per_unit() {
    let (_dir, table) = load();
    let symbol =
        generate_symbol(&table, "LFE5U-25F", "CABGA256", &GeneratorOptions::default()).unwrap();

    for unit in &symbol.units {
        let mut visible: HashMap<&str, usize> = HashMap::new();
        for pin in unit.pins.iter().filter(|p| !p.hidden) {
            *visible.entry(pin.name.as_str()).or_default() += 1;
        }
        assert!(visible.values().all(|&n| n == 1), "unit {}", unit.index);
    }
}

#[test]
fn units_follow_sorted_bank_keys() {
    let (_dir, table) = load();
    let symbol =
        generate_symbol(&table, "LFE5U-25F", "CABGA256", &GeneratorOptions::default()).unwrap();

    let banks: Vec<(u32, &str)> = symbol
        .units
        .iter()
        .map(|u| (u.index, u.bank.as_str()))
        .collect();
    assert_eq!(banks, [(1, "-"), (2, "0"), (3, "7")]);
    assert!(symbol
        .units
        .iter()
        .all(|u| u.pins.iter().all(|p| p.unit == u.index) && u.outline.unit == u.index));
}

#[test]
fn bank_order_supply_other_ground() {
    let (_dir, table) = load();
    let symbol =
        generate_symbol(&table, "LFE5U-25F", "CABGA256", &GeneratorOptions::default()).unwrap();
    let bank7 = &symbol.units[2];

    let visible: Vec<&str> = bank7
        .pins
        .iter()
        .filter(|p| !p.hidden)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(visible, ["VCCIO7", "PL2A", "PL2B", "PL9A", "PL11A", "GND"]);

    let groups: Vec<SortGroup> = visible.iter().map(|n| SortGroup::of(n, true)).collect();
    assert!(groups.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn rows_step_down_by_pitch() {
    let (_dir, table) = load();
    let symbol =
        generate_symbol(&table, "LFE5U-25F", "CABGA256", &GeneratorOptions::default()).unwrap();

    for unit in &symbol.units {
        let rows: Vec<i32> = unit.pins.iter().filter(|p| !p.hidden).map(|p| p.y).collect();
        assert!(rows.windows(2).all(|w| w[0] - w[1] == 100));

        // Centred within half a pitch.
        let top = rows[0];
        let bottom = rows[rows.len() - 1];
        assert!((top + bottom).abs() <= 100, "unit {}", unit.index);

        assert_eq!(unit.outline.y1, top + 100);
        assert_eq!(unit.outline.y2, bottom - 100);
        let distinct = i32::try_from(rows.len()).unwrap();
        assert_eq!(unit.outline.height(), 100 * (distinct + 1));
    }
}

#[test]
fn stacked_nets_render_hidden_duplicates() {
    let (_dir, table) = load();
    let symbol =
        generate_symbol(&table, "LFE5U-25F", "CABGA256", &GeneratorOptions::default()).unwrap();
    let text = encode_symbol(&symbol);

    assert!(text.contains("X VCCIO7 E5 200 300 200 L 50 50 3 1 W\n"));
    assert!(text.contains("X VCCIO7 F5 200 300 200 L 50 50 3 1 W N\n"));
    assert!(text.contains("X GND G8 200 -100 200 L 50 50 1 1 W\n"));
    assert!(text.contains("X GND G9 200 -100 200 L 50 50 1 1 W N\n"));
    assert!(text.contains("X RESERVED H2 200 0 200 L 50 50 1 1 U\n"));
    assert!(text.contains("X VCCIO0 E7 200 100 200 L 50 50 2 1 W\n"));
    assert!(text.contains("X PT4A A2 200 0 200 L 50 50 2 1 B\n"));
    assert!(!text.contains(" NC "));
}

#[test]
fn single_bank_scenario_text() {
    let (_dir, path) = write_pinout(
        ",,,,,,,\n\
         #,PIN,BANK,DUAL,DIFF,HS,DQS,CABGA256\n\
         1,A1,0,FALSE,-,FALSE,-,A1\n\
         2,VCC,0,FALSE,-,FALSE,-,A2\n\
         3,GND,0,FALSE,-,FALSE,-,A3\n",
    );
    let table = BallTable::open(&path).unwrap();
    let symbol = generate_symbol(&table, "PART", "CABGA256", &GeneratorOptions::default()).unwrap();

    let mut out = Vec::new();
    write_symbol(&mut out, &symbol).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "DEF PART-CABGA256 U 0 20 Y Y 1 L N\n\
         F0 \"U\" 0 0 50 H V C CNN\n\
         F1 \"PART-CABGA256\" 0 0 50 H V C CNN\n\
         F2 \"\" 0 0 50 H I C CNN\n\
         F3 \"\" 0 0 50 H I C CNN\n\
         DRAW\n\
         X VCC A2 200 100 200 L 50 50 1 1 W\n\
         X A1 A1 200 0 200 L 50 50 1 1 B\n\
         X GND A3 200 -100 200 L 50 50 1 1 W\n\
         S -200 200 0 -200 1 1 0 N\n\
         ENDDRAW\n\
         ENDDEF\n"
    );
}

#[test]
fn split_policy_and_ground_folding() {
    let (_dir, table) = load();
    let options = GeneratorOptions {
        ground_last: false,
        unassigned_bank: UnassignedBank::Split,
    };
    let symbol = generate_symbol(&table, "LFE5U-25F", "CABGA256", &options).unwrap();

    let banks: Vec<&str> = symbol.units.iter().map(|u| u.bank.as_str()).collect();
    assert_eq!(banks, ["0", "7", "misc", "power"]);

    let bank7: Vec<&str> = symbol.units[1]
        .pins
        .iter()
        .filter(|p| !p.hidden)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(bank7, ["VCCIO7", "GND", "PL2A", "PL2B", "PL9A", "PL11A"]);
}

#[test]
fn output_is_deterministic() {
    let (_dir, table) = load();
    let render = || -> String {
        generate_all(&table, "LFE5U-25F", &GeneratorOptions::default())
            .unwrap()
            .iter()
            .map(encode_symbol)
            .collect()
    };
    assert_eq!(render(), render());
}

#[test]
fn short_row_aborts_parsing() {
    let mut contents = PINOUT.to_string();
    contents.push_str("17,PR2A,2,,-,FALSE,-,J1\n");
    let (_dir, path) = write_pinout(&contents);

    assert!(matches!(
        BallTable::open(&path),
        Err(BalloutError::ShortRow { line: 21, .. })
    ));
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        BallTable::open(dir.path().join("absent.csv")),
        Err(BalloutError::FileRead { .. })
    ));
}
