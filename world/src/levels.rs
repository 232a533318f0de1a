//! Built-in level catalog.
//!
//! Levels are ordered easiest first. User-created levels are appended
//! behind the built-ins at save or install time.

use warehouse_core::Level;

/// Produces the immutable built-in levels that ship with the engine.
pub(crate) fn built_in_levels() -> Vec<Level> {
    vec![
        Level::new(
            "First Push".to_owned(),
            rows(&["#####", "#@$.#", "#####"]),
        ),
        Level::new(
            "Side by Side".to_owned(),
            rows(&["######", "# .  #", "# $$.#", "# @  #", "######"]),
        ),
        Level::new(
            "Twin Corners".to_owned(),
            rows(&[
                "########",
                "#. @  .#",
                "#  $$  #",
                "#      #",
                "#      #",
                "########",
            ]),
        ),
        Level::new(
            "Stacked Stores".to_owned(),
            rows(&[
                "######",
                "#    #",
                "# #@ #",
                "# $* #",
                "# .* #",
                "#    #",
                "######",
            ]),
        ),
    ]
}

fn rows(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|row| (*row).to_owned()).collect()
}
