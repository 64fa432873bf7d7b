//! End-to-end composition with the built-in catalog and SVG output.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use glyphscript::{
    BuiltinCatalog, Cell, ComposeOptions, Composer, PathGrid, SvgStyle, Symbol, compose_text, svg,
};
use pretty_assertions::assert_eq;

#[test]
fn composes_sentence_with_repeats() {
    let document =
        compose_text("Thisss is rude.", &BuiltinCatalog, ComposeOptions::default()).unwrap();

    assert_eq!(
        document.anchors(),
        &(0..7).map(|x| Cell::new(x, 0)).collect::<Vec<_>>()[..]
    );
    let decals: Vec<&str> = document
        .symbols()
        .iter()
        .filter(|symbol| matches!(symbol, Symbol::Decal(_)))
        .map(Symbol::key)
        .collect();
    assert_eq!(decals, vec!["s", "s", "s"]);
}

#[test]
fn composes_sentence_along_path() {
    let catalog = BuiltinCatalog;
    let grid = PathGrid::new()
        .jump(4, Cell::new(0, 3))
        .jump(8, Cell::new(0, 6));
    let mut composer = Composer::new(&catalog, ComposeOptions::default()).with_grid(grid);
    composer.add_text("hello world: that is it").unwrap();

    let document = composer.finish().unwrap();
    assert_eq!(
        document.anchors(),
        &[
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(3, 0),
            Cell::new(0, 3),
            Cell::new(1, 3),
            Cell::new(2, 3),
            Cell::new(3, 3),
            Cell::new(0, 6),
            Cell::new(1, 6),
        ]
    );
}

#[test]
fn svg_output_groups_symbols() {
    let options = ComposeOptions::default().with_scale(4.0);
    let document = compose_text("hello world.", &BuiltinCatalog, options).unwrap();
    let style = SvgStyle::default().with("stroke", "none");
    let markup = svg::to_document(&document, &style).to_string();

    assert_eq!(
        markup.matches("<g ").count(),
        document.symbols().len(),
        "{markup}"
    );
    assert!(markup.contains(r#"class="primary-symbol h""#));
    assert!(markup.contains(r#"class="primary-symbol .""#));
    assert!(markup.contains(r#"class="decal-symbol l""#));
    assert!(markup.contains(&format!(r#"width="{}""#, document.width())));
}
