use std::{env, process::ExitCode};

use glyphscript::{BuiltinCatalog, Cell, ComposeOptions, Composer, PathGrid, SvgStyle};
use tracing_subscriber::EnvFilter;

const OUTPUT: &str = "output.svg";

/// Anchors per row. Rows are three cells apart so a row's decals stay clear
/// of its neighbours.
const ROW_LENGTH: u64 = 12;

fn row_grid(rows: u64) -> PathGrid {
    (1..rows).fold(PathGrid::new(), |grid, row| {
        grid.jump(row * ROW_LENGTH, Cell::new(0, row as i64 * 3))
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("glyphscript=info")),
        )
        .init();

    let text: Vec<String> = env::args().skip(1).collect();
    let text = if text.is_empty() {
        "Thisss is rude.".to_owned()
    } else {
        text.join(" ")
    };

    let options = ComposeOptions::default().with_scale(4.0);
    let rows = text.split_whitespace().count() as u64 * 2 / ROW_LENGTH + 1;
    let mut composer = Composer::new(&BuiltinCatalog, options).with_grid(row_grid(rows));

    let document = match composer.add_text(&text).and_then(|()| composer.finish()) {
        Ok(document) => document,
        Err(error) => {
            tracing::error!(%error, "composition failed");
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let style = SvgStyle::default().with("stroke", "none");
    let markup = glyphscript::svg::to_document(&document, &style);

    if let Err(error) = svg::save(OUTPUT, &markup) {
        eprintln!("error: could not write {OUTPUT}: {error}");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        symbols = document.symbols().len(),
        width = document.width(),
        height = document.height(),
        "wrote {OUTPUT}"
    );
    println!("Wrote {OUTPUT}");

    ExitCode::SUCCESS
}
