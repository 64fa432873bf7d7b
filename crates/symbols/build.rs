use std::{fs, path::PathBuf};

#[derive(Debug, Copy, Clone)]
struct PackedPoint {
    pub x: i8,
    pub y: i8,
}

type Outline = Vec<Vec<PackedPoint>>;

#[derive(Debug, Clone)]
enum Entry {
    Primary { child: PackedPoint, polygons: Outline },
    Decal { height: u8, polygons: Outline },
}

const REPEAT_MARKER: &str = "ditto";

fn parse_point(text: &str) -> Result<PackedPoint, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, found `{text}`"))?;
    let x = x.parse().map_err(|_| format!("bad x coordinate in `{text}`"))?;
    let y = y.parse().map_err(|_| format!("bad y coordinate in `{text}`"))?;
    Ok(PackedPoint { x, y })
}

fn parse_polygon(text: &str) -> Result<Vec<PackedPoint>, String> {
    let points = text
        .split_whitespace()
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;

    if points.len() < 3 {
        return Err(format!("polygon `{}` has fewer than 3 points", text.trim()));
    }

    Ok(points)
}

/// Parse a single line of the catalog file into a keyed entry.
fn parse_line(line: &str) -> Result<(String, Entry), String> {
    let mut sections = line.split('|');
    let header = sections.next().unwrap_or("");
    let polygons = sections.map(parse_polygon).collect::<Result<Vec<_>, _>>()?;

    let mut fields = header.split_whitespace();
    let (Some(kind), Some(key), Some(attr), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(format!("malformed header `{}`", header.trim()));
    };

    let entry = match kind {
        "P" => Entry::Primary {
            child: parse_point(attr)?,
            polygons,
        },
        "D" => Entry::Decal {
            height: attr.parse().map_err(|_| format!("bad height `{attr}`"))?,
            polygons,
        },
        other => return Err(format!("unknown symbol kind `{other}`")),
    };

    Ok((key.to_owned(), entry))
}

/// Load every entry of the catalog file, sorted by key within each family.
fn load_file(file: &str) -> (Vec<(String, Entry)>, Vec<(String, Entry)>) {
    let mut primary = Vec::new();
    let mut decal = Vec::new();

    for (number, line) in file.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Ok((key, entry @ Entry::Primary { .. })) => primary.push((key, entry)),
            Ok((key, entry @ Entry::Decal { .. })) => decal.push((key, entry)),
            Err(message) => panic!("data/symbols.txt:{}: {message}", number + 1),
        }
    }

    primary.sort_by(|a, b| a.0.cmp(&b.0));
    decal.sort_by(|a, b| a.0.cmp(&b.0));

    for family in [&primary, &decal] {
        for pair in family.windows(2) {
            if pair[0].0 == pair[1].0 {
                panic!("data/symbols.txt: duplicate key `{}`", pair[0].0);
            }
        }
    }

    (primary, decal)
}

fn write_polygons(out: &mut String, polygons: &Outline) {
    out.push_str("        polygons: &[\n");
    for polygon in polygons {
        out.push_str("            &[");
        for p in polygon {
            out.push_str(&format!("PackedPoint {{ x: {}, y: {} }}, ", p.x, p.y));
        }
        out.push_str("],\n");
    }
    out.push_str("        ],\n");
}

fn write_entry(out: &mut String, entry: &Entry) {
    match entry {
        Entry::Primary { child, polygons } => {
            out.push_str("PackedPrimary {\n");
            out.push_str(&format!(
                "        child: PackedPoint {{ x: {}, y: {} }},\n",
                child.x, child.y
            ));
            write_polygons(out, polygons);
        }
        Entry::Decal { height, polygons } => {
            out.push_str("PackedDecal {\n");
            out.push_str(&format!("        height: {height},\n"));
            write_polygons(out, polygons);
        }
    }
    out.push_str("    }");
}

/// Generate the symbol table Rust code that will be included in the crate.
fn generate_rust(primary: &[(String, Entry)], decal: &[(String, Entry)]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static PRIMARY_SYMBOLS: [(&str, PackedPrimary); {}] = [\n",
        primary.len()
    ));
    for (key, entry) in primary {
        out.push_str(&format!("    ({key:?}, "));
        write_entry(&mut out, entry);
        out.push_str("),\n");
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "static DECAL_SYMBOLS: [(&str, PackedDecal); {}] = [\n",
        decal.len()
    ));
    for (key, entry) in decal {
        out.push_str(&format!("    ({key:?}, "));
        write_entry(&mut out, entry);
        out.push_str("),\n");
    }
    out.push_str("];\n\n");

    // The repeat marker gets its own static so lookups of it cannot fail.
    let Some((_, marker)) = decal.iter().find(|(key, _)| key == REPEAT_MARKER) else {
        panic!("data/symbols.txt: missing `{REPEAT_MARKER}` decal");
    };
    out.push_str("static REPEAT_MARKER_SYMBOL: PackedDecal = ");
    write_entry(&mut out, marker);
    out.push_str(";\n");

    out
}

fn main() {
    let data = fs::read_to_string("data/symbols.txt").unwrap();

    let (primary, decal) = load_file(&data);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("symbols.rs");

    fs::write(out_file, generate_rust(&primary, &decal)).unwrap();

    println!("cargo:rerun-if-changed=data/symbols.txt");
}
