use anyhow::Context;
use jigkit::{init_logging, LayoutEditor, LayoutSnapshot, PartCatalog, SketchPad, SolidKind};
use std::collections::BTreeMap;
use std::io::BufRead;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("layout") => {
            let path = args.get(1).context("usage: jigkit layout <file.json>")?;
            cmd_layout(path)
        }
        Some("sketch") => cmd_sketch(args.get(1).map(String::as_str)),
        _ => {
            eprintln!("jigkit {} ({})", jigkit::VERSION, jigkit::BUILD_DATE);
            eprintln!("usage:");
            eprintln!("  jigkit layout <file.json>   validate a layout export");
            eprintln!("  jigkit sketch [script]      run sketch commands from a file or stdin");
            std::process::exit(2);
        }
    }
}

/// Load a layout export, validate it against the standard catalog, and
/// print a per-kind summary.
fn cmd_layout(path: &str) -> anyhow::Result<()> {
    let snapshot = LayoutSnapshot::load_from_file(path)?;
    let mut editor = LayoutEditor::new(PartCatalog::standard());
    editor
        .apply_snapshot(&snapshot)
        .with_context(|| format!("invalid layout in {path}"))?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for part in editor.parts() {
        *counts.entry(part.kind.as_str()).or_default() += 1;
    }
    println!("{}: {} parts", path, editor.parts().len());
    for (kind, count) in counts {
        println!("  {kind:<14} x{count}");
    }
    Ok(())
}

/// Execute sketch commands line by line, reporting user errors inline
/// without aborting the session.
fn cmd_sketch(script: Option<&str>) -> anyhow::Result<()> {
    let input: Box<dyn BufRead> = match script {
        Some(path) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path).with_context(|| format!("cannot open {path}"))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let mut pad = SketchPad::new();
    for line in input.lines() {
        let line = line.context("failed to read command input")?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(err) = pad.execute(&line) {
            eprintln!("error: {err}");
        }
    }

    println!("{} shapes", pad.shapes().len());
    match pad.solid() {
        Some(solid) => {
            let mesh = solid.to_mesh(32);
            let kind = match solid.kind {
                SolidKind::Cylinder { radius } => format!("cylinder r={radius}"),
                SolidKind::Box { width, depth } => format!("box {width}x{depth}"),
            };
            println!(
                "solid: {kind} h={} at ({}, {}), {} triangles",
                solid.height,
                solid.x,
                solid.y,
                mesh.len()
            );
        }
        None => println!("no solid"),
    }
    Ok(())
}
