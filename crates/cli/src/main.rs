use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use earclip::prelude::*;
use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "earclip")]
#[command(about = "Ear-clipping triangulation of polygons with holes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a polygon JSON file and write ear records (+ provenance sidecar)
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Read an ear record file and print a JSON summary
    Read {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write a random star polygon as polygon JSON
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Add a regular hole around the origin
        #[arg(long)]
        hole: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate { input, out } => {
            let summary = triangulate_file(&input, &out)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Read { input } => read(&input),
        Action::Sample {
            seed,
            index,
            vertices,
            hole,
            out,
        } => sample(seed, index, vertices, hole, &out),
        Action::Report => report(),
    }
}

fn triangulate_file(input: &Path, out: &Path) -> Result<Value> {
    tracing::info!(input = %input.display(), out = %out.display(), "triangulate");
    let spec = input::load(input)?;
    let poly = spec.to_polygon();
    let tri = triangulate(&poly)
        .with_context(|| format!("triangulating {}", input.display()))?;

    create_parent(out)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_records(&tri, BufWriter::new(file))
        .with_context(|| format!("writing {}", out.display()))?;

    let summary = json!({
        "points": poly.point_count(),
        "holes": poly.hole_count(),
        "triangles": tri.triangle_count(),
        "vertices": tri.vertices().len(),
        "area": tri.area(),
    });
    tracing::info!(
        triangles = tri.triangle_count(),
        area = tri.area(),
        "triangulated"
    );
    let params = json!({
        "input": input.to_string_lossy(),
        "y_axis": spec.y_axis,
    });
    provenance::write_sidecar(out, provenance::Payload::new(params).with_summary(summary.clone()))?;
    Ok(summary)
}

fn summarize(tris: &[[Point; 3]], complete: bool) -> Value {
    let area: f64 = tris
        .iter()
        .map(|[a, b, c]| earclip::predicates::triangle_area(*a, *b, *c))
        .sum();
    json!({
        "triangles": tris.len(),
        "area": area,
        "complete": complete,
    })
}

fn read(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "read");
    let (summary, outcome) = read_summary(input)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    outcome.with_context(|| format!("reading ear records {}", input.display()))
}

/// Summary of whatever could be parsed, plus the parse outcome.
fn read_summary(input: &Path) -> Result<(Value, Result<(), RecordError>)> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    Ok(match read_records(BufReader::new(file)) {
        Ok(tris) => (summarize(&tris, true), Ok(())),
        Err(err) => {
            tracing::warn!(parsed = err.parsed().len(), error = %err, "partial ear records");
            (summarize(err.parsed(), false), Err(err))
        }
    })
}

fn sample(seed: u64, index: u64, vertices: usize, hole: bool, out: &Path) -> Result<()> {
    tracing::info!(seed, index, vertices, hole, out = %out.display(), "sample");
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..StarCfg::default()
    };
    let tok = ReplayToken { seed, index };
    let poly = if hole {
        draw_star_with_hole(cfg, tok)
    } else {
        draw_star(cfg, tok)
    };
    input::save(&input::PolygonSpec::from_polygon(&poly), out)
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "earclip_version": earclip::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
