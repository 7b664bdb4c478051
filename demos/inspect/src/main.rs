//! inspect — print which agent group owns each vertex at a given timestep.
//!
//! ```text
//! inspect [--strict] [--sorted] <safe_zones_file> <num_vertices> [timestamp]
//! inspect                       # built-in 4-vertex sample
//! ```
//!
//! Set `RUST_LOG=warn` to see conflicting reservations, `RUST_LOG=info` for
//! the build summary.

use std::io::Cursor;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use sz_core::{Timestamp, VertexId};
use sz_zones::{GroupPalette, IndexConfig, LookupMode, SafeZoneIndex, Strictness};

// ── Built-in sample ───────────────────────────────────────────────────────────

// Two groups sharing a 4-vertex corridor.  Vertex 1 is double-booked for
// t in 6..=8, so the default run shows one conflict at t=7.
const SAMPLE_VERTICES: usize = 4;
const SAMPLE: &str = "\
Safe zone for agent group 0:
Temporal graph start
{[0,5]}{[0,8]}{[3,10]}{}
Temporal graph end
Safe zone for agent group 1:
Temporal graph start
{[6,20]}{[6,20]}{}{[0,20]}
Temporal graph end
";
const SAMPLE_TIMESTAMP: u64 = 7;

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    path:         Option<String>,
    num_vertices: usize,
    timestamp:    Timestamp,
    config:       IndexConfig,
}

fn parse_args() -> Result<Args> {
    let mut config = IndexConfig::default();
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => config.strictness = Strictness::Strict,
            "--sorted" => config.lookup = LookupMode::Sorted,
            flag if flag.starts_with("--") => bail!("unknown argument: {flag}"),
            _ => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [] => Ok(Args {
            path:         None,
            num_vertices: SAMPLE_VERTICES,
            timestamp:    Timestamp(SAMPLE_TIMESTAMP),
            config,
        }),
        [path, n, rest @ ..] if rest.len() <= 1 => {
            let num_vertices = n.parse().with_context(|| format!("invalid vertex count {n:?}"))?;
            let timestamp = match rest.first() {
                Some(t) => Timestamp(t.parse().with_context(|| format!("invalid timestamp {t:?}"))?),
                None => Timestamp::ZERO,
            };
            Ok(Args { path: Some(path.clone()), num_vertices, timestamp, config })
        }
        _ => bail!(
            "usage: inspect [--strict] [--sorted] <safe_zones_file> <num_vertices> [timestamp]"
        ),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = parse_args()?;

    let t0 = Instant::now();
    let index = match &args.path {
        Some(path) => SafeZoneIndex::build_with(path, args.num_vertices, &args.config)
            .with_context(|| format!("loading {path}"))?,
        None => SafeZoneIndex::from_reader(Cursor::new(SAMPLE), args.num_vertices, &args.config)?,
    };
    log::info!("index built in {:.3} ms", t0.elapsed().as_secs_f64() * 1e3);

    println!("=== inspect — {} ===", args.path.as_deref().unwrap_or("built-in sample"));
    println!(
        "Vertices: {}  |  Agent groups: {}  |  {}",
        index.num_vertices(),
        index.get_num_agent_groups(),
        args.timestamp,
    );

    let palette = GroupPalette::for_index(&index);
    for (id, zones) in index.groups() {
        let intervals: usize = zones.iter().map(|v| v.len()).sum();
        let color = palette.color(id).map(|c| c.to_string()).unwrap_or_default();
        println!("  group {id:<4} {color}  {intervals} intervals");
    }
    println!();

    println!("{:<10} {:<8} {:<10}", "Vertex", "Owner", "Conflicts");
    println!("{}", "-".repeat(30));
    for v in 0..index.num_vertices() {
        let lookup = index.lookup(VertexId::try_from(v)?, args.timestamp)?;
        let owner = lookup.owner.map(|g| g.to_string()).unwrap_or_else(|| "-".into());
        let conflicts: Vec<String> = lookup.conflicts.iter().map(|g| g.to_string()).collect();
        println!("{:<10} {:<8} {:<10}", v, owner, conflicts.join(","));
    }

    let owned = index.owners_at(args.timestamp).iter().filter(|o| o.is_some()).count();
    println!();
    println!("{owned} of {} vertices reserved at {}", index.num_vertices(), args.timestamp);

    Ok(())
}
