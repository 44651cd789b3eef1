use anyhow::{Context, Result};
use demoviz::{regions::RegionResolver, table, viz};
use std::path::Path;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const INPUT_CSV: &str = "data/world-demographic.csv";
const OUT_DIR: &str = "data";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,demoviz=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    let start = Instant::now();

    // ─── 2) load + clean the source table ────────────────────────────
    let table = table::load(INPUT_CSV).with_context(|| format!("loading {}", INPUT_CSV))?;
    info!(records = table.len(), "table loaded");

    // ─── 3) build the location hierarchy once ────────────────────────
    let resolver = RegionResolver::build(&table);
    info!(countries = resolver.mapped_countries(), "region lookup built");

    // ─── 4) render every artifact ────────────────────────────────────
    viz::render_all(&table, &resolver, Path::new(OUT_DIR))?;

    info!(elapsed = ?start.elapsed(), "all done");
    Ok(())
}
