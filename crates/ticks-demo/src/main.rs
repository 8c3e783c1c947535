// File: crates/ticks-demo/src/main.rs
// Summary: Demo prints labeled axis ticks for a range given on the command line or for each row of a CSV.

use anyhow::{Context, Result};
use plot_ticks::{format_ticks, Axis, FixedFormat, ScaleKind, Tick, TickFormat, UtcTimeFormat, DEFAULT_TICK_COUNT};
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: ticks-demo <start> <stop> [count] [--log] [--time] [--no-compact]\n       ticks-demo --csv <file> [--log] [--time] [--no-compact]";

struct Args {
    source: Source,
    kind: ScaleKind,
    time: bool,
    compact: bool,
}

enum Source {
    Range { start: f64, stop: f64, count: usize },
    Csv(String),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args(std::env::args().skip(1))?;
    match &args.source {
        Source::Range { start, stop, count } => {
            let axis = Axis::new("Value", *start, *stop).with_kind(args.kind);
            print_axis(&axis, *count, &args)?;
        }
        Source::Csv(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            println!("Using input file: {}", path.display());
            if used_alt {
                println!("  (extension swapped between .csv/.cvs)");
            }
            let rows = load_ranges_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if rows.is_empty() {
                anyhow::bail!("no ranges loaded, check headers/delimiter.");
            }
            for (i, (start, stop, count)) in rows.into_iter().enumerate() {
                let axis = Axis::new(format!("row {}", i + 1), start, stop).with_kind(args.kind);
                if let Err(err) = print_axis(&axis, count, &args) {
                    log::warn!("skipping {}: {err:#}", axis.label);
                }
            }
        }
    }
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut csv = None;
    let mut kind = ScaleKind::Linear;
    let mut time = false;
    let mut compact = true;

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--log" => kind = ScaleKind::Log10,
            "--time" => time = true,
            "--no-compact" => compact = false,
            "--csv" => csv = Some(it.next().context("--csv needs a file path")?),
            "-h" | "--help" => anyhow::bail!("{USAGE}"),
            _ => positional.push(arg),
        }
    }

    let source = if let Some(path) = csv {
        Source::Csv(path)
    } else {
        let num = |i: usize, name: &str| -> Result<f64> {
            let raw = positional.get(i).with_context(|| format!("missing <{name}>\n{USAGE}"))?;
            raw.parse::<f64>().with_context(|| format!("<{name}> is not a number: {raw}"))
        };
        let count = match positional.get(2) {
            Some(raw) => raw.parse::<usize>().with_context(|| format!("[count] is not a whole number: {raw}"))?,
            None => DEFAULT_TICK_COUNT,
        };
        Source::Range { start: num(0, "start")?, stop: num(1, "stop")?, count }
    };
    Ok(Args { source, kind, time, compact })
}

fn print_axis(axis: &Axis, count: usize, args: &Args) -> Result<()> {
    let ticks = label_axis(axis, count, args)?;
    println!("{} [{}, {}] {:?} count={} -> {} ticks", axis.label, axis.min, axis.max, axis.kind, count, ticks.len());
    for Tick { value, text, full_text } in &ticks {
        if text == full_text {
            println!("  {:>14}  {}", value, text);
        } else {
            println!("  {:>14}  {:<16} ({})", value, text, full_text);
        }
    }
    Ok(())
}

/// Generate the axis ticks once and label them with a formatter picked from them.
fn label_axis(axis: &Axis, count: usize, args: &Args) -> Result<Vec<Tick>> {
    let values = axis
        .ticks(count)
        .with_context(|| format!("{}: no ticks for [{}, {}] x{}", axis.label, axis.min, axis.max, count))?;

    let fixed;
    let fmt: &dyn TickFormat = if args.time {
        &UtcTimeFormat
    } else {
        // enough digits for the step between the first two ticks
        let step = match values.as_slice() {
            [a, b, ..] => b - a,
            _ => 1.0,
        };
        fixed = FixedFormat::for_step(step);
        &fixed
    };

    Ok(if args.compact {
        format_ticks(&values, fmt)
    } else {
        values.iter().map(|&v| Tick::new(v, fmt.format(v))).collect()
    })
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Load `start,stop[,count]` rows; `min`/`max` work as header aliases.
fn load_ranges_csv(path: &Path) -> Result<Vec<(f64, f64, usize)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_start = idx(&["start", "min", "from"]).context("missing start/min column")?;
    let i_stop = idx(&["stop", "max", "to", "end"]).context("missing stop/max column")?;
    let i_count = idx(&["count", "ticks", "n"]);

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let count = i_count
            .and_then(|i| rec.get(i))
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_TICK_COUNT);
        match (num(i_start), num(i_stop)) {
            (Some(start), Some(stop)) => out.push((start, stop, count)),
            _ => log::warn!("skipping row {}: start/stop are not numbers", line + 2),
        }
    }
    Ok(out)
}
