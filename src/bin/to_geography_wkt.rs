use geography_wkt::{PrecisionModel, WriterConfiguration, write_geometry};
use std::io::{BufRead, Write};
use std::str::FromStr;
use wkt::Wkt;

const USAGE: &str =
    "Usage: to_geography_wkt [--dim N] [--pretty] [--sql-server] [--digits N] < input.wkt";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("to_geography_wkt failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(std::env::args().skip(1))?;
    log::debug!("writer configuration: {config:?}");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut text = String::new();

    for (line_idx, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let geometry = Wkt::<f64>::from_str(line)
            .map_err(|err| format!("line {}: {err}", line_idx + 1))?;

        text.clear();
        write_geometry(&mut text, &geometry, &config)?;
        writeln!(out, "{text}")?;
    }
    out.flush()?;

    Ok(())
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<WriterConfiguration, Box<dyn std::error::Error>> {
    let mut builder = WriterConfiguration::builder();
    let mut sql_server = false;
    let mut precision_model = None;
    let mut dimension = None;
    let mut pretty_print = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dim" => dimension = Some(args.next().ok_or(USAGE)?.parse::<u8>()?),
            "--digits" => {
                let digits = args.next().ok_or(USAGE)?.parse::<u32>()?;
                precision_model = Some(PrecisionModel::fixed(digits));
            }
            "--pretty" => pretty_print = true,
            "--sql-server" => sql_server = true,
            "-h" | "--help" => return Err(USAGE.into()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}").into()),
        }
    }

    if sql_server {
        let preset = WriterConfiguration::sql_server();
        builder = builder
            .dimension(preset.dimension())
            .dialect(preset.dialect());
    }
    if let Some(dimension) = dimension {
        builder = builder.dimension(dimension);
    }
    if let Some(precision_model) = precision_model {
        builder = builder.precision_model(precision_model);
    }

    Ok(builder.pretty_print(pretty_print).build()?)
}
