use std::fs;
use std::path::{Path, PathBuf};

use timeseries_panel::api::{
    PanelOptions, frames_from_json_compat_str, frames_to_json_pretty, prepare_series_report,
};
use timeseries_panel::core::{has_time_field, reverse_frames};

const USAGE: &str = "usage: panel_series_tool <prepare|reverse|inspect> --frames <path> [--options <path>] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Prepare,
    Reverse,
    Inspect,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    frames: PathBuf,
    options: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = timeseries_panel::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let frames = frames_from_json_compat_str(&read_file(&args.frames)?)
        .map_err(|err| format!("invalid frames: {err}"))?;

    match args.command {
        CommandKind::Prepare => {
            let options = match &args.options {
                Some(path) => PanelOptions::from_json_str(&read_file(path)?)
                    .map_err(|err| format!("invalid options: {err}"))?,
                None => PanelOptions::default(),
            };
            let report = prepare_series_report(&frames, &options);
            eprintln!(
                "direction={:?} inverted={}",
                report.direction, report.inverted
            );
            emit(args.output.as_deref(), &report.frames)
        }
        CommandKind::Reverse => emit(args.output.as_deref(), &reverse_frames(&frames)),
        CommandKind::Inspect => {
            for (index, frame) in frames.iter().enumerate() {
                println!(
                    "{index}\t{}\tfields={}\tlength={}\ttime_field={}",
                    frame.name.as_deref().unwrap_or("-"),
                    frame.field_count(),
                    frame.length,
                    has_time_field(frame)
                );
            }
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn emit(output: Option<&Path>, frames: &[timeseries_panel::DataFrame]) -> Result<(), String> {
    let payload = frames_to_json_pretty(frames).map_err(|err| err.to_string())?;
    match output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let command = match args.next().as_deref() {
        Some("prepare") => CommandKind::Prepare,
        Some("reverse") => CommandKind::Reverse,
        Some("inspect") => CommandKind::Inspect,
        _ => return Err(USAGE.to_owned()),
    };

    let mut frames = None::<PathBuf>;
    let mut options = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--frames" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --frames".to_owned())?;
                frames = Some(PathBuf::from(value));
            }
            "--options" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --options".to_owned())?;
                options = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let frames = frames.ok_or_else(|| "missing --frames".to_owned())?;
    Ok(CliArgs {
        command,
        frames,
        options,
        output,
    })
}
