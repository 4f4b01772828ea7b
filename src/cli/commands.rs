//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate;
use colored::Colorize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ConvertArgs;
use xspfconv::config::Settings;
use xspfconv::sink::XSPF_MIME_TYPE;
use xspfconv::{ConvertOptions, DirectorySink, FileSink, PlaylistEntry, XspfConverter};

/// Kind of input a conversion command reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Urls,
    Json,
    Aria2,
}

/// Handle the `urls`, `json` and `aria2` commands
pub fn convert(format: InputFormat, args: ConvertArgs) -> Result<()> {
    let settings = Settings::load()?;
    let input = read_input(args.input.as_deref())?;
    run_conversion(format, &args, &settings, &input, &mut io::stdout())
}

/// Convert `input` and either write it to `out` (`--stdout`) or save it
/// in the resolved output directory
fn run_conversion(
    format: InputFormat,
    args: &ConvertArgs,
    settings: &Settings,
    input: &str,
    out: &mut impl Write,
) -> Result<()> {
    let output_dir = settings.resolve_output_dir(args.output_dir.as_deref());
    let mut converter = XspfConverter::new(DirectorySink::new(output_dir));
    converter.set_title(&settings.resolve_title(args.title.as_deref()));

    // The sink is driven here so write failures reach the exit status
    let options = ConvertOptions {
        emit_to_sink: false,
        line_separator: unescape_separator(&args.separator),
    };
    debug!("Converting {:?} input with {:?}", format, options);

    let xml = match format {
        InputFormat::Urls => converter.text_to_xspf(input, &options),
        InputFormat::Json => {
            let entries: Vec<PlaylistEntry> =
                serde_json::from_str(input).context("Input is not a JSON array of entries")?;
            converter.entries_to_xspf(&entries, &options)
        }
        InputFormat::Aria2 => {
            let xml = converter.input_list_to_xspf(input, &options);
            if xml.is_empty() {
                eprintln!("{}", "No URLs found in input list, nothing to convert.".yellow());
                return Ok(());
            }
            xml
        }
    };

    if args.stdout {
        out.write_all(xml.as_bytes())
            .context("Failed to write playlist to stdout")?;
        return Ok(());
    }

    let filename = converter.filename();
    converter
        .sink()
        .offer(&xml, &filename, XSPF_MIME_TYPE)
        .context("Failed to save playlist")?;
    let path = converter.sink().path_for(&filename);

    println!(
        "{} {} ({} track(s))",
        "Wrote".green().bold(),
        path.display(),
        xml.matches("<track>").count()
    );

    Ok(())
}

/// Handle the `config` command
pub fn config(title: Option<String>, output_dir: Option<PathBuf>, reset: bool) -> Result<()> {
    let mut settings = if reset {
        Settings::default()
    } else {
        Settings::load()?
    };

    let changed = reset || title.is_some() || output_dir.is_some();
    if let Some(title) = title {
        settings.default_title = Some(title);
    }
    if let Some(dir) = output_dir {
        settings.output_dir = Some(dir);
    }

    if changed {
        settings.save()?;
        println!("{}", "Settings saved.".green());
    }

    println!("  Settings file: {}", Settings::settings_path()?.display());
    println!(
        "  Default title: {}",
        settings.default_title.as_deref().unwrap_or("(none)")
    );
    println!(
        "  Output directory: {}",
        settings
            .output_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(current directory)".to_string())
    );

    Ok(())
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "xspfconv", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}

/// Read the whole input from a file, or stdin for `None` and `-`
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {:?}", path)),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Turn the escape sequences accepted by `--separator` into real characters
fn unescape_separator(raw: &str) -> String {
    raw.replace("\\r", "\r")
        .replace("\\n", "\n")
        .replace("\\t", "\t")
}
