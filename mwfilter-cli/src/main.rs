// Command-line interface for mwfilter
//
// mwfilter converts MediaWiki pages, already parsed by pandoc into its JSON
// AST, into Markdown files. The conversion itself lives in mwfilter-babel; this
// binary reads files, loads configuration, sets up logging and writes output.
//
// Usage:
//  mwfilter <input>... [-o <file> | --output-dir <dir>]          - Convert (default)
//  mwfilter convert <input>... [--meta <file>] [--skip-errors]   - Same as above (explicit)
//  mwfilter redirect <file>                                      - Print a redirect target
//  mwfilter settings <file>                                      - Print export settings as JSON
//
// Extra Parameters:
//
// Renderer settings can be overridden with --extra-<name> [value]:
//  no-abspath, no-extension, no-yaml-frontmatter, skip-attachments, skip-errors
// Example:
//  mwfilter page.json --extra-no-extension

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mwfilter_babel::wiki::parse_redirect_pagename;
use mwfilter_babel::{convert, parse_document, PageMeta, RenderOptions, Settings};
use mwfilter_config::{Loader, MwfilterConfig};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "redirect", "settings", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| is_bool_literal(next));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Every supported override is a boolean, so only boolean words are taken as
/// values; anything else (an input path) stays a positional argument.
fn is_bool_literal(raw: &str) -> bool {
    matches!(
        raw.to_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "false" | "0" | "no" | "n"
    )
}

fn build_cli() -> Command {
    Command::new("mwfilter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert MediaWiki pages (as pandoc JSON) to Markdown")
        .long_about(
            "mwfilter turns pandoc's JSON rendering of MediaWiki pages into Markdown\n\
            with HTML fallbacks for tables, definition lists and figures.\n\n\
            Commands:\n  \
            - convert:  Convert pandoc JSON documents to Markdown (default)\n  \
            - redirect: Print the target page of a redirect page\n  \
            - settings: Print the export settings read from a settings page\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override renderer settings.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mwfilter page.json                            # Convert to stdout\n  \
            mwfilter page.json --meta page.meta.json      # Merge the page record\n  \
            mwfilter a.json b.json --output-dir out       # One .md file per input\n  \
            mwfilter page.json --extra-no-extension       # Links without .md"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mwfilter.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert pandoc JSON documents to Markdown (default command)")
                .long_about(
                    "Convert pandoc JSON documents to Markdown.\n\n\
                    A single input is written to stdout, or to the file given with -o.\n\
                    Several inputs need --output-dir and each is written to <stem>.md.\n\
                    With --meta the page record supplies the title, date and aliases\n\
                    of the front matter, and the output file name under --output-dir.\n\n\
                    Examples:\n  \
                    mwfilter convert page.json -o page.md\n  \
                    mwfilter convert *.json --output-dir out --skip-errors"
                )
                .arg(
                    Arg::new("input")
                        .help("Input pandoc JSON files")
                        .required(true)
                        .num_args(1..)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("meta")
                        .long("meta")
                        .value_name("FILE")
                        .help("Page record JSON to merge into the front matter")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .conflicts_with("output-dir")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .help("Directory to write one .md file per input")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("skip-errors")
                        .long("skip-errors")
                        .help("Log and skip documents that fail to convert")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("redirect")
                .about("Print the target page of a redirect page")
                .arg(
                    Arg::new("file")
                        .help("Wiki text file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Print the export settings read from a settings page as JSON")
                .arg(
                    Arg::new("file")
                        .help("Pandoc JSON of the settings page")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading path means the user left out the "convert" subcommand
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(&config.logging.filter);
    for key in extra_params.keys() {
        tracing::warn!(key = key.as_str(), "ignoring unknown --extra-{key} parameter");
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("redirect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("file")
                .expect("file is required");
            handle_redirect_command(path);
        }
        Some(("settings", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("file")
                .expect("file is required");
            handle_settings_command(path);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the configured filter.
fn init_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &MwfilterConfig) {
    let inputs: Vec<&String> = matches
        .get_many::<String>("input")
        .expect("input is required")
        .collect();
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    let output_dir = matches.get_one::<String>("output-dir").map(Path::new);
    let skip_errors = config.convert.skip_errors || matches.get_flag("skip-errors");
    let options = RenderOptions::from(&config.render);

    if inputs.len() > 1 && output_dir.is_none() {
        eprintln!("Error: converting several inputs requires --output-dir");
        std::process::exit(1);
    }

    let page = matches.get_one::<String>("meta").map(|path| {
        if inputs.len() > 1 {
            eprintln!("Error: --meta can only be used with a single input");
            std::process::exit(1);
        }
        load_page_meta(path)
    });

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir).unwrap_or_else(|e| {
            eprintln!("Error creating directory '{}': {e}", dir.display());
            std::process::exit(1);
        });
    }

    let mut failed = 0usize;
    for input in &inputs {
        let text = match convert_file(input, page.as_ref(), &options) {
            Ok(text) => text,
            Err(message) if skip_errors => {
                tracing::warn!(input = input.as_str(), "skipping document: {message}");
                failed += 1;
                continue;
            }
            Err(message) => {
                eprintln!("{message}");
                std::process::exit(1);
            }
        };

        let destination = match (output, output_dir) {
            (Some(path), _) => Some(PathBuf::from(path)),
            (None, Some(dir)) => Some(dir.join(output_file_name(input, page.as_ref()))),
            (None, None) => None,
        };
        match destination {
            Some(path) => {
                fs::write(&path, text).unwrap_or_else(|e| {
                    eprintln!("Error writing file '{}': {e}", path.display());
                    std::process::exit(1);
                });
                tracing::debug!(input = input.as_str(), output = %path.display(), "converted");
            }
            None => print!("{text}"),
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = inputs.len(), "some documents were skipped");
    }
}

fn convert_file(
    input: &str,
    page: Option<&PageMeta>,
    options: &RenderOptions,
) -> Result<String, String> {
    let source =
        fs::read_to_string(input).map_err(|e| format!("Error reading file '{input}': {e}"))?;
    convert(&source, page, options).map_err(|e| format!("Conversion error in '{input}': {e}"))
}

fn load_page_meta(path: &str) -> PageMeta {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Invalid page record '{path}': {e}");
        std::process::exit(1);
    })
}

/// `<filename>.md` from the page record, otherwise `<input stem>.md`.
fn output_file_name(input: &str, page: Option<&PageMeta>) -> String {
    let stem = match page {
        Some(page) => page.output_filename(),
        None => Path::new(input)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string()),
    };
    format!("{stem}.md")
}

/// Handle the redirect command
fn handle_redirect_command(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    match parse_redirect_pagename(&source) {
        Ok(target) => println!("{target}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the settings command
fn handle_settings_command(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let doc = parse_document(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    let settings = Settings::from_document(&doc);
    if let Err(e) = settings.compile() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let json = serde_json::to_string_pretty(&settings).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

fn load_cli_config(explicit_path: Option<&str>) -> MwfilterConfig {
    let loader = Loader::new().with_optional_file("mwfilter.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MwfilterConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["no-abspath", "no_abspath"]) {
        config.render.no_abspath = parse_bool_arg("no-abspath", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["no-extension", "no_extension"]) {
        config.render.no_extension = parse_bool_arg("no-extension", &raw);
    }
    if let Some(raw) = take_override(
        extra_params,
        &["no-yaml-frontmatter", "no_yaml_frontmatter"],
    ) {
        config.render.no_yaml_frontmatter = parse_bool_arg("no-yaml-frontmatter", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["skip-attachments", "skip_attachments"]) {
        config.render.skip_attachments = parse_bool_arg("skip-attachments", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["skip-errors", "skip_errors"]) {
        config.convert.skip_errors = parse_bool_arg("skip-errors", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
