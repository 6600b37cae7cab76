use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the subcommands in src/main.rs
// Build scripts can't access src/ modules, so the definitions are repeated here
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mwfilter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert MediaWiki pages (as pandoc JSON) to Markdown")
        .arg_required_else_help(true)
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
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mwfilter", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mwfilter", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mwfilter", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
