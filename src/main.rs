// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `stanza-fields` command-line entry point.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use stanza_fields::{
    GenerateOptions, Generator, Report, StanzaKind,
    naming::{code_identifier, schema_identifier}
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stanza-fields", version)]
#[command(
    about = "Regenerate catch-all schema slots and field dispatch code for control-file stanzas",
    long_about = None
)]
struct Cli {
    /// Log debug events (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite the schema section and the dispatch file.
    Generate(Target),
    /// Fail if either generated file is out of date; write nothing.
    Check(Target),
    /// Print the catch-all fields of one stanza kind with their slot numbers.
    Fields {
        /// `source` or `binary`.
        kind: StanzaKind
    }
}

#[derive(Args, Debug)]
struct Target {
    /// TOML file with generation options.
    #[arg(long)]
    config:   Option<PathBuf>,
    /// Schema document to splice.
    #[arg(long)]
    schema:   Option<PathBuf>,
    /// Dispatch source file to overwrite.
    #[arg(long)]
    dispatch: Option<PathBuf>,
    /// Marker line in the schema document.
    #[arg(long)]
    marker:   Option<String>
}

impl Target {
    fn options(self) -> Result<GenerateOptions> {
        let mut options = match &self.config {
            Some(path) => GenerateOptions::load(path)?,
            None => GenerateOptions::default()
        };
        if let Some(schema) = self.schema {
            options.schema_path = schema;
        }
        if let Some(dispatch) = self.dispatch {
            options.dispatch_path = dispatch;
        }
        if let Some(marker) = self.marker {
            options.marker = marker;
        }
        debug!(?options, "resolved generation options");
        Ok(options)
    }
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate(target) => {
            let options = target.options()?;
            let report = Generator::new(options)
                .run()
                .context("generation failed")?;
            print_report(&report);
            Ok(())
        }
        Command::Check(target) => {
            let options = target.options()?;
            Generator::new(options).check().context("check failed")?;
            Ok(())
        }
        Command::Fields {
            kind
        } => print_fields(kind)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "stanza_fields=debug,stanza_fields_gen=debug"
    } else {
        "stanza_fields=info,stanza_fields_gen=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &Report) {
    for (kind, slots, arms) in &report.kinds {
        println!("{kind}: {slots} slots, {arms} dispatch arms");
    }
}

fn print_fields(kind: StanzaKind) -> Result<()> {
    let plan = Generator::new(GenerateOptions::default()).plan()?;
    let derived = plan
        .derived(kind)
        .with_context(|| format!("no catalog for {kind}"))?;

    for (index, field) in derived.fields().iter().enumerate() {
        println!(
            "@{index:<3} {field:<28} {:<28} {}",
            schema_identifier(field),
            code_identifier(field)
        );
    }
    if let Some(table) = plan.table(kind) {
        for arm in table.arms().filter(|a| a.kind == stanza_fields::ArmKind::Alias) {
            println!("     {:<28} -> {}", arm.key, arm.slot);
        }
    }
    Ok(())
}
