// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Project automation for the entitlement workspace.
//!
//! - `cargo xtask ci` runs lint, dependency checks, build and tests
//! - `cargo xtask test --package entitlement` runs one crate's tests
//! - `cargo xtask fix` applies clippy and rustfmt fixes

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run everything CI runs
    CI,

    /// Run cargo check on all targets
    #[command(visible_alias = "c")]
    Check,

    /// Check dependency licenses and advisories, and look for unused dependencies
    #[command(visible_alias = "d")]
    Deps,

    /// Run clippy, rustfmt and rustdoc in check mode
    #[command(visible_alias = "l")]
    Lint,

    /// Apply clippy and rustfmt fixes
    #[command(visible_alias = "f")]
    Fix,

    /// Run unit and doc tests
    #[command(visible_alias = "t")]
    Test {
        /// Only test this workspace package
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Write an lcov coverage report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Check => check(),
            Self::Deps => deps(),
            Self::Lint => lint(),
            Self::Fix => fix(),
            Self::Test { package } => test(package.as_deref()),
            Self::Coverage => coverage(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    deps()?;
    check()?;
    test(None)
}

fn check() -> Result<()> {
    run_cargo(&["check", "--workspace", "--all-targets", "--all-features"])
}

fn deps() -> Result<()> {
    run_cargo(&["deny", "check"])?;
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

fn lint() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])?;
    run_cargo_nightly(&["fmt", "--all", "--check"])?;
    lint_docs()
}

/// Build docs for every library crate with docs.rs-equivalent flags.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd!(
            "cargo",
            "doc",
            "--no-deps",
            "--all-features",
            "--package",
            package.name.as_str()
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()
        .wrap_err_with(|| format!("docs failed for {}", package.name))?;
    }

    Ok(())
}

fn fix() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
    ])?;
    run_cargo_nightly(&["fmt", "--all"])
}

fn test(package: Option<&str>) -> Result<()> {
    let scope: Vec<&str> = package.map_or_else(|| vec!["--workspace"], |p| vec!["--package", p]);

    let mut libs: Vec<&str> = vec!["test", "--all-targets", "--all-features"];
    libs.extend(&scope);
    run_cargo(&libs)?;

    // Doc tests last; they are the slowest.
    let mut docs: Vec<&str> = vec!["test", "--doc", "--all-features"];
    docs.extend(&scope);
    run_cargo(&docs)
}

fn coverage() -> Result<()> {
    run_cargo(&[
        "llvm-cov",
        "--workspace",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // Set by cargo for subcommands; it would pin the stable toolchain.
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a command before running it, and again if it fails.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The original line has likely scrolled away by now.
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
