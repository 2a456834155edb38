use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use optikube::{patch, PatchPaths, SUCCESS_MESSAGE};

/// Stores /etc/kubernetes/admin.conf as the `Conf` annotation of a cluster
/// document and writes it to /home/vagrant/my-cluster.json.
///
/// Takes no flags: every argument is a path, and anything after the first is ignored.
#[derive(Parser, Debug)]
#[clap(
    disable_help_flag = true,
    disable_version_flag = true,
    allow_hyphen_values = true
)]
struct Cli {
    #[clap(value_name = "CLUSTER_JSON", parse(from_os_str), allow_hyphen_values = true)]
    cluster_json: PathBuf,
    #[clap(hide = true, parse(from_os_str), allow_hyphen_values = true)]
    _ignored: Vec<OsString>,
}

fn run(cli: &Cli, paths: &PatchPaths, mut out: impl Write) -> anyhow::Result<()> {
    patch(&cli.cluster_json, paths)
        .with_context(|| format!("Patching {}", cli.cluster_json.display()))?;

    writeln!(out, "{SUCCESS_MESSAGE}")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    optikube::tracing::init();

    let cli = Cli::parse();

    run(&cli, &PatchPaths::default(), io::stdout().lock())
}
