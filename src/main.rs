use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vsbt::archive;
use vsbt::source::release_history::ReleaseHistorySource;
use vsbt::version::component::buildtools_component_id;
use vsbt::version::resolver::VersionResolver;

#[derive(Parser)]
#[command(name = "vsbt")]
#[command(
    version,
    about = "Grab the Visual Studio Build Tools bootstrapper and the installer components, for a given version"
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// The Visual Studio version, {16|17|18}.minor[.patch]
    vs_version: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape every release-history page and write the bootstrapper archive
    Archive {
        /// Output path for the generated table
        #[arg(long, default_value = vsbt::config::DEFAULT_ARCHIVE_PATH)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match (cli.vs_version, cli.command) {
        (Some(raw), _) => Ok(runtime.block_on(resolve(&raw))),
        (None, Some(Command::Archive { out })) => {
            runtime.block_on(generate_archive(&out))?;
            Ok(ExitCode::SUCCESS)
        }
        (None, None) => {
            Cli::command().print_help()?;
            Ok(ExitCode::from(2))
        }
    }
}

/// Resolves one version request and prints the three outputs: the resolved
/// version, the bootstrapper URL, and the component ID
async fn resolve(raw: &str) -> ExitCode {
    let source = ReleaseHistorySource::default();
    let resolver = VersionResolver::new(&source);

    match resolver.resolve(raw).await {
        Ok(version) => {
            println!("{version}");
            println!("{}", version.bootstrapper);
            println!("{}", buildtools_component_id(&version));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn generate_archive(out: &Path) -> anyhow::Result<()> {
    let source = ReleaseHistorySource::default();
    let table = archive::collect_all(&source).await?;

    let contents = archive::render(&table, chrono::Utc::now());
    archive::write_archive(out, &contents)?;

    println!("wrote {} bootstrappers to {}", table.len(), out.display());
    Ok(())
}
