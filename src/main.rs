use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use git_release::cli::orchestration::{run_release, ReleaseRequest};
use git_release::config;
use git_release::domain::BumpRequest;
use git_release::git::Git2Repository;
use git_release::matrix;
use git_release::ui;

#[derive(Parser)]
#[command(
    name = "git-release",
    about = "Derive the next semantic version, tag it, and push it"
)]
struct Cli {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the next version and optionally commit, tag, and push it
    Create(CreateArgs),

    /// Regenerate the docker build matrix in a goreleaser config file
    Matrix(MatrixArgs),
}

#[derive(Args)]
struct CreateArgs {
    #[arg(
        long,
        help = "Specific previous version to bump (defaults to latest version in repo)"
    )]
    from_version: Option<String>,

    #[arg(
        long,
        help = "Explicit new version (only useful for non-supported version bumps)"
    )]
    new_version: Option<String>,

    #[arg(long, help = "Major version bump")]
    major: bool,

    #[arg(long, help = "Minor version bump")]
    minor: bool,

    #[arg(long, help = "Patch version bump")]
    patch: bool,

    #[arg(long, help = "Prerelease version bump")]
    prerelease: bool,

    #[arg(long, help = "Build metadata bump")]
    build: bool,

    #[arg(long, help = "Commit the version file before tagging")]
    commit: bool,

    #[arg(long, help = "Commit message (defaults to 'release: bump version to <version>')")]
    commit_message: Option<String>,

    #[arg(long, help = "Create git tag")]
    tag: bool,

    #[arg(long, help = "git tag message (defaults to tag name)")]
    tag_message: Option<String>,

    #[arg(long, help = "Push git tag")]
    push: bool,

    #[arg(long, help = "git remote to push tag to")]
    push_remote: Option<String>,
}

#[derive(Args)]
struct MatrixArgs {
    #[arg(
        long,
        default_value = ".goreleaser.yaml",
        help = "Path to the goreleaser config file"
    )]
    file: String,
}

fn main() {
    if let Err(err) = run() {
        ui::display_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Create(args) => {
            let repo = Git2Repository::open(".")?;
            let request = ReleaseRequest {
                from_version: args.from_version,
                new_version: args.new_version,
                bump: BumpRequest {
                    major: args.major,
                    minor: args.minor,
                    patch: args.patch,
                    prerelease: args.prerelease,
                    build: args.build,
                },
                commit: args.commit,
                commit_message: args.commit_message,
                tag: args.tag,
                tag_message: args.tag_message,
                push: args.push,
                push_remote: args.push_remote,
            };

            run_release(&repo, &config.release, &request)?;
            Ok(())
        }
        Commands::Matrix(args) => {
            matrix::apply_to_file(&args.file, &config.matrix)?;
            ui::display_success(&format!("updated docker matrix in {}", args.file));
            Ok(())
        }
    }
}
