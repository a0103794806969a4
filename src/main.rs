use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use std::path::PathBuf;
use unity_scaffold::ManifestSource;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory to scaffold into (defaults to the current directory)"),
        )
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("TOML manifest to use instead of the built-in Unity layout"),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the tree that would be created without touching the filesystem")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let source = match matches.get_one::<PathBuf>("manifest") {
        Some(path) => ManifestSource::File(path.clone()),
        None => ManifestSource::Builtin,
    };

    let root = matches.get_one::<PathBuf>("root").map(PathBuf::as_path);

    unity_scaffold::scaffold_project(root, &source, matches.get_flag("dry-run"))?;

    Ok(())
}
