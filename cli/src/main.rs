use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use cheatsheet_core::{CopyKey, validate_catalog, validate_cheatsheet};
use cheatsheet_db::{CatalogIndex, CatalogStore, ViewerConfig, load_cheatsheet_file};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod render;
mod viewer;

use error::ViewerError;
use render::{OutputFormat, format_list, format_tags};
use viewer::Viewer;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "cheatsheet", version)]
#[command(about = "Browse developer-tool cheatsheets from the terminal")]
struct Cli {
    /// Directory of cheatsheet JSON/YAML files (overrides the config file).
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,
    /// Catalog bundle JSON file (overrides the config file).
    #[arg(long, global = true)]
    bundle: Option<PathBuf>,
    /// Viewer configuration YAML file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one cheatsheet.
    Show(ShowArgs),
    /// List every cheatsheet in catalog order.
    List(FormatArgs),
    /// List cheatsheets carrying a tag.
    Tag(TagArgs),
    /// Search names, descriptions and tags (case-insensitive).
    Search(SearchArgs),
    /// List every tag with its cheatsheet count.
    Tags(FormatArgs),
    /// Print one snippet to stdout, ready to pipe into a clipboard tool.
    Copy(CopyArgs),
    /// Validate authored cheatsheet files.
    Validate(ValidateArgs),
    /// Export the active catalog as a bundle file.
    Bundle(BundleArgs),
}

#[derive(Debug, Args)]
struct FormatArgs {
    /// Output format (default from config, else table).
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Exact cheatsheet name (e.g. "Git", "Node.js/npm").
    name: String,
    #[command(flatten)]
    output: FormatArgs,
}

#[derive(Debug, Args)]
struct TagArgs {
    /// Exact tag.
    tag: String,
    #[command(flatten)]
    output: FormatArgs,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Free-text query; empty lists everything.
    #[arg(default_value = "")]
    query: String,
    #[command(flatten)]
    output: FormatArgs,
}

#[derive(Debug, Args)]
struct CopyArgs {
    /// Exact cheatsheet name.
    name: String,
    /// SECTION.ITEM for a code block, SECTION.ITEM.EXAMPLE for an example.
    key: String,
    /// Also render the cheatsheet with the copied marker to stderr.
    #[arg(long)]
    preview: bool,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Cheatsheet files and/or directories containing them.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct BundleArgs {
    /// Output JSON bundle path.
    #[arg(long)]
    output: PathBuf,
    /// Bundle version metadata.
    #[arg(long, default_value = PACKAGE_VERSION)]
    version: String,
    /// Optional bundle name metadata.
    #[arg(long)]
    name: Option<String>,
    /// Optional bundle description metadata.
    #[arg(long)]
    description: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for piped snippets.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ViewerError> {
    let config = load_config(&cli);
    match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Show(args) => with_catalog(config?, |ctx| {
            let viewer = Viewer::open(&ctx.index, &args.name, ctx.config.copy_feedback())?;
            print!("{}", viewer.render(ctx.format(&args.output), Instant::now())?);
            Ok(())
        }),
        Command::List(args) => with_catalog(config?, |ctx| {
            let all: Vec<_> = ctx.index.store().all().iter().collect();
            print!("{}", format_list(&all, ctx.format(&args))?);
            Ok(())
        }),
        Command::Tag(args) => with_catalog(config?, |ctx| {
            let hits = ctx.index.get_by_tag(&args.tag);
            if hits.is_empty() {
                eprintln!("No cheatsheet tagged '{}'.", args.tag);
            }
            print!("{}", format_list(&hits, ctx.format(&args.output))?);
            Ok(())
        }),
        Command::Search(args) => with_catalog(config?, |ctx| {
            let hits = ctx.index.search(&args.query);
            if hits.is_empty() {
                eprintln!("No cheatsheet matches '{}'.", args.query);
            }
            print!("{}", format_list(&hits, ctx.format(&args.output))?);
            Ok(())
        }),
        Command::Tags(args) => with_catalog(config?, |ctx| {
            print!("{}", format_tags(&ctx.index.tag_counts(), ctx.format(&args))?);
            Ok(())
        }),
        Command::Copy(args) => with_catalog(config?, |ctx| run_copy(ctx, args)),
        Command::Bundle(args) => with_catalog(config?, |ctx| run_bundle(ctx.index.store(), args)),
    }
}

/// Loaded catalog plus the settings every browsing command needs.
struct Context<'a> {
    index: CatalogIndex<'a>,
    config: &'a ViewerConfig,
}

impl Context<'_> {
    fn format(&self, args: &FormatArgs) -> OutputFormat {
        args.format
            .unwrap_or_else(|| OutputFormat::from(self.config.default_format))
    }
}

fn with_catalog<F>(config: ViewerConfig, f: F) -> Result<(), ViewerError>
where
    F: FnOnce(&Context<'_>) -> Result<(), ViewerError>,
{
    let store = config.catalog_builder().build()?;
    debug!(source = ?store.source(), count = store.len(), "Catalog ready");
    let ctx = Context {
        index: CatalogIndex::new(&store),
        config: &config,
    };
    f(&ctx)
}

fn load_config(cli: &Cli) -> Result<ViewerConfig, ViewerError> {
    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(dir) = &cli.catalog_dir {
        config.catalog_dir = Some(dir.clone());
    }
    if let Some(bundle) = &cli.bundle {
        config.bundle = Some(bundle.clone());
    }
    Ok(config)
}

fn run_copy(ctx: &Context<'_>, args: CopyArgs) -> Result<(), ViewerError> {
    let key: CopyKey = args.key.parse()?;
    let mut viewer = Viewer::open(&ctx.index, &args.name, ctx.config.copy_feedback())?;

    let now = Instant::now();
    let snippet = viewer.copy(key, now)?;
    println!("{snippet}");

    if args.preview {
        eprint!("{}", viewer.render(OutputFormat::Table, now)?);
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), ViewerError> {
    let paths = collect_catalog_paths(&args.inputs)?;
    let mut sheets = Vec::with_capacity(paths.len());
    let mut failures = 0usize;

    for path in &paths {
        match load_cheatsheet_file(path) {
            Ok(sheet) => {
                let errors = validate_cheatsheet(&sheet);
                if errors.is_empty() {
                    sheets.push(sheet);
                } else {
                    failures += 1;
                    for err in errors {
                        eprintln!("{}: {err}", path.display());
                    }
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", path.display());
            }
        }
    }

    for err in validate_catalog(&sheets) {
        failures += 1;
        eprintln!("{err}");
    }

    if failures > 0 {
        return Err(ViewerError::Invalid(failures));
    }

    println!("Validated {} cheatsheet file(s).", paths.len());
    Ok(())
}

fn run_bundle(store: &CatalogStore, args: BundleArgs) -> Result<(), ViewerError> {
    let mut package = store.to_package(&args.version)?;
    package.name = args.name;
    package.description = args.description;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&args.output, serde_json::to_string_pretty(&package)?)?;
    println!(
        "Bundled {} cheatsheet(s) into '{}'.",
        package.cheatsheet_count(),
        args.output.display()
    );
    Ok(())
}

/// Expands directories into their cheatsheet files, sorted by name.
fn collect_catalog_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, ViewerError> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(input)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_catalog_extension(p))
                .collect();
            if found.is_empty() {
                warn!(dir = %input.display(), "No cheatsheet files in directory");
            }
            found.sort();
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

fn has_catalog_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

#[cfg(test)]
mod tests {
    use super::{collect_catalog_paths, has_catalog_extension};
    use std::path::{Path, PathBuf};

    #[test]
    fn test_has_catalog_extension() {
        assert!(has_catalog_extension(Path::new("git.json")));
        assert!(has_catalog_extension(Path::new("git.yml")));
        assert!(!has_catalog_extension(Path::new("git.toml")));
        assert!(!has_catalog_extension(Path::new("README")));
    }

    #[test]
    fn test_collect_catalog_paths_expands_dirs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.yaml"), "").unwrap();
        std::fs::write(dir.path().join("a.json"), "").unwrap();
        std::fs::write(dir.path().join("notes.md"), "").unwrap();
        let single = PathBuf::from("/tmp/explicit.toml");

        let paths = collect_catalog_paths(&[dir.path().to_path_buf(), single.clone()]).unwrap();
        assert_eq!(
            paths,
            vec![dir.path().join("a.json"), dir.path().join("b.yaml"), single]
        );
    }
}
