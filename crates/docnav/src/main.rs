//! `docnav` command line
//!
//! Resolves sidebar specifications against a docs directory so a site build
//! can fail early on broken navigation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use walkdir::WalkDir;

use docnav::{
    DuplicateScope, JsonSource, KnownDocs, NavTree, Preset, ResolveContext, Resolver,
    SidebarSpec, SiteConfig, SpecSource,
};

#[derive(Parser, Debug)]
#[command(name = "docnav")]
#[command(version, about = "Validate and render documentation sidebars")]
struct Cli {
    /// Log resolution progress (repeat for per-node tracing)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve sidebars and report every problem
    Check(Input),

    /// Resolve sidebars and print the navigation tree
    Show {
        #[command(flatten)]
        input: Input,

        /// Print JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Sidebar specification (JSON)
    #[arg(long, short = 's', conflicts_with = "preset")]
    sidebars: Option<PathBuf>,

    /// Use a built-in preset's sidebars and validate its navbar
    #[arg(long, short = 'p')]
    preset: Option<Preset>,

    /// Docs directory to discover documents from
    #[arg(long, short = 'd')]
    docs: Option<PathBuf>,

    /// Where a document may appear only once
    #[arg(long, default_value_t = DuplicateScope::Sidebar)]
    scope: DuplicateScope,

    /// Refuse categories nested deeper than this (unlimited by default)
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "docnav=debug",
        _ => "docnav=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let trace = cli.verbose > 1;
    match cli.command {
        Command::Check(input) => {
            let tree = resolve_input(&input, trace)?;
            let documents: usize = tree.iter().map(|(_, s)| s.documents().len()).sum();
            println!(
                "ok: {} sidebar(s), {} document reference(s)",
                tree.len(),
                documents
            );
        }
        Command::Show { input, json } => {
            let tree = resolve_input(&input, trace)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                print!("{}", tree);
            }
        }
    }
    Ok(())
}

fn resolve_input(input: &Input, trace: bool) -> anyhow::Result<NavTree> {
    let (spec, site) = load_spec(input)?;
    let known = load_known(input)?;
    info!(sidebars = spec.len(), documents = known.len(), "resolving");

    let ctx = input
        .max_depth
        .map(ResolveContext::with_max_depth)
        .unwrap_or_default()
        .duplicate_scope(input.scope)
        .trace(trace);
    let tree = Resolver::new(ctx).resolve(&spec, &known)?;

    if let Some(site) = site {
        site.validate_navbar(&tree)?;
    }
    Ok(tree)
}

fn load_spec(input: &Input) -> anyhow::Result<(SidebarSpec, Option<SiteConfig>)> {
    match (&input.sidebars, input.preset) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let spec = JsonSource.load(&path.display().to_string(), &text)?;
            Ok((spec, None))
        }
        (None, Some(preset)) => Ok((preset.sidebars(), Some(preset.site_config()))),
        (None, None) => bail!("either --sidebars or --preset is required"),
    }
}

fn load_known(input: &Input) -> anyhow::Result<KnownDocs> {
    match (&input.docs, input.preset) {
        (Some(dir), _) => discover_docs(dir),
        (None, Some(preset)) => Ok(preset.documents().into_iter().collect()),
        (None, None) => bail!("--docs is required unless a --preset is given"),
    }
}

fn discover_docs(dir: &Path) -> anyhow::Result<KnownDocs> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("scanning {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(dir)?.to_path_buf();
        paths.push(relative);
    }

    let known = KnownDocs::from_paths(&paths);
    debug!(dir = %dir.display(), files = paths.len(), documents = known.len(), "discovered documents");
    Ok(known)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav::Problem;
    use pretty_assertions::assert_eq;

    fn input() -> Input {
        Input {
            sidebars: None,
            preset: None,
            docs: None,
            scope: DuplicateScope::Sidebar,
            max_depth: None,
        }
    }

    fn write(root: &Path, relative: &str, text: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_discover_docs_nested_tree() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "intro.md", "# Welcome");
        write(dir.path(), "getting-started/registration.md", "");
        write(dir.path(), "sdks/go.mdx", "");
        write(dir.path(), "img/logo.svg", "<svg/>");
        write(dir.path(), "_category_.json", "{}");

        let known = discover_docs(dir.path()).unwrap();
        assert_eq!(
            known.iter().collect::<Vec<_>>(),
            ["getting-started/registration", "intro", "sdks/go"]
        );
    }

    #[test]
    fn test_discover_docs_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_docs(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_preset_without_docs_uses_preset_documents() {
        let input = Input {
            preset: Some(Preset::XPay),
            ..input()
        };
        let known = load_known(&input).unwrap();
        assert_eq!(known.len(), Preset::XPay.documents().len());

        let tree = resolve_input(&input, false).unwrap();
        assert!(tree.contains("docsSidebar"));
    }

    #[test]
    fn test_missing_inputs_are_errors() {
        let err = load_spec(&input()).unwrap_err();
        assert!(err.to_string().contains("--sidebars or --preset"));

        let err = load_known(&input()).unwrap_err();
        assert!(err.to_string().contains("--docs is required"));
    }

    #[test]
    fn test_sidebars_file_with_docs_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sidebars.json", r#"{ "docs": ["intro", { "type": "category", "label": "Guides", "items": ["guides/go-live"] }] }"#);
        write(dir.path(), "docs/intro.md", "");
        write(dir.path(), "docs/guides/go-live.md", "");

        let input = Input {
            sidebars: Some(dir.path().join("sidebars.json")),
            docs: Some(dir.path().join("docs")),
            ..input()
        };
        let (_, site) = load_spec(&input).unwrap();
        assert!(site.is_none());

        let tree = resolve_input(&input, false).unwrap();
        assert_eq!(tree.sidebar("docs").unwrap().document_ids(), ["intro", "guides/go-live"]);
    }

    #[test]
    fn test_unresolved_reference_surfaces_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sidebars.json", r#"{ "docs": ["intro", "ghost"] }"#);
        write(dir.path(), "docs/intro.md", "");

        let input = Input {
            sidebars: Some(dir.path().join("sidebars.json")),
            docs: Some(dir.path().join("docs")),
            ..input()
        };
        let err = resolve_input(&input, false).unwrap_err();
        let validation = err.downcast_ref::<docnav::ValidationError>().unwrap();
        assert_eq!(
            validation.problems(),
            [Problem::UnresolvedDocumentRef {
                id: "ghost".into(),
                location: "docs".into(),
            }]
        );
    }

    #[test]
    fn test_max_depth_is_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "sidebars.json",
            r#"{ "docs": [{ "type": "category", "label": "A", "items": [{ "type": "category", "label": "B", "items": [] }] }] }"#,
        );
        let base = Input {
            sidebars: Some(dir.path().join("sidebars.json")),
            docs: Some(dir.path().to_path_buf()),
            ..input()
        };
        assert!(resolve_input(&base, false).is_ok());

        let limited = Input {
            max_depth: Some(1),
            ..base
        };
        assert!(resolve_input(&limited, false).is_err());
    }

    #[test]
    fn test_cli_rejects_sidebars_with_preset() {
        let parsed = Cli::try_parse_from([
            "docnav", "check", "--sidebars", "s.json", "--preset", "xpay",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["docnav", "show", "--preset", "local", "--json"]).unwrap();
        match cli.command {
            Command::Show { input, json } => {
                assert!(json);
                assert_eq!(input.preset, Some(Preset::Local));
                assert_eq!(input.max_depth, None);
            }
            other => panic!("expected show, got {:?}", other),
        }
    }
}
