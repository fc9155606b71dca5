//! automenu: nested, linked outlines from document headings.
#![allow(clippy::multiple_crate_versions)]

use automenu::edit_plan::{Edit, EditPlan};
use automenu::formats::markdown::MarkdownFormat;
use automenu::render::OutputFormat;
use automenu::{config, input, render, OutlineBuilder, OutlineError};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

#[derive(Parser)]
#[command(name = "automenu")]
#[command(about = "Nested, linked outlines from document headings", long_about = None)]
struct Args {
    /// Files or directories to outline
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Shallowest heading level to list
    #[arg(long, value_name = "LEVEL")]
    start_depth: Option<usize>,

    /// Deepest heading level to list
    #[arg(long, value_name = "LEVEL")]
    end_depth: Option<usize>,

    /// Region to scan for headings ('*' or '#slug')
    #[arg(long, value_name = "SELECTOR")]
    scan: Option<String>,

    /// Region whose headings are left out ('#slug', or '' for none)
    #[arg(long, value_name = "SELECTOR")]
    exclude: Option<String>,

    /// Section the outline is written into ('#slug')
    #[arg(long, value_name = "SELECTOR")]
    target: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Write each outline into its document's target section
    #[arg(long)]
    write: bool,

    /// Print the edit plan as JSON instead of writing it
    #[arg(long, conflicts_with = "write")]
    plan: bool,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn run(args: Args) -> automenu::Result<()> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(depth) = args.start_depth {
        cfg.start_depth = depth;
    }
    if let Some(depth) = args.end_depth {
        cfg.end_depth = depth;
    }
    if let Some(scan) = args.scan {
        cfg.scan_region = scan;
    }
    if let Some(exclude) = args.exclude {
        cfg.exclude_region = exclude;
    }
    if let Some(target) = args.target {
        cfg.target = target;
    }
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let selection = cfg.selection()?;
    let target = if args.write || args.plan {
        Some(cfg.target_region()?)
    } else {
        None
    };

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let format = MarkdownFormat;
    let builder = OutlineBuilder::new(selection.range);
    let mut plan = EditPlan::default();

    for doc in &documents {
        let source = fs::read_to_string(doc)?;
        let headings = input::parse_headings(&source, &format)?;
        let entries = input::collect_entries(&headings, &selection);
        let root = builder.build(entries)?;
        let rendered = render::render(&root, args.format, &cfg)?;

        let Some(target) = &target else {
            if documents.len() > 1 {
                println!("{}:", doc.display());
            }
            print!("{rendered}");
            continue;
        };

        match Edit::for_section(doc, &source, &headings, target, &rendered) {
            Ok(edit) => plan.edits.push(edit),
            Err(e @ OutlineError::TargetNotFound(_)) => {
                warn!(path = %doc.display(), "{e}, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    if args.plan {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else if args.write {
        plan.apply()?;
    }

    Ok(())
}
