// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::{ConfigSection, GraphFile};
use crate::dag::{resolve, write_order};

/// High-level entry point used by `main.rs`; writes to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, &mut out)
}

/// Same as [`run`], writing the order (or dry-run summary) to `out`.
///
/// This wires together:
/// - graph loading (document or built-in catalog)
/// - root and output-format selection (CLI over `[config]`)
/// - resolution
/// - rendering
pub fn run_with_writer<W: Write>(args: CliArgs, out: &mut W) -> Result<()> {
    let file = load_graph(&args)?;

    if args.dry_run {
        return print_dry_run(&args, &file, out);
    }

    let roots = effective_roots(&args, &file);
    warn_on_unknown_roots(&file, roots);
    let output = args.format.or(file.config.format).unwrap_or_default();
    info!(
        items = file.graph.len(),
        roots = ?roots,
        ?output,
        "resolving dependency order"
    );

    let order = resolve(&file.graph, roots)?;
    write_order(out, &order, output)?;

    debug!(resolved = order.len(), "order written");
    Ok(())
}

fn load_graph(args: &CliArgs) -> Result<GraphFile> {
    if args.builtin {
        debug!("using built-in course catalog");
        return Ok(GraphFile::new_unchecked(
            ConfigSection::default(),
            catalog::course_catalog(),
        ));
    }
    Ok(load_and_validate(&args.graph)?)
}

/// `--root` wins over `[config].roots`; neither means "every item".
fn effective_roots<'a>(args: &'a CliArgs, file: &'a GraphFile) -> Option<&'a [String]> {
    if args.roots.is_empty() {
        file.default_roots()
    } else {
        Some(&args.roots)
    }
}

fn warn_on_unknown_roots(file: &GraphFile, roots: Option<&[String]>) {
    let known = file.graph.nodes();
    for root in roots.unwrap_or_default() {
        if known.binary_search(&root.as_str()).is_err() {
            warn!(root = %root, "root is not mentioned in the graph; it has no prerequisites");
        }
    }
}

/// Dry-run output: print items, their prerequisites and the longest chain.
///
/// Still fails on a cycle, so a dry run doubles as a validity check.
fn print_dry_run<W: Write>(args: &CliArgs, file: &GraphFile, out: &mut W) -> Result<()> {
    writeln!(out, "prereqs dry-run")?;
    if args.builtin {
        writeln!(out, "  source = built-in course catalog")?;
    } else {
        writeln!(out, "  source = {}", args.graph.display())?;
    }
    writeln!(out, "  config.roots = {:?}", file.config.roots)?;
    if let Some(format) = file.config.format {
        writeln!(out, "  config.format = {:?}", format)?;
    }
    writeln!(out)?;

    writeln!(out, "items ({}):", file.graph.len())?;
    for name in file.graph.keys() {
        writeln!(out, "  - {name}")?;
        let prereqs = file.graph.prerequisites_of(name);
        if !prereqs.is_empty() {
            writeln!(out, "      after: {:?}", prereqs)?;
        }
    }

    let leaves = file.graph.implicit_leaves();
    if !leaves.is_empty() {
        writeln!(out, "implicit leaves ({}):", leaves.len())?;
        for name in leaves {
            writeln!(out, "  - {name}")?;
        }
    }

    let order = resolve::<&str>(&file.graph, None)?;
    writeln!(out)?;
    writeln!(out, "longest chain: {}", file.graph.longest_chain_in(&order))?;

    debug!("dry-run complete (no order printed)");
    Ok(())
}
