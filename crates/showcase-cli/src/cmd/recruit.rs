//! `showcase recruit`: cohort tabs and the selected cohort's field explainer.

use super::SiteContext;
use crate::output::{OutputMode, pretty_rule, render_mode};
use clap::Args;
use serde::Serialize;
use showcase_core::recruit::{FieldExplain, RecruitBoard, RecruitCatalog};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CATALOG: &str = "recruit.yaml";

#[derive(Args, Debug)]
pub struct RecruitArgs {
    /// Cohort tab to select (defaults to the first configured cohort).
    #[arg(long)]
    pub cohort: Option<String>,

    /// Explainer catalog (YAML or JSON). Defaults to `recruit.yaml` in the site root.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RecruitReport<'a> {
    cohorts: &'a [String],
    current: &'a str,
    explain: Option<&'a FieldExplain>,
}

fn load_catalog(args: &RecruitArgs, ctx: &SiteContext) -> anyhow::Result<RecruitCatalog> {
    if let Some(ref path) = args.catalog {
        return Ok(RecruitCatalog::load(path)?);
    }
    let path = ctx.root.join(DEFAULT_CATALOG);
    if !path.exists() {
        debug!(path = %path.display(), "no recruit catalog; explainer will be empty");
        return Ok(RecruitCatalog::default());
    }
    Ok(RecruitCatalog::load(&path)?)
}

pub fn run_recruit(args: &RecruitArgs, ctx: &SiteContext, output: OutputMode) -> anyhow::Result<()> {
    let catalog = load_catalog(args, ctx)?;
    let mut board = RecruitBoard::new(ctx.config.recruit.cohorts.iter().cloned(), catalog)?;
    if let Some(ref cohort) = args.cohort {
        board.select(cohort)?;
    }

    let report = RecruitReport {
        cohorts: board.cohorts(),
        current: board.current(),
        explain: board.explain(),
    };

    render_mode(
        output,
        &report,
        |r, w| {
            writeln!(w, "{}", r.current)?;
            for entry in r.explain.map(|e| e.contents.as_slice()).unwrap_or_default() {
                writeln!(w, "{}\t{}", entry.title, entry.description)?;
            }
            Ok(())
        },
        |r, w| {
            let tabs: Vec<String> = r
                .cohorts
                .iter()
                .map(|c| {
                    if c == r.current {
                        format!("[{c}]")
                    } else {
                        c.clone()
                    }
                })
                .collect();
            writeln!(w, "{}", tabs.join("  "))?;
            pretty_rule(w)?;
            match r.explain {
                Some(explain) if !explain.contents.is_empty() => {
                    for entry in &explain.contents {
                        writeln!(w, "{}", entry.title)?;
                        if !entry.description.is_empty() {
                            writeln!(w, "  {}", entry.description)?;
                        }
                    }
                }
                _ => writeln!(w, "Nothing to show for {} yet.", r.current)?,
            }
            Ok(())
        },
    )
}
