//! `showcase categories`: the category tab bar with per-tab counts.

use super::SiteContext;
use crate::output::{OutputMode, pretty_section, render_mode};
use clap::Args;
use showcase_core::model::Category;
use showcase_core::view::CategoryCount;
use std::io::Write;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Mark this tab as selected in the output.
    #[arg(short, long, default_value = "all")]
    pub selected: Category,
}

pub fn run_categories(
    args: &CategoriesArgs,
    ctx: &SiteContext,
    output: OutputMode,
) -> anyhow::Result<()> {
    let mut gallery = ctx.mount_gallery()?;
    gallery.on_category_selected(args.selected);
    let counts = gallery.category_counts();

    render_mode(
        output,
        &counts,
        |counts, w| {
            for c in counts {
                writeln!(w, "{}\t{}", c.category, c.count)?;
            }
            Ok(())
        },
        |counts, w| {
            pretty_section(w, "Categories")?;
            write_tab_bar(w, counts)
        },
    )
}

fn write_tab_bar(w: &mut dyn Write, counts: &[CategoryCount]) -> std::io::Result<()> {
    for c in counts {
        let marker = if c.selected { '>' } else { ' ' };
        writeln!(w, "{marker} {:<10} {:>4}", c.category.as_str(), c.count)?;
    }
    Ok(())
}
