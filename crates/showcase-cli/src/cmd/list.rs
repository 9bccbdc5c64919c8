//! `showcase list`: render the gallery page for a category.

use super::SiteContext;
use crate::output::{OutputMode, pretty_rule, pretty_section, render_mode};
use clap::Args;
use serde::Serialize;
use showcase_core::listing::{self, PageWindow, clamp_visible_count};
use showcase_core::model::{Category, ProjectRecord};
use std::io::{self, Write};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category tab to select: all, web, ios, android, ml.
    #[arg(short, long, default_value = "all")]
    pub category: Category,

    /// Press "show more" this many times (stops once nothing is left).
    #[arg(short, long, default_value_t = 0)]
    pub reveal: usize,

    /// Show exactly this many cards instead of the page-size rules.
    /// Negative values show none.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "reveal")]
    pub visible: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PageReport<'a> {
    pub category: Category,
    pub visible_count: usize,
    pub total: usize,
    pub has_more: bool,
    pub remaining: usize,
    pub projects: Vec<&'a ProjectRecord>,
}

impl<'a> PageReport<'a> {
    pub fn new(category: Category, visible_count: usize, page: PageWindow<'a>) -> Self {
        Self {
            category,
            visible_count,
            total: page.total,
            has_more: page.has_more,
            remaining: page.remaining(),
            projects: page.shown,
        }
    }
}

pub fn run_list(args: &ListArgs, ctx: &SiteContext, output: OutputMode) -> anyhow::Result<()> {
    let mut gallery = ctx.mount_gallery()?;

    if let Some(raw) = args.visible {
        let visible_count = clamp_visible_count(raw);
        let page = listing::list_projects(gallery.records(), args.category, visible_count);
        let report = PageReport::new(args.category, visible_count, page);
        return render_page(output, &report);
    }

    gallery.on_category_selected(args.category);
    let mut applied = 0;
    while applied < args.reveal && gallery.on_reveal_more_requested().is_some() {
        applied += 1;
    }
    debug!(requested = args.reveal, applied, "reveal requests replayed");

    let report = PageReport::new(
        gallery.state().category(),
        gallery.state().visible_count(),
        gallery.page(),
    );
    render_page(output, &report)
}

fn render_page(output: OutputMode, report: &PageReport<'_>) -> anyhow::Result<()> {
    render_mode(
        output,
        report,
        |r, w| {
            for project in &r.projects {
                write_project_row(w, project)?;
            }
            writeln!(
                w,
                "# category={} shown={} total={} has_more={}",
                r.category,
                r.projects.len(),
                r.total,
                r.has_more
            )
        },
        |r, w| {
            pretty_section(w, &format!("Projects · {}", r.category))?;
            if r.projects.is_empty() {
                writeln!(w, "No projects in this category.")?;
            }
            for project in &r.projects {
                write_project_card(w, project)?;
            }
            pretty_rule(w)?;
            writeln!(w, "showing {} of {}", r.projects.len(), r.total)?;
            if r.has_more {
                writeln!(w, "{} more (use --reveal to show more)", r.remaining)?;
            }
            Ok(())
        },
    )
}

/// One tab-separated row: generation, field tags, title, url.
pub fn write_project_row(w: &mut dyn Write, project: &ProjectRecord) -> io::Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}\t{}",
        project.generation(),
        project.field().as_slice().join(","),
        project.title(),
        project.url()
    )
}

/// A two-line card for pretty output.
pub fn write_project_card(w: &mut dyn Write, project: &ProjectRecord) -> io::Result<()> {
    writeln!(
        w,
        "  [gen {:>2}]  {:<28} {:<12} {}",
        project.generation(),
        project.title(),
        project.field().as_slice().join(","),
        project.url()
    )?;
    if !project.tags().is_empty() {
        writeln!(w, "             tags: {}", project.tags().join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::model::RawField;

    #[test]
    fn list_args_defaults() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ListArgs,
        }
        let w = Wrapper::parse_from(["test"]);
        assert_eq!(w.args.category, Category::All);
        assert_eq!(w.args.reveal, 0);
        assert!(w.args.visible.is_none());
    }

    #[test]
    fn list_args_parse_category_and_negative_visible() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ListArgs,
        }
        let w = Wrapper::parse_from(["test", "-c", "Machine-Learning", "--visible", "-2"]);
        assert_eq!(w.args.category, Category::Ml);
        assert_eq!(w.args.visible, Some(-2));

        assert!(Wrapper::try_parse_from(["test", "-c", "desktop"]).is_err());
    }

    #[test]
    fn project_row_is_tab_separated() {
        let record = ProjectRecord::new(
            "Club Site",
            "",
            vec![],
            RawField::Set(vec!["web".into(), "ml".into()]),
            3,
            "web/club-site",
        );
        let mut buf = Vec::new();
        write_project_row(&mut buf, &record).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "3\tWEB,ML\tClub Site\tweb/club-site\n"
        );
    }

    #[test]
    fn page_report_copies_window() {
        let records = vec![
            ProjectRecord::new("a", "", vec![], RawField::Single("WEB".into()), 1, "a"),
            ProjectRecord::new("b", "", vec![], RawField::Single("WEB".into()), 2, "b"),
        ];
        let page = listing::list_projects(&records, Category::Web, 1);
        let report = PageReport::new(Category::Web, 1, page);
        assert_eq!(report.total, 2);
        assert!(report.has_more);
        assert_eq!(report.remaining, 1);
        assert_eq!(report.projects[0].title(), "b");
    }
}
