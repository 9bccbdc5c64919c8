//! `showcase session`: replay tab clicks and "show more" presses against a
//! mounted gallery and report every step.

use super::SiteContext;
use crate::output::{OutputMode, pretty_kv, pretty_rule, pretty_section, render_mode};
use clap::Args;
use serde::Serialize;
use showcase_core::model::{Category, ParseCategoryError};
use showcase_core::view::{Gallery, ViewCommand};
use std::fmt;
use std::str::FromStr;

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Events to replay in order: `select:<category>` or `more`.
    #[arg(value_name = "EVENT", required = true)]
    pub events: Vec<UiEvent>,

    /// List the visible project titles after every step.
    #[arg(long)]
    pub show_projects: bool,
}

/// A user interaction on the gallery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Select(Category),
    More,
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(category) => write!(f, "select:{}", category.as_str().to_lowercase()),
            Self::More => f.write_str("more"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEventError {
    Category(ParseCategoryError),
    Unknown(String),
}

impl fmt::Display for ParseEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(err) => fmt::Display::fmt(err, f),
            Self::Unknown(raw) => write!(
                f,
                "unknown event '{raw}' (expected select:<category> or more)"
            ),
        }
    }
}

impl std::error::Error for ParseEventError {}

impl FromStr for UiEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("more") {
            return Ok(Self::More);
        }
        match trimmed.split_once(':') {
            Some((verb, category)) if verb.eq_ignore_ascii_case("select") => category
                .parse()
                .map(Self::Select)
                .map_err(ParseEventError::Category),
            _ => Err(ParseEventError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionStep {
    pub step: usize,
    pub event: String,
    /// `None` when the event caused no transition.
    pub command: Option<ViewCommand>,
    pub category: Category,
    pub visible_count: usize,
    pub shown: usize,
    pub total: usize,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
}

/// Apply `events` to `gallery`, recording the state after each one.
pub fn replay(gallery: &mut Gallery, events: &[UiEvent], show_projects: bool) -> Vec<SessionStep> {
    events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let command = match *event {
                UiEvent::Select(category) => Some(gallery.on_category_selected(category)),
                UiEvent::More => gallery.on_reveal_more_requested(),
            };
            let page = gallery.page();
            let projects = if show_projects {
                page.shown.iter().map(|p| p.title().to_string()).collect()
            } else {
                Vec::new()
            };
            SessionStep {
                step: idx + 1,
                event: event.to_string(),
                command,
                category: gallery.state().category(),
                visible_count: gallery.state().visible_count(),
                shown: page.shown.len(),
                total: page.total,
                has_more: page.has_more,
                projects,
            }
        })
        .collect()
}

/// Text column for a command: `kind:align:timing`, or `-`.
fn command_column(command: Option<ViewCommand>) -> String {
    command.map_or_else(
        || "-".to_string(),
        |c| format!("{}:{}:{}", c.as_str(), c.align().as_str(), c.timing()),
    )
}

fn describe_command(command: Option<ViewCommand>) -> String {
    command.map_or_else(
        || "(none)".to_string(),
        |c| {
            let when = if c.after_render() {
                "after the next render"
            } else {
                "immediately"
            };
            format!("{} (align {}, {when})", c.as_str(), c.align().as_str())
        },
    )
}

pub fn run_session(args: &SessionArgs, ctx: &SiteContext, output: OutputMode) -> anyhow::Result<()> {
    let mut gallery = ctx.mount_gallery()?;
    let steps = replay(&mut gallery, &args.events, args.show_projects);

    render_mode(
        output,
        &steps,
        |steps, w| {
            for s in steps {
                writeln!(
                    w,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    s.step,
                    s.event,
                    command_column(s.command),
                    s.category,
                    s.visible_count,
                    s.shown,
                    s.has_more
                )?;
            }
            Ok(())
        },
        |steps, w| {
            pretty_section(w, "Session")?;
            for s in steps {
                writeln!(w, "#{} {}", s.step, s.event)?;
                pretty_kv(w, "command", describe_command(s.command))?;
                pretty_kv(w, "category", s.category.as_str())?;
                pretty_kv(
                    w,
                    "showing",
                    format!("{} of {} (visible {})", s.shown, s.total, s.visible_count),
                )?;
                for title in &s.projects {
                    writeln!(w, "    - {title}")?;
                }
                pretty_rule(w)?;
            }
            Ok(())
        },
    )
}
