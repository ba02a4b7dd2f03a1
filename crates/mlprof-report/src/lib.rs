#![warn(missing_docs)]
//! Text reports over device usage analyses.
//!
//! Every view is a pure function returning a `String`, so a caller can
//! render a section completely before printing any of it.

pub mod chart;
pub mod specs;
pub mod table;

use std::fmt;
use std::str::FromStr;

use mlprof_analysis::UsageCounts;

pub use chart::{bar_widths, usage_chart};
pub use specs::model_specs;
pub use table::operator_table;

/// Default bar chart width in characters.
pub const DEFAULT_CHART_WIDTH: usize = 50;

/// Presentation options shared by all views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportStyle {
    /// Emit ANSI colors and bold text.
    pub color: bool,
    /// Total bar chart width.
    pub chart_width: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            color: true,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

/// `"{device}: {count}"` for each device, comma-joined.
pub fn usage_summary(counts: &UsageCounts) -> String {
    counts.to_string()
}

/// A printable report section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// Model specifications.
    Specs,
    /// Device usage summary.
    Usage,
    /// Device usage bar chart.
    Chart,
    /// Operator compatibility table.
    Operators,
}

impl Section {
    /// Heading printed above the section.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Specs => "Model Specifications:",
            Self::Usage => "Device Usage Summary:",
            Self::Chart => "Device Usage Chart:",
            Self::Operators => "Operator Compatibility Report:",
        }
    }

    /// Whether rendering requires a usage analysis.
    pub fn needs_analysis(self) -> bool {
        !matches!(self, Self::Specs)
    }
}

/// The report selected on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportKind {
    /// Summary only.
    Usage,
    /// Bar chart only.
    #[default]
    Chart,
    /// Operator table only.
    Operators,
    /// Specs, summary, chart, and operator table.
    All,
    /// Specs only.
    Specs,
}

impl ReportKind {
    /// Sections to print, in order.
    pub fn sections(self) -> &'static [Section] {
        match self {
            Self::Usage => &[Section::Usage],
            Self::Chart => &[Section::Chart],
            Self::Operators => &[Section::Operators],
            Self::All => &[
                Section::Specs,
                Section::Usage,
                Section::Chart,
                Section::Operators,
            ],
            Self::Specs => &[Section::Specs],
        }
    }

    /// Whether any section requires a usage analysis.
    pub fn needs_analysis(self) -> bool {
        self.sections().iter().any(|s| s.needs_analysis())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Usage => "usage",
            Self::Chart => "chart",
            Self::Operators => "operators",
            Self::All => "all",
            Self::Specs => "specs",
        })
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "usage" => Ok(Self::Usage),
            "chart" => Ok(Self::Chart),
            "operators" => Ok(Self::Operators),
            "all" => Ok(Self::All),
            "specs" => Ok(Self::Specs),
            _ => Err(format!(
                "invalid report '{s}', expected usage, chart, operators, all, or specs"
            )),
        }
    }
}
