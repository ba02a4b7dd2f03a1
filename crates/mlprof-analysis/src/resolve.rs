//! Selection of the program function to analyze.

use std::fmt;

use mlprof_plan::{Function, Program};

use crate::AnalysisError;

/// Names tried, in order, when no requested function matches.
pub const CONVENTIONAL_NAMES: &[&str] = &["main", "predict", "forward"];

/// How a function was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The caller's requested name matched.
    Requested,
    /// A conventional entry name matched.
    Conventional,
    /// The first function in provider order was taken.
    First,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Requested => "requested",
            Self::Conventional => "conventional",
            Self::First => "first available",
        })
    }
}

/// A function selected from a program.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// Name of the function.
    pub name: &'a str,
    /// The function itself.
    pub function: &'a Function,
    /// Which rule selected it.
    pub resolution: Resolution,
}

/// Picks the function to analyze.
///
/// The requested name wins if present, then the first of
/// [`CONVENTIONAL_NAMES`] that exists, then the first function in provider
/// order. A requested name that is absent is not an error as long as a
/// fallback exists.
pub fn resolve<'a>(
    program: &'a Program,
    requested: Option<&str>,
) -> Result<Resolved<'a>, AnalysisError> {
    log::debug!("available functions: {:?}", program.function_names());

    if let Some(name) = requested {
        if let Some((name, function)) = program.iter().find(|(n, _)| *n == name) {
            log::debug!("found requested function '{name}'");
            return Ok(Resolved {
                name,
                function,
                resolution: Resolution::Requested,
            });
        }
        log::warn!("function '{name}' not found, falling back");
    }

    for candidate in CONVENTIONAL_NAMES {
        if let Some((name, function)) = program.iter().find(|(n, _)| n == candidate) {
            log::debug!("found fallback function '{name}'");
            return Ok(Resolved {
                name,
                function,
                resolution: Resolution::Conventional,
            });
        }
    }

    match program.first() {
        Some((name, function)) => {
            log::info!("using first available function '{name}'");
            Ok(Resolved {
                name,
                function,
                resolution: Resolution::First,
            })
        }
        None => Err(AnalysisError::FunctionNotFound {
            requested: requested.map(str::to_string),
            available: Vec::new(),
        }),
    }
}
