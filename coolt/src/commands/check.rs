//! Check command implementation.
//!
//! Scans one Cool source and reports every lexical error as a located
//! diagnostic with a source snippet.

use std::path::PathBuf;

use coolc_util::{Diagnostic, Handler, SourceFile, SourceMap, SourceSnippet};
use tracing::{debug, info};

use crate::commands::common::{read_source, LexerOverrides};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source file; standard input when absent.
    pub input: Option<PathBuf>,
    /// Lexer options from the command line.
    pub overrides: LexerOverrides,
    /// Loaded configuration.
    pub config: Config,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

/// Result of checking one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Display name of the checked source.
    pub name: String,
    /// Formatted diagnostics, one block per lexical error.
    pub diagnostics: Vec<String>,
}

impl CheckReport {
    /// Returns true when no lexical error was found.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl CheckCommand {
    /// Scan `source` and format each reported error.
    pub fn check_source(&self, name: &str, source: &str) -> Result<CheckReport> {
        let config = self.args.overrides.apply(&self.args.config.lexer)?;

        let mut sources = SourceMap::new();
        let file_id = sources.add_file(name, source);

        let mut handler = Handler::new();
        coolc_lex::Lexer::with_config(source, &mut handler, config)
            .with_file_id(file_id)
            .tokenize();
        debug!(input = %name, errors = handler.error_count(), "scan finished");

        let file = sources
            .get(file_id)
            .map_err(|e| crate::error::CooltError::Validation(e.to_string()))?;
        let diagnostics = handler
            .diagnostics()
            .iter()
            .map(|diagnostic| format_diagnostic(file, diagnostic))
            .collect();

        Ok(CheckReport {
            name: name.to_string(),
            diagnostics,
        })
    }
}

/// Format a diagnostic as `name:line:col: error[CODE]: message` followed by
/// the offending source line and a caret marker.
pub fn format_diagnostic(file: &SourceFile, diagnostic: &Diagnostic) -> String {
    let span = diagnostic.span;
    let line = span.line as usize;
    let column = span.column as usize;
    let mut out = format!("{}:{}:{}: {}", file.name(), line, column, diagnostic);

    if let Ok(text) = file.line_at(line) {
        let width = file
            .span_text(span)
            .ok()
            .filter(|t| !t.contains('\n'))
            .map_or(1, |t| t.chars().count().max(1));
        let snippet = SourceSnippet::new(text, line, column, column + width);
        out.push('\n');
        out.push_str(&snippet.format());
    }

    out
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let (name, source) = read_source(self.args.input.as_deref())?;
        let report = self.check_source(&name, &source)?;

        for diagnostic in &report.diagnostics {
            eprintln!("{diagnostic}");
        }
        if report.is_clean() {
            info!(input = %report.name, "no lexical errors");
        } else {
            eprintln!(
                "{}: {} lexical error(s) found",
                report.name,
                report.diagnostics.len()
            );
        }
        Ok(report)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<CheckReport> {
    CheckCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &str) -> CheckReport {
        CheckCommand::new(CheckArgs::default())
            .check_source("test.cl", source)
            .unwrap()
    }

    #[test]
    fn test_command_name() {
        assert_eq!(CheckCommand::name(), "check");
    }

    #[test]
    fn test_clean_source() {
        let report = check("class Main { main() : Int { 0 }; };");
        assert!(report.is_clean());
    }

    #[test]
    fn test_illegal_character_diagnostic() {
        let report = check("x <- 1;\ny # z");
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0],
            "test.cl:2:3: error[E1001]: Illegal character #\n  2 | y # z\n    |   ^"
        );
    }

    #[test]
    fn test_caret_covers_token() {
        let report = check("a *) b");
        assert_eq!(
            report.diagnostics[0],
            "test.cl:1:3: error[E1006]: Unmatched *)\n  1 | a *) b\n    |   ^^"
        );
    }

    #[test]
    fn test_multiline_error_points_at_start() {
        let report = check("x (* open\n forever");
        assert_eq!(
            report.diagnostics[0],
            "test.cl:1:3: error[E1007]: EOF in comment\n  1 | x (* open\n    |   ^"
        );
    }

    #[test]
    fn test_every_error_reported_in_order() {
        let report = check("$ \"a\nb *)");
        let headers: Vec<&str> = report
            .diagnostics
            .iter()
            .filter_map(|d| d.lines().next())
            .collect();
        assert_eq!(
            headers,
            vec![
                "test.cl:1:1: error[E1001]: Illegal character $",
                "test.cl:1:3: error[E1004]: Unterminated string constant",
                "test.cl:2:3: error[E1006]: Unmatched *)",
            ]
        );
    }
}
