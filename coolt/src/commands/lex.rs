//! Lex command implementation.
//!
//! Scans one Cool source and writes the rendered token stream. Lexical
//! errors are part of the output, so a completed scan always succeeds.

use std::path::PathBuf;

use coolc_lex::{LexerConfig, TokenRecord, TokenStream};
use coolc_util::Handler;
use tracing::{debug, info};

use crate::commands::common::{read_source, write_output, LexerOverrides, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source file; standard input when absent.
    pub input: Option<PathBuf>,
    /// Output file; standard output when absent.
    pub output: Option<PathBuf>,
    /// Rendering; the configured one when absent.
    pub format: Option<OutputFormat>,
    /// Lexer options from the command line.
    pub overrides: LexerOverrides,
    /// Loaded configuration.
    pub config: Config,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

/// What a completed lex run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutcome {
    /// Number of tokens written, `END` included.
    pub tokens: usize,
    /// Number of `ILLEGAL` tokens among them.
    pub errors: usize,
}

impl LexCommand {
    /// Effective lexer options: configuration, then command-line overrides.
    pub fn lexer_config(&self) -> Result<LexerConfig> {
        self.args.overrides.apply(&self.args.config.lexer)
    }

    /// Effective output format.
    pub fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.args.config.output.format)
    }

    /// Scan `source` with the effective options.
    pub fn scan(&self, source: &str) -> Result<TokenStream> {
        let config = self.lexer_config()?;
        let mut handler = Handler::new();
        Ok(coolc_lex::scan_with(source, &config, &mut handler))
    }

    /// Render a stream in the effective format.
    pub fn render(&self, stream: &TokenStream) -> Result<String> {
        match self.format().separator() {
            Some(separator) => Ok(stream.render_with(separator)),
            None => render_json(stream),
        }
    }
}

/// Render a stream as a pretty-printed JSON array, newline terminated.
pub fn render_json(stream: &TokenStream) -> Result<String> {
    let records: Vec<TokenRecord<'_>> = stream.spanned().iter().map(|t| t.record()).collect();
    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    Ok(json)
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = LexOutcome;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let (name, source) = read_source(self.args.input.as_deref())?;
        debug!(input = %name, bytes = source.len(), "read source");

        let stream = self.scan(&source)?;
        let rendered = self.render(&stream)?;
        write_output(self.args.output.as_ref(), &rendered)?;

        let outcome = LexOutcome {
            tokens: stream.len(),
            errors: stream.error_count(),
        };
        if let Some(path) = &self.args.output {
            info!(
                output = %path.display(),
                tokens = outcome.tokens,
                "wrote token stream"
            );
        }
        Ok(outcome)
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<LexOutcome> {
    LexCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use tempfile::TempDir;

    fn command(format: Option<OutputFormat>, config: Config) -> LexCommand {
        LexCommand::new(LexArgs {
            format,
            config,
            ..LexArgs::default()
        })
    }

    #[test]
    fn test_command_name() {
        assert_eq!(LexCommand::name(), "lex");
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let config = Config {
            output: OutputConfig {
                format: OutputFormat::Spaced,
            },
            ..Config::default()
        };
        assert_eq!(command(None, config.clone()).format(), OutputFormat::Spaced);
        assert_eq!(
            command(Some(OutputFormat::Json), config).format(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_render_lines_and_spaced() {
        let lines = command(None, Config::default());
        let stream = lines.scan("x <- 1").unwrap();
        assert_eq!(
            lines.render(&stream).unwrap(),
            "IDENT(x)\nASSIGN\nINT_LITERAL(1)\nEND\n"
        );

        let spaced = command(Some(OutputFormat::Spaced), Config::default());
        assert_eq!(
            spaced.render(&stream).unwrap(),
            "IDENT(x) ASSIGN INT_LITERAL(1) END\n"
        );
    }

    #[test]
    fn test_render_json() {
        let cmd = command(Some(OutputFormat::Json), Config::default());
        let stream = cmd.scan("x\n;").unwrap();
        let json = cmd.render(&stream).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[0]["kind"], "IDENT");
        assert_eq!(value[0]["value"], "x");
        assert_eq!(value[1]["kind"], "SEMICOLON");
        assert!(value[1]["value"].is_null());
        assert_eq!(value[1]["line"], 2);
        assert_eq!(value[2]["kind"], "END");
    }

    #[test]
    fn test_overrides_reach_the_lexer() {
        let cmd = LexCommand::new(LexArgs {
            overrides: LexerOverrides {
                line_comments: true,
                max_string_length: Some(2),
            },
            ..LexArgs::default()
        });
        let stream = cmd.scan("\"abc\" -- gone").unwrap();
        assert_eq!(cmd.render(&stream).unwrap(), "ILLEGAL(String constant too long)\nEND\n");
    }

    #[test]
    fn test_execute_file_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("main.cl");
        let output = temp_dir.path().join("main.tokens");
        std::fs::write(&input, "class Main {};\n#").unwrap();

        let outcome = run_lex(LexArgs {
            input: Some(input),
            output: Some(output.clone()),
            ..LexArgs::default()
        })
        .unwrap();

        assert_eq!(outcome, LexOutcome { tokens: 7, errors: 1 });
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("CLASS\nCLASS_NAME(Main)\n"));
        assert!(written.ends_with("ILLEGAL(Illegal character #)\nEND\n"));
    }
}
