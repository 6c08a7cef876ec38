//! Clover - a small compiled programming language.
//!
//! This crate drives the toolchain over source files. Lexing is the only
//! stage implemented today; executable emission and program execution
//! report [`CompileError::NotImplemented`].
//!
//! The driver is the one place diagnostics are written. The lexer returns
//! structured errors and the driver renders them.
//!
//! # Example
//!
//! ```
//! use clover::{Driver, CompileOptions, SourceBuffer};
//!
//! let source = SourceBuffer::new("main.clv", "fn main() {}");
//! let mut driver = Driver::with_output(CompileOptions::default(), Vec::new(), Vec::new());
//! let tokens = driver.lex(&source).unwrap();
//! assert_eq!(tokens.len(), 6);
//! ```

use std::io::{self, Stderr, Stdout, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub use clover_lexer as lexer;

// Re-export commonly used types
pub use clover_lexer::{
    tokenize, Diagnostic, LexError, Lexed, Position, SourceBuffer, SourceError, Token, TokenKind,
    TokenStream,
};

pub mod options;

pub use options::{CompileOptions, RunOptions, RuntimeFlags};

/// Errors from the compile and run drivers.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to tokenize {file}: {error}")]
    Lex { file: String, error: LexError },

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("{0}")]
    InvalidOptions(String),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CompileError {
    /// Returns true if a diagnostic for this error was already written.
    pub fn is_reported(&self) -> bool {
        matches!(self, CompileError::Lex { .. })
    }
}

/// A source file that made it through lexing.
#[derive(Debug)]
pub struct CompiledUnit {
    pub source: SourceBuffer,
    pub tokens: TokenStream,
}

/// Compile driver. Token dumps go to `out`, diagnostics to `err`.
pub struct Driver<O = Stdout, E = Stderr> {
    options: CompileOptions,
    out: O,
    err: E,
}

impl Driver {
    /// Create a driver writing to standard output and standard error.
    pub fn new(options: CompileOptions) -> Self {
        Self::with_output(options, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Driver<O, E> {
    pub fn with_output(options: CompileOptions, out: O, err: E) -> Self {
        Self { options, out, err }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Consume the driver, returning its writers.
    pub fn into_output(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Tokenize an in-memory buffer, reporting any lexical error.
    pub fn lex(&mut self, source: &SourceBuffer) -> Result<TokenStream, CompileError> {
        let lexed = tokenize(source);
        if let Some(error) = lexed.error {
            writeln!(self.err, "{}", error.diagnostic(source))?;
            return Err(CompileError::Lex {
                file: source.file_name().to_string(),
                error,
            });
        }
        if self.options.dump_tokens {
            dump_tokens(&mut self.out, source, &lexed.tokens)?;
        }
        Ok(lexed.tokens)
    }

    /// Load and tokenize one file.
    pub fn compile_unit(&mut self, path: &Path) -> Result<CompiledUnit, CompileError> {
        debug!(file = %path.display(), "compiling unit");
        let source = SourceBuffer::from_file(path)?;
        let tokens = self.lex(&source)?;
        Ok(CompiledUnit { source, tokens })
    }

    /// Lex every file in order, stopping at the first failure.
    pub fn check(&mut self, files: &[PathBuf]) -> Result<Vec<CompiledUnit>, CompileError> {
        if files.is_empty() {
            return Err(CompileError::InvalidOptions("no input files".to_string()));
        }
        let units = files
            .iter()
            .map(|file| self.compile_unit(file))
            .collect::<Result<Vec<_>, _>>()?;
        info!(units = units.len(), "all units tokenized");
        Ok(units)
    }

    /// Lex every file, then link them into an executable.
    pub fn compile(&mut self, files: &[PathBuf]) -> Result<(), CompileError> {
        let units = self.check(files)?;
        self.emit_executable(&units)
    }

    fn emit_executable(&mut self, units: &[CompiledUnit]) -> Result<(), CompileError> {
        debug!(
            units = units.len(),
            manifest = ?self.options.manifest,
            output = ?self.options.output,
            debug_symbols = self.options.debug_symbols,
            "emitting executable"
        );
        Err(CompileError::NotImplemented("executable emission"))
    }
}

/// Compile `files` with diagnostics on standard error.
pub fn compile(files: &[PathBuf], options: CompileOptions) -> Result<(), CompileError> {
    Driver::new(options).compile(files)
}

/// Execute a program.
pub fn run(options: &RunOptions) -> Result<(), CompileError> {
    debug!(
        file = %options.file.display(),
        jit = options.flags.jit,
        optimize = options.flags.optimize,
        args = options.args.len(),
        "running program"
    );
    Err(CompileError::NotImplemented("code execution"))
}

/// Write one line per token: position, kind, and source text.
pub fn dump_tokens<W: Write>(out: &mut W, source: &SourceBuffer, tokens: &TokenStream) -> io::Result<()> {
    writeln!(out, "{}:", source.file_name())?;
    for entry in tokens {
        let token = entry.token;
        writeln!(
            out,
            "{:>5}:{:<4} {:<8} {}",
            token.line,
            token.column,
            token.kind,
            String::from_utf8_lossy(token.text(source))
        )?;
        if !entry.has_next {
            writeln!(out, "{} tokens", tokens.len())?;
        }
    }
    Ok(())
}
