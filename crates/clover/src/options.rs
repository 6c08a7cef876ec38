//! Compile and run configuration.

use std::path::PathBuf;

/// Runtime flags, set with `-f jit,-optimize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeFlags {
    /// Just-in-time compilation.
    pub jit: bool,
    /// Host specific optimizations.
    pub optimize: bool,
}

impl Default for RuntimeFlags {
    fn default() -> Self {
        Self {
            jit: true,
            optimize: true,
        }
    }
}

impl RuntimeFlags {
    /// Apply a comma-separated flag list. A leading `-` turns a flag off.
    ///
    /// Returns the names that aren't flags; they are otherwise ignored.
    pub fn apply(&mut self, list: &str) -> Vec<String> {
        let mut unknown = Vec::new();
        for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (name, enabled) = match item.strip_prefix('-') {
                Some(name) => (name, false),
                None => (item, true),
            };
            match name {
                "jit" => self.jit = enabled,
                "optimize" => self.optimize = enabled,
                _ => unknown.push(name.to_string()),
            }
        }
        unknown
    }
}

/// Compile mode configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Manifest file describing the program.
    pub manifest: Option<PathBuf>,
    /// Executable to write.
    pub output: Option<PathBuf>,
    /// Emit debug symbols.
    pub debug_symbols: bool,
    /// Print every token of every unit to standard output.
    pub dump_tokens: bool,
}

/// Run mode configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub flags: RuntimeFlags,
    /// Program to execute.
    pub file: PathBuf,
    /// Arguments passed to the program.
    pub args: Vec<String>,
}
