//! Command-line options.

use std::{path::PathBuf, str::FromStr};

use clap::{Parser, ValueEnum, crate_version};
use clap_complete::{Generator, shells};
use clap_complete_nushell::Nushell;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use thiserror::Error;
use variation_selector_types::{AttributeCode, RawValue};

/// Application subcommands.
#[derive(Parser)]
pub enum SubCommands {
    /// Compute the variation selections of a product
    ///
    /// For every variation attribute this lists the distinct values of the
    /// product's variants, the variant each value leads to and whether that
    /// variant keeps the other current choices.
    Select(SelectOpts),

    /// List every selectable variant with all of its variation values
    Matches(MatchesOpts),

    /// Generate shell completion script
    Completion(ShellCompletion),
}

/// Shell completion options.
#[derive(Parser)]
pub struct ShellCompletion {
    /// Specifies the shell for which the completions should be generated
    #[arg(short, long)]
    pub shell: Shell,
}

/// Defines the shells for which we can provide completions
#[allow(clippy::enum_variant_names)]
#[derive(ValueEnum, Clone, Debug, Copy, Eq, Hash, PartialEq)]
pub enum Shell {
    /// Bourne Again SHell (bash)
    Bash,
    /// Elvish shell
    Elvish,
    /// Friendly Interactive SHell (fish)
    Fish,
    /// Nushell
    Nushell,
    /// PowerShell
    Powershell,
    /// Z SHell (zsh)
    Zsh,
}

impl Generator for Shell {
    fn file_name(&self, name: &str) -> String {
        match self {
            Shell::Bash => shells::Bash.file_name(name),
            Shell::Elvish => shells::Elvish.file_name(name),
            Shell::Fish => shells::Fish.file_name(name),
            Shell::Nushell => Nushell.file_name(name),
            Shell::Powershell => shells::PowerShell.file_name(name),
            Shell::Zsh => shells::Zsh.file_name(name),
        }
    }

    fn generate(&self, cmd: &clap::Command, buf: &mut dyn std::io::Write) {
        match self {
            Shell::Bash => shells::Bash.generate(cmd, buf),
            Shell::Elvish => shells::Elvish.generate(cmd, buf),
            Shell::Fish => shells::Fish.generate(cmd, buf),
            Shell::Nushell => Nushell.generate(cmd, buf),
            Shell::Powershell => shells::PowerShell.generate(cmd, buf),
            Shell::Zsh => shells::Zsh.generate(cmd, buf),
        }
    }
}

#[allow(missing_docs)]
#[derive(Parser)]
#[clap(name = "variation-selector", version = crate_version!())]
pub struct App {
    #[clap(subcommand)]
    pub subcommand: SubCommands,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

/// The format used to print results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A human readable table
    #[default]
    Table,
    /// Pretty printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Options shared by all subcommands that read a product.
#[derive(Parser, Debug, Clone)]
pub struct ProductOpts {
    /// The product document (YAML, or JSON if the file ends in `.json`)
    #[arg(short, long)]
    pub product: PathBuf,

    /// Sort order files for attribute values. Later files take precedence.
    #[arg(short = 's', long = "sort-order")]
    pub sort_order: Vec<PathBuf>,

    /// The output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Options for the `select` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SelectOpts {
    #[command(flatten)]
    pub product_opts: ProductOpts,

    /// Marketplace code of the active variant. Overrides the active variant of
    /// the product document.
    #[arg(long, conflicts_with = "choose")]
    pub active: Option<String>,

    /// Choose the active variant by its values, e.g. `--choose color=red
    /// --choose size=M`. Every variation attribute needs a value.
    #[arg(long, value_name = "CODE=VALUE")]
    pub choose: Vec<Choice>,

    /// Ignore any active variant of the product document
    #[arg(long, conflicts_with_all = ["active", "choose"])]
    pub no_active: bool,
}

/// Options for the `matches` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct MatchesOpts {
    #[command(flatten)]
    pub product_opts: ProductOpts,
}

/// A single `code=value` pair given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub code: AttributeCode,
    pub value: RawValue,
}

/// Error returned for malformed `code=value` pairs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseChoiceError {
    #[error("expected CODE=VALUE, got '{0}'")]
    MissingSeparator(String),

    #[error("the attribute code in '{0}' is empty")]
    EmptyCode(String),
}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, value) = s
            .split_once('=')
            .ok_or_else(|| ParseChoiceError::MissingSeparator(s.to_string()))?;
        let code = code.trim();
        if code.is_empty() {
            return Err(ParseChoiceError::EmptyCode(s.to_string()));
        }
        Ok(Choice {
            code: code.into(),
            value: value.trim().into(),
        })
    }
}
