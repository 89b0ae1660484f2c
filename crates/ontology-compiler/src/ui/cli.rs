use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "ontology-compiler")]
#[command(author, version, about = "Schema-to-artifact ontology compiler for a wiki-hosted knowledge base")]
#[command(propagate_version = true)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Coloring
  #[arg(
    long,
    value_enum,
    value_name = "WHEN",
    default_value = "auto",
    global = true,
    display_order = 100,
    help_heading = "Terminal Output"
  )]
  pub color: ColorMode,

  /// Theme
  #[arg(
    long,
    value_enum,
    value_name = "THEME",
    default_value = "auto",
    global = true,
    display_order = 100,
    help_heading = "Terminal Output"
  )]
  pub theme: ThemeMode,

  /// Enable verbose output with detailed progress information
  #[arg(
    short,
    long,
    default_value_t = false,
    global = true,
    display_order = 101,
    help_heading = "Terminal Output"
  )]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(
    short,
    long,
    default_value_t = false,
    global = true,
    display_order = 102,
    help_heading = "Terminal Output"
  )]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Load, validate, and persist a schema document against the wiki
  Import(ImportCommand),
  /// Recompute artifacts for one or more categories
  Regenerate(RegenerateCommand),
  /// Resolve one or more categories live, with no persistence
  Resolve(ResolveCommand),
  /// List categories, properties, and subobjects defined in a schema file
  List(ListCommand),
  /// Run the layered base-ontology installation
  Install(InstallCommand),
}

#[derive(Args, Debug, Clone)]
pub struct ImportCommand {
  /// Path to the schema document (JSON or YAML, auto-detected)
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 0,
    help_heading = "Required"
  )]
  pub input: PathBuf,

  /// Path to the persisted state document
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 1,
    help_heading = "Required"
  )]
  pub state: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct RegenerateCommand {
  /// Path to the schema document (JSON or YAML, auto-detected)
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 0,
    help_heading = "Required"
  )]
  pub input: PathBuf,

  /// Path to the persisted state document
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 1,
    help_heading = "Required"
  )]
  pub state: PathBuf,

  /// Categories to regenerate (repeat or comma-separate)
  #[arg(
    group = "scope",
    long,
    value_delimiter = ',',
    value_name = "name_1,name_2,...",
    display_order = 10,
    help_heading = "Scope"
  )]
  pub category: Vec<String>,

  /// Regenerate every category defined in the schema
  #[arg(group = "scope", long, default_value_t = false, display_order = 11, help_heading = "Scope")]
  pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ResolveCommand {
  /// Path to the schema document (JSON or YAML, auto-detected)
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 0,
    help_heading = "Required"
  )]
  pub input: PathBuf,

  /// Categories to resolve together (repeat or comma-separate, `Category:` prefix optional)
  #[arg(long, value_delimiter = ',', value_name = "name_1,name_2,...", display_order = 10)]
  pub category: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListCommand {
  /// Path to the schema document (JSON or YAML, auto-detected)
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 0,
    help_heading = "Required"
  )]
  pub input: PathBuf,

  #[command(subcommand)]
  pub what: ListWhat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ListWhat {
  /// List every category in the schema
  Categories,
  /// List every property in the schema
  Properties,
  /// List every subobject in the schema
  Subobjects,
}

#[derive(Args, Debug, Clone)]
pub struct InstallCommand {
  /// Path to the schema document (JSON or YAML, auto-detected)
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 0,
    help_heading = "Required"
  )]
  pub input: PathBuf,

  /// Path to the persisted state document
  #[arg(
    short,
    long,
    value_name = "FILE",
    value_hint = ValueHint::AnyPath,
    display_order = 1,
    help_heading = "Required"
  )]
  pub state: PathBuf,

  /// Seconds to wait for the semantic backend to reach quiescence between layers
  #[arg(long, default_value_t = 30, display_order = 20, help_heading = "Installation")]
  pub quiescence_timeout_secs: u64,
}
