//! Loading a plan and producing realizations from it.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use regimen_engine::{
    DEFAULT_INDENT, RenderEvent, Renderer, Resolver, ResolverConfig, Root, rng,
};
use regimen_language::{Plan, parse};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};

/// Plan file read when none is named.
pub const DEFAULT_PLAN_PATH: &str = "plan.txt";

/// A small running plan used by `--example`.
pub const EXAMPLE_PLAN: &str = "\
workout { run : 2 | swim : 1 }
run { tempo : 2 | LSD : 1 | interval: 5 }
interval [ (lap), (rest) ]
lap { 1/4 mile : 1 | 1/2 mile : 1 }
rest { 2 minutes : 2 | 3 minutes : 2 | 4 minutes : 1 }
";

// =============================================================================
// Plan Sources
// =============================================================================

/// Where plan text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanSource {
    /// A file on disk.
    File(PathBuf),
    /// Text supplied directly, with a name used in error messages.
    Inline {
        /// Label for diagnostics.
        name: String,
        /// The plan text.
        text: String,
    },
    /// The built-in example plan.
    Example,
}

impl PlanSource {
    /// Creates an inline source.
    #[must_use]
    pub fn inline(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Inline {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Reads the plan text.
    ///
    /// # Errors
    /// Returns a read error naming the path if the file cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => fs::read_to_string(path).map_err(|source| RuntimeError::Read {
                path: path.clone(),
                source,
            }),
            Self::Inline { text, .. } => Ok(text.clone()),
            Self::Example => Ok(EXAMPLE_PLAN.to_string()),
        }
    }
}

impl Default for PlanSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_PLAN_PATH))
    }
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline { name, .. } => f.write_str(name),
            Self::Example => f.write_str("<example>"),
        }
    }
}

// =============================================================================
// Run Options
// =============================================================================

/// How realizations are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented lines.
    #[default]
    Text,
    /// A JSON document with the seed and every event.
    Json,
}

/// Settings for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Definition to start from; the first definition when `None`.
    pub root: Option<String>,
    /// Generator seed; drawn from OS entropy when `None`.
    pub seed: Option<u64>,
    /// Resolver limits.
    pub resolver: ResolverConfig,
    /// Indentation per depth level in text output.
    pub indent: String,
    /// Number of realizations to produce.
    pub count: usize,
    /// Output encoding.
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: None,
            seed: None,
            resolver: ResolverConfig::default(),
            indent: DEFAULT_INDENT.to_string(),
            count: 1,
            format: OutputFormat::Text,
        }
    }
}

impl RunOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to start from a named definition.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Builder method to fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the maximum expansion depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.resolver = self.resolver.with_max_depth(max_depth);
        self
    }

    /// Builder method to set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Builder method to set the number of realizations.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn root(&self) -> Root<'_> {
        self.root.as_deref().map_or(Root::First, Root::Name)
    }
}

// =============================================================================
// Realizations
// =============================================================================

/// The events of one or more resolutions drawn from a single seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Realization {
    /// Seed the generator was created from.
    pub seed: u64,
    /// Name of the root definition.
    pub root: String,
    /// One event list per resolution, in order.
    pub runs: Vec<Vec<RenderEvent>>,
}

impl Realization {
    /// Writes the realization in `format`.
    ///
    /// Text runs are separated by a blank line.
    ///
    /// # Errors
    /// Returns a write or encoding error from the sink.
    pub fn write<W: Write + ?Sized>(
        &self,
        format: OutputFormat,
        renderer: &Renderer,
        out: &mut W,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for (i, events) in self.runs.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    renderer.write(events, out)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Session
// =============================================================================

/// A parsed plan together with where it came from.
#[derive(Clone, Debug)]
pub struct Session {
    source: PlanSource,
    plan: Plan,
}

impl Session {
    /// Reads and parses a plan.
    ///
    /// # Errors
    /// Returns a read error, or a syntax error tagged with the source name.
    pub fn load(source: PlanSource) -> Result<Self> {
        let text = source.read()?;
        let plan = parse(&text).map_err(|e| e.with_source(source.to_string()))?;
        debug!(%source, definitions = plan.len(), "loaded plan");
        Ok(Self { source, plan })
    }

    /// Parses plan text supplied directly.
    ///
    /// # Errors
    /// Returns a syntax error tagged with `name`.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        Self::load(PlanSource::inline(name, text))
    }

    /// Returns the parsed plan.
    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Returns where the plan came from.
    #[must_use]
    pub fn source(&self) -> &PlanSource {
        &self.source
    }

    /// Resolves the plan `options.count` times from one generator.
    ///
    /// # Errors
    /// Returns the first resolution error, tagged with the source name.
    pub fn realize(&self, options: &RunOptions) -> Result<Realization> {
        let seed = options.seed.unwrap_or_else(rng::entropy_seed);
        info!(seed, "seeding generator");

        let root = options.root();
        let root_name = root
            .select(&self.plan)
            .map_err(|e| e.with_source(self.source.to_string()))?
            .name()
            .to_string();

        let resolver = Resolver::new(&self.plan).with_config(options.resolver.clone());
        let mut generator = rng::seeded(seed);
        let runs = (0..options.count)
            .map(|_| resolver.resolve(root, &mut generator))
            .collect::<regimen_foundation::Result<Vec<_>>>()
            .map_err(|e| e.with_source(self.source.to_string()))?;

        Ok(Realization {
            seed,
            root: root_name,
            runs,
        })
    }

    /// Resolves the plan and writes the result to `out`.
    ///
    /// Nothing is written unless every resolution succeeds.
    ///
    /// # Errors
    /// Returns a resolution, write, or encoding error.
    pub fn run<W: Write + ?Sized>(&self, options: &RunOptions, out: &mut W) -> Result<Realization> {
        let realization = self.realize(options)?;
        let renderer = Renderer::new().with_indent(options.indent.clone());
        realization.write(options.format, &renderer, out)?;
        Ok(realization)
    }
}
