//! Plan resolution.
//!
//! Resolution is a pre-order walk from a root definition that produces
//! [`RenderEvent`]s: one `(text, depth)` pair per rendered line.
//!
//! - The root name is emitted at depth 0 and its item resolved at depth 1.
//! - A choice samples one option, emits it, and expands it one level deeper
//!   if it names a definition.
//! - A sequence resolves its children in order at its own depth.
//! - An alias emits its name and expands it one level deeper if it names a
//!   definition.
//!
//! A name matching no definition is a literal leaf and stops the walk on
//! that branch. Pending work is kept on an explicit stack, so deeply
//! nested sequences and long reference chains never grow the call stack. Resolution is all-or-nothing: any error discards the
//! events gathered so far.

use rand::Rng;
use regimen_foundation::{Error, Result};
use regimen_language::{Definition, Item, Plan};

use crate::config::ResolverConfig;
use crate::sampler::WeightedChoice;

// =============================================================================
// Render Event
// =============================================================================

/// One rendered line: resolved text and its nesting depth.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderEvent {
    /// Trimmed name or literal leaf.
    pub text: String,
    /// Nesting depth, 0 for the root.
    pub depth: usize,
}

impl RenderEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(text: impl Into<String>, depth: usize) -> Self {
        Self {
            text: text.into(),
            depth,
        }
    }

    /// Returns the event as a `(text, depth)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (&str, usize) {
        (&self.text, self.depth)
    }
}

// =============================================================================
// Root Selection
// =============================================================================

/// Which definition resolution starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Root<'a> {
    /// The first definition in the plan.
    #[default]
    First,
    /// The definition at a zero-based index.
    Index(usize),
    /// The first definition with this name (trimmed).
    Name(&'a str),
}

impl Root<'_> {
    /// Finds the root definition in `plan`.
    ///
    /// # Errors
    /// Returns an unknown root error if nothing matches, or a "no
    /// definitions" error for an empty plan.
    pub fn select<'p>(&self, plan: &'p Plan) -> Result<&'p Definition> {
        match *self {
            Self::First => plan.root().ok_or_else(Error::no_definitions),
            Self::Index(index) => plan
                .get(index)
                .ok_or_else(|| Error::unknown_root(format!("#{index}"))),
            Self::Name(name) => plan
                .lookup(name)
                .ok_or_else(|| Error::unknown_root(name.trim())),
        }
    }
}

impl From<usize> for Root<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for Root<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Walks a plan and produces render events.
#[derive(Clone, Debug)]
pub struct Resolver<'p> {
    /// The plan being resolved (read only).
    plan: &'p Plan,
    /// Depth limit.
    config: ResolverConfig,
}

impl<'p> Resolver<'p> {
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new(plan: &'p Plan) -> Self {
        Self {
            plan,
            config: ResolverConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves one realization of the plan starting at `root`.
    ///
    /// The generator is advanced once per choice, in traversal order.
    ///
    /// # Errors
    /// Returns an error for an unknown root, an invalid or all-zero weight
    /// list, or a reference chain deeper than the configured limit.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        root: Root<'_>,
        rng: &mut R,
    ) -> Result<Vec<RenderEvent>> {
        let root = root.select(self.plan)?;
        tracing::debug!(
            root = root.name(),
            max_depth = self.config.max_depth,
            "resolving plan"
        );

        let mut walk = Walk::new(self.plan, self.config.max_depth);
        walk.emit(root.name(), 0);
        if let Err(error) = walk.run(root, rng) {
            return Err(walk.annotate(error));
        }
        tracing::debug!(events = walk.events.len(), "resolved plan");

        Ok(walk.events)
    }
}

// =============================================================================
// Walk
// =============================================================================

/// Pending work, processed last in first out.
#[derive(Clone, Copy, Debug)]
enum Task<'p> {
    /// Resolve an item at a depth.
    Item(&'p Item, usize),
    /// A definition's body is finished.
    Leave,
}

/// State of one resolution. Work lives on the heap, so neither nested
/// sequences nor long reference chains grow the call stack.
struct Walk<'p> {
    plan: &'p Plan,
    max_depth: usize,
    tasks: Vec<Task<'p>>,
    /// Definitions being expanded, outermost first.
    chain: Vec<&'p str>,
    events: Vec<RenderEvent>,
}

impl<'p> Walk<'p> {
    fn new(plan: &'p Plan, max_depth: usize) -> Self {
        Self {
            plan,
            max_depth,
            tasks: Vec::new(),
            chain: Vec::new(),
            events: Vec::new(),
        }
    }

    fn run<R: Rng + ?Sized>(&mut self, root: &'p Definition, rng: &mut R) -> Result<()> {
        self.enter(root, 1)?;
        while let Some(task) = self.tasks.pop() {
            match task {
                Task::Item(item, depth) => self.step(item, depth, rng)?,
                Task::Leave => {
                    self.chain.pop();
                }
            }
        }
        Ok(())
    }

    /// Schedules a definition's item at `depth`, guarding the depth limit.
    fn enter(&mut self, definition: &'p Definition, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::depth_exceeded(self.max_depth, definition.name()));
        }
        self.chain.push(definition.name());
        self.tasks.push(Task::Leave);
        self.tasks.push(Task::Item(&definition.item, depth));
        Ok(())
    }

    fn step<R: Rng + ?Sized>(&mut self, item: &'p Item, depth: usize, rng: &mut R) -> Result<()> {
        match item {
            Item::Choice(weights, _) => {
                let choice = WeightedChoice::from_weights(weights)?;
                let picked = choice.sample(rng)?;
                tracing::debug!(
                    options = choice.len(),
                    total = choice.total(),
                    picked,
                    depth,
                    "sampled choice"
                );
                self.emit(picked, depth);
                self.follow(picked, depth)
            }
            Item::Sequence(items, _) => {
                // Reversed so the first child is popped first.
                self.tasks
                    .extend(items.iter().rev().map(|child| Task::Item(child, depth)));
                Ok(())
            }
            Item::Alias(name, _) => {
                let name = name.trim();
                self.emit(name, depth);
                self.follow(name, depth)
            }
        }
    }

    /// Expands `name` one level down if it names a definition.
    fn follow(&mut self, name: &str, depth: usize) -> Result<()> {
        let plan = self.plan;
        match plan.lookup(name) {
            Some(definition) => self.enter(definition, depth + 1),
            None => {
                if let Some(near) = plan.names().find(|n| n.eq_ignore_ascii_case(name)) {
                    tracing::warn!(
                        name,
                        near,
                        "treating name as a literal leaf; a definition differs only in case"
                    );
                }
                Ok(())
            }
        }
    }

    fn emit(&mut self, text: &str, depth: usize) {
        tracing::trace!(text, depth, "emit");
        self.events.push(RenderEvent::new(text, depth));
    }

    /// Attaches the definitions being expanded, innermost first.
    fn annotate(&self, error: Error) -> Error {
        self.chain
            .iter()
            .rev()
            .fold(error, |error, name| error.in_frame(*name))
    }
}

/// Resolves `plan` from `root` with the default configuration.
///
/// # Errors
/// See [`Resolver::resolve`].
pub fn resolve<'a, R: Rng + ?Sized>(
    plan: &Plan,
    root: impl Into<Root<'a>>,
    rng: &mut R,
) -> Result<Vec<RenderEvent>> {
    Resolver::new(plan).resolve(root.into(), rng)
}
