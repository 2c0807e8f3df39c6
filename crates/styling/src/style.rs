//! Reusable style objects.
//!
//! A [`Style`] is parsed once and then applied to many items. It can carry a
//! name for bookkeeping and a joiner that flattens a sequence of parts into
//! one string before styling.

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::error::Result;
use crate::render::{AnsiRenderer, Render};
use crate::styledef::{styledef, Overrides, StyleDef};

/// Flattens parts into a single string before styling.
pub type Joiner = dyn Fn(&[String]) -> String + Send + Sync;

/// A parsed, immutable style that can be applied repeatedly.
///
/// # Example
///
/// ```
/// use styling::Style;
///
/// let path = Style::builder()
///     .name("path")
///     .spec("cyan+underline")
///     .join(|parts| parts.join("/"))
///     .build()
///     .unwrap();
///
/// assert_eq!(path.name(), Some("path"));
/// assert!(path.apply_parts(["usr", "local", "bin"]).contains("usr/local/bin"));
/// ```
#[derive(Clone)]
pub struct Style {
    name: Option<String>,
    join: Option<Arc<Joiner>>,
    def: StyleDef,
    renderer: Arc<dyn Render>,
}

impl Style {
    /// Start building a style.
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Parse `specs` into a style with no name, no joiner and the ANSI renderer.
    pub fn new(specs: &[&str], overrides: &Overrides) -> Result<Self> {
        Self::builder().specs(specs).overrides(overrides.clone()).build()
    }

    /// The label given at construction, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The parsed style.
    pub fn def(&self) -> &StyleDef {
        &self.def
    }

    /// Style a single item.
    ///
    /// A joiner, when present, sees the item as a one-part sequence.
    pub fn apply<T: Display + ?Sized>(&self, item: &T) -> String {
        let text = item.to_string();
        let text = match &self.join {
            Some(join) => join(std::slice::from_ref(&text)),
            None => text,
        };
        self.finish(text)
    }

    /// Join `parts` and style the result.
    ///
    /// Without a joiner the parts are concatenated.
    pub fn apply_parts<I, T>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let parts: Vec<String> = parts.into_iter().map(|p| p.to_string()).collect();
        let text = match &self.join {
            Some(join) => join(&parts),
            None => parts.concat(),
        };
        self.finish(text)
    }

    fn finish(&self, text: String) -> String {
        if self.def.is_empty() {
            text
        } else {
            self.renderer.render_def(&text, &self.def)
        }
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("name", &self.name)
            .field("join", &self.join.is_some())
            .field("def", &self.def)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Style`].
///
/// `name` and `join` are consumed here; specs and overrides are parsed by
/// [`styledef`] when [`build`](StyleBuilder::build) is called.
#[derive(Default)]
pub struct StyleBuilder {
    name: Option<String>,
    join: Option<Arc<Joiner>>,
    specs: Vec<String>,
    overrides: Overrides,
    renderer: Option<Arc<dyn Render>>,
}

impl StyleBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn join<F>(mut self, join: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        let join: Arc<Joiner> = Arc::new(join);
        self.join = Some(join);
        self
    }

    /// Add one spec string. Specs merge in the order they are added.
    pub fn spec(mut self, spec: impl Into<String>) -> Self {
        self.specs.push(spec.into());
        self
    }

    pub fn specs(mut self, specs: &[&str]) -> Self {
        self.specs.extend(specs.iter().map(|s| s.to_string()));
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use a renderer other than [`AnsiRenderer`].
    pub fn renderer<R: Render + 'static>(mut self, renderer: R) -> Self {
        let renderer: Arc<dyn Render> = Arc::new(renderer);
        self.renderer = Some(renderer);
        self
    }

    /// Parse the collected specs.
    ///
    /// # Errors
    ///
    /// Any [`StyleError`](crate::StyleError) from parsing.
    pub fn build(self) -> Result<Style> {
        let specs: Vec<&str> = self.specs.iter().map(String::as_str).collect();
        let def = styledef(&specs, &self.overrides)?;
        log::debug!("built style {:?}: {:?}", self.name, def);
        let renderer: Arc<dyn Render> = match self.renderer {
            Some(renderer) => renderer,
            None => Arc::new(AnsiRenderer),
        };
        Ok(Style {
            name: self.name,
            join: self.join,
            def,
            renderer,
        })
    }
}
