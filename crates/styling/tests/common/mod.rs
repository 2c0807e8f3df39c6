//! Shared test helpers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use styling::{Color, Modifiers, Render};

/// Renders styles as readable tags and counts how often it was called.
#[derive(Clone, Default)]
pub struct TagRenderer {
    calls: Arc<AtomicUsize>,
}

impl TagRenderer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Render for TagRenderer {
    fn render(
        &self,
        text: &str,
        fg: Option<&Color>,
        bg: Option<&Color>,
        style: Option<&Modifiers>,
    ) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut tag = Vec::new();
        if let Some(fg) = fg {
            tag.push(format!("fg={}", fg));
        }
        if let Some(bg) = bg {
            tag.push(format!("bg={}", bg));
        }
        if let Some(style) = style {
            tag.push(format!("style={}", style));
        }
        format!("<{}>{}</>", tag.join(" "), text)
    }
}
