//! Declarative content shown inside modals.
//!
//! Documents are data, not markup: each adapter decides how to render a
//! [`Block`]. Nesting is limited to one level ([`Section`] holds [`Leaf`]s)
//! which keeps template renderers simple.

use crate::addon::Addon;

/// A titled piece of static content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Addons listed in the document, if it embeds a catalog grid.
    #[must_use]
    pub fn addons(&self) -> &[Addon] {
        self.blocks
            .iter()
            .find_map(|b| match b {
                Block::AddonGrid(addons) => Some(addons.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Flattened text content, handy for search and assertions.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            block.write_text(&mut out);
        }
        out
    }
}

/// Top-level content element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(Vec<Inline>),
    List(Vec<Vec<Inline>>),
    Section(Section),
    AddonGrid(Vec<Addon>),
}

impl Block {
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Paragraph(vec![Inline::text(text)])
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Self::Heading(text) => push_line(out, text),
            Self::Paragraph(runs) => write_runs(out, runs),
            Self::List(items) => items.iter().for_each(|runs| write_runs(out, runs)),
            Self::Section(section) => {
                if let Some(heading) = &section.heading {
                    push_line(out, heading);
                }
                for leaf in &section.body {
                    match leaf {
                        Leaf::Paragraph(runs) => write_runs(out, runs),
                        Leaf::List(items) => items.iter().for_each(|runs| write_runs(out, runs)),
                    }
                }
            }
            Self::AddonGrid(addons) => {
                for addon in addons {
                    push_line(out, &addon.name);
                    push_line(out, &addon.description);
                }
            }
        }
    }
}

/// Visual tone of a [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
}

impl Tone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info-section",
            Self::Warning => "warning-section",
        }
    }
}

/// A boxed group of paragraphs and lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub tone: Tone,
    pub heading: Option<String>,
    pub body: Vec<Leaf>,
}

impl Section {
    #[must_use]
    pub fn info(heading: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            heading: Some(heading.into()),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn warning() -> Self {
        Self {
            tone: Tone::Warning,
            heading: None,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn leaf(mut self, leaf: Leaf) -> Self {
        self.body.push(leaf);
        self
    }
}

/// Content allowed inside a [`Section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    Paragraph(Vec<Inline>),
    List(Vec<Vec<Inline>>),
}

impl Leaf {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Paragraph(vec![Inline::text(text)])
    }
}

/// A run of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Highlight(String),
    Strong(String),
    /// Icon class including its set, e.g. `fas fa-moon`.
    Icon(String),
}

impl Inline {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn highlight(text: impl Into<String>) -> Self {
        Self::Highlight(text.into())
    }

    #[must_use]
    pub fn strong(text: impl Into<String>) -> Self {
        Self::Strong(text.into())
    }

    #[must_use]
    pub fn icon(class: impl Into<String>) -> Self {
        Self::Icon(class.into())
    }
}

fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn write_runs(out: &mut String, runs: &[Inline]) {
    for run in runs {
        match run {
            Inline::Text(text) | Inline::Highlight(text) | Inline::Strong(text) => {
                out.push_str(text);
            }
            Inline::Icon(_) => {}
        }
    }
    out.push('\n');
}
