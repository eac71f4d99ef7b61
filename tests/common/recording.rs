//! Recording collaborators: a [`Renderer`] and a [`Navigator`] that remember
//! every call so harnesses can assert on the exact interaction.

use folio_core::{
    dropdown::{DropdownView, Focus, Navigator, Renderer},
    NavTarget,
};

/// What the renderer was last asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Hidden,
    Rows(Vec<String>),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Render { query: String, urls: Vec<String> },
    Placeholder { query: String },
    Focus(Focus),
    Clear,
}

#[derive(Debug)]
pub struct Screen {
    pub shown: Shown,
    pub focus: Focus,
    pub calls: Vec<RenderCall>,
}

impl Default for Screen {
    fn default() -> Self {
        Self { shown: Shown::Hidden, focus: Focus::Input, calls: Vec::new() }
    }
}

impl Renderer for Screen {
    fn render(&mut self, view: DropdownView<'_>, query: &str) {
        match view {
            DropdownView::Results(rows) => {
                let urls: Vec<String> = rows.iter().map(|e| e.url.clone()).collect();
                self.shown = Shown::Rows(rows.iter().map(|e| e.title.clone()).collect());
                self.calls.push(RenderCall::Render { query: query.to_string(), urls });
            }
            DropdownView::NoMatches => {
                self.shown = Shown::Placeholder;
                self.calls.push(RenderCall::Placeholder { query: query.to_string() });
            }
        }
        self.focus = Focus::Input;
    }

    fn focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.calls.push(RenderCall::Focus(focus));
    }

    fn clear(&mut self) {
        self.shown = Shown::Hidden;
        self.calls.push(RenderCall::Clear);
    }
}

#[derive(Debug, Default)]
pub struct History {
    pub visited: Vec<NavTarget>,
}

impl Navigator for History {
    fn navigate(&mut self, target: NavTarget) {
        self.visited.push(target);
    }
}
