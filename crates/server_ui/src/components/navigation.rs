use leptos::logging::warn;

use super::*;

struct NavEntry {
    anchor: Anchor,
    pane: Panel,
    active: bool,
}

/// Tab/pill navigation with linked content panes.
///
/// Every appended entry becomes a nav link toggling a freshly created pane that wraps the entry's
/// content. The caller decides which entries start active; zero or several active entries are
/// rendered as given.
pub struct Navigation {
    id: ComponentId,
    entries: Vec<NavEntry>,
    tabs: bool,
    pills: bool,
    vertical: bool,
    classes: ClassSet,
}

capabilities!(Navigation: classes);

impl Navigation {
    /// Empty navigation.
    pub fn new() -> Self {
        Self {
            id: ComponentId::next(),
            entries: Vec::new(),
            tabs: false,
            pills: false,
            vertical: false,
            classes: ClassSet::new(),
        }
    }

    /// Adds an entry named `name` showing `content` when selected.
    pub fn append(mut self, name: impl Into<String>, content: impl IntoNode, active: bool) -> Self {
        let mut pane = Panel::new(vec![content.into_node()]).add_classes("tab-pane fade");
        if active {
            pane = pane.add_classes("show active");
        }
        let mut anchor = Anchor::new(name.into())
            .add_classes("nav-link")
            .toggle(&pane);
        if active {
            anchor = anchor.add_classes("active");
        }
        self.entries.push(NavEntry {
            anchor,
            pane,
            active,
        });
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry was appended.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tab styling (`nav-tabs`).
    pub fn as_tabs(mut self) -> Self {
        self.tabs = true;
        self
    }

    /// Pill styling (`nav-pills`).
    pub fn as_pills(mut self) -> Self {
        self.pills = true;
        self
    }

    /// Stacks links in a column beside the panes.
    pub fn as_vertical(mut self) -> Self {
        self.vertical = true;
        self
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Navigation {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Navigation
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let active = self.entries.iter().filter(|entry| entry.active).count();
        if !self.entries.is_empty() && active != 1 {
            warn!(
                "navigation {} has {active} active entries; exactly one pane is expected to show initially",
                self.id
            );
        }

        let mut classes = ClassSet::from("nav");
        if self.tabs {
            classes.add("nav-tabs");
        }
        if self.pills {
            classes.add("nav-pills");
        }
        if self.vertical {
            classes.add("flex-column me-3");
        }
        classes.extend(&self.classes);

        let mut links = String::new();
        let mut panes = String::new();
        for entry in &self.entries {
            entry.anchor.write_html(&mut links, ctx)?;
            entry.pane.write_html(&mut panes, ctx)?;
        }

        let orientation = if self.vertical {
            attr("aria-orientation", "vertical")
        } else {
            String::new()
        };
        let markup = format!(
            "<div{}{}{}{orientation}>{links}</div>{}",
            attr("id", self.id.to_string()),
            classes.attr(),
            attr("role", "tablist"),
            wrap_div("tab-content", &panes)
        );
        if self.vertical {
            out.push_str(&wrap_div("d-flex align-items-start", &markup));
        } else {
            out.push_str(&markup);
        }
        Ok(())
    }
}
