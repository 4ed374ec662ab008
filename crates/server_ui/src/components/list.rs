use super::*;

#[derive(Debug)]
/// Entry of a [`List`].
pub struct ListItem {
    id: ComponentId,
    title: Content,
    description: Option<Content>,
    marker: Option<String>,
    active: bool,
    classes: ClassSet,
    appearance: Appearance,
    disabled: bool,
    action: ActionBinding,
}

capabilities!(ListItem: classes, appearance, availability, action);

impl ListItem {
    /// Item headed by `title`.
    pub fn new(title: impl Into<Content>) -> Self {
        Self {
            id: ComponentId::next(),
            title: title.into(),
            description: None,
            marker: None,
            active: false,
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            disabled: false,
            action: ActionBinding::Unbound,
        }
    }

    /// Secondary text below the title.
    pub fn with_description(mut self, description: impl Into<Content>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Short trailing note (a date, a count).
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Highlights the item as the current selection.
    pub fn as_active(mut self) -> Self {
        self.active = true;
        self
    }

    fn body(&self, ctx: &mut RenderContext) -> UiResult<String> {
        let title = self.title.to_html(ctx)?;
        if self.description.is_none() && self.marker.is_none() {
            return Ok(title);
        }

        let marker = self
            .marker
            .as_deref()
            .map(|marker| format!("<small>{}</small>", escape(marker)))
            .unwrap_or_default();
        let mut body = wrap_div(
            "d-flex w-100 justify-content-between",
            &format!("<h5 class=\"mb-1\">{title}</h5>{marker}"),
        );
        if let Some(description) = &self.description {
            body.push_str(&format!(
                "<p class=\"mb-1\">{}</p>",
                description.to_html(ctx)?
            ));
        }
        Ok(body)
    }
}

impl Component for ListItem {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::ListItem
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let action = self.action.resolve(ActionHost::Button, ctx)?;

        let mut classes = ClassSet::from("list-group-item");
        if action != ResolvedAction::None {
            classes.add("list-group-item-action");
        }
        if let Some(class) = self.appearance.class("list-group-item") {
            classes.add(&class);
        }
        if self.active {
            classes.add("active");
        }
        classes.extend(&self.classes);

        let body = self.body(ctx)?;
        let id = attr("id", self.id.to_string());
        let current = if self.active {
            attr("aria-current", "true")
        } else {
            String::new()
        };
        match action {
            ResolvedAction::None => {
                if self.disabled {
                    classes.add("disabled");
                }
                out.push_str(&format!(
                    "<div{id}{}{current}{}>{body}</div>",
                    classes.attr(),
                    if self.disabled {
                        attr("aria-disabled", "true")
                    } else {
                        String::new()
                    }
                ));
            }
            ResolvedAction::Href(_) => {
                if self.disabled {
                    classes.add("disabled");
                }
                out.push_str(&format!(
                    "<a{id}{}{}{current}{}>{body}</a>",
                    classes.attr(),
                    action.anchor_attrs(),
                    super::anchor::disabled_link_attrs(self.disabled)
                ));
            }
            _ => {
                out.push_str(&format!(
                    "<button{id}{}{}{current}{}>{body}</button>",
                    classes.attr(),
                    action.button_attrs(),
                    flag("disabled", self.disabled)
                ));
            }
        }
        Ok(())
    }
}

/// Bootstrap list group made of [`ListItem`]s.
pub struct List {
    id: ComponentId,
    items: Vec<Node>,
    flush: bool,
    horizontal: bool,
    classes: ClassSet,
}

capabilities!(List: classes);

impl List {
    /// List over `items`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Type`] when any child is not a [`ListItem`].
    pub fn new(items: Vec<Node>) -> UiResult<Self> {
        expect_kind(&items, ComponentKind::ListItem, "List")?;
        Ok(Self {
            id: ComponentId::next(),
            items,
            flush: false,
            horizontal: false,
            classes: ClassSet::new(),
        })
    }

    /// Removes outer borders so the list sits flush inside a parent.
    pub fn as_flush(mut self) -> Self {
        self.flush = true;
        self
    }

    /// Lays items out in a row.
    pub fn as_horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }
}

impl Component for List {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::List
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("list-group");
        if self.flush {
            classes.add("list-group-flush");
        }
        if self.horizontal {
            classes.add("list-group-horizontal");
        }
        classes.extend(&self.classes);

        let mut body = String::new();
        write_children(&self.items, &mut body, ctx)?;
        out.push_str(&format!(
            "<div{}{}>{body}</div>",
            attr("id", self.id.to_string()),
            classes.attr()
        ));
        Ok(())
    }
}
