use super::*;

/// Top navigation bar: logo and brand, navigation anchors, then actions on the far side.
///
/// The bar collapses behind a toggler below the `lg` breakpoint.
pub struct Menu {
    id: ComponentId,
    logo: Option<Image>,
    brand: Node,
    home: String,
    anchors: Vec<Anchor>,
    actions: Vec<Node>,
    classes: ClassSet,
    appearance: Appearance,
}

capabilities!(Menu: classes, appearance);

impl Menu {
    /// Menu bar with an optional `logo`, a `brand` text, navigation `anchors` and `actions`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Type`] when `brand` is not a [`Text`].
    pub fn new(
        logo: Option<Image>,
        brand: impl IntoNode,
        anchors: Vec<Anchor>,
        actions: Vec<Node>,
    ) -> UiResult<Self> {
        let brand = brand.into_node();
        if brand.kind() != ComponentKind::Text {
            return Err(UiError::type_error(format!(
                "menu brand must be a Text, got {}",
                brand.kind().name()
            )));
        }
        Ok(Self {
            id: ComponentId::next(),
            logo: logo.map(|logo| logo.add_classes("d-inline-block align-text-top me-2")),
            brand,
            home: "/".to_string(),
            anchors: anchors
                .into_iter()
                .map(|anchor| anchor.add_classes("nav-link"))
                .collect(),
            actions,
            classes: ClassSet::new(),
            appearance: Appearance::default(),
        })
    }

    /// Destination of the brand link (`/` by default).
    pub fn with_home(mut self, url: impl Into<String>) -> Self {
        self.home = url.into();
        self
    }
}

impl Component for Menu {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Menu
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("navbar navbar-expand-lg");
        if let Some(class) = self.appearance.class("bg") {
            classes.add(&class);
        }
        classes.extend(&self.classes);

        let mut brand = String::new();
        if let Some(logo) = &self.logo {
            logo.write_html(&mut brand, ctx)?;
        }
        self.brand.write_html(&mut brand, ctx)?;

        let collapse_id = self.id.suffixed("nav");
        let toggler = format!(
            "<button{}{}{}{}{}{}{}><span class=\"navbar-toggler-icon\"></span></button>",
            attr("class", "navbar-toggler"),
            attr("type", "button"),
            attr("data-bs-toggle", "collapse"),
            attr("data-bs-target", format!("#{collapse_id}")),
            attr("aria-controls", &collapse_id),
            attr("aria-expanded", "false"),
            attr("aria-label", "Toggle navigation")
        );

        let mut items = String::new();
        for anchor in &self.anchors {
            items.push_str(&format!(
                "<li class=\"nav-item\">{}</li>",
                anchor.render_with(ctx)?
            ));
        }
        let mut collapsed = format!("<ul class=\"navbar-nav me-auto mb-2 mb-lg-0\">{items}</ul>");
        if !self.actions.is_empty() {
            let mut actions = String::new();
            write_children(&self.actions, &mut actions, ctx)?;
            collapsed.push_str(&wrap_div("d-flex gap-2", &actions));
        }

        let container = format!(
            "<a{}{}>{brand}</a>{toggler}<div{}{}>{collapsed}</div>",
            attr("class", "navbar-brand"),
            attr("href", &self.home),
            attr("id", &collapse_id),
            attr("class", "collapse navbar-collapse")
        );
        out.push_str(&format!(
            "<nav{}{}>{}</nav>",
            attr("id", self.id.to_string()),
            classes.attr(),
            wrap_div("container-fluid", &container)
        ));
        Ok(())
    }
}
