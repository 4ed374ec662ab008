use super::*;

/// Content card shown in a [`Deck`].
pub struct Card {
    id: ComponentId,
    title: Content,
    description: Option<Content>,
    image: Option<Image>,
    marker: Option<String>,
    actions: Vec<Node>,
    classes: ClassSet,
    appearance: Appearance,
    outline: bool,
}

capabilities!(Card: classes, appearance, outline);

impl Card {
    /// Card headed by `title`.
    pub fn new(title: impl Into<Content>) -> Self {
        Self {
            id: ComponentId::next(),
            title: title.into(),
            description: None,
            image: None,
            marker: None,
            actions: Vec::new(),
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            outline: false,
        }
    }

    /// Body text below the title.
    pub fn with_description(mut self, description: impl Into<Content>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Top image.
    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image.add_classes("card-img-top"));
        self
    }

    /// Muted footer note.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Buttons or anchors placed at the bottom of the card body.
    pub fn with_actions(mut self, actions: Vec<Node>) -> Self {
        self.actions = actions;
        self
    }
}

impl Component for Card {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Card
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("card h-100");
        for class in surface_classes(self.appearance, self.outline, "text-bg") {
            classes.add(&class);
        }
        classes.extend(&self.classes);

        let mut body = format!(
            "<h5 class=\"card-title\">{}</h5>",
            self.title.to_html(ctx)?
        );
        if let Some(description) = &self.description {
            body.push_str(&format!(
                "<p class=\"card-text\">{}</p>",
                description.to_html(ctx)?
            ));
        }
        write_children(&self.actions, &mut body, ctx)?;

        let mut inner = String::new();
        if let Some(image) = &self.image {
            image.write_html(&mut inner, ctx)?;
        }
        inner.push_str(&wrap_div("card-body", &body));
        if let Some(marker) = &self.marker {
            inner.push_str(&wrap_div(
                "card-footer",
                &format!("<small class=\"text-body-secondary\">{}</small>", escape(marker)),
            ));
        }

        out.push_str(&format!(
            "<div{}{}>{inner}</div>",
            attr("id", self.id.to_string()),
            classes.attr()
        ));
        Ok(())
    }
}

/// Responsive grid of equally sized [`Card`]s.
pub struct Deck {
    id: ComponentId,
    cards: Vec<Node>,
    columns: u8,
    classes: ClassSet,
}

capabilities!(Deck: classes);

impl Deck {
    /// Deck over `cards`, three per row from the `md` breakpoint up.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Type`] when any child is not a [`Card`].
    pub fn new(cards: Vec<Node>) -> UiResult<Self> {
        expect_kind(&cards, ComponentKind::Card, "Deck")?;
        Ok(Self {
            id: ComponentId::next(),
            cards,
            columns: 3,
            classes: ClassSet::new(),
        })
    }

    /// Cards per row from the `md` breakpoint up (clamped to 1..=6).
    pub fn with_columns(mut self, columns: u8) -> Self {
        self.columns = columns.clamp(1, 6);
        self
    }
}

impl Component for Deck {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Deck
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("row row-cols-1 g-4");
        classes.add(&format!("row-cols-md-{}", self.columns));
        classes.extend(&self.classes);

        let mut body = String::new();
        for card in &self.cards {
            body.push_str(&wrap_div("col", &card.render_with(ctx)?));
        }
        out.push_str(&format!(
            "<div{}{}>{body}</div>",
            attr("id", self.id.to_string()),
            classes.attr()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{nodes, Button, Separator};

    #[test]
    fn deck_rejects_non_card_children() {
        let result = Deck::new(nodes![Card::new("a"), Separator::new()]);
        assert!(matches!(result.err(), Some(UiError::Type(_))));
    }

    #[test]
    fn card_layout_orders_image_body_footer() {
        let card = Card::new("Plan")
            .with_image(Image::new("/plan.png"))
            .with_description("Monthly")
            .with_marker("updated today")
            .with_actions(nodes![Button::new("Buy").as_primary()]);
        let html = card.render().unwrap();

        let image = html.find("card-img-top").unwrap();
        let body = html.find("card-body").unwrap();
        let footer = html.find("card-footer").unwrap();
        assert!(image < body && body < footer);
        assert!(html.starts_with(&format!("<div id=\"{}\" class=\"card h-100\">", card.id())));
        assert!(html.contains("<h5 class=\"card-title\">Plan</h5><p class=\"card-text\">Monthly</p>"));
    }

    #[test]
    fn deck_wraps_each_card_in_a_column() {
        let deck = Deck::new(nodes![Card::new("a"), Card::new("b")])
            .unwrap()
            .with_columns(2);
        let html = deck.render().unwrap();

        assert!(html.starts_with(&format!(
            "<div id=\"{}\" class=\"row row-cols-1 g-4 row-cols-md-2\">",
            deck.id()
        )));
        assert_eq!(html.matches("<div class=\"col\">").count(), 2);
    }
}
