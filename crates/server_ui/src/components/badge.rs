use super::*;

#[derive(Debug, Clone)]
/// Small count or label badge.
pub struct Badge {
    id: ComponentId,
    text: String,
    classes: ClassSet,
    appearance: Appearance,
    pill: bool,
}

capabilities!(Badge: classes, appearance);

impl Badge {
    /// Badge showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            text: text.into(),
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            pill: false,
        }
    }

    /// Fully rounded corners.
    pub fn as_pill(mut self) -> Self {
        self.pill = true;
        self
    }
}

impl Component for Badge {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Badge
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("badge");
        if let Some(class) = self.appearance.class("text-bg") {
            classes.add(&class);
        }
        if self.pill {
            classes.add("rounded-pill");
        }
        classes.extend(&self.classes);
        out.push_str(&format!(
            "<span{}{}>{}</span>",
            attr("id", self.id.to_string()),
            classes.attr(),
            escape(&self.text)
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn badge_combines_category_and_pill() {
        let badge = Badge::new("4").as_success().as_pill();
        assert_eq!(
            badge.render().unwrap(),
            format!(
                "<span id=\"{}\" class=\"badge text-bg-success rounded-pill\">4</span>",
                badge.id()
            )
        );
    }
}
