use super::*;

#[derive(Debug, Clone)]
/// Inline or heading text.
pub struct Text {
    id: ComponentId,
    text: String,
    classes: ClassSet,
    appearance: Appearance,
    heading: Option<u8>,
    paragraph: bool,
    strong: bool,
    small: bool,
    emphasis: bool,
    monospace: bool,
}

capabilities!(Text: classes, appearance);

impl Text {
    /// Plain text, rendered as a `<span>`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            text: text.into(),
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            heading: None,
            paragraph: false,
            strong: false,
            small: false,
            emphasis: false,
            monospace: false,
        }
    }

    /// Raw text as given.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders as `<h1>`..`<h6>`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] for levels outside `1..=6`.
    pub fn as_heading(mut self, level: u8) -> UiResult<Self> {
        if !(1..=6).contains(&level) {
            return Err(UiError::value_error(format!(
                "heading level must be between 1 and 6, got {level}"
            )));
        }
        self.heading = Some(level);
        Ok(self)
    }

    /// Renders as a `<p>` block.
    pub fn as_paragraph(mut self) -> Self {
        self.paragraph = true;
        self
    }

    /// Wraps the text in `<strong>`.
    pub fn as_strong(mut self) -> Self {
        self.strong = true;
        self
    }

    /// Wraps the text in `<small>`.
    pub fn as_small(mut self) -> Self {
        self.small = true;
        self
    }

    /// Wraps the text in `<em>`.
    pub fn as_emphasis(mut self) -> Self {
        self.emphasis = true;
        self
    }

    /// Wraps the text in `<code>`.
    pub fn as_monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    fn tag(&self) -> String {
        match (self.heading, self.paragraph) {
            (Some(level), _) => format!("h{level}"),
            (None, true) => "p".to_string(),
            (None, false) => "span".to_string(),
        }
    }
}

impl Component for Text {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Text
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext) -> UiResult<()> {
        let mut inner = escape(&self.text).into_owned();
        for (on, tag) in [
            (self.monospace, "code"),
            (self.emphasis, "em"),
            (self.small, "small"),
            (self.strong, "strong"),
        ] {
            if on {
                inner = format!("<{tag}>{inner}</{tag}>");
            }
        }

        let mut classes = ClassSet::new();
        if let Some(class) = self.appearance.class("text") {
            classes.add(&class);
        }
        classes.extend(&self.classes);

        let tag = self.tag();
        out.push_str(&format!(
            "<{tag}{}{}>{inner}</{tag}>",
            attr("id", self.id.to_string()),
            classes.attr()
        ));
        Ok(())
    }
}
