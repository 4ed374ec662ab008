use super::*;

#[derive(Debug, Clone)]
/// Image element.
pub struct Image {
    id: ComponentId,
    source: String,
    alternative: Option<String>,
    size: Option<(u32, u32)>,
    classes: ClassSet,
}

capabilities!(Image: classes);

impl Image {
    /// Image loaded from `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            source: source.into(),
            alternative: None,
            size: None,
            classes: ClassSet::new(),
        }
    }

    /// Alternative text.
    pub fn with_alt(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    /// Explicit pixel width and height.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Scales with its parent (`img-fluid`).
    pub fn as_fluid(self) -> Self {
        self.add_classes("img-fluid")
    }

    /// Rounded thumbnail border (`img-thumbnail`).
    pub fn as_thumbnail(self) -> Self {
        self.add_classes("img-thumbnail")
    }
}

impl Component for Image {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Image
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext) -> UiResult<()> {
        let size = self
            .size
            .map(|(width, height)| {
                format!(
                    "{}{}",
                    attr("width", width.to_string()),
                    attr("height", height.to_string())
                )
            })
            .unwrap_or_default();
        out.push_str(&format!(
            "<img{}{}{}{}{}>",
            attr("id", self.id.to_string()),
            attr("src", &self.source),
            opt_attr("alt", self.alternative.as_deref()),
            size,
            self.classes.attr()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn image_emits_optional_attributes_only_when_set() {
        let bare = Image::new("/logo.png");
        assert_eq!(
            bare.render().unwrap(),
            format!("<img id=\"{}\" src=\"/logo.png\">", bare.id())
        );

        let full = Image::new("/logo.png")
            .with_alt("Logo")
            .with_size(30, 24)
            .as_fluid();
        assert_eq!(
            full.render().unwrap(),
            format!(
                "<img id=\"{}\" src=\"/logo.png\" alt=\"Logo\" width=\"30\" height=\"24\" class=\"img-fluid\">",
                full.id()
            )
        );
    }
}
