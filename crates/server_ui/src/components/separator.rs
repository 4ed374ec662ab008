use super::*;

#[derive(Debug, Clone)]
/// Horizontal rule.
pub struct Separator {
    id: ComponentId,
    classes: ClassSet,
}

capabilities!(Separator: classes);

impl Separator {
    /// Thematic break.
    pub fn new() -> Self {
        Self {
            id: ComponentId::next(),
            classes: ClassSet::new(),
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Separator {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Separator
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext) -> UiResult<()> {
        out.push_str(&format!(
            "<hr{}{}>",
            attr("id", self.id.to_string()),
            self.classes.attr()
        ));
        Ok(())
    }
}
