use super::*;

#[derive(Debug, Clone)]
/// Bootstrap Icons glyph.
pub struct Icon {
    id: ComponentId,
    name: String,
    classes: ClassSet,
    appearance: Appearance,
}

capabilities!(Icon: classes, appearance);

impl Icon {
    /// Glyph by its Bootstrap Icons name (`"house"`, `"bell-fill"`, ...).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            name: name.into(),
            classes: ClassSet::new(),
            appearance: Appearance::default(),
        }
    }
}

impl Component for Icon {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Icon
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("bi");
        classes.add(&format!("bi-{}", self.name));
        if let Some(class) = self.appearance.class("text") {
            classes.add(&class);
        }
        classes.extend(&self.classes);
        out.push_str(&format!(
            "<i{}{} aria-hidden=\"true\"></i>",
            attr("id", self.id.to_string()),
            classes.attr()
        ));
        Ok(())
    }
}
