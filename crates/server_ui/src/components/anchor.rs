use super::*;

#[derive(Debug)]
/// Hyperlink. Every action shape renders as an `<a>` element.
pub struct Anchor {
    id: ComponentId,
    content: Content,
    classes: ClassSet,
    appearance: Appearance,
    disabled: bool,
    action: ActionBinding,
}

capabilities!(Anchor: classes, appearance, availability, action);

impl Anchor {
    /// Anchor showing `content`; bind a destination with [`Actionable`] methods.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            id: ComponentId::next(),
            content: content.into(),
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            disabled: false,
            action: ActionBinding::Unbound,
        }
    }
}

impl Component for Anchor {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Anchor
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let action = self.action.resolve(ActionHost::Anchor, ctx)?;

        let mut classes = ClassSet::new();
        if let Some(class) = self.appearance.class("link") {
            classes.add(&class);
        }
        classes.extend(&self.classes);
        if self.disabled {
            classes.add("disabled");
        }

        let inner = self.content.to_html(ctx)?;
        out.push_str(&format!(
            "<a{}{}{}{}>{inner}</a>",
            attr("id", self.id.to_string()),
            classes.attr(),
            action.anchor_attrs(),
            disabled_link_attrs(self.disabled)
        ));
        Ok(())
    }
}

/// Anchors have no native disabled state; these attributes take them out of interaction.
pub(crate) fn disabled_link_attrs(disabled: bool) -> String {
    if disabled {
        format!("{}{}", attr("aria-disabled", "true"), attr("tabindex", "-1"))
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Dialog, Panel, Text};

    #[test]
    fn unbound_anchor_has_no_href() {
        let anchor = Anchor::new("Plain");
        assert_eq!(
            anchor.render().unwrap(),
            format!("<a id=\"{}\">Plain</a>", anchor.id())
        );
    }

    #[test]
    fn url_link_with_category() {
        let anchor = Anchor::new("Docs").link("/docs?page=1&x=2").as_info();
        assert_eq!(
            anchor.render().unwrap(),
            format!(
                "<a id=\"{}\" class=\"link-info\" href=\"/docs?page=1&amp;x=2\">Docs</a>",
                anchor.id()
            )
        );
    }

    #[test]
    fn disabled_anchor_gets_class_and_aria_state() {
        let anchor = Anchor::new("Off").link("/x").as_disabled();
        let html = anchor.render().unwrap();

        assert!(html.contains("class=\"disabled\""));
        assert!(html.contains("aria-disabled=\"true\""));
        assert!(html.contains("tabindex=\"-1\""));
    }

    #[test]
    fn toggle_renders_modal_or_tab_hooks() {
        let dialog = Dialog::new("Dialog", Text::new("body"));
        let pane = Panel::new(crate::nodes![]);

        let modal = Anchor::new("Open").toggle(&dialog).render().unwrap();
        assert!(modal.contains("data-bs-toggle=\"modal\""));
        assert!(modal.contains(&format!("data-bs-target=\"#{}\"", dialog.id())));

        let tab = Anchor::new("Tab").toggle(&pane).render().unwrap();
        assert!(tab.contains(&format!("href=\"#{}\"", pane.id())));
        assert!(tab.contains("data-bs-toggle=\"tab\""));
    }

    #[test]
    fn toggle_to_non_container_is_a_render_time_type_error() {
        let target = Text::new("text");
        let anchor = Anchor::new("Bad").toggle(&target);
        assert!(matches!(anchor.render(), Err(UiError::Type(_))));
    }

    #[test]
    fn anchor_cannot_submit() {
        assert!(matches!(
            Anchor::new("Send").submit().render(),
            Err(UiError::Type(_))
        ));
    }

    #[test]
    fn component_content_renders_inline() {
        let anchor = Anchor::new(Text::new("Home").as_strong()).link("/");
        assert!(anchor
            .render()
            .unwrap()
            .contains("<strong>Home</strong></span></a>"));
    }
}
