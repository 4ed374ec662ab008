use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button size modifier.
pub enum ButtonSize {
    /// `btn-sm`.
    Small,
    /// Default size.
    Medium,
    /// `btn-lg`.
    Large,
}

#[derive(Debug)]
/// Push button.
///
/// Renders as `<button>` for every action except navigation, which renders as a button-styled
/// `<a role="button">`.
pub struct Button {
    id: ComponentId,
    content: Content,
    size: ButtonSize,
    classes: ClassSet,
    appearance: Appearance,
    outline: bool,
    disabled: bool,
    action: ActionBinding,
}

capabilities!(Button: classes, appearance, outline, availability, action);

impl Button {
    /// Button showing `content`.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            id: ComponentId::next(),
            content: content.into(),
            size: ButtonSize::Medium,
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            outline: false,
            disabled: false,
            action: ActionBinding::Unbound,
        }
    }

    /// Sets the size modifier.
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }
}

/// `btn-{category}` or, when outlined, `btn-outline-{category}`.
pub(crate) fn button_variant_class(appearance: Appearance, outline: bool) -> Option<String> {
    if outline {
        appearance.class("btn-outline")
    } else {
        appearance.class("btn")
    }
}

impl Component for Button {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let action = self.action.resolve(ActionHost::Button, ctx)?;

        let mut classes = ClassSet::from("btn");
        if let Some(class) = button_variant_class(self.appearance, self.outline) {
            classes.add(&class);
        }
        match self.size {
            ButtonSize::Small => classes.add("btn-sm"),
            ButtonSize::Medium => {}
            ButtonSize::Large => classes.add("btn-lg"),
        }
        classes.extend(&self.classes);

        let inner = self.content.to_html(ctx)?;
        let id = attr("id", self.id.to_string());
        if action.is_navigation() {
            if self.disabled {
                classes.add("disabled");
            }
            out.push_str(&format!(
                "<a{id}{}{}{}{}>{inner}</a>",
                classes.attr(),
                attr("role", "button"),
                action.anchor_attrs(),
                super::anchor::disabled_link_attrs(self.disabled)
            ));
        } else {
            out.push_str(&format!(
                "<button{id}{}{}{}>{inner}</button>",
                classes.attr(),
                action.button_attrs(),
                flag("disabled", self.disabled)
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Dialog, Panel, Text};

    #[test]
    fn outline_replaces_fill_class() {
        let html = Button::new("X")
            .as_primary()
            .as_outline()
            .render()
            .unwrap();

        assert!(html.contains("class=\"btn btn-outline-primary\""));
        assert!(!html.contains("btn-primary"));
    }

    #[test]
    fn unbound_button_is_a_plain_button() {
        let button = Button::new("Go").as_success().with_size(ButtonSize::Large);
        assert_eq!(
            button.render().unwrap(),
            format!(
                "<button id=\"{}\" class=\"btn btn-success btn-lg\" type=\"button\">Go</button>",
                button.id()
            )
        );
    }

    #[test]
    fn link_button_renders_as_anchor_with_disabled_class() {
        let button = Button::new("Away").link("/away").as_disabled();
        assert_eq!(
            button.render().unwrap(),
            format!(
                "<a id=\"{}\" class=\"btn disabled\" role=\"button\" href=\"/away\" aria-disabled=\"true\" tabindex=\"-1\">Away</a>",
                button.id()
            )
        );
    }

    #[test]
    fn disabled_button_uses_native_attribute() {
        let html = Button::new("No").as_disabled().render().unwrap();
        assert!(html.ends_with(" type=\"button\" disabled>No</button>"));
        assert!(!html.contains("class=\"btn disabled\""));
    }

    #[test]
    fn toggle_dialog_and_collapse_panel() {
        let dialog = Dialog::new("Confirm", Text::new("Sure?"));
        let panel = Panel::new(crate::nodes![Text::new("more")]);

        let open = Button::new("Open").toggle(&dialog).render().unwrap();
        assert!(open.contains(&format!(
            "type=\"button\" data-bs-toggle=\"modal\" data-bs-target=\"#{}\"",
            dialog.id()
        )));

        let fold = Button::new("More").collapse(&panel).render().unwrap();
        assert!(fold.contains("data-bs-toggle=\"collapse\""));
        assert!(fold.contains(&format!("aria-controls=\"{}\"", panel.id())));
    }

    #[test]
    fn submit_button_has_submit_type() {
        let html = Button::new("Send").as_primary().submit().render().unwrap();
        assert!(html.contains("type=\"submit\""));
    }

    #[test]
    fn dismiss_outside_container_defaults_to_modal() {
        let html = Button::new("Close").dismiss().render().unwrap();
        assert!(html.contains("data-bs-dismiss=\"modal\""));
    }

    #[test]
    fn rendering_twice_does_not_accumulate_classes() {
        let button = Button::new("Twice").as_danger().as_outline().link("/x");
        let first = button.render().unwrap();
        let second = button.render().unwrap();

        assert_eq!(first, second);
        assert_eq!(button.classes(), None);
    }
}
