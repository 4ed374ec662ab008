use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Width of a modal dialog.
pub enum DialogSize {
    /// `modal-sm`.
    Small,
    /// Framework default width.
    Default,
    /// `modal-lg`.
    Large,
    /// `modal-xl`.
    ExtraLarge,
    /// `modal-fullscreen`.
    Fullscreen,
}

/// Modal dialog opened by a toggle action bound to it.
///
/// The title, body and actions render inside the dialog's dismiss scope, so dismiss actions among
/// them close this dialog.
pub struct Dialog {
    id: ComponentId,
    title: Content,
    body: Node,
    actions: Vec<Node>,
    size: DialogSize,
    centered: bool,
    scrollable: bool,
    classes: ClassSet,
}

capabilities!(Dialog: classes);

impl Dialog {
    /// Dialog with `title` in its header and `body` as its content.
    pub fn new(title: impl Into<Content>, body: impl IntoNode) -> Self {
        Self {
            id: ComponentId::next(),
            title: title.into(),
            body: body.into_node(),
            actions: Vec::new(),
            size: DialogSize::Default,
            centered: false,
            scrollable: false,
            classes: ClassSet::new(),
        }
    }

    /// Buttons shown in the footer. Without actions no footer is rendered.
    pub fn with_actions(mut self, actions: Vec<Node>) -> Self {
        self.actions = actions;
        self
    }

    /// Width modifier.
    pub fn with_size(mut self, size: DialogSize) -> Self {
        self.size = size;
        self
    }

    /// Centers the dialog vertically.
    pub fn as_centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Scrolls the body instead of the page when content is long.
    pub fn as_scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }

    fn dialog_classes(&self) -> ClassSet {
        let mut classes = ClassSet::from("modal-dialog");
        if self.centered {
            classes.add("modal-dialog-centered");
        }
        if self.scrollable {
            classes.add("modal-dialog-scrollable");
        }
        match self.size {
            DialogSize::Small => classes.add("modal-sm"),
            DialogSize::Default => {}
            DialogSize::Large => classes.add("modal-lg"),
            DialogSize::ExtraLarge => classes.add("modal-xl"),
            DialogSize::Fullscreen => classes.add("modal-fullscreen"),
        }
        classes
    }
}

impl Component for Dialog {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Dialog
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let title_id = self.id.suffixed("title");
        let mut content = String::new();
        ctx.within(DismissScope::Modal, |ctx| {
            content.push_str(&wrap_div(
                "modal-header",
                &format!(
                    "<h5{}{}>{}</h5><button{}{}{}{}></button>",
                    attr("id", &title_id),
                    attr("class", "modal-title"),
                    self.title.to_html(ctx)?,
                    attr("type", "button"),
                    attr("class", "btn-close"),
                    attr("data-bs-dismiss", "modal"),
                    attr("aria-label", "Close")
                ),
            ));
            content.push_str(&wrap_div("modal-body", &self.body.render_with(ctx)?));
            if !self.actions.is_empty() {
                let mut footer = String::new();
                write_children(&self.actions, &mut footer, ctx)?;
                content.push_str(&wrap_div("modal-footer", &footer));
            }
            Ok(())
        })?;

        let dialog = self.dialog_classes();
        out.push_str(&format!(
            "<div{}{}{}{}{}><div{}>{}</div></div>",
            attr("id", self.id.to_string()),
            self.classes.layered("modal fade").attr(),
            attr("tabindex", "-1"),
            attr("aria-labelledby", &title_id),
            attr("aria-hidden", "true"),
            dialog.attr(),
            wrap_div("modal-content", &content)
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{nodes, Button, Text};

    #[test]
    fn dialog_without_actions_has_no_footer() {
        let dialog = Dialog::new("Notice", Text::new("Saved"));
        let html = dialog.render().unwrap();

        assert!(!html.contains("modal-footer"));
        assert!(html.starts_with(&format!(
            "<div id=\"{id}\" class=\"modal fade\" tabindex=\"-1\" aria-labelledby=\"{id}-title\" aria-hidden=\"true\">\
             <div class=\"modal-dialog\"><div class=\"modal-content\"><div class=\"modal-header\">\
             <h5 id=\"{id}-title\" class=\"modal-title\">Notice</h5>",
            id = dialog.id()
        )));
    }

    #[test]
    fn dismiss_actions_close_the_modal() {
        let cancel = Button::new("Cancel").dismiss();
        let dialog = Dialog::new("Delete?", Text::new("Really?"))
            .with_actions(nodes![cancel, Button::new("Delete").as_danger()]);
        let html = dialog.render().unwrap();

        assert!(html.contains("<div class=\"modal-footer\">"));
        assert_eq!(html.matches("data-bs-dismiss=\"modal\"").count(), 2);
        assert!(!html.contains("data-bs-dismiss=\"toast\""));
    }

    #[test]
    fn layout_modifiers_apply_to_inner_dialog() {
        let dialog = Dialog::new("Wide", Text::new("x"))
            .with_size(DialogSize::Large)
            .as_centered()
            .as_scrollable();

        assert!(dialog.render().unwrap().contains(
            "<div class=\"modal-dialog modal-dialog-centered modal-dialog-scrollable modal-lg\">"
        ));
    }
}
