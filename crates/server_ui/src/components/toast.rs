use super::*;

/// Transient notification.
///
/// Children render inside the toast's dismiss scope. Showing the toast is left to page script.
pub struct Toast {
    id: ComponentId,
    title: Option<Content>,
    body: Node,
    hide_delay: Option<u32>,
    classes: ClassSet,
    appearance: Appearance,
    outline: bool,
}

capabilities!(Toast: classes, appearance, outline);

impl Toast {
    /// Toast showing `body`, hidden after the framework's default delay.
    pub fn new(body: impl IntoNode) -> Self {
        Self {
            id: ComponentId::next(),
            title: None,
            body: body.into_node(),
            hide_delay: None,
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            outline: false,
        }
    }

    /// Header title. Without one the body and close button share a single row.
    pub fn with_title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Milliseconds before the toast hides itself; `0` keeps it until dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] for negative delays.
    pub fn with_hide_delay(mut self, millis: i64) -> UiResult<Self> {
        let millis = u32::try_from(millis).map_err(|_| {
            UiError::value_error(format!(
                "hide delay must be between 0 and {} milliseconds, got {millis}",
                u32::MAX
            ))
        })?;
        self.hide_delay = Some(millis);
        Ok(self)
    }

    /// Configured delay, if any.
    pub fn hide_delay(&self) -> Option<u32> {
        self.hide_delay
    }
}

fn close_button(extra_classes: &str) -> String {
    format!(
        "<button{}{}{}{}></button>",
        attr("type", "button"),
        ClassSet::from(extra_classes).layered("btn-close").attr(),
        attr("data-bs-dismiss", "toast"),
        attr("aria-label", "Close")
    )
}

impl Component for Toast {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Toast
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("toast");
        for class in surface_classes(self.appearance, self.outline, "text-bg") {
            classes.add(&class);
        }
        if self.title.is_none() {
            classes.add("align-items-center");
        }
        classes.extend(&self.classes);

        let delay = match self.hide_delay {
            None => String::new(),
            Some(0) => attr("data-bs-autohide", "false"),
            Some(millis) => attr("data-bs-delay", millis.to_string()),
        };

        let mut inner = String::new();
        ctx.within(DismissScope::Toast, |ctx| {
            let body = wrap_div("toast-body", &self.body.render_with(ctx)?);
            match &self.title {
                Some(title) => {
                    inner.push_str(&wrap_div(
                        "toast-header",
                        &format!(
                            "<strong class=\"me-auto\">{}</strong>{}",
                            title.to_html(ctx)?,
                            close_button("")
                        ),
                    ));
                    inner.push_str(&body);
                }
                None => {
                    inner.push_str(&wrap_div(
                        "d-flex",
                        &format!("{body}{}", close_button("me-2 m-auto")),
                    ));
                }
            }
            Ok(())
        })?;

        out.push_str(&format!(
            "<div{}{}{}{}{}{delay}>{inner}</div>",
            attr("id", self.id.to_string()),
            classes.attr(),
            attr("role", "alert"),
            attr("aria-live", "assertive"),
            attr("aria-atomic", "true")
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Button, Panel, Text};

    #[test]
    fn negative_delay_is_rejected_before_rendering() {
        assert!(matches!(
            Toast::new(Text::new("x")).with_hide_delay(-1),
            Err(UiError::Value(_))
        ));
    }

    #[test]
    fn delay_controls_autohide_attributes() {
        let default = Toast::new(Text::new("x")).render().unwrap();
        assert!(!default.contains("data-bs-autohide") && !default.contains("data-bs-delay"));

        let sticky = Toast::new(Text::new("x")).with_hide_delay(0).unwrap();
        assert_eq!(sticky.hide_delay(), Some(0));
        assert!(sticky.render().unwrap().contains("data-bs-autohide=\"false\""));

        let timed = Toast::new(Text::new("x")).with_hide_delay(2500).unwrap();
        assert!(timed.render().unwrap().contains("data-bs-delay=\"2500\""));
    }

    #[test]
    fn titled_toast_has_header_then_body() {
        let toast = Toast::new(Text::new("Saved")).with_title("Status").as_success();
        let html = toast.render().unwrap();

        assert!(html.starts_with(&format!(
            "<div id=\"{}\" class=\"toast text-bg-success\" role=\"alert\" aria-live=\"assertive\" aria-atomic=\"true\">\
             <div class=\"toast-header\"><strong class=\"me-auto\">Status</strong>",
            toast.id()
        )));
        assert!(html.find("toast-header").unwrap() < html.find("toast-body").unwrap());
    }

    #[test]
    fn untitled_toast_is_one_flush_row() {
        let toast = Toast::new(Text::new("Hi")).as_warning().as_outline();
        let html = toast.render().unwrap();

        assert!(html.contains("class=\"toast border border-warning align-items-center\""));
        assert!(html.contains("<div class=\"d-flex\"><div class=\"toast-body\">"));
        assert!(html.contains("class=\"btn-close me-2 m-auto\" data-bs-dismiss=\"toast\""));
        assert!(!html.contains("toast-header"));
    }

    #[test]
    fn dismiss_inside_toast_targets_the_toast() {
        let body = Panel::new(crate::nodes![Text::new("Undo?"), Button::new("No").dismiss()]);
        let html = Toast::new(body).with_title("Deleted").render().unwrap();

        assert_eq!(html.matches("data-bs-dismiss=\"toast\"").count(), 2);
        assert!(!html.contains("data-bs-dismiss=\"modal\""));
    }
}
