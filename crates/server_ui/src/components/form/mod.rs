//! Forms and their input controls.
//!
//! Every visible input renders its control (the receiver) through [`Input::receiver`]; the
//! shared wrapper adds the label, layout grid and tip around it.

mod checkbox;
mod file;
mod hidden;
mod select;
mod text;

pub use checkbox::CheckboxInput;
pub use file::FileInput;
pub use hidden::{HiddenInput, JsonInput};
pub use select::SelectInput;
pub use text::{NumericInput, TextInput};

use super::*;

#[derive(Debug, Clone, Default)]
/// Settings shared by every input.
pub struct Field {
    name: String,
    label: Option<String>,
    tip: Option<String>,
    label_on_top: bool,
    readonly: bool,
    required: bool,
}

impl Field {
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Submitted field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label text, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the label is placed above the control instead of beside it.
    pub fn is_label_on_top(&self) -> bool {
        self.label_on_top
    }

    /// ` readonly required disabled` as applicable.
    pub(crate) fn control_flags(&self, disabled: bool) -> String {
        format!(
            "{}{}{}",
            flag("readonly", self.readonly),
            flag("required", self.required),
            flag("disabled", disabled)
        )
    }
}

/// Contract shared by form inputs.
pub trait Input: Component + Sized {
    /// Shared settings.
    fn field(&self) -> &Field;

    /// Mutable shared settings.
    fn field_mut(&mut self) -> &mut Field;

    /// The control alone, without label or tip.
    fn receiver(&self, ctx: &mut RenderContext) -> UiResult<String>;

    /// Whether the receiver already renders the label next to the control.
    fn labels_itself(&self) -> bool {
        false
    }

    /// Whether the receiver is a group of controls named by the label through
    /// `aria-labelledby` rather than a single control targeted by `<label for>`.
    fn is_group(&self) -> bool {
        false
    }

    /// Label shown with the control.
    fn with_label(mut self, label: impl Into<String>) -> Self {
        self.field_mut().label = Some(label.into());
        self
    }

    /// Help text below the control.
    fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.field_mut().tip = Some(tip.into());
        self
    }

    /// Places the label above the control.
    fn label_on_top(mut self) -> Self {
        self.field_mut().label_on_top = true;
        self
    }

    /// Shows the value without allowing edits.
    fn as_readonly(mut self) -> Self {
        self.field_mut().readonly = true;
        self
    }

    /// Requires a value before submission.
    fn as_required(mut self) -> Self {
        self.field_mut().required = true;
        self
    }
}

/// Writes `input`'s receiver inside the shared label/tip wrapper.
pub(crate) fn write_input<I: Input>(
    input: &I,
    out: &mut String,
    ctx: &mut RenderContext,
) -> UiResult<()> {
    let field = input.field();
    let mut control = input.receiver(ctx)?;
    if let Some(tip) = &field.tip {
        control.push_str(&format!("<div class=\"form-text\">{}</div>", escape(tip)));
    }

    let label = field.label.as_deref().filter(|_| !input.labels_itself());
    let target = if input.is_group() {
        attr("id", input.id().suffixed("label"))
    } else {
        attr("for", input.id().to_string())
    };
    let markup = match (label, field.label_on_top) {
        (Some(label), true) => wrap_div(
            "mb-3",
            &format!(
                "<label{}{}>{}</label>{control}",
                target,
                attr("class", "form-label"),
                escape(label)
            ),
        ),
        (Some(label), false) => wrap_div(
            "row mb-3",
            &format!(
                "<label{}{}>{}</label>{}",
                target,
                attr("class", "col-sm-2 col-form-label"),
                escape(label),
                wrap_div("col-sm-10", &control)
            ),
        ),
        (None, true) => wrap_div("mb-3", &control),
        (None, false) => wrap_div("row mb-3", &wrap_div("col-sm-10 offset-sm-2", &control)),
    };
    out.push_str(&markup);
    Ok(())
}

/// HTML form. Submissions always use `POST` with multipart encoding.
pub struct Form {
    id: ComponentId,
    action: String,
    children: Vec<Node>,
    classes: ClassSet,
}

capabilities!(Form: classes);

impl Form {
    /// Form posting `children`'s values to `action`.
    pub fn new(action: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: ComponentId::next(),
            action: action.into(),
            children,
            classes: ClassSet::new(),
        }
    }
}

impl Component for Form {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Form
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut body = String::new();
        write_children(&self.children, &mut body, ctx)?;
        out.push_str(&format!(
            "<form{}{}{}{}{}>{body}</form>",
            attr("id", self.id.to_string()),
            self.classes.attr(),
            attr("action", &self.action),
            attr("method", "POST"),
            attr("enctype", "multipart/form-data")
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{nodes, Button};

    #[test]
    fn form_posts_multipart_and_keeps_children_in_order() {
        let name = TextInput::new("name").with_label("Name");
        let submit = Button::new("Send").submit().as_primary();
        let expected = format!("{}{}", name.render().unwrap(), submit.render().unwrap());
        let form = Form::new("/signup", nodes![name, submit]);

        assert_eq!(
            form.render().unwrap(),
            format!(
                "<form id=\"{}\" action=\"/signup\" method=\"POST\" enctype=\"multipart/form-data\">{expected}</form>",
                form.id()
            )
        );
    }

    #[test]
    fn label_beside_uses_grid_columns() {
        let input = TextInput::new("email").with_label("Email").with_tip("Never shared");
        let html = input.render().unwrap();

        assert!(html.starts_with(&format!(
            "<div class=\"row mb-3\"><label for=\"{}\" class=\"col-sm-2 col-form-label\">Email</label><div class=\"col-sm-10\"><input id=\"{}\"",
            input.id(),
            input.id()
        )));
        assert!(html.ends_with("<div class=\"form-text\">Never shared</div></div></div>"));
    }

    #[test]
    fn label_on_top_stacks_label_above_control() {
        let input = TextInput::new("city").with_label("City").label_on_top();
        let html = input.render().unwrap();

        assert!(html.starts_with(&format!(
            "<div class=\"mb-3\"><label for=\"{}\" class=\"form-label\">City</label><input id=\"{}\"",
            input.id(),
            input.id()
        )));
        assert!(!html.contains("col-sm-10"));
    }

    #[test]
    fn unlabelled_input_is_offset_to_the_control_column() {
        let html = TextInput::new("q").render().unwrap();
        assert!(html.starts_with("<div class=\"row mb-3\"><div class=\"col-sm-10 offset-sm-2\"><input"));
    }
}
