use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum CheckboxStyle {
    Plain,
    Switch,
    Button,
    Radio(String),
}

#[derive(Debug)]
/// Boolean input rendered as a checkbox, switch, toggle button or radio.
///
/// A hidden `false` value with the same name always precedes the control so that an unchecked
/// box still submits its field.
pub struct CheckboxInput {
    id: ComponentId,
    field: Field,
    checked: bool,
    style: CheckboxStyle,
    classes: ClassSet,
    appearance: Appearance,
    outline: bool,
    disabled: bool,
}

capabilities!(CheckboxInput: classes, appearance, outline, availability);

impl CheckboxInput {
    /// Unchecked box submitted as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            field: Field::named(name),
            checked: false,
            style: CheckboxStyle::Plain,
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            outline: false,
            disabled: false,
        }
    }

    /// Initial state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sliding switch.
    pub fn as_switch(mut self) -> Self {
        self.style = CheckboxStyle::Switch;
        self
    }

    /// Toggle button; honours appearance and outline.
    pub fn as_button(mut self) -> Self {
        self.style = CheckboxStyle::Button;
        self
    }

    /// Radio submitting `value` when selected.
    pub fn as_radio(mut self, value: impl Into<String>) -> Self {
        self.style = CheckboxStyle::Radio(value.into());
        self
    }

    fn label_markup(&self, class: &str) -> String {
        format!(
            "<label{}{}>{}</label>",
            attr("class", class),
            attr("for", self.id.to_string()),
            escape(self.field.label().unwrap_or_default())
        )
    }
}

impl Input for CheckboxInput {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    fn labels_itself(&self) -> bool {
        true
    }

    fn receiver(&self, _ctx: &mut RenderContext) -> UiResult<String> {
        let fallback = format!(
            "<input{}{}{}>",
            attr("type", "hidden"),
            attr("name", self.field.name()),
            attr("value", "false")
        );
        let (input_type, value) = match &self.style {
            CheckboxStyle::Radio(value) => ("radio", value.as_str()),
            _ => ("checkbox", "true"),
        };
        let control = |class: &str, extra: &str| {
            format!(
                "<input{}{}{}{}{}{extra}{}{}>",
                attr("id", self.id.to_string()),
                self.classes.layered(class).attr(),
                attr("type", input_type),
                attr("name", self.field.name()),
                attr("value", value),
                flag("checked", self.checked),
                self.field.control_flags(self.disabled)
            )
        };

        let markup = match &self.style {
            CheckboxStyle::Button => {
                let mut label_classes = ClassSet::from("btn");
                let variant = button_variant_class(self.appearance, self.outline);
                label_classes.add(&variant.unwrap_or_else(|| "btn-outline-primary".to_string()));
                format!(
                    "{}{}",
                    control("btn-check", &attr("autocomplete", "off")),
                    self.label_markup(&label_classes.joined().unwrap_or_default())
                )
            }
            CheckboxStyle::Switch => wrap_div(
                "form-check form-switch",
                &format!(
                    "{}{}",
                    control("form-check-input", &attr("role", "switch")),
                    self.label_markup("form-check-label")
                ),
            ),
            CheckboxStyle::Plain | CheckboxStyle::Radio(_) => wrap_div(
                "form-check",
                &format!(
                    "{}{}",
                    control("form-check-input", ""),
                    self.label_markup("form-check-label")
                ),
            ),
        };
        Ok(format!("{fallback}{markup}"))
    }
}

impl Component for CheckboxInput {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Input
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        write_input(self, out, ctx)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn receiver(input: &CheckboxInput) -> String {
        input.receiver(&mut RenderContext::default()).unwrap()
    }

    #[test]
    fn plain_checkbox_has_hidden_fallback_and_own_label() {
        let input = CheckboxInput::new("terms")
            .with_label("Accept")
            .with_checked(true);

        assert_eq!(
            receiver(&input),
            format!(
                "<input type=\"hidden\" name=\"terms\" value=\"false\">\
                 <div class=\"form-check\"><input id=\"{id}\" class=\"form-check-input\" type=\"checkbox\" name=\"terms\" value=\"true\" checked>\
                 <label class=\"form-check-label\" for=\"{id}\">Accept</label></div>",
                id = input.id()
            )
        );
        assert_eq!(input.render().unwrap().matches("Accept").count(), 1);
    }

    #[test]
    fn switch_adds_role() {
        let html = receiver(&CheckboxInput::new("dark").as_switch());
        assert!(html.contains("<div class=\"form-check form-switch\">"));
        assert!(html.contains("role=\"switch\""));
    }

    #[test]
    fn button_style_follows_appearance_and_outline() {
        let input = CheckboxInput::new("bold")
            .with_label("B")
            .as_button()
            .as_success()
            .as_outline();
        let html = receiver(&input);

        assert!(html.contains("class=\"btn-check\""));
        assert!(html.contains("autocomplete=\"off\""));
        assert!(html.contains("<label class=\"btn btn-outline-success\""));
    }

    #[test]
    fn radio_submits_its_value() {
        let html = receiver(&CheckboxInput::new("size").as_radio("xl").as_disabled());
        assert!(html.starts_with("<input type=\"hidden\" name=\"size\" value=\"false\">"));
        assert!(html.contains("type=\"radio\" name=\"size\" value=\"xl\" disabled>"));
    }
}
