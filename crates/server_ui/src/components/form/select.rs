use super::*;

#[derive(Debug)]
/// Choice among fixed options, as a drop-down or as a radio group.
pub struct SelectInput {
    id: ComponentId,
    field: Field,
    options: Vec<(String, String)>,
    selected: Option<String>,
    radio: bool,
    classes: ClassSet,
    disabled: bool,
}

capabilities!(SelectInput: classes, availability);

impl SelectInput {
    /// Select submitted as `name` over `(value, caption)` pairs.
    pub fn new<V, C>(name: impl Into<String>, options: impl IntoIterator<Item = (V, C)>) -> Self
    where
        V: Into<String>,
        C: Into<String>,
    {
        Self {
            id: ComponentId::next(),
            field: Field::named(name),
            options: options
                .into_iter()
                .map(|(value, caption)| (value.into(), caption.into()))
                .collect(),
            selected: None,
            radio: false,
            classes: ClassSet::new(),
            disabled: false,
        }
    }

    /// Initially selected value.
    pub fn with_selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Renders one radio per option instead of a drop-down.
    pub fn as_radio(mut self) -> Self {
        self.radio = true;
        self
    }

    fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }

    fn write_radios(&self) -> String {
        let mut radios = String::new();
        for (index, (value, caption)) in self.options.iter().enumerate() {
            let option_id = self.id.suffixed(&index.to_string());
            radios.push_str(&wrap_div(
                "form-check",
                &format!(
                    "<input{}{}{}{}{}{}{}><label{}{}>{}</label>",
                    attr("id", &option_id),
                    attr("class", "form-check-input"),
                    attr("type", "radio"),
                    attr("name", self.field.name()),
                    attr("value", value),
                    flag("checked", self.is_selected(value)),
                    self.field.control_flags(self.disabled),
                    attr("class", "form-check-label"),
                    attr("for", &option_id),
                    escape(caption)
                ),
            ));
        }
        let labelled_by = match self.field.label() {
            Some(_) => attr("aria-labelledby", self.id.suffixed("label")),
            None => String::new(),
        };
        format!(
            "<div{}{}{}{labelled_by}>{radios}</div>",
            attr("id", self.id.to_string()),
            self.classes.attr(),
            attr("role", "radiogroup")
        )
    }

    fn write_select(&self) -> String {
        let mut options = String::new();
        for (value, caption) in &self.options {
            options.push_str(&format!(
                "<option{}{}>{}</option>",
                attr("value", value),
                flag("selected", self.is_selected(value)),
                escape(caption)
            ));
        }
        format!(
            "<select{}{}{}{}{}>{options}</select>",
            attr("id", self.id.to_string()),
            self.classes.layered("form-select").attr(),
            attr("name", self.field.name()),
            flag("required", self.field.required),
            flag("disabled", self.disabled)
        )
    }
}

impl Input for SelectInput {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    fn is_group(&self) -> bool {
        self.radio
    }

    fn receiver(&self, _ctx: &mut RenderContext) -> UiResult<String> {
        Ok(if self.radio {
            self.write_radios()
        } else {
            self.write_select()
        })
    }
}

impl Component for SelectInput {
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

    fn colors() -> SelectInput {
        SelectInput::new("color", [("r", "Red"), ("g", "Green")]).with_selected("g")
    }

    #[test]
    fn drop_down_marks_selected_option() {
        let input = colors();

        assert_eq!(
            input.receiver(&mut RenderContext::default()).unwrap(),
            format!(
                "<select id=\"{}\" class=\"form-select\" name=\"color\">\
                 <option value=\"r\">Red</option><option value=\"g\" selected>Green</option></select>",
                input.id()
            )
        );
    }

    #[test]
    fn radio_group_carries_same_data() {
        let input = colors().as_radio();
        let html = input.receiver(&mut RenderContext::default()).unwrap();

        assert_eq!(html.matches("type=\"radio\" name=\"color\"").count(), 2);
        assert!(html.contains(&format!(
            "<input id=\"{id}-1\" class=\"form-check-input\" type=\"radio\" name=\"color\" value=\"g\" checked>\
             <label class=\"form-check-label\" for=\"{id}-1\">Green</label>",
            id = input.id()
        )));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn labelled_radio_group_is_named_by_its_label() {
        let input = colors().as_radio().with_label("Color");
        let html = input.render().unwrap();
        let id = input.id();

        assert!(html.starts_with(&format!(
            "<div class=\"row mb-3\"><label id=\"{id}-label\" class=\"col-sm-2 col-form-label\">Color</label>\
             <div class=\"col-sm-10\"><div id=\"{id}\" role=\"radiogroup\" aria-labelledby=\"{id}-label\">"
        )));
        assert!(!html.contains(&format!("for=\"{id}\"")));
    }

    #[test]
    fn labelled_drop_down_keeps_label_for() {
        let input = colors().with_label("Color");
        let html = input.render().unwrap();

        assert!(html.contains(&format!("<label for=\"{}\"", input.id())));
        assert!(!html.contains("aria-labelledby"));
    }
}
