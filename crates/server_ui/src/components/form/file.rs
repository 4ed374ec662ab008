use super::*;

#[derive(Debug)]
/// File upload styled as a read-only name field with a `Browse` trigger.
///
/// The native file control is hidden; choosing a file copies its name into the visible field.
pub struct FileInput {
    id: ComponentId,
    field: Field,
    placeholder: Option<String>,
    accept: Option<String>,
    multiple: bool,
    classes: ClassSet,
    disabled: bool,
}

capabilities!(FileInput: classes, availability);

impl FileInput {
    /// File input submitted as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            field: Field::named(name),
            placeholder: None,
            accept: None,
            multiple: false,
            classes: ClassSet::new(),
            disabled: false,
        }
    }

    /// Text shown in the name field before a file is chosen.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Accepted file types, e.g. `image/*,.pdf`.
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Allows choosing several files.
    pub fn as_multiple(mut self) -> Self {
        self.multiple = true;
        self
    }
}

impl Input for FileInput {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    fn receiver(&self, _ctx: &mut RenderContext) -> UiResult<String> {
        let name_id = self.id.suffixed("name");
        let display = format!(
            "<input{}{}{}{}{}>",
            attr("id", &name_id),
            attr("type", "text"),
            self.classes.layered("form-control").attr(),
            opt_attr("placeholder", self.placeholder.as_deref()),
            flag("readonly", true)
        );

        let mut trigger = ClassSet::from("btn btn-outline-secondary");
        if self.disabled {
            trigger.add("disabled");
        }
        let browse = format!(
            "<label{}{}>Browse</label>",
            trigger.attr(),
            attr("for", self.id.to_string())
        );

        let onchange = format!(
            "document.getElementById('{name_id}').value=Array.from(this.files).map(f=>f.name).join(', ')"
        );
        let native = format!(
            "<input{}{}{}{}{}{}{}{}{}>",
            attr("id", self.id.to_string()),
            attr("type", "file"),
            attr("name", self.field.name()),
            opt_attr("accept", self.accept.as_deref()),
            flag("multiple", self.multiple),
            flag("required", self.field.required),
            flag("disabled", self.disabled),
            attr("onchange", onchange),
            flag("hidden", true)
        );

        Ok(wrap_div("input-group", &format!("{display}{browse}{native}")))
    }
}

impl Component for FileInput {
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
    use super::*;

    #[test]
    fn browse_trigger_targets_hidden_native_control() {
        let input = FileInput::new("avatar").with_accept("image/*");
        let html = input.receiver(&mut RenderContext::default()).unwrap();

        assert!(html.starts_with("<div class=\"input-group\">"));
        assert!(html.contains(&format!(
            "<input id=\"{}\" type=\"text\" class=\"form-control\" readonly>",
            input.id().suffixed("name")
        )));
        assert!(html.contains(&format!(
            "<label class=\"btn btn-outline-secondary\" for=\"{}\">Browse</label>",
            input.id()
        )));
        assert!(html.contains("type=\"file\" name=\"avatar\" accept=\"image/*\""));
        assert!(html.contains(" hidden>"));
    }

    #[test]
    fn disabled_marks_trigger_and_native_control() {
        let input = FileInput::new("doc").as_disabled();
        let html = input.receiver(&mut RenderContext::default()).unwrap();

        assert!(html.contains("class=\"btn btn-outline-secondary disabled\""));
        assert!(html.contains("name=\"doc\" disabled"));
    }
}
