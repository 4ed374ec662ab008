use std::fmt::Display;

use super::*;

/// Free-hand entry state shared by text and numeric inputs.
///
/// A control is single-line until `rows` is set. Modifiers that only make sense on a single-line
/// `<input>` are recorded so they can be refused once multirows is requested, in either order.
#[derive(Debug, Clone, Default)]
struct Freehand {
    value: Option<String>,
    placeholder: Option<String>,
    rows: Option<u32>,
    single_line: Vec<&'static str>,
}

impl Freehand {
    fn claim_single_line(&mut self, modifier: &'static str) -> UiResult<()> {
        if let Some(rows) = self.rows {
            return Err(UiError::invariant(format!(
                "{modifier} needs a single-line input, but multirows({rows}) is set"
            )));
        }
        if !self.single_line.contains(&modifier) {
            self.single_line.push(modifier);
        }
        Ok(())
    }

    fn set_rows(&mut self, rows: u32) -> UiResult<()> {
        if rows == 0 {
            return Err(UiError::value_error("multirows needs at least one row"));
        }
        if let Some(modifier) = self.single_line.first() {
            return Err(UiError::invariant(format!(
                "multirows({rows}) cannot be combined with {modifier}"
            )));
        }
        self.rows = Some(rows);
        Ok(())
    }

    fn write(
        &self,
        id: ComponentId,
        field: &Field,
        input_type: &str,
        extra: &str,
        classes: &ClassSet,
        disabled: bool,
    ) -> String {
        let classes = classes.layered("form-control");
        let common = format!(
            "{}{}{}",
            attr("id", id.to_string()),
            classes.attr(),
            attr("name", field.name())
        );
        let placeholder = opt_attr("placeholder", self.placeholder.as_deref());
        let flags = field.control_flags(disabled);

        match self.rows {
            Some(rows) => format!(
                "<textarea{common}{}{placeholder}{flags}>{}</textarea>",
                attr("rows", rows.to_string()),
                escape(self.value.as_deref().unwrap_or_default())
            ),
            None => format!(
                "<input{common}{}{}{extra}{placeholder}{flags}>",
                attr("type", input_type),
                opt_attr("value", self.value.as_deref())
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Text,
    Email,
    Password,
}

impl LineKind {
    fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[derive(Debug)]
/// Text entry, single-line by default or a `<textarea>` with [`TextInput::with_multirows`].
pub struct TextInput {
    id: ComponentId,
    field: Field,
    entry: Freehand,
    line: LineKind,
    classes: ClassSet,
    disabled: bool,
}

capabilities!(TextInput: classes, availability);

impl TextInput {
    /// Empty text input submitted as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            field: Field::named(name),
            entry: Freehand::default(),
            line: LineKind::Text,
            classes: ClassSet::new(),
            disabled: false,
        }
    }

    /// Initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.entry.value = Some(value.into());
        self
    }

    /// Hint shown while empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.entry.placeholder = Some(placeholder.into());
        self
    }

    /// Multi-line entry with `rows` visible lines.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Invariant`] when an email or password modifier is already set.
    /// Returns [`UiError::Value`] when `rows` is zero.
    pub fn with_multirows(mut self, rows: u32) -> UiResult<Self> {
        self.entry.set_rows(rows)?;
        Ok(self)
    }

    /// Email address entry.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Invariant`] when multirows is already set.
    pub fn as_email(mut self) -> UiResult<Self> {
        self.entry.claim_single_line("as_email")?;
        self.line = LineKind::Email;
        Ok(self)
    }

    /// Masked password entry.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Invariant`] when multirows is already set.
    pub fn as_password(mut self) -> UiResult<Self> {
        self.entry.claim_single_line("as_password")?;
        self.line = LineKind::Password;
        Ok(self)
    }
}

impl Input for TextInput {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    fn receiver(&self, _ctx: &mut RenderContext) -> UiResult<String> {
        Ok(self.entry.write(
            self.id,
            &self.field,
            self.line.input_type(),
            "",
            &self.classes,
            self.disabled,
        ))
    }
}

impl Component for TextInput {
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

#[derive(Debug)]
/// Numeric entry with optional bounds and step.
pub struct NumericInput {
    id: ComponentId,
    field: Field,
    entry: Freehand,
    range: Option<(String, String)>,
    step: Option<String>,
    classes: ClassSet,
    disabled: bool,
}

capabilities!(NumericInput: classes, availability);

impl NumericInput {
    /// Empty numeric input submitted as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            field: Field::named(name),
            entry: Freehand::default(),
            range: None,
            step: None,
            classes: ClassSet::new(),
            disabled: false,
        }
    }

    /// Initial value.
    pub fn with_value(mut self, value: impl Display) -> Self {
        self.entry.value = Some(value.to_string());
        self
    }

    /// Hint shown while empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.entry.placeholder = Some(placeholder.into());
        self
    }

    /// Multi-line entry with `rows` visible lines.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Invariant`] when a range or step is already set.
    /// Returns [`UiError::Value`] when `rows` is zero.
    pub fn with_multirows(mut self, rows: u32) -> UiResult<Self> {
        self.entry.set_rows(rows)?;
        Ok(self)
    }

    /// Inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Invariant`] when multirows is already set.
    pub fn with_range(mut self, min: impl Display, max: impl Display) -> UiResult<Self> {
        self.entry.claim_single_line("with_range")?;
        self.range = Some((min.to_string(), max.to_string()));
        Ok(self)
    }

    /// Increment between accepted values.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Invariant`] when multirows is already set.
    pub fn with_step(mut self, step: impl Display) -> UiResult<Self> {
        self.entry.claim_single_line("with_step")?;
        self.step = Some(step.to_string());
        Ok(self)
    }
}

impl Input for NumericInput {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    fn receiver(&self, _ctx: &mut RenderContext) -> UiResult<String> {
        let mut extra = String::new();
        if let Some((min, max)) = &self.range {
            extra.push_str(&attr("min", min));
            extra.push_str(&attr("max", max));
        }
        extra.push_str(&opt_attr("step", self.step.as_deref()));
        Ok(self.entry.write(
            self.id,
            &self.field,
            "number",
            &extra,
            &self.classes,
            self.disabled,
        ))
    }
}

impl Component for NumericInput {
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

    #[test]
    fn single_line_text_receiver() {
        let input = TextInput::new("user")
            .with_value("ann")
            .with_placeholder("Login")
            .as_required();
        let mut ctx = RenderContext::default();

        assert_eq!(
            input.receiver(&mut ctx).unwrap(),
            format!(
                "<input id=\"{}\" class=\"form-control\" name=\"user\" type=\"text\" value=\"ann\" placeholder=\"Login\" required>",
                input.id()
            )
        );
    }

    #[test]
    fn multirows_switches_to_textarea() {
        let input = TextInput::new("bio")
            .with_value("a < b")
            .with_multirows(4)
            .unwrap()
            .as_readonly()
            .as_disabled();
        let mut ctx = RenderContext::default();

        assert_eq!(
            input.receiver(&mut ctx).unwrap(),
            format!(
                "<textarea id=\"{}\" class=\"form-control\" name=\"bio\" rows=\"4\" readonly disabled>a &lt; b</textarea>",
                input.id()
            )
        );
    }

    #[test]
    fn multirows_conflicts_with_single_line_modifiers_in_either_order() {
        let after = TextInput::new("a").as_email().unwrap().with_multirows(3);
        assert!(matches!(after, Err(UiError::Invariant(_))));

        let before = TextInput::new("a").with_multirows(3).unwrap().as_password();
        assert!(matches!(before, Err(UiError::Invariant(_))));

        let numeric = NumericInput::new("n").with_step(2).unwrap().with_multirows(2);
        assert!(matches!(numeric, Err(UiError::Invariant(_))));

        let range = NumericInput::new("n")
            .with_multirows(2)
            .unwrap()
            .with_range(0, 10);
        assert!(matches!(range, Err(UiError::Invariant(_))));
    }

    #[test]
    fn zero_rows_is_rejected() {
        assert!(matches!(
            TextInput::new("bio").with_multirows(0),
            Err(UiError::Value(_))
        ));
        assert!(matches!(
            NumericInput::new("n").with_multirows(0),
            Err(UiError::Value(_))
        ));
    }

    #[test]
    fn numeric_input_carries_bounds_and_step() {
        let input = NumericInput::new("qty")
            .with_value(3)
            .with_range(1, 9)
            .unwrap()
            .with_step(2)
            .unwrap();
        let mut ctx = RenderContext::default();

        assert_eq!(
            input.receiver(&mut ctx).unwrap(),
            format!(
                "<input id=\"{}\" class=\"form-control\" name=\"qty\" type=\"number\" value=\"3\" min=\"1\" max=\"9\" step=\"2\">",
                input.id()
            )
        );
    }

    #[test]
    fn password_type_is_emitted() {
        let input = TextInput::new("secret").as_password().unwrap();
        assert!(input.render().unwrap().contains("type=\"password\""));
    }
}
