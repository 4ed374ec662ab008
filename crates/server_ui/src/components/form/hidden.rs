use serde::Serialize;

use super::*;

#[derive(Debug)]
/// Value submitted with the form but never shown. Labels and tips are ignored.
pub struct HiddenInput {
    id: ComponentId,
    field: Field,
    value: String,
}

impl HiddenInput {
    /// Hidden field `name` carrying `value`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            field: Field::named(name),
            value: value.into(),
        }
    }

    /// Submitted value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn hidden_markup(id: ComponentId, field: &Field, value: &str) -> String {
    format!(
        "<input{}{}{}{}>",
        attr("id", id.to_string()),
        attr("type", "hidden"),
        attr("name", field.name()),
        attr("value", value)
    )
}

impl Input for HiddenInput {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    fn receiver(&self, _ctx: &mut RenderContext) -> UiResult<String> {
        Ok(hidden_markup(self.id, &self.field, &self.value))
    }
}

impl Component for HiddenInput {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Input
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        out.push_str(&self.receiver(ctx)?);
        Ok(())
    }
}

#[derive(Debug)]
/// Hidden field carrying a JSON-encoded value.
pub struct JsonInput {
    id: ComponentId,
    field: Field,
    json: String,
}

impl JsonInput {
    /// Hidden field `name` carrying `value` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] when `value` cannot be represented as JSON (for example a map
    /// with non-string keys).
    pub fn new<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> UiResult<Self> {
        let json = serde_json::to_string(value)
            .map_err(|err| UiError::value_error(format!("value is not JSON-serializable: {err}")))?;
        Ok(Self {
            id: ComponentId::next(),
            field: Field::named(name),
            json,
        })
    }

    /// Encoded value.
    pub fn json(&self) -> &str {
        &self.json
    }
}

impl Input for JsonInput {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    fn receiver(&self, _ctx: &mut RenderContext) -> UiResult<String> {
        Ok(hidden_markup(self.id, &self.field, &self.json))
    }
}

impl Component for JsonInput {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Input
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        out.push_str(&self.receiver(ctx)?);
        Ok(())
    }
}
