use std::collections::BTreeMap;

use serde_json::Value;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// What a per-column transform produces.
pub enum Entity {
    /// Cell content.
    Value,
    /// Classes for the cell.
    Cell,
    /// Classes for the whole row.
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Width below which a responsive table scrolls horizontally.
pub enum Breakpoint {
    /// Scroll at every width (`table-responsive`).
    Always,
    /// `table-responsive-sm`.
    Small,
    /// `table-responsive-md`.
    Medium,
    /// `table-responsive-lg`.
    Large,
    /// `table-responsive-xl`.
    ExtraLarge,
    /// `table-responsive-xxl`.
    ExtraExtraLarge,
}

impl Breakpoint {
    fn class(self) -> &'static str {
        match self {
            Self::Always => "table-responsive",
            Self::Small => "table-responsive-sm",
            Self::Medium => "table-responsive-md",
            Self::Large => "table-responsive-lg",
            Self::ExtraLarge => "table-responsive-xl",
            Self::ExtraExtraLarge => "table-responsive-xxl",
        }
    }
}

type ValueTransform = Box<dyn Fn(&Value) -> Content>;
type ClassTransform = Box<dyn Fn(&Value) -> String>;

/// Data table over JSON cell values.
///
/// The first cell of every body row is its row header. Columns can carry transforms: one that
/// replaces the cell content, one that adds classes to the cell and one that adds classes to
/// the row; at most one of each per column.
pub struct Table {
    id: ComponentId,
    head: Vec<String>,
    body: Vec<Vec<Value>>,
    values: BTreeMap<usize, ValueTransform>,
    cell_classes: BTreeMap<usize, ClassTransform>,
    row_classes: BTreeMap<usize, ClassTransform>,
    striped: bool,
    bordered: bool,
    compact: bool,
    inverted: bool,
    responsive: Option<Breakpoint>,
    classes: ClassSet,
}

capabilities!(Table: classes);

impl Table {
    /// Table with column labels `head` and rows `body`. An empty head renders no `<thead>`.
    pub fn new<S: Into<String>>(head: impl IntoIterator<Item = S>, body: Vec<Vec<Value>>) -> Self {
        Self {
            id: ComponentId::next(),
            head: head.into_iter().map(Into::into).collect(),
            body,
            values: BTreeMap::new(),
            cell_classes: BTreeMap::new(),
            row_classes: BTreeMap::new(),
            striped: false,
            bordered: false,
            compact: false,
            inverted: false,
            responsive: None,
            classes: ClassSet::new(),
        }
    }

    /// Whether a transform is registered for `column` and `entity`.
    pub fn has_transform(&self, column: usize, entity: Entity) -> bool {
        match entity {
            Entity::Value => self.values.contains_key(&column),
            Entity::Cell => self.cell_classes.contains_key(&column),
            Entity::Row => self.row_classes.contains_key(&column),
        }
    }

    fn ensure_free(&self, column: usize, entity: Entity) -> UiResult<()> {
        if self.has_transform(column, entity) {
            return Err(UiError::value_error(format!(
                "{entity:?} transform for column {column} is already defined"
            )));
        }
        Ok(())
    }

    /// Replaces the content of every cell in `column`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] when the column already has a value transform.
    pub fn with_value_transform<F>(mut self, column: usize, transform: F) -> UiResult<Self>
    where
        F: Fn(&Value) -> Content + 'static,
    {
        self.ensure_free(column, Entity::Value)?;
        self.values.insert(column, Box::new(transform));
        Ok(self)
    }

    /// Adds classes to every cell in `column`, computed from the cell's value.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] when the column already has a cell transform.
    pub fn with_cell_classes<F>(mut self, column: usize, transform: F) -> UiResult<Self>
    where
        F: Fn(&Value) -> String + 'static,
    {
        self.ensure_free(column, Entity::Cell)?;
        self.cell_classes.insert(column, Box::new(transform));
        Ok(self)
    }

    /// Adds classes to every row, computed from the row's value in `column`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] when the column already has a row transform.
    pub fn with_row_classes<F>(mut self, column: usize, transform: F) -> UiResult<Self>
    where
        F: Fn(&Value) -> String + 'static,
    {
        self.ensure_free(column, Entity::Row)?;
        self.row_classes.insert(column, Box::new(transform));
        Ok(self)
    }

    /// Zebra rows (`table-striped`).
    pub fn as_striped(mut self) -> Self {
        self.striped = true;
        self
    }

    /// Borders on all cells (`table-bordered`).
    pub fn as_bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    /// Halved cell padding (`table-sm`).
    pub fn as_compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Dark variant (`table-dark`).
    pub fn as_inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    /// Horizontal scrolling below `breakpoint`.
    pub fn as_responsive(mut self, breakpoint: Breakpoint) -> Self {
        self.responsive = Some(breakpoint);
        self
    }

    fn write_head(&self, out: &mut String) {
        if self.head.is_empty() {
            return;
        }
        out.push_str("<thead><tr>");
        for label in &self.head {
            out.push_str(&format!("<th scope=\"col\">{}</th>", escape(label)));
        }
        out.push_str("</tr></thead>");
    }

    fn write_row(&self, row: &[Value], out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut row_classes = ClassSet::new();
        for (column, transform) in &self.row_classes {
            if let Some(value) = row.get(*column) {
                row_classes.add(&transform(value));
            }
        }

        out.push_str(&format!("<tr{}>", row_classes.attr()));
        for (column, value) in row.iter().enumerate() {
            let mut classes = ClassSet::new();
            if let Some(transform) = self.cell_classes.get(&column) {
                classes.add(&transform(value));
            }
            let content = match self.values.get(&column) {
                Some(transform) => transform(value).to_html(ctx)?,
                None => escape(&display(value)).into_owned(),
            };
            if column == 0 {
                out.push_str(&format!(
                    "<th scope=\"row\"{}>{content}</th>",
                    classes.attr()
                ));
            } else {
                out.push_str(&format!("<td{}>{content}</td>", classes.attr()));
            }
        }
        out.push_str("</tr>");
        Ok(())
    }
}

/// Text shown for a cell without a value transform.
fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl Component for Table {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Table
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::from("table");
        if self.striped {
            classes.add("table-striped");
        }
        if self.bordered {
            classes.add("table-bordered");
        }
        if self.compact {
            classes.add("table-sm");
        }
        if self.inverted {
            classes.add("table-dark");
        }
        if let Some(breakpoint) = self.responsive {
            classes.add(breakpoint.class());
        }
        classes.extend(&self.classes);

        let mut body = String::new();
        self.write_head(&mut body);
        body.push_str("<tbody>");
        for row in &self.body {
            self.write_row(row, &mut body, ctx)?;
        }
        body.push_str("</tbody>");

        out.push_str(&format!(
            "<table{}{}>{body}</table>",
            attr("id", self.id.to_string()),
            classes.attr()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::Badge;

    fn people() -> Table {
        Table::new(
            ["Name", "Age", "Note"],
            vec![
                vec![json!("Ann"), json!(31), json!(null)],
                vec![json!("Bob"), json!(17), json!("new")],
            ],
        )
    }

    #[test]
    fn head_and_body_render_with_row_headers() {
        let table = Table::new(["Name", "Age"], vec![vec![json!("Ann"), json!(31)]]);

        assert_eq!(
            table.render().unwrap(),
            format!(
                "<table id=\"{}\" class=\"table\">\
                 <thead><tr><th scope=\"col\">Name</th><th scope=\"col\">Age</th></tr></thead>\
                 <tbody><tr><th scope=\"row\">Ann</th><td>31</td></tr></tbody></table>",
                table.id()
            )
        );
    }

    #[test]
    fn empty_head_omits_thead() {
        let table = Table::new(Vec::<String>::new(), vec![vec![json!(true)]]);
        let html = table.render().unwrap();

        assert!(!html.contains("<thead>"));
        assert!(html.contains("<tbody><tr><th scope=\"row\">true</th></tr></tbody>"));
    }

    #[test]
    fn null_renders_empty_and_strings_unquoted() {
        let html = people().render().unwrap();

        assert!(html.contains("<th scope=\"row\">Ann</th><td>31</td><td></td>"));
        assert!(html.contains("<td>new</td>"));
    }

    #[test]
    fn transforms_shape_cells_and_rows() {
        let table = people()
            .with_value_transform(2, |value| match value.as_str() {
                Some(note) => Badge::new(note).as_info().into(),
                None => "-".into(),
            })
            .unwrap()
            .with_cell_classes(1, |value| {
                if value.as_u64().unwrap_or(0) < 18 {
                    "text-danger".to_string()
                } else {
                    String::new()
                }
            })
            .unwrap()
            .with_row_classes(1, |value| {
                if value.as_u64().unwrap_or(0) < 18 {
                    "table-warning".to_string()
                } else {
                    String::new()
                }
            })
            .unwrap()
            .with_row_classes(0, |_| "align-middle".to_string())
            .unwrap();
        let html = table.render().unwrap();

        assert!(html.contains("<tr class=\"align-middle\"><th scope=\"row\">Ann</th><td>31</td><td>-</td></tr>"));
        assert!(html.contains("<tr class=\"align-middle table-warning\"><th scope=\"row\">Bob</th><td class=\"text-danger\">17</td>"));
        assert!(html.contains("class=\"badge text-bg-info\""));
        assert!(table.has_transform(0, Entity::Row));
        assert!(!table.has_transform(0, Entity::Cell));
    }

    #[test]
    fn duplicate_transform_is_rejected() {
        let result = people()
            .with_cell_classes(1, |_| String::new())
            .unwrap()
            .with_cell_classes(1, |_| String::new());

        assert!(matches!(
            result.err(),
            Some(UiError::Value(message)) if message.contains("already defined")
        ));
    }

    #[test]
    fn toggles_add_table_modifiers() {
        let table = Table::new(["a"], vec![])
            .as_striped()
            .as_bordered()
            .as_compact()
            .as_inverted()
            .as_responsive(Breakpoint::Medium);

        assert!(table.render().unwrap().contains(
            "class=\"table table-striped table-bordered table-sm table-dark table-responsive-md\""
        ));
    }
}
