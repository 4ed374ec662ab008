use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main-axis distribution for flex panels (`justify-content-*`).
pub enum Justify {
    /// `start`.
    Start,
    /// `end`.
    End,
    /// `center`.
    Center,
    /// `between`.
    Between,
    /// `around`.
    Around,
    /// `evenly`.
    Evenly,
}

impl Justify {
    const ALL: [Justify; 6] = [
        Self::Start,
        Self::End,
        Self::Center,
        Self::Between,
        Self::Around,
        Self::Evenly,
    ];

    /// Framework keyword.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Between => "between",
            Self::Around => "around",
            Self::Evenly => "evenly",
        }
    }

    /// Parses a framework keyword.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] for keywords outside the allowed set.
    pub fn parse(style: &str) -> UiResult<Self> {
        Self::ALL
            .into_iter()
            .find(|justify| justify.token() == style)
            .ok_or_else(|| {
                UiError::value_error(format!(
                    "unknown justify-content style '{style}', expected one of: {}",
                    Self::ALL.map(Self::token).join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment for flex panels (`align-items-*`).
pub enum Align {
    /// `start`.
    Start,
    /// `end`.
    End,
    /// `center`.
    Center,
    /// `baseline`.
    Baseline,
    /// `stretch`.
    Stretch,
}

impl Align {
    const ALL: [Align; 5] = [
        Self::Start,
        Self::End,
        Self::Center,
        Self::Baseline,
        Self::Stretch,
    ];

    /// Framework keyword.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Baseline => "baseline",
            Self::Stretch => "stretch",
        }
    }

    /// Parses a framework keyword.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] for keywords outside the allowed set.
    pub fn parse(style: &str) -> UiResult<Self> {
        Self::ALL
            .into_iter()
            .find(|align| align.token() == style)
            .ok_or_else(|| {
                UiError::value_error(format!(
                    "unknown align-items style '{style}', expected one of: {}",
                    Self::ALL.map(Self::token).join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How a panel lays out its children.
pub enum Arrangement {
    /// Children concatenated in one container.
    #[default]
    Stacked,
    /// One grid row per child.
    Vertical,
    /// One grid column per child inside a single row.
    Horizontal,
    /// Flex container with optional distribution and alignment.
    Flex {
        /// Main-axis distribution.
        justify: Option<Justify>,
        /// Cross-axis alignment.
        align: Option<Align>,
    },
}

/// Container grouping child components, optionally arranged on the grid.
pub struct Panel {
    id: ComponentId,
    children: Vec<Option<Node>>,
    arrangement: Arrangement,
    classes: ClassSet,
    appearance: Appearance,
    outline: bool,
}

capabilities!(Panel: classes, appearance, outline);

impl Panel {
    /// Panel over `children` in order.
    pub fn new(children: Vec<Node>) -> Self {
        Self::sparse(children.into_iter().map(Some).collect())
    }

    /// Panel over a list that may contain gaps; gaps never produce grid cells.
    pub fn sparse(children: Vec<Option<Node>>) -> Self {
        Self {
            id: ComponentId::next(),
            children,
            arrangement: Arrangement::Stacked,
            classes: ClassSet::new(),
            appearance: Appearance::default(),
            outline: false,
        }
    }

    /// Current arrangement.
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    /// Stacks children as grid rows.
    pub fn vertical(mut self) -> Self {
        self.arrangement = Arrangement::Vertical;
        self
    }

    /// Places children side by side as grid columns.
    pub fn horizontal(mut self) -> Self {
        self.arrangement = Arrangement::Horizontal;
        self
    }

    /// Flex distribution along the main axis; replaces a vertical/horizontal arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] unless `style` is one of `start`, `end`, `center`, `between`,
    /// `around`, `evenly`.
    pub fn justify_content(mut self, style: &str) -> UiResult<Self> {
        let justify = Justify::parse(style)?;
        self.arrangement = match self.arrangement {
            Arrangement::Flex { align, .. } => Arrangement::Flex {
                justify: Some(justify),
                align,
            },
            _ => Arrangement::Flex {
                justify: Some(justify),
                align: None,
            },
        };
        Ok(self)
    }

    /// Flex alignment along the cross axis; replaces a vertical/horizontal arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Value`] unless `style` is one of `start`, `end`, `center`,
    /// `baseline`, `stretch`.
    pub fn align_items(mut self, style: &str) -> UiResult<Self> {
        let align = Align::parse(style)?;
        self.arrangement = match self.arrangement {
            Arrangement::Flex { justify, .. } => Arrangement::Flex {
                justify,
                align: Some(align),
            },
            _ => Arrangement::Flex {
                justify: None,
                align: Some(align),
            },
        };
        Ok(self)
    }

    fn present_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flatten()
    }
}

impl Component for Panel {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Panel
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut classes = ClassSet::new();
        if let Arrangement::Flex { justify, align } = self.arrangement {
            classes.add("d-flex");
            if let Some(justify) = justify {
                classes.add(&format!("justify-content-{}", justify.token()));
            }
            if let Some(align) = align {
                classes.add(&format!("align-items-{}", align.token()));
            }
        }
        for class in surface_classes(self.appearance, self.outline, "bg") {
            classes.add(&class);
        }
        classes.extend(&self.classes);

        let mut body = String::new();
        match self.arrangement {
            Arrangement::Stacked | Arrangement::Flex { .. } => {
                for child in self.present_children() {
                    child.write_html(&mut body, ctx)?;
                }
            }
            Arrangement::Vertical => {
                for child in self.present_children() {
                    let cell = wrap_div("col", &child.render_with(ctx)?);
                    body.push_str(&wrap_div("row", &cell));
                }
            }
            Arrangement::Horizontal => {
                let mut row = String::new();
                for child in self.present_children() {
                    row.push_str(&wrap_div("col", &child.render_with(ctx)?));
                }
                body.push_str(&wrap_div("row", &row));
            }
        }

        out.push_str(&format!(
            "<div{}{}>{body}</div>",
            attr("id", self.id.to_string()),
            classes.attr()
        ));
        Ok(())
    }
}
