#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic colour category shared by every styled component.
pub enum Category {
    /// Primary brand colour.
    Primary,
    /// Secondary/muted colour.
    Secondary,
    /// Success state.
    Success,
    /// Danger/destructive state.
    Danger,
    /// Warning state.
    Warning,
    /// Informational state.
    Info,
    /// Light surface.
    Light,
    /// Dark surface.
    Dark,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Warning,
        Self::Info,
        Self::Light,
        Self::Dark,
    ];

    /// Framework token used in class names (`btn-{token}`, `bg-{token}`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Appearance state: at most one category.
pub struct Appearance {
    category: Option<Category>,
}

impl Appearance {
    /// Current category.
    pub fn category(self) -> Option<Category> {
        self.category
    }

    /// Replaces the category.
    pub fn set(&mut self, category: Category) {
        self.category = Some(category);
    }

    /// `{prefix}-{category}` when a category is set.
    pub(crate) fn class(self, prefix: &str) -> Option<String> {
        self.category
            .map(|category| format!("{prefix}-{}", category.token()))
    }
}

/// Appearance capability. Setters are mutually exclusive; the last call wins.
pub trait WithAppearance: Sized {
    /// Appearance state.
    fn appearance(&self) -> &Appearance;

    /// Mutable appearance state.
    fn appearance_mut(&mut self) -> &mut Appearance;

    /// Current category.
    fn category(&self) -> Option<Category> {
        self.appearance().category()
    }

    /// Sets an arbitrary category.
    fn with_category(mut self, category: Category) -> Self {
        self.appearance_mut().set(category);
        self
    }

    /// Primary category.
    fn as_primary(self) -> Self {
        self.with_category(Category::Primary)
    }

    /// Secondary category.
    fn as_secondary(self) -> Self {
        self.with_category(Category::Secondary)
    }

    /// Success category.
    fn as_success(self) -> Self {
        self.with_category(Category::Success)
    }

    /// Danger category.
    fn as_danger(self) -> Self {
        self.with_category(Category::Danger)
    }

    /// Warning category.
    fn as_warning(self) -> Self {
        self.with_category(Category::Warning)
    }

    /// Info category.
    fn as_info(self) -> Self {
        self.with_category(Category::Info)
    }

    /// Light category.
    fn as_light(self) -> Self {
        self.with_category(Category::Light)
    }

    /// Dark category.
    fn as_dark(self) -> Self {
        self.with_category(Category::Dark)
    }
}

/// Outline capability.
///
/// Only the flag lives here. Each component decides what outlined means for its markup.
pub trait WithOutline: Sized {
    /// Whether the outlined variant is selected.
    fn is_outline(&self) -> bool;

    /// Mutable outline flag.
    fn outline_mut(&mut self) -> &mut bool;

    /// Selects the outlined variant.
    fn as_outline(mut self) -> Self {
        *self.outline_mut() = true;
        self
    }
}

/// Availability capability.
pub trait WithAvailability: Sized {
    /// Whether the component is disabled.
    fn is_disabled(&self) -> bool;

    /// Mutable disabled flag.
    fn disabled_mut(&mut self) -> &mut bool;

    /// Disables interaction.
    fn as_disabled(mut self) -> Self {
        *self.disabled_mut() = true;
        self
    }
}

/// Border classes for surfaces that render outline as a coloured border (panels, toasts).
///
/// Outlined surfaces get `border` plus `border-{category}`; filled ones get
/// `{fill_prefix}-{category}`.
pub(crate) fn surface_classes(
    appearance: Appearance,
    outline: bool,
    fill_prefix: &str,
) -> Vec<String> {
    match (outline, appearance.category()) {
        (true, Some(category)) => vec!["border".into(), format!("border-{}", category.token())],
        (true, None) => vec!["border".into()],
        (false, Some(category)) => vec![format!("{fill_prefix}-{}", category.token())],
        (false, None) => Vec::new(),
    }
}
