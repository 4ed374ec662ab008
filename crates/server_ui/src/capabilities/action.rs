use leptos::logging::warn;

use crate::error::{UiError, UiResult};
use crate::html::attr;
use crate::identity::ComponentId;
use crate::render::{Component, ComponentKind, DismissScope, Handle, RenderContext};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Destination of a link action.
pub enum Target {
    /// External or relative URL.
    Url(String),
    /// Another component, addressed by its DOM id.
    Component(Handle),
}

impl From<&str> for Target {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for Target {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Handle> for Target {
    fn from(handle: Handle) -> Self {
        Self::Component(handle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The single behaviour a component triggers on interaction.
pub enum ActionBinding {
    /// No behaviour.
    #[default]
    Unbound,
    /// Navigate to a URL or to another component's anchor.
    Link(Target),
    /// Open/show another component (a dialog or a tab pane).
    Toggle(Handle),
    /// Expand/collapse another component.
    Collapse(Handle),
    /// Close the nearest enclosing dismissible container.
    Dismiss,
    /// Submit the enclosing form.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element family an action is rendered on.
pub enum ActionHost {
    /// `<a>` element.
    Anchor,
    /// `<button>` element (or a button-styled `<a>` for links).
    Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Action after render-time validation, ready to emit as attributes.
pub enum ResolvedAction {
    /// No behaviour.
    None,
    /// Plain navigation.
    Href(String),
    /// Open a modal dialog.
    Modal(ComponentId),
    /// Show a tab pane.
    Tab(ComponentId),
    /// Expand/collapse a region.
    Collapse(ComponentId),
    /// Close the given container type.
    Dismiss(DismissScope),
    /// Submit the enclosing form.
    Submit,
}

impl ActionBinding {
    /// Validates the binding against its target and the render context.
    ///
    /// Toggle targets are checked here rather than at bind time: a toggle may only point at a
    /// dialog or a panel.
    pub fn resolve(&self, host: ActionHost, ctx: &RenderContext) -> UiResult<ResolvedAction> {
        match self {
            Self::Unbound => Ok(ResolvedAction::None),
            Self::Link(Target::Url(url)) => Ok(ResolvedAction::Href(url.clone())),
            Self::Link(Target::Component(handle)) => {
                Ok(ResolvedAction::Href(format!("#{}", handle.id())))
            }
            Self::Toggle(handle) => match handle.kind() {
                ComponentKind::Dialog => Ok(ResolvedAction::Modal(handle.id())),
                ComponentKind::Panel => Ok(ResolvedAction::Tab(handle.id())),
                other => Err(UiError::type_error(format!(
                    "toggle target must be a Dialog or a Panel, got {}",
                    other.name()
                ))),
            },
            Self::Collapse(handle) => Ok(ResolvedAction::Collapse(handle.id())),
            Self::Dismiss => Ok(ResolvedAction::Dismiss(ctx.dismiss_scope().unwrap_or_else(
                || {
                    warn!("dismiss action rendered outside a dialog or toast; assuming modal");
                    DismissScope::Modal
                },
            ))),
            Self::Submit => match host {
                ActionHost::Button => Ok(ResolvedAction::Submit),
                ActionHost::Anchor => Err(UiError::type_error(
                    "an anchor cannot submit a form; use a Button",
                )),
            },
        }
    }
}

impl ResolvedAction {
    /// Whether the host should be rendered as an `<a>` element.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Href(_))
    }

    /// Attributes for an `<a>` host.
    pub(crate) fn anchor_attrs(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Href(href) => attr("href", href),
            Self::Modal(id) => format!(
                "{}{}{}",
                attr("href", "#"),
                attr("data-bs-toggle", "modal"),
                attr("data-bs-target", format!("#{id}"))
            ),
            Self::Tab(id) => format!(
                "{}{}{}{}",
                attr("href", format!("#{id}")),
                attr("data-bs-toggle", "tab"),
                attr("role", "tab"),
                attr("aria-controls", id.to_string())
            ),
            Self::Collapse(id) => format!(
                "{}{}{}{}{}",
                attr("href", format!("#{id}")),
                attr("data-bs-toggle", "collapse"),
                attr("role", "button"),
                attr("aria-expanded", "false"),
                attr("aria-controls", id.to_string())
            ),
            Self::Dismiss(scope) => format!(
                "{}{}",
                attr("href", "#"),
                attr("data-bs-dismiss", scope.token())
            ),
            Self::Submit => String::new(),
        }
    }

    /// Attributes for a `<button>` host. Navigation is emitted by the caller as an `<a>`.
    pub(crate) fn button_attrs(&self) -> String {
        match self {
            Self::None | Self::Href(_) => attr("type", "button"),
            Self::Modal(id) => format!(
                "{}{}{}",
                attr("type", "button"),
                attr("data-bs-toggle", "modal"),
                attr("data-bs-target", format!("#{id}"))
            ),
            Self::Tab(id) => format!(
                "{}{}{}{}{}",
                attr("type", "button"),
                attr("data-bs-toggle", "tab"),
                attr("data-bs-target", format!("#{id}")),
                attr("role", "tab"),
                attr("aria-controls", id.to_string())
            ),
            Self::Collapse(id) => format!(
                "{}{}{}{}{}",
                attr("type", "button"),
                attr("data-bs-toggle", "collapse"),
                attr("data-bs-target", format!("#{id}")),
                attr("aria-expanded", "false"),
                attr("aria-controls", id.to_string())
            ),
            Self::Dismiss(scope) => format!(
                "{}{}",
                attr("type", "button"),
                attr("data-bs-dismiss", scope.token())
            ),
            Self::Submit => attr("type", "submit"),
        }
    }
}

/// Action capability. Exactly one action is bound at a time; every setter replaces the previous
/// binding.
pub trait Actionable: Sized {
    /// Current binding.
    fn action(&self) -> &ActionBinding;

    /// Mutable binding.
    fn action_mut(&mut self) -> &mut ActionBinding;

    /// Navigate to a URL or to another component (`component.handle()`).
    fn link(mut self, target: impl Into<Target>) -> Self {
        *self.action_mut() = ActionBinding::Link(target.into());
        self
    }

    /// Open another component; it must be a dialog or a panel by render time.
    fn toggle<C: Component + ?Sized>(mut self, target: &C) -> Self {
        *self.action_mut() = ActionBinding::Toggle(target.handle());
        self
    }

    /// Expand or collapse another component.
    fn collapse<C: Component + ?Sized>(mut self, target: &C) -> Self {
        *self.action_mut() = ActionBinding::Collapse(target.handle());
        self
    }

    /// Close the enclosing dialog or toast.
    fn dismiss(mut self) -> Self {
        *self.action_mut() = ActionBinding::Dismiss;
        self
    }

    /// Submit the enclosing form.
    fn submit(mut self) -> Self {
        *self.action_mut() = ActionBinding::Submit;
        self
    }
}
