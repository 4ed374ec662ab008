//! The component contract and the recursive rendering protocol.
//!
//! Rendering walks the tree once. Every component writes its own element into a caller-owned
//! buffer and recurses into its children; nothing is written back into component state, so a
//! component renders to identical markup every time it is asked.

use std::fmt;

use crate::error::UiResult;
use crate::html::escape;
use crate::identity::ComponentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Concrete component type, used where rendering depends on what a reference points at.
pub enum ComponentKind {
    /// [`crate::Text`].
    Text,
    /// [`crate::Icon`].
    Icon,
    /// [`crate::Image`].
    Image,
    /// [`crate::Badge`].
    Badge,
    /// [`crate::Separator`].
    Separator,
    /// [`crate::Anchor`].
    Anchor,
    /// [`crate::Button`].
    Button,
    /// [`crate::Link`] resource element.
    Link,
    /// [`crate::Script`] include.
    Script,
    /// [`crate::Panel`].
    Panel,
    /// [`crate::List`].
    List,
    /// [`crate::ListItem`].
    ListItem,
    /// [`crate::Deck`].
    Deck,
    /// [`crate::Card`].
    Card,
    /// [`crate::Navigation`].
    Navigation,
    /// [`crate::Table`].
    Table,
    /// [`crate::Form`].
    Form,
    /// Any form input.
    Input,
    /// [`crate::Dialog`].
    Dialog,
    /// [`crate::Toast`].
    Toast,
    /// [`crate::Menu`].
    Menu,
    /// [`crate::Page`].
    Page,
}

impl ComponentKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Icon => "Icon",
            Self::Image => "Image",
            Self::Badge => "Badge",
            Self::Separator => "Separator",
            Self::Anchor => "Anchor",
            Self::Button => "Button",
            Self::Link => "Link",
            Self::Script => "Script",
            Self::Panel => "Panel",
            Self::List => "List",
            Self::ListItem => "ListItem",
            Self::Deck => "Deck",
            Self::Card => "Card",
            Self::Navigation => "Navigation",
            Self::Table => "Table",
            Self::Form => "Form",
            Self::Input => "Input",
            Self::Dialog => "Dialog",
            Self::Toast => "Toast",
            Self::Menu => "Menu",
            Self::Page => "Page",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Non-owning reference to another component.
///
/// A handle never keeps its target alive and carries only what rendering needs to address it:
/// the DOM identifier and the component kind.
pub struct Handle {
    id: ComponentId,
    kind: ComponentKind,
}

impl Handle {
    /// Identifier of the referenced component.
    pub fn id(self) -> ComponentId {
        self.id
    }

    /// Kind of the referenced component.
    pub fn kind(self) -> ComponentKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Containers that a dismiss action can close.
pub enum DismissScope {
    /// Bootstrap modal dialog.
    Modal,
    /// Bootstrap toast.
    Toast,
}

impl DismissScope {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::Toast => "toast",
        }
    }
}

#[derive(Debug, Default)]
/// State threaded through one render pass.
pub struct RenderContext {
    dismiss_scopes: Vec<DismissScope>,
}

impl RenderContext {
    /// Innermost dismissible container currently being rendered.
    pub fn dismiss_scope(&self) -> Option<DismissScope> {
        self.dismiss_scopes.last().copied()
    }

    /// Runs `render` with `scope` as the innermost dismissible container.
    pub(crate) fn within<F>(&mut self, scope: DismissScope, render: F) -> UiResult<()>
    where
        F: FnOnce(&mut Self) -> UiResult<()>,
    {
        self.dismiss_scopes.push(scope);
        let result = render(self);
        self.dismiss_scopes.pop();
        result
    }
}

/// A node in the render tree.
pub trait Component {
    /// Identifier assigned at construction.
    fn id(&self) -> ComponentId;

    /// Concrete component type.
    fn kind(&self) -> ComponentKind;

    /// Appends this component's markup to `out`.
    ///
    /// Implementations must not mutate state. On error `out` may hold partial markup; callers
    /// that expose output go through [`Component::render`].
    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()>;

    /// Non-owning reference usable as an action target.
    fn handle(&self) -> Handle {
        Handle {
            id: self.id(),
            kind: self.kind(),
        }
    }

    /// Renders this component and its subtree.
    fn render(&self) -> UiResult<String> {
        self.render_with(&mut RenderContext::default())
    }

    /// Renders inside an existing context, returning markup only when the whole subtree succeeds.
    fn render_with(&self, ctx: &mut RenderContext) -> UiResult<String> {
        let mut out = String::new();
        self.write_html(&mut out, ctx)?;
        Ok(out)
    }
}

/// Owned child component.
pub type Node = Box<dyn Component>;

/// Conversion into an owned [`Node`].
pub trait IntoNode {
    /// Boxes the component.
    fn into_node(self) -> Node;
}

impl<C: Component + 'static> IntoNode for C {
    fn into_node(self) -> Node {
        Box::new(self)
    }
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

/// Builds a `Vec<Node>` from heterogeneous components.
#[macro_export]
macro_rules! nodes {
    () => {
        ::std::vec::Vec::<$crate::Node>::new()
    };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$($crate::IntoNode::into_node($child)),+]
    };
}

pub(crate) fn write_children(
    children: &[Node],
    out: &mut String,
    ctx: &mut RenderContext,
) -> UiResult<()> {
    for child in children {
        child.write_html(out, ctx)?;
    }
    Ok(())
}

/// Either literal text or a component.
///
/// Used wherever a parameter may be plain text or a nested component (button captions, dialog
/// and toast titles, table value transforms). Literals are escaped when emitted.
pub enum Content {
    /// Plain text.
    Literal(String),
    /// Nested component.
    Node(Node),
}

impl Content {
    pub(crate) fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        match self {
            Self::Literal(text) => {
                out.push_str(&escape(text));
                Ok(())
            }
            Self::Node(node) => node.write_html(out, ctx),
        }
    }

    pub(crate) fn to_html(&self, ctx: &mut RenderContext) -> UiResult<String> {
        let mut out = String::new();
        self.write_html(&mut out, ctx)?;
        Ok(out)
    }

    /// Literal text, if this content is not a component.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Node(_) => None,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Node(node) => f
                .debug_tuple("Node")
                .field(&node.kind())
                .field(&node.id())
                .finish(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl<C: Component + 'static> From<C> for Content {
    fn from(component: C) -> Self {
        Self::Node(Box::new(component))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Button, Dialog, Text};

    #[test]
    fn render_is_repeatable() {
        let button = Button::new("Save");
        assert_eq!(button.render().unwrap(), button.render().unwrap());
    }

    #[test]
    fn handle_carries_identity_and_kind() {
        let dialog = Dialog::new("Title", Text::new("Body"));
        let handle = dialog.handle();

        assert_eq!(handle.id(), dialog.id());
        assert_eq!(handle.kind(), ComponentKind::Dialog);
    }

    #[test]
    fn literal_content_is_escaped_and_nodes_render() {
        let mut ctx = RenderContext::default();
        let literal = Content::from("<b>");
        let node = Content::from(Text::new("x").as_strong());

        assert_eq!(literal.to_html(&mut ctx).unwrap(), "&lt;b&gt;");
        assert!(node.to_html(&mut ctx).unwrap().contains("<strong>x</strong>"));
        assert_eq!(literal.as_literal(), Some("<b>"));
    }

    #[test]
    fn dismiss_scope_is_restored_after_nested_render() {
        let mut ctx = RenderContext::default();
        ctx.within(DismissScope::Modal, |ctx| {
            assert_eq!(ctx.dismiss_scope(), Some(DismissScope::Modal));
            ctx.within(DismissScope::Toast, |ctx| {
                assert_eq!(ctx.dismiss_scope(), Some(DismissScope::Toast));
                Ok(())
            })?;
            assert_eq!(ctx.dismiss_scope(), Some(DismissScope::Modal));
            Ok(())
        })
        .unwrap();
        assert_eq!(ctx.dismiss_scope(), None);
    }

    #[test]
    fn nodes_macro_boxes_mixed_components() {
        let children = crate::nodes![Text::new("a"), Button::new("b")];
        let kinds: Vec<_> = children.iter().map(|child| child.kind()).collect();
        assert_eq!(kinds, vec![ComponentKind::Text, ComponentKind::Button]);
    }
}
