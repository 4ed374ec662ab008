//! Leaf, layout, data-display, form, overlay and page components.

use crate::capabilities::*;
use crate::error::{UiError, UiResult};
use crate::html::{attr, escape, flag, opt_attr, wrap_div};
use crate::identity::ComponentId;
use crate::render::{
    write_children, Component, ComponentKind, Content, DismissScope, IntoNode, Node,
    RenderContext,
};

mod anchor;
mod badge;
mod button;
mod deck;
mod dialog;
mod form;
mod icon;
mod image;
mod list;
mod menu;
mod navigation;
mod page;
mod panel;
mod resource;
mod separator;
mod table;
mod text;
mod toast;

pub use anchor::Anchor;
pub use badge::Badge;
pub use button::{Button, ButtonSize};
pub use deck::{Card, Deck};
pub use dialog::{Dialog, DialogSize};
pub use form::{
    CheckboxInput, Field, FileInput, Form, HiddenInput, Input, JsonInput, NumericInput,
    SelectInput, TextInput,
};
pub use icon::Icon;
pub use image::Image;
pub use list::{List, ListItem};
pub use menu::Menu;
pub use navigation::Navigation;
pub use page::Page;
pub use panel::{Align, Arrangement, Justify, Panel};
pub use resource::{Link, Script};
pub use separator::Separator;
pub use table::{Breakpoint, Entity, Table};
pub use text::Text;
pub use toast::Toast;

use button::button_variant_class;

/// Rejects `nodes` unless every one is of `kind`.
pub(crate) fn expect_kind(nodes: &[Node], kind: ComponentKind, owner: &str) -> UiResult<()> {
    match nodes.iter().find(|node| node.kind() != kind) {
        Some(node) => Err(UiError::type_error(format!(
            "{owner} accepts only {} children, got {}",
            kind.name(),
            node.kind().name()
        ))),
        None => Ok(()),
    }
}
