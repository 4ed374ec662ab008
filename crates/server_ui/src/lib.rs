//! Server-side component library that renders Bootstrap 5 markup.
//!
//! Pages are built as trees of components: leaves (text, icons, buttons, anchors), layout
//! containers (panels, lists, decks), data display (tables, navigation), forms, overlays
//! (dialogs, toasts) and a top-level [`Page`]. Components compose small capabilities (class
//! lists, appearance, outline, availability, action binding) through fluent builder traits and
//! render to HTML strings with [`Component::render`].
//!
//! Rendering performs no I/O and never mutates component state; the same tree renders to the
//! same markup every time.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod capabilities;
mod components;
mod config;
mod error;
mod html;
mod identity;
mod render;

pub use capabilities::{
    ActionBinding, ActionHost, Actionable, Appearance, Category, ClassSet, ResolvedAction, Target,
    WithAppearance, WithAvailability, WithClasses, WithOutline,
};
pub use components::{
    Align, Anchor, Arrangement, Badge, Breakpoint, Button, ButtonSize, Card, CheckboxInput, Deck,
    Dialog, DialogSize, Entity, Field, FileInput, Form, HiddenInput, Icon, Image, Input,
    JsonInput, Justify, Link, List, ListItem, Menu, Navigation, NumericInput, Page, Panel, Script,
    SelectInput, Separator, Table, Text, TextInput, Toast,
};
pub use config::{AssetConfig, AssetConfigError};
pub use error::{UiError, UiResult};
pub use html::escape;
pub use identity::ComponentId;
pub use render::{
    Component, ComponentKind, Content, DismissScope, Handle, IntoNode, Node, RenderContext,
};

/// Convenience imports for crates composing pages: every component plus the builder traits.
pub mod prelude {
    pub use crate::{
        nodes, Actionable, Align, Anchor, AssetConfig, Badge, Breakpoint, Button, ButtonSize,
        Card, Category, CheckboxInput, Component, Content, Deck, Dialog, DialogSize, Entity,
        FileInput, Form, HiddenInput, Icon, Image, Input, IntoNode, JsonInput, Justify, Link,
        List, ListItem, Menu, Navigation, Node, NumericInput, Page, Panel, Script, SelectInput,
        Separator, Table, Text, TextInput, Toast, UiError, UiResult, WithAppearance,
        WithAvailability, WithClasses, WithOutline,
    };
}
