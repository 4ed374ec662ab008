//! Capabilities: independent bundles of state plus fluent methods that components compose.
//!
//! Each capability is a plain state value owned by the component and a trait whose provided
//! methods do the work. Components opt in with `capabilities!`, which wires the trait accessors
//! to conventionally named fields (`classes`, `appearance`, `outline`, `disabled`, `action`).
//! Render code asks each capability for its contribution explicitly.

mod action;
mod appearance;
mod classes;

pub use action::{ActionBinding, ActionHost, Actionable, ResolvedAction, Target};
pub use appearance::{Appearance, Category, WithAppearance, WithAvailability, WithOutline};
pub use classes::{ClassSet, WithClasses};

pub(crate) use appearance::surface_classes;

macro_rules! capabilities {
    ($ty:ty: $($cap:ident),+ $(,)?) => {
        $($crate::capabilities::capabilities!(@one $ty, $cap);)+
    };
    (@one $ty:ty, classes) => {
        impl $crate::capabilities::WithClasses for $ty {
            fn class_set(&self) -> &$crate::capabilities::ClassSet {
                &self.classes
            }

            fn class_set_mut(&mut self) -> &mut $crate::capabilities::ClassSet {
                &mut self.classes
            }
        }
    };
    (@one $ty:ty, appearance) => {
        impl $crate::capabilities::WithAppearance for $ty {
            fn appearance(&self) -> &$crate::capabilities::Appearance {
                &self.appearance
            }

            fn appearance_mut(&mut self) -> &mut $crate::capabilities::Appearance {
                &mut self.appearance
            }
        }
    };
    (@one $ty:ty, outline) => {
        impl $crate::capabilities::WithOutline for $ty {
            fn is_outline(&self) -> bool {
                self.outline
            }

            fn outline_mut(&mut self) -> &mut bool {
                &mut self.outline
            }
        }
    };
    (@one $ty:ty, availability) => {
        impl $crate::capabilities::WithAvailability for $ty {
            fn is_disabled(&self) -> bool {
                self.disabled
            }

            fn disabled_mut(&mut self) -> &mut bool {
                &mut self.disabled
            }
        }
    };
    (@one $ty:ty, action) => {
        impl $crate::capabilities::Actionable for $ty {
            fn action(&self) -> &$crate::capabilities::ActionBinding {
                &self.action
            }

            fn action_mut(&mut self) -> &mut $crate::capabilities::ActionBinding {
                &mut self.action
            }
        }
    };
}

pub(crate) use capabilities;
