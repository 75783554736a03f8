//! Domain models for fuibind
//!
//! Pure descriptor objects: packages, components, their members and the
//! closed kind tags read from authored content.

pub mod component;
pub mod kinds;
pub mod package;

pub use component::{Component, ComponentKey, Controller, ResolvedType, Variable, component_url};
pub use kinds::{ComponentKind, ObjectKind};
pub use package::{Package, PackageComponent};
