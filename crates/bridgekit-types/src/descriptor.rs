//! Explicit type descriptors.
//!
//! Declarations that need to know about a native type (a view type, the
//! owner of a class, the argument types of a function) take a
//! `TypeDescriptor` argument instead of inspecting generic parameters at
//! runtime. Names derived from a type use [`TypeDescriptor::simple_name`].

use std::fmt;

use serde::{Deserialize, Serialize};

const UNIT_PATH: &str = "()";

/// Describes a native type by its fully qualified path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    path: String,
    #[serde(default)]
    nullable: bool,
}

impl TypeDescriptor {
    /// Describe a type by path, e.g. `"media::player::VideoPlayer"`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            nullable: false,
        }
    }

    /// Describe the Rust type `T` using its compiler-provided type name.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// The "no associated type" sentinel used by stateless classes.
    pub fn unit() -> Self {
        Self::new(UNIT_PATH)
    }

    /// Mark this type as accepting null / being omittable.
    pub fn optional(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_unit(&self) -> bool {
        self.path == UNIT_PATH
    }

    /// The last path segment without generic arguments.
    ///
    /// `"a::b::Picker<c::Date>"` yields `"Picker"`.
    pub fn simple_name(&self) -> &str {
        let base = match self.path.find('<') {
            Some(idx) => &self.path[..idx],
            None => self.path.as_str(),
        };
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.path)
        } else {
            f.write_str(&self.path)
        }
    }
}
