//! Widget class metadata supplied by an external class loader.
//!
//! Every collection here is an ordered sequence. The order in which widgets
//! appear is the order in which their factory entries and functions are
//! emitted, so it must not depend on hashing.
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Ident = String;

/// The widgets of one or more libraries, grouped by family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLibrary {
    /// Widgets rendered with their qualified names.
    pub views: Vec<WidgetElement>,
    /// Containers rendered through their `_`-prefixed layout-params
    /// subclasses.
    pub view_groups: Vec<WidgetElement>,
}

impl WidgetLibrary {
    pub fn from_bincode(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }

    pub fn to_bincode(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Append the widgets of `other` after the widgets of `self`.
    pub fn extend(&mut self, other: WidgetLibrary) {
        self.views.extend(other.views);
        self.view_groups.extend(other.view_groups);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetElement {
    pub class: ClassDescriptor,
    /// `true` if the widget can contain child views. Containers get
    /// additional top-level builder functions.
    pub is_container: bool,
}

impl WidgetElement {
    pub fn fq_name(&self) -> &str {
        &self.class.fq_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// e.g., `android.widget.TextView`
    pub fq_name: Ident,
    /// e.g., `TextView`
    pub simple_name: Ident,
    pub is_abstract: bool,
    /// Declared constructors in declaration order.
    pub constructors: Vec<ParameterList>,
    /// Declared and inherited methods.
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    /// Construct a descriptor with no constructors or methods. `simple_name`
    /// is derived from the last segment of `fq_name`.
    pub fn new(fq_name: impl Into<Ident>) -> Self {
        let fq_name = fq_name.into();
        let simple_name = fq_name.rsplit('.').next().unwrap_or_default().to_owned();
        Self {
            fq_name,
            simple_name,
            is_abstract: false,
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: Ident,
    pub params: ParameterList,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<Ident>, params: ParameterList) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params)
    }
}

/// Parameter types of a constructor or a method, using JVM type names
/// (`int`, `android.content.Context`, ...). Equality is order-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterList(pub Vec<Ident>);

impl ParameterList {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self(types.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn types(&self) -> &[Ident] {
        &self.0
    }
}

impl PartialEq<[&str]> for ParameterList {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ty) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ty)?;
        }
        Ok(())
    }
}
