// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static record metadata.
//!
//! Every record type owns one [`RecordType`] descriptor, built in a `static`
//! by `#[derive(Record)]` (or by hand). Descriptors never change after
//! declaration, so they are shared freely without synchronization.
//!
//! # Inheritance
//!
//! A descriptor may name a parent descriptor. [`RecordType::attributes`]
//! walks the chain starting at the type itself: the type's own attributes in
//! declaration order, then its parent's, then the grandparent's, until a
//! descriptor without parent is reached.
//!
//! ```text
//! Order  { id, customer_name → cust_name, amount }
//!   └── Audit { created_by, created_at }
//!
//! Order::attributes() = [id, customer_name, amount, created_by, created_at]
//! ```

/// One persisted attribute of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    name:    &'static str,
    column:  Option<&'static str>,
    primary: bool
}

impl Attribute {
    /// Create an attribute whose column is its own identifier.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            column: None,
            primary: false
        }
    }

    /// Override the column name.
    #[must_use]
    pub const fn with_column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    /// Mark this attribute as the record id.
    #[must_use]
    pub const fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Attribute identifier, used to get and set the value on the record.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared column override, if any.
    pub const fn column_override(&self) -> Option<&'static str> {
        self.column
    }

    /// Physical column name: the override when declared, otherwise the
    /// identifier unchanged.
    pub const fn column_name(&self) -> &'static str {
        match self.column {
            Some(column) => column,
            None => self.name
        }
    }

    /// Check if this attribute is explicitly marked as the id.
    pub const fn is_primary(&self) -> bool {
        self.primary
    }

    /// Check if this attribute's column matches `column`, ignoring ASCII
    /// case.
    pub fn matches_column(&self, column: &str) -> bool {
        self.column_name().eq_ignore_ascii_case(column)
    }
}

/// How a record type finds its physical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBinding {
    /// Fixed table name.
    Direct(&'static str),

    /// Symbolic key, resolved at call time through the mapping table.
    Mapped(&'static str),

    /// No binding declared; table resolution fails.
    Unbound
}

/// Descriptor of a record type.
#[derive(Debug)]
pub struct RecordType {
    name:       &'static str,
    binding:    TableBinding,
    attributes: &'static [Attribute],
    parent:     Option<fn() -> &'static RecordType>
}

impl RecordType {
    /// Create a descriptor without parent.
    pub const fn new(
        name: &'static str,
        binding: TableBinding,
        attributes: &'static [Attribute]
    ) -> Self {
        Self {
            name,
            binding,
            attributes,
            parent: None
        }
    }

    /// Inherit the attributes of another record type.
    #[must_use]
    pub const fn extends(mut self, parent: fn() -> &'static RecordType) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Record type name, used in error messages.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared table binding.
    pub const fn binding(&self) -> TableBinding {
        self.binding
    }

    /// Attributes declared directly on this type.
    pub const fn declared_attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    /// Parent descriptor, if this type inherits one.
    pub fn parent(&self) -> Option<&'static RecordType> {
        self.parent.map(|parent| parent())
    }

    /// All persisted attributes: own declarations first, then each
    /// ancestor's, in declaration order.
    ///
    /// Each identifier appears once. A declaration shadows any same-named
    /// attribute further up the chain, so the child's column wins.
    pub fn attributes(&self) -> Vec<&'static Attribute> {
        let mut attributes: Vec<&'static Attribute> = self.attributes.iter().collect();
        let mut next = self.parent();
        while let Some(ancestor) = next {
            for attribute in ancestor.attributes {
                if !attributes.iter().any(|a| a.name == attribute.name) {
                    attributes.push(attribute);
                }
            }
            next = ancestor.parent();
        }
        attributes
    }

    /// Find an attribute by identifier anywhere in the chain.
    pub fn attribute(&self, name: &str) -> Option<&'static Attribute> {
        self.attributes().into_iter().find(|a| a.name == name)
    }

    /// The id attribute: the one marked primary, else the one named `id`.
    pub fn id_attribute(&self) -> Option<&'static Attribute> {
        let attributes = self.attributes();
        attributes
            .iter()
            .copied()
            .find(|a| a.primary)
            .or_else(|| attributes.iter().copied().find(|a| a.name == "id"))
    }

    /// Column of the id attribute, `"id"` when the type has none.
    pub fn id_column(&self) -> &'static str {
        self.id_attribute().map_or("id", Attribute::column_name)
    }
}
