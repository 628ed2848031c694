//! Composite destinations described at runtime.
//!
//! _Requires Cargo feature `std`._

use std::vec::Vec;

use thiserror::Error;

use super::{Bitfields, Destination, Field, Slot};

extern crate std;

/// An error parsing a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A declaration has no field name.
    #[error("Declaration {0} has no field name.")]
    MissingName(usize),
}

/// A composite destination whose fields are described by schema text.
///
/// The schema is a list of `name:width` declarations separated by semicolons,
/// such as `"version:4; kind:4; length:8; reserved:16"`. Widths are checked
/// when the record is sized or unpacked, not when it is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    fields: Vec<Field<'a>>,
    values: Vec<u64>,
}

impl<'a> Record<'a> {
    pub fn parse(schema: &'a str) -> Result<Self, SchemaError> {
        let fields = schema
            .split(';')
            .map(str::trim)
            .filter(|decl| !decl.is_empty())
            .enumerate()
            .map(|(i, decl)| {
                let field = match decl.split_once(':') {
                    Some((name, tag)) => Field::new(name.trim(), tag.trim()),
                    None => Field::untagged(decl),
                };

                if field.name.is_empty() {
                    return Err(SchemaError::MissingName(i));
                }

                Ok(field)
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        let values = std::vec![0; fields.len()];

        Ok(Self { fields, values })
    }

    /// The value last decoded for a field, if the field exists.
    pub fn get(&self, name: &str) -> Option<u64> {
        let index = self.fields.iter().position(|f| f.name == name)?;
        self.values.get(index).copied()
    }

    /// Field names paired with their values, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, u64)> + '_ {
        self.fields.iter().map(|f| f.name).zip(self.values.iter().copied())
    }
}

impl Bitfields for Record<'_> {
    fn fields(&self) -> &[Field<'_>] {
        &self.fields
    }

    fn set_field(&mut self, index: usize, value: u64) {
        if let Some(v) = self.values.get_mut(index) {
            *v = value;
        }
    }
}

impl Destination for Record<'_> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bits(self)
    }
}
