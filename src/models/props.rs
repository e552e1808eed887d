use std::fmt;

use crate::host::Host;
use crate::models::Value;

/// Bolsa de propiedades de un elemento, iterada en orden de inserción
pub struct Props<H: Host> {
    entries: Vec<(String, Value<H>)>,
}

impl<H: Host> Props<H> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Agregar propiedad (builder)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value<H>>) -> Self {
        self.insert(name, value);
        self
    }

    /// Agregar listener (builder): `Props::new().on("onClick", |e| ...)`
    pub fn on<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&H::Event) + 'static,
    {
        self.with(name, Value::callback(handler))
    }

    /// Agregar propiedad; si el nombre ya existe se reemplaza en su posición
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value<H>>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value<H>> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<H>)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Host> Default for Props<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> Clone for Props<H> {
    fn clone(&self) -> Self {
        Self { entries: self.entries.clone() }
    }
}

impl<H: Host> fmt::Debug for Props<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|(name, value)| (name, value))).finish()
    }
}

impl<H: Host> IntoIterator for Props<H> {
    type Item = (String, Value<H>);
    type IntoIter = std::vec::IntoIter<(String, Value<H>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
