use std::fmt;

use crate::utils::format_number;

/// Valor de una regla de estilo
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => write!(f, "{}", text),
            StyleValue::Number(number) => write!(f, "{}", format_number(*number)),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

/// Reglas de estilo en camelCase (`backgroundColor`), en orden de inserción
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    rules: Vec<(String, StyleValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar regla (builder)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Agregar regla; si el nombre ya existe se reemplaza el valor en su posición
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        let name = name.into();
        let value = value.into();
        match self.rules.iter_mut().find(|(existing, _)| *existing == name) {
            Some(rule) => rule.1 = value,
            None => self.rules.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.rules.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.rules.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_replaces_in_place() {
        let mut style = StyleMap::new()
            .with("color", "red")
            .with("margin", 0)
            .with("padding", "1px");
        style.insert("margin", "2px");

        let names: Vec<&str> = style.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["color", "margin", "padding"]);
        assert_eq!(style.get("margin"), Some(&StyleValue::Text("2px".to_string())));
        assert_eq!(style.len(), 3);
    }

    #[test]
    fn test_style_value_display() {
        assert_eq!(StyleValue::from(0).to_string(), "0");
        assert_eq!(StyleValue::from(1.5).to_string(), "1.5");
        assert_eq!(StyleValue::from("10px").to_string(), "10px");
    }

    #[test]
    fn test_from_iterator() {
        let style: StyleMap = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(style.len(), 2);
        assert!(!style.is_empty());
        assert!(StyleMap::new().is_empty());
    }
}
