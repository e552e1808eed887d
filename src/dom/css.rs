use crate::models::StyleMap;

/// Generar un string CSS minificado a partir de reglas en camelCase.
///
/// `backgroundColor: red, margin: 0` produce `background-color:red;margin:0;`.
/// Solo las mayúsculas reciben guion; el resto de caracteres se conserva.
pub fn css_object(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(name, value)| format!("{}:{};", kebab_case(name.trim()), value))
        .collect()
}

/// `backgroundColor` -> `background-color`
fn kebab_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for c in camel.chars() {
        if c.is_uppercase() {
            out.push('-');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_object() {
        let style = StyleMap::new().with("backgroundColor", "red").with("margin", 0);
        assert_eq!(css_object(&style), "background-color:red;margin:0;");
    }

    #[test]
    fn test_empty_style() {
        assert_eq!(css_object(&StyleMap::new()), "");
    }

    #[test]
    fn test_keys_are_trimmed_and_other_chars_kept() {
        let style = StyleMap::new()
            .with("  borderTopWidth ", "1px")
            .with("--main-color", "#fff")
            .with("zIndex", 10)
            .with("opacity", 0.5)
            .with("WebkitTransform", "none");
        assert_eq!(
            css_object(&style),
            "border-top-width:1px;--main-color:#fff;z-index:10;opacity:0.5;-webkit-transform:none;"
        );
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("fontSize"), "font-size");
        assert_eq!(kebab_case("color"), "color");
        assert_eq!(kebab_case("gridArea2"), "grid-area2");
    }
}
