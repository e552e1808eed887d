// ============================================================================
// NÚMEROS - Formato compatible con Number.prototype.toString
// ============================================================================

/// Formatear un número como lo haría JavaScript al concatenarlo a un string.
///
/// Cubre los casos habituales en estilos y atributos: enteros sin `.0`,
/// `NaN`, `Infinity` y `-0` como `0`. No replica la notación exponencial
/// de JS para magnitudes extremas.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
