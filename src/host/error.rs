/// Excepciones DOM del host en memoria (mismos nombres que las `DOMException` del navegador)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Selector mal formado (`SyntaxError`)
    Syntax(String),
    /// Selector válido pero fuera del subconjunto soportado
    NotSupported(String),
    /// Nombre de tag o atributo inválido (`InvalidCharacterError`)
    InvalidCharacter(String),
    /// Inserción que rompe el árbol (`HierarchyRequestError`)
    HierarchyRequest(String),
    /// Operación no aplicable a este tipo de nodo (`TypeError`)
    Type(String),
}

impl std::fmt::Display for DomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::Syntax(selector) => write!(f, "SyntaxError: '{}' is not a valid selector", selector),
            DomError::NotSupported(selector) => write!(f, "NotSupportedError: selector '{}' is not supported", selector),
            DomError::InvalidCharacter(name) => write!(f, "InvalidCharacterError: '{}' is not a valid name", name),
            DomError::HierarchyRequest(msg) => write!(f, "HierarchyRequestError: {}", msg),
            DomError::Type(msg) => write!(f, "TypeError: {}", msg),
        }
    }
}

impl std::error::Error for DomError {}
