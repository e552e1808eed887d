// ============================================================================
// SEARCH - Envoltorio de ParentNode.querySelector / querySelectorAll
// ============================================================================

use crate::host::Host;

/// Resultado de `search`: primer nodo o todos los nodos encontrados
#[derive(Debug, Clone, PartialEq)]
pub enum Found<N> {
    First(Option<N>),
    All(Vec<N>),
}

impl<N> Found<N> {
    /// Primer nodo encontrado (en ambos modos)
    pub fn first(self) -> Option<N> {
        match self {
            Found::First(node) => node,
            Found::All(nodes) => nodes.into_iter().next(),
        }
    }

    /// Todos los nodos encontrados (0 o 1 en modo `First`)
    pub fn into_vec(self) -> Vec<N> {
        match self {
            Found::First(node) => node.into_iter().collect(),
            Found::All(nodes) => nodes,
        }
    }
}

/// Buscar descendientes de `parent` (o de la raíz del host) con un selector.
///
/// El selector no se valida aquí: un selector inválido devuelve el error del host.
pub fn search<H: Host>(host: &H, query: &str, parent: Option<&H::Node>, many: bool) -> Result<Found<H::Node>, H::Error> {
    if many {
        search_all(host, query, parent).map(Found::All)
    } else {
        search_one(host, query, parent).map(Found::First)
    }
}

/// `search(query, parent, false)`
pub fn search_one<H: Host>(host: &H, query: &str, parent: Option<&H::Node>) -> Result<Option<H::Node>, H::Error> {
    log::debug!("[SEARCH] querySelector({:?})", query);
    match parent {
        Some(parent) => host.query_selector(parent, query),
        None => host.query_selector(&host.root(), query),
    }
}

/// `search(query, parent, true)`
pub fn search_all<H: Host>(host: &H, query: &str, parent: Option<&H::Node>) -> Result<Vec<H::Node>, H::Error> {
    log::debug!("[SEARCH] querySelectorAll({:?})", query);
    match parent {
        Some(parent) => host.query_selector_all(parent, query),
        None => host.query_selector_all(&host.root(), query),
    }
}
