// ============================================================================
// RENDER - Inspirado en ReactDOM.render, pero con nodos DOM reales
// ============================================================================

use crate::host::Host;
use crate::models::Child;

/// Aplanar `child` en profundidad y agregar los nodos resultantes a `parent`, en orden.
///
/// Los textos se envuelven en nodos de texto; los nodos se agregan tal cual.
/// Si el host falla a mitad, los nodos ya agregados permanecen.
pub fn render<H: Host>(host: &H, child: Child<H>, parent: &H::Node) -> Result<(), H::Error> {
    match child {
        Child::List(children) => {
            for child in children {
                render(host, child, parent)?;
            }
            Ok(())
        }
        Child::Text(text) => {
            log::trace!("[RENDER] texto {:?}", text);
            host.append_child(parent, &host.create_text_node(&text))
        }
        Child::Node(node) => host.append_child(parent, &node),
    }
}
