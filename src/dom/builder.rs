// ============================================================================
// CREATE ELEMENT - Inspirado en React.createElement, pero devuelve nodos DOM
// ============================================================================
// Pensado como destino de JSX/markup transformado a llamadas anidadas:
//   <div id="x">hola</div>  ->  create_element(host, "div", props, vec!["hola".into()])
//   <>a b</>                ->  create_element(host, Tag::Fragment, Props::new(), ...)
// ============================================================================

use crate::dom::{render, set_property};
use crate::host::Host;
use crate::models::{Child, Props, Tag};

/// Crear un elemento (o delegar en un componente) con props e hijos.
///
/// - `Tag::Element`: crea el elemento, asigna cada prop en orden con
///   `set_property` y rendera los hijos dentro. Devuelve `Child::Node`.
/// - `Tag::Component`: devuelve exactamente lo que devuelva el componente.
/// - `Tag::Fragment`: equivale al componente `fragment`.
pub fn create_element<H: Host>(
    host: &H,
    tag: impl Into<Tag<H>>,
    props: Props<H>,
    children: Vec<Child<H>>,
) -> Result<Child<H>, H::Error> {
    match tag.into() {
        Tag::Component(component) => component(host, props, children),
        Tag::Fragment => fragment(host, props, children),
        Tag::Element(name) => {
            log::debug!("[CREATE-ELEMENT] <{}> props={} hijos={}", name, props.len(), children.len());
            let element = host.create_element(&name)?;

            for (prop, value) in props {
                set_property(host, &element, &prop, value)?;
            }

            render(host, Child::List(children), &element)?;
            Ok(Child::Node(element))
        }
    }
}

/// Componente fragmento: contenedor sin representación propia con los hijos dentro.
/// Las props se ignoran.
pub fn fragment<H: Host>(host: &H, _props: Props<H>, children: Vec<Child<H>>) -> Result<Child<H>, H::Error> {
    let fragment = host.create_document_fragment();
    render(host, Child::List(children), &fragment)?;
    Ok(Child::Node(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::host::memory::{MemoryDom, MemoryNode};
    use crate::host::DomError;
    use crate::models::{StyleMap, Value};

    fn node(child: Child<MemoryDom>) -> MemoryNode {
        child.into_node().expect("se esperaba un nodo")
    }

    #[test]
    fn test_create_element_with_props_and_text() {
        let dom = MemoryDom::new();

        let div = node(create_element(&dom, "div", Props::new().with("id", "x"), vec!["hello".into()]).unwrap());

        assert_eq!(div.tag_name().as_deref(), Some("div"));
        assert_eq!(div.attribute("id").as_deref(), Some("x"));
        assert_eq!(div.child_count(), 1);
        assert_eq!(div.children()[0].text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_create_element_nested_tree() {
        let dom = MemoryDom::new();
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);

        let button = create_element(
            &dom,
            "button",
            Props::<MemoryDom>::new()
                .with("type", "button")
                .with("style", StyleMap::new().with("fontSize", "12px"))
                .on("onClick", move |_| counter.set(counter.get() + 1)),
            vec!["OK".into()],
        )
        .unwrap();
        let list = create_element(
            &dom,
            "ul",
            Props::new().with("classList", "menu"),
            vec![
                create_element(&dom, "li", Props::new(), vec!["uno".into()]).unwrap(),
                vec![
                    create_element(&dom, "li", Props::new(), vec!["dos".into()]).unwrap(),
                    create_element(&dom, "li", Props::new(), vec![button]).unwrap(),
                ]
                .into(),
            ],
        )
        .unwrap();
        let list = node(list);

        assert_eq!(
            list.to_html(),
            "<ul class=\"menu\"><li>uno</li><li>dos</li>\
             <li><button type=\"button\" style=\"font-size:12px;\">OK</button></li></ul>"
        );

        let button = dom.query_selector(&list, "button").unwrap().unwrap();
        button.dispatch_event("click");
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_props_applied_in_order() {
        let dom = MemoryDom::new();
        let p = node(
            create_element(
                &dom,
                "p",
                Props::new().with("innerText", "primero").with("data-a", 1).with("data-b", 2),
                vec!["segundo".into()],
            )
            .unwrap(),
        );

        let names: Vec<String> = p.attributes().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["data-a", "data-b"]);
        // innerText se asigna antes de renderar los hijos
        assert_eq!(p.text_content(), "primerosegundo");
    }

    #[test]
    fn test_fragment_groups_children() {
        let dom = MemoryDom::new();

        let fragment = node(create_element(&dom, Tag::Fragment, Props::new(), vec!["a".into(), "b".into()]).unwrap());

        assert!(fragment.is_fragment());
        let texts: Vec<String> = fragment.children().iter().filter_map(MemoryNode::text).collect();
        assert_eq!(texts, vec!["a", "b"]);

        let parent = dom.create_element("div").unwrap();
        dom.append_child(&parent, &fragment).unwrap();
        assert_eq!(parent.to_html(), "<div>ab</div>");
        assert_eq!(fragment.child_count(), 0);
    }

    #[test]
    fn test_fragment_ignores_props() {
        let dom = MemoryDom::new();
        let fragment = node(
            create_element(&dom, Tag::Fragment, Props::new().with("id", "ignored"), vec![]).unwrap(),
        );
        assert!(fragment.is_fragment());
        assert_eq!(fragment.child_count(), 0);
    }

    #[test]
    fn test_component_result_passes_through() {
        let dom = MemoryDom::new();
        let seen = Rc::new(Cell::new(0));
        let seen_by_component = Rc::clone(&seen);

        let raw = Tag::component(move |_host: &MemoryDom, props: Props<MemoryDom>, children: Vec<Child<MemoryDom>>| {
            seen_by_component.set(props.len() + children.len());
            Ok(Child::from("raw"))
        });
        let result = create_element(&dom, raw, Props::new().with("a", 1), vec!["x".into(), "y".into()]).unwrap();
        assert_eq!(result.as_text(), Some("raw"));
        assert_eq!(seen.get(), 3);

        let nothing = Tag::component(|_: &MemoryDom, _: Props<MemoryDom>, _: Vec<Child<MemoryDom>>| Ok(Child::empty()));
        assert!(create_element(&dom, nothing, Props::new(), vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_component_composes_elements() {
        let dom = MemoryDom::new();
        let card = Tag::component(|host: &MemoryDom, props: Props<MemoryDom>, children: Vec<Child<MemoryDom>>| {
            let title = props.get("title").map(Value::to_string).unwrap_or_default();
            create_element(
                host,
                "article",
                Props::new().with("classList", "card"),
                vec![create_element(host, "h2", Props::new(), vec![title.into()])?, children.into()],
            )
        });

        let article = node(create_element(&dom, card, Props::new().with("title", "Hola"), vec!["cuerpo".into()]).unwrap());

        assert_eq!(article.to_html(), "<article class=\"card\"><h2>Hola</h2>cuerpo</article>");
    }

    #[test]
    fn test_component_errors_propagate() {
        let dom = MemoryDom::new();
        let failing = Tag::component(|_: &MemoryDom, _: Props<MemoryDom>, _: Vec<Child<MemoryDom>>| {
            Err(DomError::Type("boom".to_string()))
        });
        assert_eq!(
            create_element(&dom, failing, Props::new(), vec![]).unwrap_err(),
            DomError::Type("boom".to_string())
        );
    }

    #[test]
    fn test_invalid_tag_and_prop_errors() {
        let dom = MemoryDom::new();
        assert_eq!(
            create_element(&dom, "bad tag", Props::new(), vec![]).unwrap_err(),
            DomError::InvalidCharacter("bad tag".to_string())
        );
        assert_eq!(
            create_element(&dom, "div", Props::new().with("a b", "x"), vec![]).unwrap_err(),
            DomError::InvalidCharacter("a b".to_string())
        );
    }
}
