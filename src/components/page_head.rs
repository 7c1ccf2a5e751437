use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::meta::{for_route, structured_data, PageMeta};
use crate::Route;

const STRUCTURED_DATA_ID: &str = "structured-data";

fn upsert(document: &Document, selector: &str, tag: &str) -> Result<Element, JsValue> {
    if let Some(existing) = document.query_selector(selector)? {
        return Ok(existing);
    }
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    let element = document.create_element(tag)?;
    head.append_child(&element)?;
    Ok(element)
}

fn apply(document: &Document, meta: &PageMeta) -> Result<(), JsValue> {
    document.set_title(meta.title);

    for tag in meta.tags() {
        let (attribute, key) = tag.key.attribute();
        let element = upsert(document, &format!("meta[{}=\"{}\"]", attribute, key), "meta")?;
        element.set_attribute(attribute, key)?;
        element.set_attribute("content", &tag.content)?;
    }

    let canonical = upsert(document, "link[rel=\"canonical\"]", "link")?;
    canonical.set_attribute("rel", "canonical")?;
    canonical.set_attribute("href", &meta.canonical)?;
    Ok(())
}

fn install_structured_data(document: &Document) -> Result<(), JsValue> {
    let json = structured_data().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let script = upsert(document, &format!("script#{}", STRUCTURED_DATA_ID), "script")?;
    script.set_id(STRUCTURED_DATA_ID);
    script.set_attribute("type", "application/ld+json")?;
    script.set_text_content(Some(&json));
    Ok(())
}

/// Keeps the document head in step with the current route. Renders nothing.
#[function_component]
pub fn PageHead() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with_deps(
        |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Err(err) = install_structured_data(&document) {
                    warn!("Failed to write structured data: {:?}", err);
                }
            }
            || ()
        },
        (),
    );

    use_effect_with_deps(
        |route| {
            let meta = for_route(route);
            match web_sys::window().and_then(|window| window.document()) {
                Some(document) => match apply(&document, &meta) {
                    Ok(()) => debug!("Applied head metadata for {}", meta.canonical),
                    Err(err) => warn!("Failed to apply head metadata: {:?}", err),
                },
                None => warn!("No document available, head metadata skipped"),
            }
            || ()
        },
        route,
    );

    html! {}
}
