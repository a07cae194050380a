use contracts::enums::EffectiveMode;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Reflect the effective mode on `<html>`: `light`/`dark` class, `data-theme`
/// attribute and the `color-scheme` property for native form controls.
pub fn apply_effective_mode(effective: EffectiveMode) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        Some(el) => el,
        None => return,
    };

    let classes = root.class_list();
    let _ = classes.remove_2(EffectiveMode::Light.code(), EffectiveMode::Dark.code());
    let _ = classes.add_1(effective.code());

    let _ = root.set_attribute("data-theme", effective.code());

    if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("color-scheme", effective.code());
    }
}
