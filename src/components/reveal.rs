use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Elements count as visible once they are 120px above the viewport bottom.
const ROOT_MARGIN: &str = "0px 0px -120px 0px";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay once the element comes into view.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, move || visible.set(true)));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let style = format!("transition-delay: {}ms;", props.delay_ms);
    html! {
        <@{props.tag.to_string()}
            ref={node}
            class={classes!("reveal", props.class.clone(), (*visible).then_some("visible"))}
            style={style}
        >
            { for props.children.iter() }
        </@>
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Calls `on_visible` once when `element` first intersects the viewport.
/// The callback closure must outlive the observer, so both are returned.
fn observe_once<F>(element: &Element, on_visible: F) -> Option<(IntersectionObserver, ObserverCallback)>
where
    F: Fn() + 'static,
{
    let on_visible = Rc::new(on_visible);
    let notify = on_visible.clone();
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                notify();
                observer.unobserve(&entry.target());
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(0.1));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            on_visible();
            None
        }
    }
}
