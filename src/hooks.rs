use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::in_view::InViewLatch;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer and its JS callback alive together; dropping it
/// disconnects the observer.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(node: &NodeRef, threshold: f64, on_visible: UseStateSetter<bool>) -> Option<ObserverGuard> {
    let element = match node.cast::<Element>() {
        Some(element) => element,
        None => {
            warn!("in-view target was not mounted, reveal stays hidden");
            return None;
        }
    };

    let latch = Rc::new(RefCell::new(InViewLatch::default()));
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.borrow_mut().record(entry.is_intersecting()) {
                on_visible.set(true);
                // Latched for good, nothing left to watch
                observer.disconnect();
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some(ObserverGuard { observer, _callback: callback })
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// True once `node` has scrolled into view; never goes back to false.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |_| {
                let guard = observe_once(&node, threshold, setter);
                move || drop(guard)
            },
            (),
        );
    }

    *in_view
}

/// Pointer hover flag and the handlers that drive it.
pub struct Hover {
    pub active: bool,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover() -> Hover {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    Hover {
        active: *hovered,
        onmouseenter,
        onmouseleave,
    }
}

/// Inline fade-and-rise used by every section's entry animation.
pub fn reveal_style(in_view: bool, delay: f64, rise_px: u32) -> String {
    if in_view {
        format!(
            "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s;"
        )
    } else {
        format!(
            "opacity: 0; transform: translateY({rise_px}px); transition: opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::reveal_style;

    #[test]
    fn reveal_style_hides_until_in_view() {
        let hidden = reveal_style(false, 0.2, 18);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translateY(18px)"));
        assert!(hidden.contains("ease 0.2s"));

        let shown = reveal_style(true, 0.2, 18);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("translateY(0)"));
    }
}
