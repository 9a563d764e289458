//! Scroll-triggered reveal wrapper.
//!
//! Each wrapped item watches its own element with an `IntersectionObserver`
//! and toggles a `reveal--shown` class while it is in the viewport. Items in
//! a list are staggered by their index.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::config;

pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config::REVEAL_STAGGER_MS)
}

/// Hidden-state offset the item animates in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealFrom {
    Below,
    Right,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal--below",
            RevealFrom::Right => "reveal--right",
        }
    }
}

struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    fn observe(element: &Element, on_change: impl Fn(bool) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(entry.is_intersecting());
                    }
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the referenced element currently intersects the viewport.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node.cast::<Element>().and_then(|element| {
                    match ViewportWatch::observe(&element, move |visible| in_view.set(visible)) {
                        Ok(watch) => Some(watch),
                        Err(err) => {
                            log::warn!("Scroll reveal unavailable: {:?}", err);
                            None
                        }
                    }
                });
                move || drop(watch)
            },
            node,
        );
    }

    *in_view
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub index: usize,
    pub from: RevealFrom,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone());

    let class = classes!(
        "reveal",
        props.from.class(),
        shown.then_some("reveal--shown"),
        props.class.clone()
    );
    let style = format!("transition-delay: {}ms;", stagger_delay_ms(props.index));

    html! {
        <div ref={node} {class} {style}>
            { for props.children.iter() }
        </div>
    }
}

/// Shared rules for every [`Reveal`]; rendered once by the shell.
#[function_component(RevealStyles)]
pub fn reveal_styles() -> Html {
    html! {
        <style>
            {r#"
            .reveal {
                opacity: 0;
                transition-property: opacity, transform;
                transition-duration: 1s;
                transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1);
            }
            .reveal--below { transform: translateY(20px); }
            .reveal--right { transform: translateX(100px); }
            .reveal.reveal--shown {
                opacity: 1;
                transform: none;
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbouring_items_are_staggered_evenly() {
        let delays: Vec<u32> = (0..4).map(stagger_delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn huge_indices_saturate() {
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }
}
