//! Pointer-following cursor dot.
//!
//! The native cursor is hidden globally; this component draws a small dot
//! that follows the pointer and grows over interactive elements. It listens
//! on the window for its whole mounted lifetime and detaches on unmount.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Function;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Elements inside a node carrying this class count as interactive.
pub const MARKER_CLASS: &str = "cursor-pointer";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovered: bool,
}

impl CursorState {
    fn offset(&self) -> f64 {
        if self.hovered {
            24.0
        } else {
            8.0
        }
    }

    pub fn scale(&self) -> f64 {
        if self.hovered {
            3.0
        } else {
            1.0
        }
    }

    /// Top-left corner of the dot in viewport coordinates.
    pub fn origin(&self) -> (f64, f64) {
        (self.x - self.offset(), self.y - self.offset())
    }

    pub fn transform(&self) -> String {
        let (x, y) = self.origin();
        format!("translate3d({x}px, {y}px, 0) scale({})", self.scale())
    }
}

pub enum CursorAction {
    Moved { x: f64, y: f64 },
    Over { interactive: bool },
}

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CursorAction::Moved { x, y } => CursorState { x, y, ..*self },
            CursorAction::Over { interactive } => CursorState {
                hovered: interactive,
                ..*self
            },
        };
        Rc::new(next)
    }
}

pub fn is_interactive(tag_name: &str, inside_marker: bool) -> bool {
    tag_name.eq_ignore_ascii_case("button") || tag_name.eq_ignore_ascii_case("a") || inside_marker
}

fn targets_interactive(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| {
            let inside_marker = element
                .closest(&format!(".{MARKER_CLASS}"))
                .ok()
                .flatten()
                .is_some();
            is_interactive(&element.tag_name(), inside_marker)
        })
        .unwrap_or(false)
}

/// Shared flag that handlers check before touching state. Once revoked it
/// stays revoked.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

/// Wraps `handler` so it becomes a no-op once `live` is revoked.
pub fn gated<E: 'static>(live: Liveness, handler: impl Fn(E) + 'static) -> impl Fn(E) + 'static {
    move |event| {
        if live.is_live() {
            handler(event);
        }
    }
}

/// Revokes its [`Liveness`] and then runs `detach` when dropped, so a handler
/// still queued behind the detach sees a dead flag.
pub struct DetachGuard<F: FnOnce()> {
    live: Liveness,
    detach: Option<F>,
}

impl<F: FnOnce()> DetachGuard<F> {
    pub fn new(live: Liveness, detach: F) -> Self {
        Self {
            live,
            detach: Some(detach),
        }
    }
}

impl<F: FnOnce()> Drop for DetachGuard<F> {
    fn drop(&mut self) {
        self.live.revoke();
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Window `mousemove` + `mouseover` listeners, removed again on drop.
type PointerSubscription = DetachGuard<Box<dyn FnOnce()>>;

fn attach_pointer_listeners(
    dispatcher: UseReducerDispatcher<CursorState>,
) -> Result<PointerSubscription, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let live = Liveness::new();

    let on_move = {
        let dispatcher = dispatcher.clone();
        Closure::<dyn Fn(MouseEvent)>::new(gated(live.clone(), move |event: MouseEvent| {
            dispatcher.dispatch(CursorAction::Moved {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            });
        }))
    };
    let on_over = Closure::<dyn Fn(MouseEvent)>::new(gated(live.clone(), move |event: MouseEvent| {
        dispatcher.dispatch(CursorAction::Over {
            interactive: targets_interactive(&event),
        });
    }));

    let move_fn: Function = on_move.as_ref().unchecked_ref::<Function>().clone();
    let over_fn: Function = on_over.as_ref().unchecked_ref::<Function>().clone();

    let detach: Box<dyn FnOnce()> = {
        let window = window.clone();
        Box::new(move || {
            let _ = window.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
            let _ = window.remove_event_listener_with_callback("mouseover", on_over.as_ref().unchecked_ref());
        })
    };
    let subscription = DetachGuard::new(live, detach);
    // On an early return the guard detaches whatever was attached.
    window.add_event_listener_with_callback("mousemove", &move_fn)?;
    window.add_event_listener_with_callback("mouseover", &over_fn)?;
    Ok(subscription)
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor = use_reducer(CursorState::default);

    {
        let dispatcher = cursor.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = match attach_pointer_listeners(dispatcher) {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        log::warn!("Custom cursor disabled: {:?}", err);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <>
            <div class="custom-cursor" style={format!("transform: {};", cursor.transform())}></div>
            <style>
                {r#"
                .custom-cursor {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 1rem;
                    height: 1rem;
                    border-radius: 9999px;
                    background: #fff;
                    z-index: 100;
                    pointer-events: none;
                    mix-blend-mode: difference;
                    transition: transform 0.25s cubic-bezier(0.22, 1, 0.36, 1);
                    will-change: transform;
                }
                @media (max-width: 767px) {
                    .custom-cursor { display: none; }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_links_and_marked_elements_are_interactive() {
        assert!(is_interactive("BUTTON", false));
        assert!(is_interactive("A", false));
        assert!(is_interactive("DIV", true));
        assert!(!is_interactive("DIV", false));
        assert!(!is_interactive("SPAN", false));
    }

    #[test]
    fn hover_grows_and_recentres_the_dot() {
        let idle = CursorState {
            x: 100.0,
            y: 50.0,
            hovered: false,
        };
        assert_eq!(idle.origin(), (92.0, 42.0));
        assert_eq!(idle.scale(), 1.0);

        let hovered = CursorState { hovered: true, ..idle };
        assert_eq!(hovered.origin(), (76.0, 26.0));
        assert_eq!(hovered.scale(), 3.0);
        assert_eq!(hovered.transform(), "translate3d(76px, 26px, 0) scale(3)");
    }

    #[test]
    fn moves_and_hovers_update_independently() {
        let state = Rc::new(CursorState::default())
            .reduce(CursorAction::Over { interactive: true })
            .reduce(CursorAction::Moved { x: 10.0, y: 20.0 });
        assert_eq!(
            *state,
            CursorState {
                x: 10.0,
                y: 20.0,
                hovered: true
            }
        );
    }

    #[test]
    fn revoked_handlers_stop_delivering_events() {
        let delivered = Rc::new(Cell::new(0));
        let live = Liveness::new();
        let handler = {
            let delivered = delivered.clone();
            gated(live.clone(), move |step: u32| delivered.set(delivered.get() + step))
        };

        handler(1);
        handler(1);
        live.revoke();
        handler(1);
        handler(1);

        assert_eq!(delivered.get(), 2);
        assert!(!live.is_live());
    }

    #[test]
    fn dropping_the_guard_silences_handlers_before_detaching() {
        let delivered = Rc::new(Cell::new(0));
        let live_at_detach = Rc::new(Cell::new(true));
        let live = Liveness::new();
        let handler = {
            let delivered = delivered.clone();
            gated(live.clone(), move |step: u32| delivered.set(delivered.get() + step))
        };

        let guard = {
            let live = live.clone();
            let live_at_detach = live_at_detach.clone();
            let flag = live.clone();
            DetachGuard::new(live, move || live_at_detach.set(flag.is_live()))
        };
        handler(1);
        drop(guard);
        handler(1);

        assert_eq!(delivered.get(), 1);
        assert!(!live_at_detach.get());
        assert!(!live.is_live());
    }

    #[test]
    fn dropping_the_guard_runs_detach() {
        let detached = Rc::new(Cell::new(0));
        {
            let detached = detached.clone();
            let _guard = DetachGuard::new(Liveness::new(), move || detached.set(detached.get() + 1));
        }
        assert_eq!(detached.get(), 1);
    }
}
