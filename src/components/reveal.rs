use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::controllers::viewport::is_revealed;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(AttrValue::Static("fade-up"))]
    pub animation: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

fn in_view(node: &NodeRef) -> bool {
    let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) else {
        return false;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    is_revealed(rect.top(), rect.bottom(), viewport_height)
}

/// Adds `aos-animate` once its content scrolls into view. It never hides again.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let check = move || {
                    if in_view(&node) {
                        revealed.set(true);
                    }
                };
                check();

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(check);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            data-aos={props.animation.clone()}
            class={classes!(props.class.clone(), (*revealed).then_some("aos-animate"))}
        >
            { for props.children.iter() }
        </div>
    }
}
