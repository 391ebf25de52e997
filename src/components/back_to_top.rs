use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::scroll_to_top;
use crate::controllers::viewport::back_to_top_visible;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                visible.set(back_to_top_visible(scroll_y));
            }
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <>
            <button
                id="backToTop"
                class={classes!("back-to-top", (*visible).then_some("show"))}
                aria-label="Back to top"
                {onclick}
            >
                {"↑"}
            </button>
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    right: 24px;
                    bottom: 24px;
                    width: 46px;
                    height: 46px;
                    border: none;
                    border-radius: 50%;
                    background: #d62828;
                    color: #fff;
                    font-size: 1.3rem;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transform: translateY(12px);
                    transition: all 0.3s ease;
                    z-index: 90;
                }
                .back-to-top.show {
                    opacity: 1;
                    visibility: visible;
                    transform: translateY(0);
                }
                "#}
            </style>
        </>
    }
}
