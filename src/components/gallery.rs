use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::controllers::gallery::{GalleryController, GalleryEntry, ModalKey};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub entries: Vec<GalleryEntry>,
}

pub enum GalleryMsg {
    Open(usize),
    Next,
    Previous,
    Close,
    Key(ModalKey),
}

pub struct Gallery {
    controller: GalleryController,
    keydown: Option<Closure<dyn Fn(KeyboardEvent)>>,
}

fn lock_body_scroll(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

impl Component for Gallery {
    type Message = GalleryMsg;
    type Properties = GalleryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let controller = GalleryController::new(ctx.props().entries.clone());
        if controller.is_empty() {
            log::warn!("gallery has no entries, modal disabled");
        } else {
            log::debug!("gallery initialised with {} entries", controller.len());
        }
        Self {
            controller,
            keydown: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if self.controller.is_open() {
            lock_body_scroll(false);
        }
        self.controller = GalleryController::new(ctx.props().entries.clone());
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let was_open = self.controller.is_open();
        let before = self.controller.state();
        let result = match msg {
            GalleryMsg::Open(index) => self.controller.open(index).map(|_| ()),
            GalleryMsg::Next => self.controller.next().map(|_| ()),
            GalleryMsg::Previous => self.controller.previous().map(|_| ()),
            GalleryMsg::Close => {
                self.controller.close();
                Ok(())
            }
            GalleryMsg::Key(key) => self.controller.handle_key(key),
        };
        if let Err(e) = result {
            log::warn!("gallery: {}", e);
            return false;
        }
        let is_open = self.controller.is_open();
        if was_open != is_open {
            lock_body_scroll(is_open);
        }
        before != self.controller.state()
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let link = ctx.link().clone();
        let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if let Some(key) = ModalKey::from_key_name(&e.key()) {
                link.send_message(GalleryMsg::Key(key));
            }
        });
        if document
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .is_ok()
        {
            self.keydown = Some(keydown);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(keydown) = self.keydown.take() {
            if let Some(document) = window().and_then(|w| w.document()) {
                let _ = document
                    .remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
            }
        }
        if self.controller.is_open() {
            lock_body_scroll(false);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        // Buttons sit on the backdrop, so their clicks must not reach it.
        let control = |msg: fn() -> GalleryMsg| {
            link.callback(move |e: MouseEvent| {
                e.stop_propagation();
                msg()
            })
        };

        let modal = match self.controller.current_entry() {
            Some(entry) => html! {
                <div id="galleryModal" class="modal" style="display: block;" onclick={link.callback(|_| GalleryMsg::Close)}>
                    <button class="modal-close" aria-label="Close" onclick={control(|| GalleryMsg::Close)}>{"×"}</button>
                    <button class="modal-prev" aria-label="Previous image" onclick={control(|| GalleryMsg::Previous)}>{"❮"}</button>
                    <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <img id="modalImage" src={entry.image.clone()} alt={entry.title.clone()} />
                        <div id="modalCaption">
                            <h3>{&entry.title}</h3>
                            <p>{&entry.description}</p>
                        </div>
                    </div>
                    <button class="modal-next" aria-label="Next image" onclick={control(|| GalleryMsg::Next)}>{"❯"}</button>
                </div>
            },
            None => html! {},
        };

        html! {
            <>
                <div class="gallery-grid">
                    { for self.controller.entries().iter().enumerate().map(|(index, entry)| html! {
                        <div class="gallery-item" key={index} onclick={link.callback(move |_| GalleryMsg::Open(index))}>
                            <img src={entry.image.clone()} alt={entry.title.clone()} loading="lazy" />
                            <div class="gallery-info">
                                <h3>{&entry.title}</h3>
                                <p>{&entry.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
                { modal }
                <style>
                    {r#"
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 1.25rem;
                    }
                    .gallery-item {
                        position: relative;
                        overflow: hidden;
                        border-radius: 8px;
                        cursor: pointer;
                    }
                    .gallery-item img {
                        width: 100%;
                        height: 220px;
                        object-fit: cover;
                        display: block;
                        transition: transform 0.4s ease;
                    }
                    .gallery-item:hover img {
                        transform: scale(1.06);
                    }
                    .gallery-info {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1rem;
                        color: #fff;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0));
                    }
                    .gallery-info h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1.1rem;
                    }
                    .gallery-info p {
                        margin: 0;
                        font-size: 0.9rem;
                    }
                    .modal {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.9);
                        z-index: 200;
                    }
                    .modal-content {
                        max-width: 900px;
                        margin: 6vh auto 0;
                        text-align: center;
                        color: #fff;
                    }
                    .modal-content img {
                        max-width: 100%;
                        max-height: 70vh;
                        border-radius: 6px;
                    }
                    .modal-close, .modal-prev, .modal-next {
                        position: absolute;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2.2rem;
                        cursor: pointer;
                    }
                    .modal-close { top: 16px; right: 28px; }
                    .modal-prev { top: 50%; left: 20px; }
                    .modal-next { top: 50%; right: 20px; }
                    "#}
                </style>
            </>
        }
    }
}
