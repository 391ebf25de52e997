use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use stylist::GlobalStyle;
use web_sys::{window, Event, HtmlElement};
use wasm_bindgen::JsCast;

mod config;
mod controllers {
    pub mod carousel;
    pub mod contact;
    pub mod gallery;
    pub mod viewport;
}
mod components {
    pub mod anchor;
    pub mod back_to_top;
    pub mod contact_form;
    pub mod footer;
    pub mod gallery;
    pub mod reveal;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::anchor::AnchorLink;
use config::SiteConfig;
use controllers::viewport::{active_section, header_is_scrolled, SectionBounds};
use pages::{home::Home, not_found::NotFound};

/// In-page sections, in document order, with their nav labels.
const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("testimonials", "Reviews"),
    ("contact", "Contact"),
];

const FORM_CSS: &str = r#"
.form-group .error {
    border-color: #d32f2f;
}

.error-message {
    color: #d32f2f;
    font-size: 0.85rem;
    margin-top: 5px;
    display: block;
}

.alert-success {
    background-color: #28a745;
    color: white;
    padding: 15px;
    border-radius: 4px;
    margin-bottom: 20px;
}
"#;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    NAV_SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            let section = document
                .get_element_by_id(id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                offset_top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub business_name: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let current = use_state_eq(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        let current = current.clone();
        use_event_with_window("scroll", move |_: Event| {
            let Some(scroll_y) = window().and_then(|w| w.scroll_y().ok()) else {
                return;
            };
            is_scrolled.set(header_is_scrolled(scroll_y));
            if let Some(id) = active_section(scroll_y, &measure_sections()) {
                current.set(Some(id.to_string()));
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <header class={classes!((*is_scrolled).then_some("scrolled"))}>
            <nav class="nav-content">
                <AnchorLink href="#home" class="nav-logo" onclick={close_menu.clone()}>
                    {props.business_name.clone()}
                </AnchorLink>

                <button class={classes!("mobile-toggle", (*menu_open).then_some("active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| {
                        let is_current = current.as_deref() == Some(*id);
                        html! {
                            <li key={*id}>
                                <AnchorLink
                                    href={format!("#{}", id)}
                                    class={classes!(is_current.then_some("active"))}
                                    onclick={close_menu.clone()}
                                >
                                    {*label}
                                </AnchorLink>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
            <style>
                {r#"
                header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.2rem 2rem;
                    transition: all 0.3s ease;
                }
                header.scrolled {
                    padding: 0.6rem 2rem;
                    background: rgba(17, 17, 17, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-size: 1.4rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.8rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-menu a {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-menu a.active,
                .nav-menu a:hover {
                    color: #d62828;
                }
                .mobile-toggle {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .mobile-toggle span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                    transition: transform 0.3s ease;
                }
                .mobile-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .mobile-toggle.active span:nth-child(2) { opacity: 0; }
                .mobile-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                @media (max-width: 768px) {
                    .mobile-toggle {
                        display: block;
                    }
                    .nav-menu {
                        position: fixed;
                        top: 60px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem 2rem;
                        background: #111;
                        transform: translateY(-150%);
                        transition: transform 0.3s ease;
                    }
                    .nav-menu.active {
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    // Registered once into the document head and kept for the page lifetime.
    let _form_style = use_state(|| match GlobalStyle::new(FORM_CSS) {
        Ok(style) => Some(style),
        Err(e) => {
            log::error!("failed to register form styles: {}", e);
            None
        }
    });

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <BrowserRouter>
                <Nav business_name={props.config.business.name.clone()} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; starting with empty content", e);
            SiteConfig::default()
        }
    };
    info!(
        "Starting application: {} gallery entries, {} testimonials",
        config.gallery.len(),
        config.testimonials.len()
    );

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
