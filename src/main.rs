use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod motion;
mod styles;
mod typewriter {
    pub mod cycler;
    pub mod driver;
    pub mod hook;
    pub mod scheduler;
}
mod components {
    pub mod background;
    pub mod cards;
    pub mod icon;
    pub mod reveal;
    pub mod typewriter_text;
}
mod pages {
    pub mod landing;
}

use content::{NavLink, PageContent};
use pages::landing::{ContentUnavailable, Landing};
use styles::GlobalStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    is_scrolled.set(dom::scroll_y() > config::NAV_SCROLL_THRESHOLD);
                });

                if let Some(window) = &window {
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    {
                        error!("Failed to attach scroll listener: {:?}", err);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    @keyframes brandPulse {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.05); }
                    }
                    @keyframes dropIn {
                        from { transform: translateY(-100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        padding: 1.5rem;
                        animation: dropIn 0.8s ease-out;
                        transition: background 0.3s, padding 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 1.5rem;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 1px 6px rgba(15, 23, 42, 0.08);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        animation: brandPulse 2s ease-in-out infinite;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #475569;
                        transition: color 0.3s, transform 0.3s;
                    }
                    .nav-link:hover {
                        color: #2563eb;
                        transform: translateY(-2px);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #334155;
                    }
                    @media (max-width: 700px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            right: 1.5rem;
                            padding: 1rem;
                            border-radius: 1rem;
                            background: #fff;
                            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo gradient-text">
                    { props.brand.clone() }
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for props.links.iter().map(|link| {
                        let target = link.target;
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            dom::scroll_to_section(target);
                        });
                        html! {
                            <button class="nav-link" onclick={onclick}>{ &link.label }</button>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct PageProps {
    content: Rc<PageContent>,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let content = props.content.clone();
    let switch = move |route: Route| match route {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing content={content.clone()} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    };

    html! {
        <>
            <Nav brand={props.content.brand.clone()} links={props.content.nav.clone()} />
            <Switch<Route> render={switch} />
        </>
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(
        |_| match PageContent::load() {
            Ok(content) => Some(Rc::new(content)),
            Err(err) => {
                error!("{}", err);
                None
            }
        },
        (),
    );

    html! {
        <BrowserRouter>
            <GlobalStyles />
            {
                match &*content {
                    Some(content) => html! { <Page content={content.clone()} /> },
                    None => html! { <ContentUnavailable /> },
                }
            }
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
