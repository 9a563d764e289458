use log::{info, warn};
use stylist::GlobalStyle;
use yew::prelude::*;

mod config;
mod content;
mod state;
mod components {
    pub mod chatbot;
    pub mod cursor;
    pub mod footer;
    pub mod nav;
    pub mod preloader;
    pub mod reveal;
}
mod pages {
    pub mod careers;
    pub mod hero;
    pub mod lead_gen;
    pub mod projects;
    pub mod services;
}

use components::{
    chatbot::AIChatbot,
    cursor::CustomCursor,
    footer::Footer,
    nav::{NavigationOverlay, TopBar},
    preloader::Preloader,
    reveal::RevealStyles,
};
use pages::{
    careers::Careers,
    hero::Hero,
    lead_gen::LeadGen,
    projects::FeaturedProjects,
    services::Services,
};
use state::{Page, PageLayout, Section, ShellAction, ShellState};

const GLOBAL_CSS: &str = r#"
    html, body {
        margin: 0;
        background: #f4f4f4;
        color: #1c1917;
        font-family: 'Inter', sans-serif;
        cursor: none;
    }
    ::selection {
        background: #C5A059;
        color: #fff;
    }
    .font-serif {
        font-family: 'Cormorant Garamond', serif;
    }
    .font-sans {
        font-family: 'Inter', sans-serif;
    }
    .scrollbar-hide {
        -ms-overflow-style: none;
        scrollbar-width: none;
    }
    .eyebrow {
        font-size: 10px;
        font-weight: 700;
        letter-spacing: 0.2em;
        color: #C5A059;
        text-transform: uppercase;
    }
"#;

fn render_section(section: Section, intro_done: bool) -> Html {
    match section {
        Section::Hero => html! { <Hero {intro_done} /> },
        Section::Services => html! { <Services /> },
        Section::FeaturedProjects => html! { <FeaturedProjects /> },
        Section::LeadGen => html! { <LeadGen /> },
        Section::Careers => html! { <Careers /> },
    }
}

fn render_layout(layout: &PageLayout, intro_done: bool) -> Html {
    let mut sections = layout
        .sections()
        .into_iter()
        .map(|section| render_section(section, intro_done));
    match layout.heading() {
        Some(heading) => html! {
            <div class="titled-page">
                <h1 class="titled-page__heading font-serif">{heading.to_string()}</h1>
                { for sections }
            </div>
        },
        None => {
            let hero = sections.next();
            html! {
                <>
                    { for hero }
                    <div class="home-layers">
                        { for sections }
                    </div>
                </>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    let shell = use_reducer(ShellState::default);

    let on_intro_done = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.dispatch(ShellAction::IntroFinished))
    };
    let open_nav = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.dispatch(ShellAction::OpenNav))
    };
    let close_nav = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.dispatch(ShellAction::CloseNav))
    };
    let select_page = {
        let shell = shell.clone();
        Callback::from(move |page: Page| shell.dispatch(ShellAction::SelectPage(page)))
    };
    // Shortcuts in the header and footer only switch the page.
    let go_to = {
        let shell = shell.clone();
        Callback::from(move |page: Page| shell.dispatch(ShellAction::GoTo(page.name().to_string())))
    };

    let intro_done = !shell.loading;
    let layout = shell.page.layout();

    html! {
        <div class="app-shell font-sans">
            <RevealStyles />
            {
                if shell.loading {
                    html! { <Preloader on_complete={on_intro_done} /> }
                } else {
                    html! { <CustomCursor /> }
                }
            }

            <TopBar on_select={go_to.clone()} on_menu={open_nav} />
            <NavigationOverlay panel={shell.nav} current={shell.page.clone()} on_close={close_nav} on_select={select_page} />

            <main>
                { render_layout(&layout, intro_done) }
            </main>

            <AIChatbot />
            <Footer on_select={go_to} />

            <style>
                {r#"
                .app-shell { min-height: 100vh; }
                .home-layers { position: relative; z-index: 10; }
                .titled-page {
                    padding: 10rem 1.5rem 0;
                    min-height: 100vh;
                    background: #fafaf9;
                }
                .titled-page__heading {
                    font-size: 3.75rem;
                    color: #1c1917;
                    margin: 0 0 3rem;
                    font-style: italic;
                }
                @media (min-width: 768px) {
                    .titled-page { padding: 10rem 6rem 0; }
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(err) = GlobalStyle::new(GLOBAL_CSS) {
        warn!("Global stylesheet not mounted: {}", err);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
