use yew::prelude::*;

use crate::components::reveal::stagger_delay_ms;
use crate::config;
use crate::content::SOCIAL_GLYPHS;
use crate::state::{CurrentPage, NavPanel, Page};

/// Two-digit menu index, 1-based.
pub fn menu_index(position: usize) -> String {
    format!("{:02}", position + 1)
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub panel: NavPanel,
    pub current: CurrentPage,
    pub on_close: Callback<()>,
    pub on_select: Callback<Page>,
}

#[function_component(NavigationOverlay)]
pub fn navigation_overlay(props: &NavigationProps) -> Html {
    let NavigationProps {
        panel,
        current,
        on_close,
        on_select,
    } = props;

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let open = panel.is_open();

    html! {
        <div
            class={classes!("nav-overlay", open.then_some("nav-overlay--open"))}
            style={format!("transform: {};", panel.transform())}
        >
            <button class="nav-overlay__close cursor-pointer" onclick={close} aria-label="Close menu">
                {"✕"}
            </button>
            <div class="nav-overlay__links">
                { for Page::ALL.iter().enumerate().map(|(i, page)| {
                    let page = *page;
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(page))
                    };
                    let delay = if open { stagger_delay_ms(i) } else { 0 };
                    html! {
                        <div
                            key={page.name()}
                            class={classes!(
                                "nav-overlay__link",
                                "cursor-pointer",
                                current.is(page).then_some("nav-overlay__link--current")
                            )}
                            style={format!("transition-delay: {delay}ms;")}
                            {onclick}
                        >
                            <span class="nav-overlay__index">{menu_index(i)}</span>
                            <h2 class="nav-overlay__name font-serif">{page.name()}</h2>
                        </div>
                    }
                }) }
            </div>
            <div class="nav-overlay__social">
                { for SOCIAL_GLYPHS.iter().map(|(label, glyph)| html! {
                    <span class="cursor-pointer" title={*label}>{*glyph}</span>
                }) }
            </div>
            <style>
                {format!(r#"
                .nav-overlay {{
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100vh;
                    width: 100%;
                    background: #0a0a0a;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 0 3rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: transform {slide}ms cubic-bezier(0.76, 0, 0.24, 1);
                }}
                @media (min-width: 768px) {{
                    .nav-overlay {{ width: 50vw; padding: 0 6rem; }}
                }}
                .nav-overlay__close {{
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    background: none;
                    border: none;
                    font-size: 2rem;
                    color: rgba(255, 255, 255, 0.5);
                    transition: color 0.3s;
                }}
                .nav-overlay__close:hover {{ color: {accent}; }}
                .nav-overlay__links {{
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }}
                .nav-overlay__link {{
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    opacity: 0;
                    transform: translateY(50px);
                    transition: opacity 0.5s, transform 0.5s;
                }}
                .nav-overlay--open .nav-overlay__link {{
                    opacity: 1;
                    transform: translateY(0);
                }}
                .nav-overlay__index {{
                    font-size: 0.75rem;
                    font-family: monospace;
                    color: {accent};
                    opacity: 0.5;
                }}
                .nav-overlay__name {{
                    font-size: 3.75rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    color: rgba(255, 255, 255, 0.4);
                    transition: color 0.5s;
                }}
                .nav-overlay__link:hover .nav-overlay__name {{ color: #fff; font-style: italic; }}
                .nav-overlay__link--current .nav-overlay__name {{ color: rgba(255, 255, 255, 0.8); }}
                .nav-overlay__social {{
                    margin-top: 4rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    display: flex;
                    gap: 2rem;
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                }}
                .nav-overlay__social span:hover {{ color: {accent}; }}
                "#, slide = config::NAV_SLIDE_MS, accent = config::ACCENT)}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
    pub on_select: Callback<Page>,
    pub on_menu: Callback<()>,
}

/// Fixed header with section shortcuts and the menu trigger.
#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let go = |page: Page| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(page))
    };
    let open_menu = {
        let on_menu = props.on_menu.clone();
        Callback::from(move |_: MouseEvent| on_menu.emit(()))
    };

    html! {
        <nav class="top-bar">
            <div class="top-bar__shortcuts">
                <span class="cursor-pointer" onclick={go(Page::Projects)}>{"Projects"}</span>
                <span class="cursor-pointer" onclick={go(Page::Services)}>{"Expertise"}</span>
            </div>
            <div class="top-bar__wordmark font-serif cursor-pointer" onclick={go(Page::Home)}>
                {config::BRAND}
            </div>
            <div class="top-bar__actions">
                // Contact has no destination wired here; the menu covers it.
                <span class="top-bar__contact cursor-pointer">{"Contact"}</span>
                <div class="top-bar__menu cursor-pointer" onclick={open_menu}>
                    <span class="top-bar__menu-label">{"Menu"}</span>
                    <span class="top-bar__burger">{"☰"}</span>
                </div>
            </div>
            <style>
                {format!(r#"
                .top-bar {{
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    padding: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: #fff;
                    mix-blend-mode: difference;
                    font-size: 10px;
                    font-weight: 500;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    animation: top-bar-in 1s ease 3s both;
                }}
                .top-bar__shortcuts {{ display: none; gap: 3rem; }}
                .top-bar__actions {{ display: flex; align-items: center; gap: 3rem; }}
                .top-bar__contact, .top-bar__menu-label {{ display: none; }}
                .top-bar__menu {{ display: flex; align-items: center; gap: 0.75rem; }}
                .top-bar__wordmark {{
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: none;
                }}
                .top-bar span:hover, .top-bar__wordmark:hover {{ color: {accent}; }}
                @media (min-width: 768px) {{
                    .top-bar {{ padding: 2rem 4rem; }}
                    .top-bar__shortcuts {{ display: flex; }}
                    .top-bar__contact, .top-bar__menu-label {{ display: block; }}
                    .top-bar__wordmark {{
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                    }}
                }}
                @keyframes top-bar-in {{
                    from {{ opacity: 0; transform: translateY(-20px); }}
                    to {{ opacity: 1; transform: translateY(0); }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_indices_are_zero_padded() {
        let labels: Vec<String> = (0..Page::ALL.len()).map(menu_index).collect();
        assert_eq!(labels, vec!["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn panel_transforms_differ_between_states() {
        assert_eq!(NavPanel::Closed.transform(), "translateX(100%)");
        assert_eq!(NavPanel::Open.transform(), "translateX(0%)");
    }
}
