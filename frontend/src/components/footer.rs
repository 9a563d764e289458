use yew::prelude::*;

use crate::config;
use crate::content::{FOOTER_COLUMNS, FOOTER_LABELS, FOOTER_LINKS};
use crate::state::Page;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Handed down for future links; none of the footer labels navigate yet.
    pub on_select: Callback<Page>,
}

#[function_component(Footer)]
pub fn footer(_props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <h2 class="site-footer__brand font-serif">{config::BRAND}</h2>
                </div>
                { for FOOTER_COLUMNS.iter().map(|column| html! {
                    <div key={*column}>
                        <h4 class="site-footer__heading">{*column}</h4>
                        <ul class="site-footer__links">
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li class="cursor-pointer">{*link}</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="site-footer__bottom">
                <p>{"© 2026 Adroit Design."}</p>
                <div class="site-footer__labels">
                    { for FOOTER_LABELS.iter().map(|label| html! {
                        <span class="cursor-pointer">{*label}</span>
                    }) }
                </div>
            </div>
            <style>
                {format!(r#"
                .site-footer {{
                    background: #050505;
                    color: #78716c;
                    padding: 8rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }}
                .site-footer__grid {{
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    margin-bottom: 6rem;
                }}
                .site-footer__brand {{
                    color: #fff;
                    font-size: 1.875rem;
                    letter-spacing: 0.025em;
                }}
                .site-footer__heading {{
                    color: {accent};
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin-bottom: 2rem;
                }}
                .site-footer__links {{
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-size: 0.875rem;
                    font-weight: 300;
                }}
                .site-footer__links li:hover {{ color: #fff; }}
                .site-footer__bottom {{
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #57534e;
                }}
                .site-footer__labels {{ display: flex; gap: 2rem; }}
                .site-footer__labels span:hover {{ color: {accent}; }}
                @media (min-width: 768px) {{
                    .site-footer {{ padding: 8rem 6rem; }}
                    .site-footer__grid {{ grid-template-columns: repeat(4, 1fr); }}
                    .site-footer__bottom {{ flex-direction: row; }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </footer>
    }
}
