use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, images};

/// Starts the looping background video. Browsers may refuse autoplay; that
/// only gets logged, the poster image stays up instead.
fn start_background_video(video: &HtmlVideoElement) {
    video.set_playback_rate(config::VIDEO_PLAYBACK_RATE);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                report_autoplay_blocked(err);
            }
        }),
        Err(err) => report_autoplay_blocked(err),
    }
}

fn report_autoplay_blocked(err: JsValue) {
    gloo_console::log!("Autoplay blocked", err);
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Set once the intro overlay has cleared; the headline waits for it.
    pub intro_done: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_mount(move || {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                start_background_video(&video);
            }
        });
    }

    html! {
        <div class="hero">
            <div class="hero__media">
                <div class="hero__shade"></div>
                <div class="hero__gradient"></div>
                <video
                    ref={video_ref}
                    class="hero__video"
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    poster={images::HERO}
                >
                    <source src={config::HERO_VIDEO} type="video/mp4" />
                </video>
            </div>

            <div class="hero__content">
                {
                    if props.intro_done {
                        html! {
                            <div class="hero__headline">
                                <h1 class="hero__title font-serif">{config::BRAND}</h1>
                                <h1 class="hero__title hero__title--italic font-serif">{config::BRAND_SUFFIX}</h1>
                                <div class="hero__rule"></div>
                                <div class="hero__tagline">
                                    <h2>
                                        {"Architecture "}
                                        <span class="hero__amp">{"&"}</span>
                                        {" Interiors"}
                                    </h2>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if props.intro_done {
                    html! {
                        <div class="hero__discover cursor-pointer">
                            <span>{"DISCOVER"}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {format!(r#"
                .hero {{
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    background: #050505;
                }}
                .hero__media {{
                    position: absolute;
                    inset: 0;
                    animation:
                        hero-media-fade 2s ease 2s both,
                        hero-media-zoom 20s linear both;
                }}
                .hero__shade {{ position: absolute; inset: 0; z-index: 10; background: rgba(0, 0, 0, 0.2); }}
                .hero__gradient {{
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.4), transparent, rgba(0, 0, 0, 0.6));
                }}
                .hero__video {{ width: 100%; height: 100%; object-fit: cover; }}
                .hero__content {{
                    position: relative;
                    z-index: 20;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 0 1.5rem;
                    text-align: center;
                }}
                .hero__headline {{
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    mix-blend-mode: screen;
                    animation: hero-headline 1.8s cubic-bezier(0.16, 1, 0.3, 1) both;
                }}
                .hero__title {{
                    color: #fff;
                    font-size: 3.75rem;
                    line-height: 1;
                    letter-spacing: -0.025em;
                    font-weight: 300;
                    margin: 0;
                }}
                .hero__title--italic {{ font-style: italic; font-weight: 400; color: #f0f0f0; margin-top: 0.5rem; }}
                .hero__rule {{
                    width: 1px;
                    background: {accent};
                    margin: 2rem 0;
                    opacity: 0.8;
                    animation: hero-rule 1s ease-in-out 0.8s both;
                }}
                .hero__tagline {{ animation: hero-tagline 1.5s ease 1.2s both; }}
                .hero__tagline h2 {{
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 10px;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                }}
                .hero__amp {{ color: {accent}; padding: 0 0.5rem; }}
                .hero__discover {{
                    position: absolute;
                    bottom: 3rem;
                    left: 0;
                    right: 0;
                    z-index: 20;
                    display: flex;
                    justify-content: center;
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 9px;
                    letter-spacing: 0.3em;
                    animation: hero-media-fade 1.5s ease 2.2s both;
                }}
                .hero__discover:hover {{ color: {accent}; }}
                @media (min-width: 768px) {{
                    .hero__content {{ padding: 0 6rem; }}
                    .hero__title {{ font-size: 10rem; }}
                    .hero__title--italic {{ margin-top: -2rem; }}
                    .hero__tagline h2 {{ font-size: 0.875rem; }}
                }}
                @keyframes hero-media-fade {{
                    from {{ opacity: 0; }}
                    to {{ opacity: 1; }}
                }}
                @keyframes hero-media-zoom {{
                    from {{ transform: scale(1.15); }}
                    to {{ transform: scale(1); }}
                }}
                @keyframes hero-headline {{
                    from {{ opacity: 0; transform: translateY(40px); filter: blur(12px); }}
                    to {{ opacity: 1; transform: translateY(0); filter: blur(0); }}
                }}
                @keyframes hero-rule {{
                    from {{ height: 0; }}
                    to {{ height: 80px; }}
                }}
                @keyframes hero-tagline {{
                    from {{ opacity: 0; letter-spacing: 0; }}
                    to {{ opacity: 1; }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </div>
    }
}
