use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// Stages of the intro overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Holding,
    Fading,
    Done,
}

impl PreloaderPhase {
    /// Steps Holding -> Fading -> Done. The flag is true only on the step that
    /// reaches `Done`, so a completion is reported at most once.
    pub fn advance(self) -> (PreloaderPhase, bool) {
        match self {
            PreloaderPhase::Holding => (PreloaderPhase::Fading, false),
            PreloaderPhase::Fading => (PreloaderPhase::Done, true),
            PreloaderPhase::Done => (PreloaderPhase::Done, false),
        }
    }

    /// Time spent in this phase before advancing.
    pub fn duration_ms(self) -> Option<u32> {
        match self {
            PreloaderPhase::Holding => Some(config::PRELOADER_HOLD_MS),
            PreloaderPhase::Fading => Some(config::PRELOADER_FADE_MS),
            PreloaderPhase::Done => None,
        }
    }

    pub fn is_opaque(self) -> bool {
        self == PreloaderPhase::Holding
    }
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let phase = use_state(|| PreloaderPhase::Holding);

    {
        let phase_setter = phase.setter();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |current: &PreloaderPhase| {
                let current = *current;
                // Dropping the timeout on unmount cancels it, so an unmounted
                // preloader never reports completion.
                let timeout = current.duration_ms().map(|delay| {
                    Timeout::new(delay, move || {
                        let (next, finished) = current.advance();
                        phase_setter.set(next);
                        if finished {
                            on_complete.emit(());
                        }
                    })
                });
                move || drop(timeout)
            },
            *phase,
        );
    }

    let overlay_class = classes!(
        "preloader",
        (!phase.is_opaque()).then_some("preloader--fading")
    );

    html! {
        <div class={overlay_class}>
            <div class="preloader__mask">
                <h1 class="preloader__wordmark font-serif">{config::BRAND}</h1>
            </div>
            <div class="preloader__track-wrap">
                <div class="preloader__track">
                    <div class="preloader__bar"></div>
                </div>
            </div>
            <style>
                {format!(r#"
                .preloader {{
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: #050505;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 1;
                    transition: opacity {fade}ms cubic-bezier(0.76, 0, 0.24, 1);
                }}
                .preloader--fading {{
                    opacity: 0;
                    pointer-events: none;
                }}
                .preloader__mask {{
                    overflow: hidden;
                    position: relative;
                }}
                .preloader__wordmark {{
                    color: #fff;
                    font-size: 3.75rem;
                    letter-spacing: 0.1em;
                    animation: preloader-rise 1s cubic-bezier(0.76, 0, 0.24, 1) both;
                }}
                .preloader__track-wrap {{
                    position: absolute;
                    bottom: 2.5rem;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    animation: preloader-appear 0.3s ease 0.5s both;
                }}
                .preloader__track {{
                    width: 16rem;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                    overflow: hidden;
                }}
                .preloader__bar {{
                    height: 100%;
                    background: {accent};
                    animation: preloader-fill 2s ease-in-out both;
                }}
                @keyframes preloader-rise {{
                    from {{ transform: translateY(100px); }}
                    to {{ transform: translateY(0); }}
                }}
                @keyframes preloader-appear {{
                    from {{ opacity: 0; }}
                    to {{ opacity: 1; }}
                }}
                @keyframes preloader-fill {{
                    from {{ transform: translateX(-100%); }}
                    to {{ transform: translateX(0%); }}
                }}
                "#, fade = config::PRELOADER_FADE_MS, accent = config::ACCENT)}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_reported_exactly_once() {
        let mut phase = PreloaderPhase::Holding;
        let mut completions = 0;
        // More steps than the sequence has, as if stray timer ticks kept coming.
        for _ in 0..10 {
            let (next, finished) = phase.advance();
            if finished {
                completions += 1;
            }
            phase = next;
        }
        assert_eq!(phase, PreloaderPhase::Done);
        assert_eq!(completions, 1);
    }

    #[test]
    fn window_is_hold_plus_fade() {
        let total: u32 = [PreloaderPhase::Holding, PreloaderPhase::Fading, PreloaderPhase::Done]
            .into_iter()
            .filter_map(PreloaderPhase::duration_ms)
            .sum();
        assert_eq!(total, config::PRELOADER_HOLD_MS + config::PRELOADER_FADE_MS);
        assert!((2_500..=3_500).contains(&total));
    }

    #[test]
    fn only_the_hold_phase_is_opaque() {
        assert!(PreloaderPhase::Holding.is_opaque());
        assert!(!PreloaderPhase::Fading.is_opaque());
        assert!(!PreloaderPhase::Done.is_opaque());
    }
}
