use log::Level;

pub const BRAND: &str = "ADROIT";
pub const BRAND_SUFFIX: &str = "DESIGN";
pub const ACCENT: &str = "#C5A059";

/// How long the preloader stays fully opaque before it starts fading.
pub const PRELOADER_HOLD_MS: u32 = 2_500;
pub const PRELOADER_FADE_MS: u32 = 1_000;

pub const NAV_SLIDE_MS: u32 = 800;
/// Per-item delay between neighbouring scroll reveals and menu links.
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const VIDEO_PLAYBACK_RATE: f64 = 0.8;
pub const HERO_VIDEO: &str = "/assets/hero-video.mp4";

pub mod images {
    pub const HERO: &str = "https://images.unsplash.com/photo-1600607686527-6fb886090705?q=80&w=2700&auto=format&fit=crop";
    pub const INTERIOR: &str = "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=2574&auto=format&fit=crop";
    pub const EXTERIOR: &str = "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2700&auto=format&fit=crop";
    pub const DETAIL: &str = "https://images.unsplash.com/photo-1631679706909-1844bbd07221?q=80&w=2592&auto=format&fit=crop";
    pub const OFFICE: &str = "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=2301&auto=format&fit=crop";
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
