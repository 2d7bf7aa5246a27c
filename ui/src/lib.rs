//! Shared UI crate for the gateway console. Views, data loading and the
//! persisted preferences live here; `web` and `desktop` only launch them.

pub mod config;
pub mod core;
pub mod home;
pub mod i18n;
pub mod plans;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Transient notifications (components/toast.rs)
    pub mod toast;
    pub use toast::{use_toast_center, ToastCenter, ToastHost};
}

pub use config::HomeConfig;

#[cfg(test)]
mod testing;
