//! Platform-agnostic building blocks shared by the home screen views.

pub mod format;
pub mod markup;
pub mod platform;
pub mod storage;
pub mod theme;
pub mod timing;
