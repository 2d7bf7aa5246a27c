//! Home screen state machines and their components.

pub mod banner;
pub mod carousel;
pub mod content;
pub mod notice;
pub mod status;

pub use banner::Banner;
pub use carousel::{CarouselIndex, EndpointCarousel};
pub use content::{load_home_content, HomeContent, HOME_FRAME_ID};
pub use notice::{
    check_notice, check_notice_for_session, dismiss_for_today, NoticeGate, NoticeModal,
    NoticeSession,
};
pub use status::load_status;
