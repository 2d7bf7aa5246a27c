//! Timers and calendar-day keys.

use time::{macros::format_description, Date};

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Stable `YYYY-MM-DD` key for a calendar day.
pub fn day_key(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| {
            format!(
                "{:04}-{:02}-{:02}",
                date.year(),
                u8::from(date.month()),
                date.day()
            )
        })
}

/// Key for the user's current local calendar day.
pub fn today_key() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        day_key(now.date())
    }
}
