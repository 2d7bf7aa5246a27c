//! Self-advancing endpoint selector shown beside the base URL.

use dioxus::prelude::*;

use crate::core::timing::sleep_ms;
use crate::t;

/// Row height of the selector window, in px; the list is shifted by this
/// much per step so only the active endpoint is visible.
const ROW_HEIGHT_PX: usize = 32;

/// Index cycling through `len` items. With `len == 0` every operation is a
/// no-op and the index stays 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselIndex {
    len: usize,
    index: usize,
}

impl CarouselIndex {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn tick(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn previous_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + self.len - 1) % self.len
        }
    }

    pub fn next_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        }
    }
}

#[component]
pub fn EndpointCarousel(endpoints: Vec<String>, interval_ms: u64) -> Element {
    let len = endpoints.len();
    let mut carousel = use_signal(move || CarouselIndex::new(len));

    // Scoped to this component: dropped (and never polled again) on unmount.
    use_future(move || async move {
        if carousel.peek().len() < 2 {
            return;
        }
        loop {
            sleep_ms(interval_ms).await;
            carousel.with_mut(CarouselIndex::tick);
        }
    });

    let state = carousel();
    let offset = state.index() * ROW_HEIGHT_PX;
    let rows: Vec<(usize, String, &'static str)> = endpoints
        .into_iter()
        .enumerate()
        .map(|(i, endpoint)| {
            let class = if i == state.index() {
                "endpoint-carousel__item endpoint-carousel__item--active"
            } else {
                "endpoint-carousel__item"
            };
            (i, endpoint, class)
        })
        .collect();

    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "endpoint-carousel",
            aria_label: t!("home-endpoint-label"),
            button {
                r#type: "button",
                class: "endpoint-carousel__step",
                aria_label: t!("home-endpoint-previous"),
                onclick: move |_| {
                    carousel.with_mut(|c| {
                        let target = c.previous_index();
                        c.select(target);
                    });
                },
                "‹"
            }
            div { class: "endpoint-carousel__window",
                ul {
                    class: "endpoint-carousel__list",
                    role: "listbox",
                    style: "transform: translateY(-{offset}px)",
                    for (i, endpoint, class) in rows.into_iter() {
                        li {
                            key: "{endpoint}",
                            class: "{class}",
                            role: "option",
                            aria_selected: i == state.index(),
                            onclick: move |_| {
                                carousel.with_mut(|c| {
                                    c.select(i);
                                });
                            },
                            "{endpoint}"
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "endpoint-carousel__step",
                aria_label: t!("home-endpoint-next"),
                onclick: move |_| {
                    carousel.with_mut(|c| {
                        let target = c.next_index();
                        c.select(target);
                    });
                },
                "›"
            }
        }
    }
}
