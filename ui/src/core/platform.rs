//! Browser/desktop glue: page origin, clipboard, embedded frame messaging.

/// Origin of the page hosting the app (`https://console.example.com`).
/// Always `None` outside the browser.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .location()
            .origin()
            .ok()
            .filter(|origin| !origin.is_empty() && origin != "null")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window
            .document()
            .ok_or("document unavailable")?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| "document is not an HTML document")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        textarea.set_read_only(true);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err("Clipboard copy blocked".into())
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

/// Post `{themeMode}` and `{lang}` to the frame with id `frame_id` so the
/// embedded page can match the console's theme and locale.
pub fn post_frame_handshake(frame_id: &str, theme_mode: &str, lang: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use js_sys::{Object, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        let frame = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(frame_id))
            .ok_or_else(|| format!("frame `{frame_id}` not found"))?
            .dyn_into::<web_sys::HtmlIFrameElement>()
            .map_err(|_| format!("`{frame_id}` is not an iframe"))?;
        let target = frame
            .content_window()
            .ok_or("frame has no content window")?;

        for (field, value) in [("themeMode", theme_mode), ("lang", lang)] {
            let message = Object::new();
            Reflect::set(&message, &JsValue::from_str(field), &JsValue::from_str(value))
                .map_err(|_| format!("unable to build `{field}` message"))?;
            target
                .post_message(&message, "*")
                .map_err(|_| format!("postMessage `{field}` failed"))?;
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(frame_id, theme_mode, lang, "frame handshake skipped outside the browser");
        Ok(())
    }
}
