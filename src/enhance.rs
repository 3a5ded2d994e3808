//! Static Page Enhancements
//!
//! Labels and copy buttons for code blocks already present in the page,
//! and the click handler shared by every copy button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

use crate::config::COPY_FEEDBACK_MS;
use crate::markdown::code_label;

const CODE_BLOCK_SELECTOR: &str = r#"pre code[class*="language-"]"#;
const COPY_LABEL: &str = "Copy";

/// Language token of a `language-xxx` class
pub fn language_from_class(class_name: &str) -> Option<&str> {
    class_name
        .split_whitespace()
        .find_map(|class| class.strip_prefix("language-"))
        .filter(|lang| !lang.is_empty())
}

fn append_child(document: &Document, parent: &Element, tag: &str, class: &str, text: &str) -> Option<Element> {
    let child = document.create_element(tag).ok()?;
    child.set_class_name(class);
    child.set_text_content(Some(text));
    parent.append_child(&child).ok()?;
    Some(child)
}

/// Add labels, `data-language` and copy buttons to rendered code blocks
pub fn enhance_static_code_blocks(document: &Document) -> usize {
    let Ok(blocks) = document.query_selector_all(CODE_BLOCK_SELECTOR) else {
        return 0;
    };

    let mut enhanced = 0;
    for i in 0..blocks.length() {
        let Some(code) = blocks.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(pre) = code.parent_element() else {
            continue;
        };
        let classes = pre.class_list();
        if classes.contains("code-highlight") {
            continue;
        }

        let content = code.text_content().unwrap_or_default();
        let label = code_label(language_from_class(&code.class_name()), &content);

        let _ = classes.add_1("code-highlight");
        for class in &label.classes {
            let _ = classes.add_1(class);
        }
        if let Some(language) = &label.data_language {
            let _ = pre.set_attribute("data-language", language);
        }
        if let Some(text) = &label.label {
            append_child(document, &pre, "div", "code-language-label", text);
        }
        if let Some(button) = append_child(document, &pre, "button", "copy-code-button", COPY_LABEL) {
            let _ = button.set_attribute("type", "button");
        }
        enhanced += 1;
    }
    enhanced
}

/// Text of the code block a copy button belongs to
fn code_text(button: &Element) -> Option<String> {
    let block = button.closest(".code-highlight").ok()??;
    let source = match block.query_selector("code").ok().flatten() {
        Some(code) => code,
        None => block.query_selector("pre").ok().flatten()?,
    };
    source.text_content()
}

async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let navigator = window().navigator();
    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Show feedback on a copy button, then restore its label
async fn flash_button(button: Element, text: &str, class: Option<&str>) {
    button.set_text_content(Some(text));
    if let Some(class) = class {
        let _ = button.class_list().add_1(class);
    }
    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
    button.set_text_content(Some(COPY_LABEL));
    if let Some(class) = class {
        let _ = button.class_list().remove_1(class);
    }
}

/// Handle clicks on any `.copy-code-button`, present or future
pub fn install_copy_handler() {
    let _ = window_event_listener(leptos::ev::click, |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some(button) = target.closest(".copy-code-button").ok().flatten() else {
            return;
        };
        let Some(text) = code_text(&button) else {
            log::warn!("Copy button without code block");
            return;
        };
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => flash_button(button, "Copied!", Some("copied")).await,
                Err(e) => {
                    log::error!("Failed to copy: {}", e);
                    flash_button(button, "Failed", None).await;
                }
            }
        });
    });
}
