//! Wires the upload preview to the file input's `change` event.

use crate::app::{WebDom, report};
use crate::core::contract::PageContract;
use crate::core::error::{UiError, UiResult};
use crate::core::preview::{PreviewWidget, encode_data_url};
use crate::i18n::UiLabels;
use gloo::events::EventListener;
use gloo::file::futures::read_as_bytes;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

pub(crate) fn bind(
    dom: &Rc<WebDom>,
    contract: &Rc<PageContract>,
    labels: &Rc<UiLabels>,
) -> UiResult<()> {
    let widget = Rc::new(PreviewWidget::new(
        Rc::clone(dom),
        Rc::clone(contract),
        Rc::clone(labels),
    )?);
    let input = widget
        .input()
        .clone()
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::Dom {
            operation: "bind_file_input",
            detail: "element is not an <input>".to_string(),
        })?;
    let listener_target = input.clone();
    EventListener::new(&listener_target, "change", move |_event| {
        on_change(&widget, &input);
    })
    .forget();
    Ok(())
}

fn on_change(widget: &Rc<PreviewWidget<WebDom>>, input: &HtmlInputElement) {
    let file = input.files().and_then(|files| files.get(0));
    let name = file.as_ref().map(web_sys::File::name);
    match widget.select(name.as_deref()) {
        Ok(true) => {}
        Ok(false) => return,
        Err(err) => {
            report("preview", &err);
            return;
        }
    }
    let Some(file) = file else {
        return;
    };
    let file = gloo::file::File::from(file);
    let widget = Rc::clone(widget);
    // Decodes are not sequenced; the last one to complete wins, even if its file was
    // picked first.
    spawn_local(async move {
        match read_as_bytes(&file).await {
            Ok(bytes) => {
                let url = encode_data_url(&file.raw_mime_type(), &bytes);
                if let Err(err) = widget.render(&url) {
                    report("preview", &err);
                }
            }
            Err(err) => report(
                "preview",
                &UiError::FileRead {
                    name: file.name(),
                    detail: err.to_string(),
                },
            ),
        }
    });
}
