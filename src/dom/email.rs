//! "Send me the report link" dialog.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use super::widgets::Modal;
use super::{document, element_by_id, listen, set_shown, window};
use crate::error::{UiError, report};
use crate::net::email::{self, EmailEndpoint, EmailLinkRequest, SendOutcome};

const SEND_BUTTON_ID: &str = "send-email-button";
const INPUT_ID: &str = "email-input";
const INPUT_ERROR_ID: &str = "email-input-error";
const SUCCESS_ID: &str = "send-mail-success";
const FAILURE_ID: &str = "send-mail-error";
const REQUEST_MODAL_ID: &str = "send-link";
const RESULT_MODAL_ID: &str = "send-link-message";

/// Attach the send handler if the page has the dialog. Returns whether it did.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn bind(document: &Document) -> Result<bool, UiError> {
    let Some(button) = document.get_element_by_id(SEND_BUTTON_ID) else {
        return Ok(false);
    };
    listen(&button, "click", |_event: Event| {
        report("send report link", on_send());
    })?;
    Ok(true)
}

/// Read the endpoint configuration from the `#email-data` holder.
fn read_endpoint(document: &Document) -> Result<EmailEndpoint, UiError> {
    let holder = element_by_id(document, EmailEndpoint::HOLDER_ID)?;
    EmailEndpoint::from_attributes(
        holder.get_attribute("data-post-url"),
        holder.get_attribute("data-csrf-token"),
        holder.get_attribute("data-encoding").as_deref(),
    )
}

fn on_send() -> Result<(), UiError> {
    let document = document()?;
    let input = element_by_id(&document, INPUT_ID)?;
    let value = input.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value).unwrap_or_default();
    let input_error = element_by_id(&document, INPUT_ERROR_ID)?;

    let address = match email::validate_email(&value) {
        Ok(address) => address.to_owned(),
        Err(err) => {
            set_shown(&input_error, true)?;
            report("close request dialog", modal(&document, REQUEST_MODAL_ID).and_then(|m| m.hide().map_err(UiError::from)));
            return Err(err);
        }
    };
    set_shown(&input_error, false)?;

    let endpoint = read_endpoint(&document)?;
    let request = EmailLinkRequest { email: address, link: window()?.location().href()? };

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = match email::send_report_link(&endpoint, &request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("report link request failed: {err}");
                SendOutcome::Failed
            }
        };
        report("show send result", show_outcome(outcome));
    });
    Ok(())
}

fn show_outcome(outcome: SendOutcome) -> Result<(), UiError> {
    let document = document()?;
    let sent = outcome == SendOutcome::Sent;
    set_shown(&element_by_id(&document, SUCCESS_ID)?, sent)?;
    set_shown(&element_by_id(&document, FAILURE_ID)?, !sent)?;
    modal(&document, RESULT_MODAL_ID)?.show()?;
    Ok(())
}

fn modal(document: &Document, id: &str) -> Result<Modal, UiError> {
    Ok(Modal::new(&element_by_id(document, id)?)?)
}
