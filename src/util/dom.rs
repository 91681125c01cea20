//! Browser-only DOM helpers.
//!
//! TRADE-OFFS
//! ==========
//! Native builds have no DOM. Event resolution only exists in the browser
//! build; document lookups return `None` natively.

/// A participant removal requested through a delete button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

/// Resolve a click inside the list container to the participant whose
/// delete button was pressed. Clicks anywhere else yield `None`.
#[cfg(feature = "csr")]
pub fn removal_target(ev: &web_sys::Event) -> Option<RemovalTarget> {
    use super::html::{ACTIVITY_ATTR, CARD_CLASS, DELETE_CLASS, EMAIL_ATTR, PARTICIPANT_CLASS};
    use wasm_bindgen::JsCast as _;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest(&format!(".{DELETE_CLASS}")).ok()??;
    let item = button.closest(&format!(".{PARTICIPANT_CLASS}")).ok()??;
    let card = item.closest(&format!(".{CARD_CLASS}")).ok()??;
    Some(RemovalTarget {
        activity: card.get_attribute(ACTIVITY_ATTR)?,
        email: item.get_attribute(EMAIL_ATTR)?,
    })
}

/// `content` of `<meta name="{name}">` in the host document.
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let meta = document.query_selector(&format!(r#"meta[name="{name}"]"#)).ok()??;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}
