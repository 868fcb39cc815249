use kamora::Section;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll the section's element into view. Missing elements are ignored.
pub fn scroll_to(section: Section) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.anchor()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
