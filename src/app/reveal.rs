use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Wraps a block in a container that fades and slides in the first time it
/// scrolls into view. The `reveal` / `visible` classes live in input.css.
#[component]
pub fn Reveal(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visibility = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    // Latch: once revealed, a section never hides again when scrolled past.
    Effect::new(move |_| {
        if visibility.get() {
            set_shown(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if shown() {
                    format!("{class} reveal visible")
                } else {
                    format!("{class} reveal")
                }
            }
        >
            {children()}
        </div>
    }
}
