use leptos::*;
use leptos::ev::SubmitEvent;

/// The review form plus its status line.
/// Field values live in the caller's signals so the board can read and clear them.
#[component]
pub fn ReviewForm(
    product_id: RwSignal<String>,
    review_text: RwSignal<String>,
    status: RwSignal<Option<String>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form id="review-form" on:submit=handle_submit>
            <label for="productId">{ "Product ID" }</label>
            <input
                type="text"
                id="productId"
                name="productId"
                prop:value=move || product_id.get()
                on:input=move |e| product_id.set(event_target_value(&e))
            />
            <label for="reviewText">{ "Review" }</label>
            <textarea
                id="reviewText"
                name="reviewText"
                prop:value=move || review_text.get()
                on:input=move |e| review_text.set(event_target_value(&e))
            />
            <button type="submit">{ "Submit Review" }</button>
        </form>
        <p id="message">{ move || status.get().unwrap_or_default() }</p>
    }
}
