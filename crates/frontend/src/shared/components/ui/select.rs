use leptos::prelude::*;

/// Native `<select>` with an optional label.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: (value, label) pairs
    options: Vec<(&'static str, &'static str)>,
    /// ID for the select element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="catalog-control">
            {move || label.get().map(|l| view! {
                <label class="form-label small mb-1" for=label_for.clone()>
                    {l}
                </label>
            })}
            <select
                id=id
                class="form-select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let is_selected = move || value.get() == val;
                        view! { <option value=val selected=is_selected>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
