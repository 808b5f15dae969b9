use leptos::prelude::*;

/// Small coloured label
///
/// `color` picks the modifier class: "green", "red", "purple", "cyan",
/// "blue", "volcano", "processing"; anything else renders neutral.
#[component]
pub fn Tag(
    #[prop(optional, into)]
    color: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let color_class = move || match color.get().as_deref().unwrap_or_default() {
        "green" => "tag--green",
        "red" => "tag--red",
        "purple" => "tag--purple",
        "cyan" => "tag--cyan",
        "blue" => "tag--blue",
        "volcano" => "tag--volcano",
        "processing" => "tag--processing",
        _ => "tag--neutral",
    };

    view! {
        <span class=move || format!("tag {}", color_class())>
            {children()}
        </span>
    }
}
