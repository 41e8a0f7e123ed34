use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

/// Text box above a table that reports every keystroke.
#[component]
pub fn SearchInput(
    #[props(default = "Pesquisar".to_string())] placeholder: String,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search-input",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}
