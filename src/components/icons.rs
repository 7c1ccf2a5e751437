use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_else(default_class)]
    pub class: Classes,
}

fn default_class() -> Classes {
    classes!("icon")
}

fn outline(class: &Classes, stroke_width: &'static str, path: &'static str) -> Html {
    html! {
        <svg
            class={class.clone()}
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width={stroke_width}
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d={path} />
        </svg>
    }
}

#[function_component]
pub fn ArrowUpRight(props: &IconProps) -> Html {
    outline(&props.class, "1.5", "m4.5 19.5 15-15m0 0H8.25m11.25 0v11.25")
}

#[function_component]
pub fn ArrowRight(props: &IconProps) -> Html {
    outline(&props.class, "1.5", "M13.5 4.5 21 12m0 0-7.5 7.5M21 12H3")
}

#[function_component]
pub fn Check(props: &IconProps) -> Html {
    outline(&props.class, "2", "m4.5 12.75 6 6 9-13.5")
}

#[function_component]
pub fn Clock(props: &IconProps) -> Html {
    outline(&props.class, "1.5", "M12 6v6h4.5m4.5 0a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z")
}

#[function_component]
pub fn Dollar(props: &IconProps) -> Html {
    outline(
        &props.class,
        "1.5",
        "M12 6v12m-3-2.818.879.659c1.171.879 3.07.879 4.242 0 1.172-.879 1.172-2.303 0-3.182C13.536 12.219 12.768 12 12 12c-.725 0-1.45-.22-2.003-.659-1.106-.879-1.106-2.303 0-3.182s2.9-.879 4.006 0l.415.33M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z",
    )
}

#[function_component]
pub fn Cross(props: &IconProps) -> Html {
    outline(&props.class, "2", "M6 18 18 6M6 6l12 12")
}
