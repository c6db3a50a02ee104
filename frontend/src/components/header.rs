use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_back: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <header class="header">
            <div class="container header-row">
                <button class="header-back" onclick={on_back}>
                    <span class="header-back-chevron">{"‹"}</span>
                    {"Back"}
                </button>
                <h1 class="header-title">{"Dashboard"}</h1>
                <div class="header-avatar" title="Profile">{"👤"}</div>
            </div>
        </header>
    }
}
