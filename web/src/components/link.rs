use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub href: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Plain anchor that shows its `title` as the link text.
#[function_component(LinkComponent)]
pub fn link_component(props: &LinkProps) -> Html {
    html! {
        <a href={props.href.clone()} title={props.title.clone()} class={props.class.clone()}>
            { props.title.to_string() }
        </a>
    }
}
