use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    /// Extra classes, appended after `container`.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Centered, width-limited block wrapping its children.
#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("container", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
