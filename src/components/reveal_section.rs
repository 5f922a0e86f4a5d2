use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: &'static str,
    #[prop_or_default]
    pub class: Classes,
    /// Start revealed, for sections that are on screen at load (the hero).
    #[prop_or_default]
    pub eager: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let (node, reveal) = use_reveal(config::REVEAL, props.eager);

    html! {
        <section
            id={props.id}
            ref={node}
            class={classes!(props.class.clone(), "reveal", reveal.modifier())}
        >
            { for props.children.iter() }
        </section>
    }
}
