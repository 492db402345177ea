use crate::catalog::{Service, ServiceIcon};
use yew::prelude::*;

pub fn icon_glyph(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::Collision => "🛡",
        ServiceIcon::Paint => "🎨",
        ServiceIcon::Aluminum => "⚗",
        ServiceIcon::Frame => "⤢",
        ServiceIcon::Glass => "▦",
        ServiceIcon::Detail => "✦",
        ServiceIcon::Generic => "●",
    }
}

/// One card open at a time: toggling the open card closes it.
pub fn toggle_expanded(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(open) if open == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub expanded: bool,
    pub on_toggle: Callback<String>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = service.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    html! {
        <div class={classes!("service-card", props.expanded.then(|| "expanded"))}>
            <button class="service-card-header" {onclick} aria-expanded={props.expanded.to_string()}>
                <div class="service-icon">{icon_glyph(service.icon)}</div>
                <div class="service-heading">
                    <div class="service-title-row">
                        <h3>{&service.title}</h3>
                        <span class="service-toggle">{"+"}</span>
                    </div>
                    <p>{&service.short_description}</p>
                </div>
            </button>
            <div class="service-card-body">
                <p>{&service.description}</p>
                <ul class="service-features">
                    { for service.features.iter().map(|feature| html! {
                        <li><span class="check">{"✓"}</span>{feature}</li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, "paint"), Some("paint".to_string()));
        assert_eq!(toggle_expanded(Some("paint"), "paint"), None);
        assert_eq!(toggle_expanded(Some("paint"), "glass"), Some("glass".to_string()));
    }
}
