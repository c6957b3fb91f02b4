use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Button sizing. `Large` is used for hero and call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Large => "lg",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    /// Stretch to the width of the parent (job card footers).
    #[props(default = false)]
    pub full_width: bool,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Brand button. Without an `onclick` handler it is purely decorative,
/// which is how the secondary "learn more" buttons render.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
        Attribute::new("data-size", props.size.class(), None, false),
    ];
    if props.full_width {
        base.push(Attribute::new("data-full-width", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: props.button_type.clone(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn renders_children_and_variant() {
        fn app() -> Element {
            rsx! {
                Button { variant: ButtonVariant::Outline, "Lihat Semua Casting" }
            }
        }
        let html = render(app);
        assert!(html.contains("Lihat Semua Casting"));
        assert!(html.contains("data-style=\"outline\""));
        assert!(html.contains("data-size=\"default\""));
    }

    #[test]
    fn large_full_width_button_sets_data_attributes() {
        fn app() -> Element {
            rsx! {
                Button { size: ButtonSize::Large, full_width: true, "Mulai Sekarang" }
            }
        }
        let html = render(app);
        assert!(html.contains("data-size=\"lg\""));
        assert!(html.contains("data-full-width=\"true\""));
    }
}
