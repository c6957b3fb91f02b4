use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Round profile picture that falls back to initials while the image is
/// loading, when it fails, or when there is no image at all.
#[component]
pub fn Avatar(#[props(default)] src: Option<String>, initials: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { class: "avatar",
            if let Some(url) = src {
                prim::AvatarImage { class: "avatar-image", src: url }
            }
            prim::AvatarFallback { class: "avatar-fallback", "{initials}" }
        }
    }
}
