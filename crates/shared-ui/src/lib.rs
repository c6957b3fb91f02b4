pub mod components;

pub use components::*;

#[cfg(test)]
pub(crate) mod test_support {
    use dioxus::prelude::*;

    /// Render a root component to an HTML string.
    pub fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }
}
