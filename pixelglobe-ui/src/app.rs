use crate::components::PixelGlobe;
use leptos::*;
use leptos_meta::*;

/// Minimal host page: the globe centered on a dark background.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Pixel Globe"/>
        <div style="width: 100vw; height: 100vh; display: flex; align-items: center; justify-content: center; background: #1a1a1a;">
            <PixelGlobe/>
        </div>
    }
}
