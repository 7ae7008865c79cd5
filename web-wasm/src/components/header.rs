//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Neural"<span class="brand-accent">"Detect"</span></h1>
            <p class="tagline">"AI-Powered Postal Package Damage Detection"</p>
            <div class="badge">"★ First Place Winner - Innovpost Hackathon"</div>
        </header>
    }
}
