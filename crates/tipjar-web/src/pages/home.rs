//! Home Page

use leptos::prelude::*;

use crate::components::{DemoBanner, DonationForm};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <DemoBanner />

            <header class="hero">
                <h1>"💗 投げ銭サイト"</h1>
                <p class="tagline">
                    "あなたの温かい応援が、創作活動を続ける大きな力となります。"
                    "心より感謝申し上げます。"
                </p>
            </header>

            <DonationForm />

            <footer class="notice">
                <p>"Stripe決済システムを使用しています"</p>
                <p>"クレジットカード情報は安全に暗号化されます"</p>
            </footer>
        </div>
    }
}
