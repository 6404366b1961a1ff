//! Success Page
//!
//! Display only. The amount comes straight from the query string and nothing
//! here checks that a payment actually completed.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use leptos_router::{
    hooks::{use_navigate, use_query_map},
    NavigateOptions,
};

use tipjar_core::{success::amount_badge, Countdown, Tick};

use crate::components::TestModeNotice;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let badge = move || query.with(|q| amount_badge(q.get("amount").as_deref()));

    let (countdown, set_countdown) = signal(Countdown::default());
    let navigate = use_navigate();

    let go_home = {
        let navigate = navigate.clone();
        move |_| navigate("/", NavigateOptions::default())
    };

    let tick = move || {
        let mut next = countdown.get_untracked();
        if next.is_elapsed() {
            return;
        }
        let step = next.tick();
        set_countdown.set(next);
        if step == Tick::Elapsed {
            navigate("/", NavigateOptions::default());
        }
    };

    match set_interval_with_handle(tick, Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => leptos::logging::error!("Failed to start countdown: {e:?}"),
    }

    view! {
        <div class="success">
            <TestModeNotice />

            <div class="card">
                <div class="icon">"✅"</div>
                <h1>"ご支援ありがとうございました！"</h1>
                <p>"決済が正常に完了しました"</p>
                {move || badge().map(|text| view! { <span class="badge">{text}</span> })}

                <div class="thanks">
                    <p>"🎉 あなたの温かいご支援により、創作活動を続けることができます"</p>
                    <p>"💝 心より感謝申し上げます"</p>
                </div>

                <button class="btn btn-block" on:click=go_home>
                    "← トップページに戻る"
                </button>
                <p class="countdown">{move || countdown.get().caption()}</p>

                <div class="notice">
                    <p>"決済完了メールが送信されました"</p>
                    <p>"お問い合わせがございましたら、メールの内容をご確認ください"</p>
                </div>
            </div>
        </div>
    }
}
