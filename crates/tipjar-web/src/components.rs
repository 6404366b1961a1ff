//! UI Components

use leptos::leptos_dom::helpers::set_timeout;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use tipjar_core::{
    demo::{copy_label, toggle_label, COPY_RESET_AFTER, OTHER_FIELDS, TEST_CARDS},
    form::{
        can_submit, custom_input_amount, submit_label, validate_form_amount, PRESET_AMOUNTS,
        submit_donation, SUBMIT_FAILED_ALERT,
    },
    format_yen,
};

use crate::{api, stripe};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Amount picker and submit button
///
/// Validates against the same policy as the server, then creates a session
/// and hands it to Stripe.js. Any failure ends in one alert.
#[component]
pub fn DonationForm() -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let (amount, set_amount) = signal(0_i64);
    let (selected, set_selected) = signal(None::<i64>);
    let (input, set_input) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let choose_preset = move |preset: i64| {
        set_selected.set(Some(preset));
        set_amount.set(preset);
        set_input.set(preset.to_string());
        set_form_error.set(None);
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let donation = match validate_form_amount(amount.get_untracked()) {
            Ok(donation) => donation,
            Err(e) => {
                set_form_error.set(Some(e.form_message()));
                return;
            }
        };

        set_form_error.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let outcome = submit_donation(
                donation,
                api::create_checkout_session,
                |session_id| async move { stripe::redirect_to_checkout(&session_id).await },
            )
            .await;

            if let Err(e) = outcome {
                error!("Error creating checkout session: {e}");
                alert(SUBMIT_FAILED_ALERT);
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="card donation-form">
            <header class="card-header">
                <h2>"投げ銭で応援"</h2>
                <p class="subtitle">"あなたの応援が創作活動の励みになります"</p>
            </header>

            <form on:submit=submit>
                <div class="field">
                    <p class="label">"金額を選択"</p>
                    <div class="presets">
                        {PRESET_AMOUNTS
                            .into_iter()
                            .map(|preset| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selected.get() == Some(preset) {
                                                "btn btn-preset selected"
                                            } else {
                                                "btn btn-preset"
                                            }
                                        }
                                        disabled=move || loading.get()
                                        on:click=move |_| choose_preset(preset)
                                    >
                                        {format_yen(preset)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="field">
                    <p class="label">"または金額を入力"</p>
                    <input
                        type="number"
                        placeholder="金額を入力"
                        disabled=move || loading.get()
                        prop:value=move || input.get()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            let value = custom_input_amount(&raw);
                            set_input.set(raw);
                            set_amount.set(value);
                            set_selected.set(Some(value));
                        }
                    />
                    {move || form_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                </div>

                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || !can_submit(amount.get(), loading.get())
                >
                    {move || submit_label(amount.get(), loading.get())}
                </button>
            </form>

            <div class="notice">
                <p>"安全なStripe決済を使用しています"</p>
                <p>"カード情報は暗号化されて保護されます"</p>
            </div>
        </div>
    }
}

/// Copy `text` to the clipboard and mark it copied for a moment
fn copy_to_clipboard(text: String, set_copied: WriteSignal<Option<String>>) {
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);

        match JsFuture::from(promise).await {
            Ok(_) => {
                set_copied.set(Some(text));
                set_timeout(move || set_copied.set(None), COPY_RESET_AFTER);
            }
            Err(e) => error!("Failed to copy: {e:?}"),
        }
    });
}

/// Test-mode banner with copyable Stripe test cards
#[component]
pub fn DemoBanner() -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let (copied, set_copied) = signal(None::<String>);

    view! {
        <div class="demo-banner">
            <div class="alert alert-info">
                <h3>"🧪 デモモード - テスト環境"</h3>
                <p>
                    "これはデモサイトです。" <strong>"実際の料金は発生しません"</strong>
                    "。テスト用カード番号でお試しください。"
                </p>
                <button class="btn btn-small" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                    {move || toggle_label(expanded.get())}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="card test-instructions">
                    <header class="card-header">
                        <h3>"💳 テスト用クレジットカード番号"</h3>
                        <p class="subtitle">
                            "以下のテスト用カード番号を使用してください。有効期限・CVC・郵便番号は任意の値で構いません。"
                        </p>
                    </header>

                    <ul class="test-cards">
                        {TEST_CARDS
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <li class="test-card">
                                        <span class=card.kind.css_class()>
                                            {format!("{} {}", card.kind.icon(), card.kind.label())}
                                        </span>
                                        <div class="test-card-body">
                                            <code>{card.number}</code>
                                            <p class="description">{card.description}</p>
                                        </div>
                                        <button
                                            type="button"
                                            class="btn btn-small"
                                            on:click=move |_| {
                                                copy_to_clipboard(card.clipboard_text(), set_copied);
                                            }
                                        >
                                            {move || copy_label(&card, copied.get().as_deref())}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="alert alert-warning">
                        <strong>"その他の入力項目:"</strong>
                        <ul class="other-fields">
                            {OTHER_FIELDS
                                .into_iter()
                                .map(|(field, example)| {
                                    view! {
                                        <li>"• " <strong>{format!("{field}:")}</strong> " " {example}</li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="safety-note">
                        <p class="safety-title">"✅ 安全性について"</p>
                        <p>
                            "テストモードでは、実際のクレジットカード情報を入力しても"
                            <strong>"絶対に課金されません"</strong>
                            "。Stripeが自動的に保護します。"
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Short test-mode notice for the success page
#[component]
pub fn TestModeNotice() -> impl IntoView {
    view! {
        <div class="alert alert-info">
            "🧪 " <strong>"テストモード:"</strong> " 実際の課金は発生していません"
        </div>
    }
}
