//! Donation form state helpers
//!
//! Kept free of any UI framework so the browser form's behaviour can be
//! exercised by ordinary unit tests.

use std::future::Future;

use crate::amount::{AmountPolicy, DonationAmount};
use crate::error::Result;
use crate::format::{format_yen, parse_leading_int};

/// Preset buttons, in display order
pub const PRESET_AMOUNTS: [i64; 5] = [500, 1_000, 3_000, 5_000, 10_000];

/// Shown for any failure between submit and the provider redirect
pub const SUBMIT_FAILED_ALERT: &str = "エラーが発生しました。もう一度お試しください。";

/// Amount typed into the custom input; unparseable input counts as 0.
pub fn custom_input_amount(input: &str) -> i64 {
    parse_leading_int(input).unwrap_or(0)
}

/// Submit is allowed once a positive amount is entered and no request is in flight.
pub const fn can_submit(amount: i64, loading: bool) -> bool {
    !loading && amount > 0
}

/// Submit button caption
pub fn submit_label(amount: i64, loading: bool) -> String {
    if loading {
        "処理中...".into()
    } else if amount > 0 {
        format!("{}を送金", format_yen(amount))
    } else {
        "金額を入力してください".into()
    }
}

/// Client-side check run before the endpoint is called
pub const fn validate_form_amount(amount: i64) -> Result<DonationAmount> {
    AmountPolicy::DONATION.check(amount)
}

/// Create a checkout session for `amount`, then hand its id to `redirect`.
///
/// The redirect runs only when `create` succeeded and receives exactly the id
/// it returned. A failure in either step comes back as the single error the
/// form turns into [`SUBMIT_FAILED_ALERT`].
pub async fn submit_donation<C, CF, R, RF, E>(
    amount: DonationAmount,
    create: C,
    redirect: R,
) -> std::result::Result<(), E>
where
    C: FnOnce(DonationAmount) -> CF,
    CF: Future<Output = std::result::Result<String, E>>,
    R: FnOnce(String) -> RF,
    RF: Future<Output = std::result::Result<(), E>>,
{
    let session_id = create(amount).await?;
    redirect(session_id).await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::AmountError;

    #[test]
    fn test_presets_within_policy() {
        for preset in PRESET_AMOUNTS {
            assert!(AmountPolicy::DONATION.contains(preset));
        }
    }

    #[test]
    fn test_custom_input_amount() {
        assert_eq!(custom_input_amount("2500"), 2500);
        assert_eq!(custom_input_amount(""), 0);
        assert_eq!(custom_input_amount("e"), 0);
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(3000, false), "¥3,000を送金");
        assert_eq!(submit_label(0, false), "金額を入力してください");
        assert_eq!(submit_label(3000, true), "処理中...");
    }

    #[test]
    fn test_can_submit() {
        assert!(can_submit(500, false));
        assert!(!can_submit(500, true));
        assert!(!can_submit(0, false));
        assert!(!can_submit(-1, false));
    }

    #[test]
    fn test_form_validation_mirrors_server_bounds() {
        assert!(validate_form_amount(100).is_ok());
        assert_eq!(
            validate_form_amount(50).map_err(|e| e.form_message()),
            Err("最低金額は100円です".to_string())
        );
        assert_eq!(
            validate_form_amount(2_000_000),
            Err(AmountError::AboveMaximum { max: 1_000_000 })
        );
    }

    fn donation(yen: i64) -> DonationAmount {
        validate_form_amount(yen).unwrap()
    }

    #[tokio::test]
    async fn test_submit_redirects_with_created_session_id() {
        let created = RefCell::new(Vec::new());
        let redirected = RefCell::new(Vec::new());

        let outcome: std::result::Result<(), String> = submit_donation(
            donation(3000),
            |amount| {
                created.borrow_mut().push(amount.yen());
                async { Ok("cs_test_abc".to_string()) }
            },
            |session_id| {
                redirected.borrow_mut().push(session_id);
                async { Ok(()) }
            },
        )
        .await;

        assert_eq!(outcome, Ok(()));
        assert_eq!(*created.borrow(), vec![3000]);
        assert_eq!(*redirected.borrow(), vec!["cs_test_abc".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_create_failure_skips_redirect() {
        let redirected = RefCell::new(Vec::new());

        let outcome = submit_donation(
            donation(500),
            |_| async { Err::<String, _>("チェックアウトセッションの作成に失敗しました".to_string()) },
            |session_id| {
                redirected.borrow_mut().push(session_id);
                async { Ok(()) }
            },
        )
        .await;

        assert_eq!(outcome, Err("チェックアウトセッションの作成に失敗しました".to_string()));
        assert!(redirected.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_submit_redirect_failure_is_reported() {
        let outcome = submit_donation(
            donation(500),
            |_| async { Ok("cs_test_abc".to_string()) },
            |_| async { Err("Stripe.js is not loaded".to_string()) },
        )
        .await;

        assert_eq!(outcome, Err("Stripe.js is not loaded".to_string()));
    }
}
