//! Test-mode content for the demo banner

use std::time::Duration;

/// How long a copy button reads `コピー済み` before resetting
pub const COPY_RESET_AFTER: Duration = Duration::from_secs(2);

/// Kind of outcome a Stripe test card produces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestCardKind {
    Succeeds,
    Declined,
    RequiresAction,
}

impl TestCardKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Succeeds => "成功",
            Self::Declined => "失敗",
            Self::RequiresAction => "処理中",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Succeeds => "✅",
            Self::Declined => "❌",
            Self::RequiresAction => "🔄",
        }
    }

    /// CSS modifier for the kind badge
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Succeeds => "kind kind-success",
            Self::Declined => "kind kind-declined",
            Self::RequiresAction => "kind kind-pending",
        }
    }
}

/// A Stripe test card as shown in the banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCard {
    pub kind: TestCardKind,
    pub description: &'static str,
    /// Display form, grouped in fours
    pub number: &'static str,
}

impl TestCard {
    /// The number as written to the clipboard, without spaces
    pub fn clipboard_text(&self) -> String {
        self.number.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

pub const TEST_CARDS: [TestCard; 3] = [
    TestCard {
        kind: TestCardKind::Succeeds,
        description: "決済が成功します",
        number: "4242 4242 4242 4242",
    },
    TestCard {
        kind: TestCardKind::Declined,
        description: "決済が失敗します",
        number: "4000 0000 0000 0002",
    },
    TestCard {
        kind: TestCardKind::RequiresAction,
        description: "決済処理が必要です",
        number: "4000 0000 0000 0119",
    },
];

/// Other checkout fields and an example value for each
pub const OTHER_FIELDS: [(&str, &str); 3] = [
    ("有効期限", "任意の未来の日付（例: 12/25）"),
    ("CVC", "任意の3桁数字（例: 123）"),
    ("郵便番号", "任意の5桁数字（例: 12345）"),
];

/// Caption of the banner's show/hide toggle
pub const fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "テスト方法を隠す"
    } else {
        "テスト方法を見る"
    }
}

/// Caption of a card's copy button, given the text last copied
pub fn copy_label(card: &TestCard, copied: Option<&str>) -> &'static str {
    if copied == Some(card.clipboard_text().as_str()) {
        "✓ コピー済み"
    } else {
        "コピー"
    }
}
