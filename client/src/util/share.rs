//! Share targets for the campaign share dialog.
//!
//! Every target except `CopyLink` maps to a deep link opened in a new
//! browsing context. Link construction is pure; the browser side effects
//! live in `components::share_modal`.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use crate::state::toast::{DEFAULT_TOAST_MS, ToastKind};

/// Toast shown after the link lands on the clipboard.
pub const COPY_CONFIRMATION: &str = "Enlace copiado al portapapeles";

const MESSENGER_APP_ID: &str = "966242223397117";
const POPUP_FEATURES: &str = "width=600,height=400";

/// What selecting a share target does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareAction {
    /// Put `text` on the clipboard, then raise a toast.
    Copy { text: String, toast: &'static str, kind: ToastKind, toast_ms: u32 },
    /// Open `link` in a new browsing context.
    Open { link: String, features: Option<&'static str> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    CopyLink,
    Email,
    WhatsApp,
    Telegram,
    Facebook,
    Messenger,
    LinkedIn,
    Twitter,
}

/// Menu order.
pub const SHARE_TARGETS: [ShareTarget; 8] = [
    ShareTarget::CopyLink,
    ShareTarget::Email,
    ShareTarget::WhatsApp,
    ShareTarget::Telegram,
    ShareTarget::Facebook,
    ShareTarget::Messenger,
    ShareTarget::LinkedIn,
    ShareTarget::Twitter,
];

impl ShareTarget {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CopyLink => "Copy Link",
            Self::Email => "Email",
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Facebook => "Facebook",
            Self::Messenger => "Messenger",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::CopyLink | Self::Email => "share-option--neutral",
            Self::WhatsApp => "share-option--whatsapp",
            Self::Telegram | Self::Facebook | Self::LinkedIn => "share-option--blue",
            Self::Messenger => "share-option--messenger",
            Self::Twitter => "share-option--dark",
        }
    }

    /// Resolve the selection into a clipboard write or a window to open.
    #[must_use]
    pub fn action(self, title: &str, url: &str) -> ShareAction {
        match self.link(title, url) {
            None => ShareAction::Copy {
                text: url.to_owned(),
                toast: COPY_CONFIRMATION,
                kind: ToastKind::Success,
                toast_ms: DEFAULT_TOAST_MS,
            },
            Some(link) => ShareAction::Open { link, features: self.window_features() },
        }
    }

    /// Deep link for this target, or `None` for the clipboard action.
    #[must_use]
    pub fn link(self, title: &str, url: &str) -> Option<String> {
        let enc = |s: &str| urlencoding::encode(s).into_owned();
        let link = match self {
            Self::CopyLink => return None,
            Self::Email => format!(
                "mailto:?subject={}&body={}",
                enc(title),
                enc(&format!("Te comparto este artículo interesante: {url}"))
            ),
            Self::WhatsApp => format!("https://wa.me/?text={}", enc(&format!("{title} - {url}"))),
            Self::Telegram => format!("https://t.me/share/url?url={}&text={}", enc(url), enc(title)),
            Self::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", enc(url)),
            Self::Messenger => format!(
                "https://www.facebook.com/dialog/send?link={}&app_id={MESSENGER_APP_ID}&redirect_uri={}",
                enc(url),
                enc(url)
            ),
            Self::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}&title={}",
                enc(url),
                enc(title)
            ),
            Self::Twitter => format!("https://twitter.com/intent/tweet?text={}", enc(&format!("{title} {url}"))),
        };
        Some(link)
    }

    /// `window.open` features: social networks open in a sized popup.
    #[must_use]
    pub fn window_features(self) -> Option<&'static str> {
        match self {
            Self::Facebook | Self::Messenger | Self::LinkedIn | Self::Twitter => Some(POPUP_FEATURES),
            Self::CopyLink | Self::Email | Self::WhatsApp | Self::Telegram => None,
        }
    }
}
