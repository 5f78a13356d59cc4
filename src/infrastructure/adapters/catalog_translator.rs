use crate::ports::translator_port::keys;
use crate::ports::TranslatorPort;
use serde::{Deserialize, Serialize};

/// 文案语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Zh,
}

impl Locale {
    /// 接受 "en"、"zh"、"zh-CN"、"en_US" 等写法
    pub fn parse(value: &str) -> Option<Self> {
        let lang = value
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

/// 内置文案表
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    locale: Locale,
}

impl CatalogTranslator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
        let text = match (locale, key) {
            (Locale::En, keys::REFUND_CONFIRM) => {
                "This opens the payment provider's refund page in a new tab. Continue?"
            }
            (Locale::En, keys::REFUND_INFO) => {
                "Complete the refund on the provider page, then confirm it here."
            }
            (Locale::En, keys::REFUND_PROXY_CONFIRM) => "Request a proxy refund for this order?",
            (Locale::En, keys::REFUND_PROXY_NOT_PROCESSED) => {
                "The proxy refund was not processed. Refund manually and confirm it here."
            }
            (Locale::En, keys::REFUND_SUCCESS) => "Refund completed",
            (Locale::En, keys::REFUND_VERIFY) => {
                "Has the refund been completed on the provider side?"
            }
            (Locale::En, keys::VERIFY_SUCCESS_REFUNDED) => "The provider reports this order as refunded",
            (Locale::En, keys::VERIFY_INFO_PAID) => {
                "The provider still reports this order as paid"
            }
            (Locale::En, keys::VERIFY_STATUS) => "Provider status",
            (Locale::En, keys::CHECK_STATUS) => "Check refund status",
            (Locale::En, keys::REFUND) => "Refund",
            (Locale::En, keys::REFUND_PROXY) => "Proxy refund",
            (Locale::En, keys::MARK_REFUNDED) => "Mark as refunded",
            (Locale::En, keys::COMMON_ERROR) => "Something went wrong",

            (Locale::Zh, keys::REFUND_CONFIRM) => "将在新标签页打开支付渠道退款页面，是否继续？",
            (Locale::Zh, keys::REFUND_INFO) => "请在支付渠道页面完成退款后回到此处确认。",
            (Locale::Zh, keys::REFUND_PROXY_CONFIRM) => "确定为该订单发起代理退款？",
            (Locale::Zh, keys::REFUND_PROXY_NOT_PROCESSED) => {
                "代理退款未处理，请手动退款后在此确认。"
            }
            (Locale::Zh, keys::REFUND_SUCCESS) => "退款成功",
            (Locale::Zh, keys::REFUND_VERIFY) => "支付渠道是否已完成退款？",
            (Locale::Zh, keys::VERIFY_SUCCESS_REFUNDED) => "支付渠道显示该订单已退款",
            (Locale::Zh, keys::VERIFY_INFO_PAID) => "支付渠道显示该订单仍为已支付",
            (Locale::Zh, keys::VERIFY_STATUS) => "渠道状态",
            (Locale::Zh, keys::CHECK_STATUS) => "查询退款状态",
            (Locale::Zh, keys::REFUND) => "退款",
            (Locale::Zh, keys::REFUND_PROXY) => "代理退款",
            (Locale::Zh, keys::MARK_REFUNDED) => "确认已退款",
            (Locale::Zh, keys::COMMON_ERROR) => "操作失败",

            _ => return None,
        };
        Some(text)
    }
}

impl TranslatorPort for CatalogTranslator {
    fn t(&self, key: &str) -> String {
        Self::lookup(self.locale, key)
            .or_else(|| Self::lookup(Locale::En, key))
            .unwrap_or(key)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("en_US"), Some(Locale::En));
        assert_eq!(Locale::parse("ZH-cn"), Some(Locale::Zh));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn test_translations() {
        assert_eq!(CatalogTranslator::new(Locale::En).t(keys::REFUND), "Refund");
        assert_eq!(CatalogTranslator::new(Locale::Zh).t(keys::REFUND), "退款");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let translator = CatalogTranslator::new(Locale::Zh);
        assert_eq!(translator.t("admin.orders.unknown"), "admin.orders.unknown");
    }

    #[test]
    fn test_every_key_translated() {
        let all = [
            keys::REFUND_CONFIRM,
            keys::REFUND_INFO,
            keys::REFUND_PROXY_CONFIRM,
            keys::REFUND_PROXY_NOT_PROCESSED,
            keys::REFUND_SUCCESS,
            keys::REFUND_VERIFY,
            keys::VERIFY_SUCCESS_REFUNDED,
            keys::VERIFY_INFO_PAID,
            keys::VERIFY_STATUS,
            keys::CHECK_STATUS,
            keys::REFUND,
            keys::REFUND_PROXY,
            keys::MARK_REFUNDED,
            keys::COMMON_ERROR,
        ];
        for locale in [Locale::En, Locale::Zh] {
            for key in all {
                assert!(
                    CatalogTranslator::lookup(locale, key).is_some(),
                    "{:?} missing {}",
                    locale,
                    key
                );
            }
        }
    }
}
