use crate::domain::ExternalForm;
use maud::{html, Markup, DOCTYPE};

/// 生成自动提交的HTML页面，前端在新标签页打开即完成表单提交
pub fn build_auto_submit_page(form: &ExternalForm) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Redirecting…" }
            }
            body onload="document.forms[0].submit()" {
                form method=(form.method) action=(form.action) {
                    @for (name, value) in form.fields.fields() {
                        input type="hidden" name=(name) value=(value);
                    }
                    noscript {
                        button type="submit" { "Continue" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RefundParams;

    #[test]
    fn test_page_contains_exactly_the_fields() {
        let params: RefundParams = [("amount", "100"), ("orderId", "O1")].into_iter().collect();
        let form = ExternalForm::post("https://credit.linux.do/epay/api.php", params);

        let page = build_auto_submit_page(&form).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"method="POST""#));
        assert!(page.contains(r#"action="https://credit.linux.do/epay/api.php""#));
        assert!(page.contains(r#"<input type="hidden" name="amount" value="100">"#));
        assert!(page.contains(r#"<input type="hidden" name="orderId" value="O1">"#));
        assert_eq!(page.matches("<input").count(), 2);
        assert!(!page.contains("target="));
    }

    #[test]
    fn test_values_are_escaped() {
        let params: RefundParams = [("sign", r#"a"><script>"#)].into_iter().collect();
        let form = ExternalForm::post("https://pay.test/?a=1&b=2", params);

        let page = build_auto_submit_page(&form).into_string();

        assert!(page.contains(r#"value="a&quot;&gt;&lt;script&gt;""#));
        assert!(page.contains("a=1&amp;b=2"));
        assert!(!page.contains("<script>"));
    }
}
