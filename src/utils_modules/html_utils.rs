use crate::common::*;

#[doc = r#"
    사용자/웨어하우스 유래 문자열을 HTML 속성과 본문에 안전하게 삽입하기 위한 이스케이프 함수.

    # Arguments
    * `raw` - 이스케이프할 원본 문자열

    # Returns
    * `String` - `& < > " '` 가 엔티티로 치환된 문자열
"#]
pub fn escape_html(raw: &str) -> String {
    let mut escaped: String = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Aspirin 500mg"), "Aspirin 500mg");
    }
}
