//! Tool request body.

use serde::Deserialize;

/// JSON body accepted by every tool route. Which fields are required depends
/// on the tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolRequest {
    pub url: Option<String>,
    pub domain: Option<String>,
    pub keyword: Option<String>,
    /// Alternate name for `keyword` on the meta generator.
    pub target_keyword: Option<String>,
    pub email: Option<String>,
}

impl ToolRequest {
    /// `keyword`, falling back to `target_keyword` when absent or blank.
    pub fn meta_keyword(&self) -> Option<&str> {
        non_blank(self.keyword.as_deref()).or_else(|| non_blank(self.target_keyword.as_deref()))
    }

    /// The email to capture, if one was supplied.
    pub fn lead_email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_keyword_prefers_keyword() {
        let req: ToolRequest =
            serde_json::from_str(r#"{"keyword":"a","target_keyword":"b"}"#).expect("parses");
        assert_eq!(req.meta_keyword(), Some("a"));
    }

    #[test]
    fn test_meta_keyword_falls_back_to_target_keyword() {
        let req: ToolRequest =
            serde_json::from_str(r#"{"keyword":"  ","target_keyword":" rust "}"#).expect("parses");
        assert_eq!(req.meta_keyword(), Some("rust"));
        assert_eq!(ToolRequest::default().meta_keyword(), None);
    }

    #[test]
    fn test_blank_email_is_absent() {
        let req: ToolRequest = serde_json::from_str(r#"{"email":""}"#).expect("parses");
        assert_eq!(req.lead_email(), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req: ToolRequest =
            serde_json::from_str(r#"{"url":"https://x.io","extra":1}"#).expect("parses");
        assert_eq!(req.url.as_deref(), Some("https://x.io"));
    }
}
