//! News article entity and write payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validate::{require_text, require_text_if_present, Validate};

/// A news article as stored by the backend. `url` points at the external
/// publication; `content` is only present for long-form articles hosted
/// locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: DbId,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Publication date.
    pub date: NaiveDate,
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Payload for `POST /api/v1/news`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNewsArticle {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub date: NaiveDate,
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Validate for NewNewsArticle {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("summary", &self.summary)?;
        require_text("url", &self.url)
    }
}

/// Partial payload for `PUT /api/v1/news/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsArticlePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        rename = "imageUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Validate for NewsArticlePatch {
    fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("title", self.title.as_deref())?;
        require_text_if_present("summary", self.summary.as_deref())?;
        require_text_if_present("url", self.url.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_deserializes_date_only() {
        let json = serde_json::json!({
            "id": 5,
            "title": "Booster 12 static fire",
            "summary": "Full-duration test at the pad.",
            "date": "2026-07-21",
            "url": "https://news.example/booster-12",
            "imageUrl": "https://img.example/b12.jpg",
        });
        let article: NewsArticle = serde_json::from_value(json).unwrap();
        assert_eq!(article.date.to_string(), "2026-07-21");
        assert!(article.content.is_none());
    }

    #[test]
    fn new_article_requires_title_summary_url() {
        let input = NewNewsArticle {
            title: "t".to_string(),
            summary: String::new(),
            content: None,
            date: NaiveDate::from_ymd_opt(2026, 7, 21).unwrap(),
            url: "https://news.example/x".to_string(),
            image_url: String::new(),
        };
        assert!(input.validate().is_err());
    }
}
