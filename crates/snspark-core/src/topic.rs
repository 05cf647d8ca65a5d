//! SNS topic ARN decomposition
//!
//! Topic ARNs look like `arn:aws:sns:<region>:<account>:<topic_name>` and topic
//! names follow the `<env>-<severity>` convention, e.g. `production-alerts`.
//! Anything that does not fit degrades to empty strings.

/// A decomposed SNS topic ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicArn {
    raw: String,
    region: String,
    account_id: String,
    topic_name: String,
}

impl TopicArn {
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split(':').collect();
        let segment = |i: usize| segments.get(i).copied().unwrap_or_default().to_string();

        Self {
            raw: raw.to_string(),
            region: segment(3),
            account_id: segment(4),
            topic_name: segments.last().copied().unwrap_or_default().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Last colon-delimited segment
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Segment of the topic name before the first hyphen
    pub fn environment(&self) -> &str {
        self.topic_name.split('-').next().unwrap_or_default()
    }

    /// Segment of the topic name after the first hyphen ("alerts", "notices", ...)
    pub fn severity_category(&self) -> &str {
        self.topic_name.split('-').nth(1).unwrap_or_default()
    }
}

impl std::fmt::Display for TopicArn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
