//! Canned one-line descriptions for workbooks that have none.

/// A keyword rule: any keyword found in the lower-cased name selects the sentence.
struct KeywordRule {
    keywords: &'static [&'static str],
    sentence: &'static str,
}

/// Tested top-down; the first matching rule wins, so order is part of the output contract.
const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["hourly"],
        sentence: "Monitors hourly trends and real-time performance metrics.",
    },
    KeywordRule {
        keywords: &["daily"],
        sentence: "Tracks daily metrics and day-over-day performance changes.",
    },
    KeywordRule {
        keywords: &["alert"],
        sentence: "Automated alerting dashboard for proactive issue detection.",
    },
    KeywordRule {
        keywords: &["investigation", "analysis"],
        sentence: "Deep-dive analysis tool for investigating performance patterns.",
    },
    KeywordRule {
        keywords: &["historical", "seasonality"],
        sentence: "Historical trend analysis for understanding seasonal patterns and YoY changes.",
    },
    KeywordRule {
        keywords: &["revenue"],
        sentence: "Revenue tracking and financial performance monitoring.",
    },
    KeywordRule {
        keywords: &["triage"],
        sentence: "Triage dashboard for prioritizing and managing operational issues.",
    },
    KeywordRule {
        keywords: &["margin"],
        sentence: "Margin analysis for profitability and cost optimization insights.",
    },
    KeywordRule {
        keywords: &["health", "status"],
        sentence: "Health status overview for quick operational assessment.",
    },
    KeywordRule {
        keywords: &["jira", "roadmap"],
        sentence: "Project tracking dashboard for Jira tickets and roadmap progress.",
    },
    KeywordRule {
        keywords: &["constraint"],
        sentence: "Market constraints monitoring and capacity management.",
    },
    KeywordRule {
        keywords: &["user data"],
        sentence: "User data metrics and audience insights dashboard.",
    },
    KeywordRule {
        keywords: &["spend"],
        sentence: "Spend tracking and budget utilization analysis.",
    },
    KeywordRule {
        keywords: &["full data"],
        sentence: "Comprehensive data exploration with flexible filtering options.",
    },
    KeywordRule {
        keywords: &["trend"],
        sentence: "Trend analysis dashboard for tracking performance over time.",
    },
    KeywordRule {
        keywords: &["test", "playground"],
        sentence: "Development/test version for feature experimentation.",
    },
    KeywordRule {
        keywords: &["publisher"],
        sentence: "Publisher-focused performance metrics and analytics.",
    },
    KeywordRule {
        keywords: &["advertiser"],
        sentence: "Advertiser performance tracking and campaign analytics.",
    },
    KeywordRule { keywords: &["roi"], sentence: "ROI tracking and return on investment analysis." },
    KeywordRule {
        keywords: &["loss"],
        sentence: "Revenue loss tracking and recovery opportunity identification.",
    },
    KeywordRule {
        keywords: &["cpa", "cvr"],
        sentence: "CPA/CVR analysis for conversion optimization insights.",
    },
    KeywordRule {
        keywords: &["proactive"],
        sentence: "Proactive monitoring dashboard for early issue detection.",
    },
    KeywordRule {
        keywords: &["supply"],
        sentence: "Supply-side metrics and inventory management dashboard.",
    },
    KeywordRule {
        keywords: &["readiness"],
        sentence: "Readiness assessment and migration tracking dashboard.",
    },
];

/// Exact project-name fallbacks, used when no keyword matches.
const PROJECT_FALLBACKS: &[(&str, &str)] = &[
    ("ROC Protocol", "ROC Protocol operational dashboard for real-time monitoring."),
    ("Triage", "Triage tool for operational analysis and decision support."),
    ("ROC", "ROC team dashboard for business intelligence and reporting."),
];

/// Classify a workbook by name (and project as fallback) into a one-sentence description.
pub fn classify(name: &str, project: &str) -> String {
    let name_lower = name.to_lowercase();

    if let Some(rule) =
        KEYWORD_RULES.iter().find(|rule| rule.keywords.iter().any(|kw| name_lower.contains(kw)))
    {
        return rule.sentence.to_string();
    }

    PROJECT_FALLBACKS
        .iter()
        .find(|(known, _)| *known == project)
        .map(|(_, sentence)| sentence.to_string())
        .unwrap_or_else(|| format!("Analytics dashboard for {} insights and monitoring.", project))
}

/// Keep a non-blank existing description (trimmed), otherwise classify.
pub fn resolve(existing: Option<&str>, name: &str, project: &str) -> String {
    match existing.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => classify(name, project),
    }
}
