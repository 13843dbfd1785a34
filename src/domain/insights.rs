// src/domain/insights.rs

use crate::domain::change::{fixed1, percent_of, percentage_change};
use crate::domain::clock::ViewClock;
use crate::domain::job::{JobRecord, JobStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: String,
    pub priority: Priority,
}

/// Headline numbers for the dashboard. Rates are preformatted with one
/// decimal, or `"0"` when there is nothing to divide by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub total: usize,
    pub interviewing: usize,
    pub offers: usize,
    pub rejected: usize,
    pub response_rate: String,
    pub success_rate: String,
    pub interview_rate: String,
    pub trend: Trend,
    /// Absolute week-over-week change in percent.
    pub trend_percentage: i64,
    pub recent_apps: usize,
    pub previous_apps: usize,
    pub avg_apps_per_week: String,
    pub days_to_first_interview: Option<i64>,
}

impl Insights {
    pub fn response_rate_value(&self) -> f64 {
        self.response_rate.parse().unwrap_or(0.0)
    }

    pub fn interview_rate_value(&self) -> f64 {
        self.interview_rate.parse().unwrap_or(0.0)
    }

    pub fn response_label(&self) -> &'static str {
        let rate = self.response_rate_value();
        if rate > 50.0 {
            "Excellent"
        } else if rate > 30.0 {
            "Good"
        } else {
            "Needs improvement"
        }
    }
}

pub fn calculate_insights(records: &[JobRecord], clock: &ViewClock) -> Insights {
    let total = records.len();
    let count = |s: JobStatus| records.iter().filter(|j| j.has_status(s)).count();
    let interviewing = count(JobStatus::Interviewing);
    let offers = count(JobStatus::Offer);
    let rejected = count(JobStatus::Rejected);

    let interview_rate = if interviewing == 0 {
        "0".to_string()
    } else {
        percent_of(interviewing, total)
    };

    let now = clock.now_utc();
    let week_ago = clock.ago(7);
    let two_weeks_ago = clock.ago(14);

    let recent_apps = records
        .iter()
        .filter(|j| j.created_at >= week_ago && j.created_at < now)
        .count();
    let previous_apps = records
        .iter()
        .filter(|j| j.created_at >= two_weeks_ago && j.created_at < week_ago)
        .count();

    let trend = if recent_apps > previous_apps {
        Trend::Up
    } else if recent_apps < previous_apps {
        Trend::Down
    } else {
        Trend::Stable
    };

    Insights {
        total,
        interviewing,
        offers,
        rejected,
        response_rate: percent_of(interviewing + offers + rejected, total),
        success_rate: percent_of(offers, total),
        interview_rate,
        trend,
        trend_percentage: percentage_change(previous_apps, recent_apps).abs(),
        recent_apps,
        previous_apps,
        avg_apps_per_week: avg_per_week(records, clock),
        days_to_first_interview: days_to_first_interview(records, clock),
    }
}

/// Total divided by whole weeks since the oldest record (at least one).
fn avg_per_week(records: &[JobRecord], clock: &ViewClock) -> String {
    let Some(oldest) = records.iter().map(|j| j.created_at).min() else {
        return "0".to_string();
    };
    let weeks = (clock.days_since(&oldest) / 7).max(1);
    fixed1(records.len() as f64 / weeks as f64)
}

fn days_to_first_interview(records: &[JobRecord], clock: &ViewClock) -> Option<i64> {
    records
        .iter()
        .filter(|j| j.has_status(JobStatus::Interviewing))
        .map(|j| j.created_at)
        .min()
        .map(|first| clock.days_since(&first))
}

/// Suggestions shown beside the headline numbers, high priority first.
pub fn recommendations(insights: &Insights) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if insights.total < 5 {
        out.push(Recommendation {
            title: "Increase Application Rate",
            description: format!(
                "Aim for 5-10 applications per week (current: {})",
                insights.avg_apps_per_week
            ),
            priority: Priority::High,
        });
    }

    if insights.interviewing == 0 && insights.total > 5 {
        out.push(Recommendation {
            title: "Optimize Your Resume",
            description: "Consider tailoring your resume for each application".to_string(),
            priority: Priority::High,
        });
    }

    if insights.response_rate_value() < 30.0 && insights.total > 3 {
        out.push(Recommendation {
            title: "Improve Response Rate",
            description: format!(
                "Current rate: {}% (industry avg: 30-40%)",
                insights.response_rate
            ),
            priority: Priority::Medium,
        });
    }

    if insights.days_to_first_interview.is_none() && insights.total > 10 {
        out.push(Recommendation {
            title: "Focus on Quality",
            description: "Consider applying to roles that closely match your experience"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    let interview_rate = insights.interview_rate_value();
    if interview_rate > 0.0 && interview_rate < 20.0 {
        out.push(Recommendation {
            title: "Improve Interview Skills",
            description: format!(
                "Interview rate: {}% (target: 20%+)",
                insights.interview_rate
            ),
            priority: Priority::High,
        });
    }

    if insights.trend == Trend::Down && insights.total > 0 {
        out.push(Recommendation {
            title: "Maintain Consistency",
            description: format!(
                "Applications decreased by {}% this week",
                insights.trend_percentage
            ),
            priority: Priority::High,
        });
    }

    out.sort_by_key(|r| r.priority);
    out
}
