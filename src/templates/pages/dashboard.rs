use crate::domain::insights::{Insights, Priority, Recommendation, Trend};
use crate::domain::weekly::WeeklySummary;
use crate::domain::{JobRecord, ViewClock};
use crate::templates::{card, desktop_layout, stat_card, status_badge, NavItem};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub insights: &'a Insights,
    pub weekly: &'a WeeklySummary,
    pub recommendations: &'a [Recommendation],
    pub recent: &'a [JobRecord],
    pub upcoming_interviews: usize,
    pub clock: &'a ViewClock,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let ins = vm.insights;
    let upcoming = format!("{} upcoming", vm.upcoming_interviews);
    desktop_layout(
        "Dashboard",
        NavItem::Dashboard,
        html! {
            main class="container" {
                h1 { "Dashboard" }

                section class="stats" {
                    (stat_card("Total applications", &ins.total.to_string(), None))
                    (stat_card("Interviewing", &ins.interviewing.to_string(), Some(upcoming.as_str())))
                    (stat_card("Offers", &ins.offers.to_string(), None))
                    (stat_card("Response rate", &format!("{}%", ins.response_rate),
                        Some(ins.response_label())))
                }

                (weekly_card(vm.weekly))
                (insights_card(ins))
                (recommendations_card(vm.recommendations))
                (recent_card(vm.recent, vm.clock))
            }
        },
    )
}

fn trend_text(trend: Trend, pct: i64) -> String {
    match trend {
        Trend::Up => format!("▲ {pct}% vs last week"),
        Trend::Down => format!("▼ {pct}% vs last week"),
        Trend::Stable => "No change vs last week".to_string(),
    }
}

pub fn weekly_card(weekly: &WeeklySummary) -> Markup {
    let peak = weekly.peak().max(1);
    card(
        "This week",
        html! {
            p {
                strong { (weekly.current_total) } " applications since "
                (weekly.week_start.format("%b %-d"))
                " (" (weekly.percentage_change) "% vs " (weekly.previous_total) " last week)"
            }
            @if !weekly.has_data() {
                p class="muted" { "No applications yet this week." }
            } @else {
                table class="weekly" {
                    thead { tr { th { "Day" } th { "This week" } th { "Last week" } } }
                    tbody {
                        @for bucket in &weekly.days {
                            tr {
                                td { (bucket.day) }
                                td {
                                    div class="bar" style=(format!("width: {}%", bucket.applications * 100 / peak)) {}
                                    (bucket.applications)
                                }
                                td {
                                    div class="bar bar-previous" style=(format!("width: {}%", bucket.previous * 100 / peak)) {}
                                    (bucket.previous)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn insights_card(ins: &Insights) -> Markup {
    card(
        "Insights",
        html! {
            ul class="insights" {
                li { "Success rate: " strong { (ins.success_rate) "%" } }
                li { "Interview rate: " strong { (ins.interview_rate) "%" } }
                li { "Rejected: " strong { (ins.rejected) } }
                li { "Last 7 days: " strong { (ins.recent_apps) } " (" (trend_text(ins.trend, ins.trend_percentage)) ")" }
                li { "Average per week: " strong { (ins.avg_apps_per_week) } }
                li {
                    "Days since first interview: "
                    @match ins.days_to_first_interview {
                        Some(days) => strong { (days) },
                        None => span class="muted" { "n/a" },
                    }
                }
            }
        },
    )
}

fn recommendations_card(recs: &[Recommendation]) -> Markup {
    card(
        "Recommendations",
        html! {
            @if recs.is_empty() {
                p class="muted" { "Nothing to flag. Keep it up." }
            } @else {
                ul class="recommendations" {
                    @for rec in recs {
                        li class=(if rec.priority == Priority::High { "priority-high" } else { "priority-medium" }) {
                            strong { (rec.title) }
                            p { (rec.description) }
                        }
                    }
                }
            }
        },
    )
}

fn recent_card(recent: &[JobRecord], clock: &ViewClock) -> Markup {
    card(
        "Recent activity",
        html! {
            @if recent.is_empty() {
                p class="muted" {
                    "No applications yet. "
                    a href="/jobs/new" { "Add one" } " or " a href="/import" { "import from LinkedIn" } "."
                }
            } @else {
                ul class="recent" {
                    @for job in recent {
                        li {
                            a href=(format!("/jobs/{}/edit", job.id)) { strong { (job.company) } }
                            " · " (job.role) " "
                            (status_badge(job))
                            " "
                            span class="muted" { (clock.local_date(&job.created_at).format("%Y-%m-%d")) }
                        }
                    }
                }
            }
        },
    )
}
