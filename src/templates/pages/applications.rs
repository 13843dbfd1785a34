use crate::domain::table::{StatusCounts, StatusFilter};
use crate::domain::{JobRecord, JobStatus, ViewClock};
use crate::templates::{desktop_layout, status_badge, NavItem};
use maud::{html, Markup};

pub struct ApplicationsVm<'a> {
    pub query: &'a str,
    pub filter: StatusFilter,
    pub counts: StatusCounts,
    pub rows: &'a [&'a JobRecord],
    pub clock: &'a ViewClock,
}

fn link(path: &str, query: &str, filter: StatusFilter) -> String {
    let qs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .append_pair("status", filter.as_str())
        .finish();
    format!("{path}?{qs}")
}

fn date_cell(ts: Option<&chrono::DateTime<chrono::Utc>>, clock: &ViewClock) -> String {
    ts.map(|t| clock.local_date(t).format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn applications_page(vm: &ApplicationsVm) -> Markup {
    let tabs: Vec<(StatusFilter, &str, usize)> = std::iter::once((StatusFilter::All, "All", vm.counts.all))
        .chain(
            JobStatus::ALL
                .iter()
                .map(|&s| (StatusFilter::Only(s), s.title(), vm.counts.get(s))),
        )
        .collect();

    desktop_layout(
        "Applications",
        NavItem::Applications,
        html! {
            main class="container" {
                h1 { "Applications" }

                form action="/applications" method="get" class="filters" {
                    input type="search" name="q" value=(vm.query) placeholder="Search company or role";
                    select name="status" {
                        @for (filter, title, _) in &tabs {
                            option value=(filter.as_str()) selected[*filter == vm.filter] { (title) }
                        }
                    }
                    button type="submit" { "Filter" }
                    a href=(link("/applications/export", vm.query, vm.filter)) class="btn" { "Export to Excel" }
                }

                nav class="status-tabs" {
                    @for (filter, title, count) in &tabs {
                        a href=(link("/applications", vm.query, *filter))
                          class=[(*filter == vm.filter).then_some("active")] {
                            (title) " (" (count) ")"
                        }
                    }
                }

                @if vm.rows.is_empty() {
                    p class="muted" { "No applications match." }
                } @else {
                    table class="applications" {
                        thead {
                            tr {
                                th { "Company" } th { "Role" } th { "Status" } th { "Location" }
                                th { "Salary" } th { "Applied" } th { "Interview" } th {}
                            }
                        }
                        tbody {
                            @for job in vm.rows {
                                tr {
                                    td {
                                        @if let Some(url) = &job.url {
                                            a href=(url) target="_blank" rel="noopener" { (job.company) }
                                        } @else {
                                            (job.company)
                                        }
                                    }
                                    td { (job.role) }
                                    td { (status_badge(job)) }
                                    td { (job.location.as_deref().unwrap_or("")) }
                                    td { (job.salary.as_deref().unwrap_or("")) }
                                    td { (date_cell(job.applied_date.as_ref(), vm.clock)) }
                                    td { (date_cell(job.interview_date.as_ref(), vm.clock)) }
                                    td class="actions" {
                                        a href=(format!("/jobs/{}/edit", job.id)) { "Edit" }
                                        form action=(format!("/jobs/{}/delete", job.id)) method="post"
                                             onsubmit="return confirm('Delete this application?')" {
                                            button type="submit" class="link danger" { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
