use crate::domain::{JobRecord, JobStatus, ViewClock};
use crate::templates::{desktop_layout, NavItem};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

/// Raw form values, echoed back when validation fails.
#[derive(Debug, Clone, Default)]
pub struct JobFormVm {
    /// `None` while creating.
    pub id: Option<String>,
    pub company: String,
    pub role: String,
    pub status: String,
    pub location: String,
    pub salary: String,
    pub url: String,
    pub notes: String,
    pub applied_date: String,
    pub interview_date: String,
    pub error: Option<String>,
}

/// `datetime-local` input value in the clock's offset.
fn input_value(ts: Option<DateTime<Utc>>, clock: &ViewClock) -> String {
    ts.map(|t| {
        t.with_timezone(&clock.offset())
            .format("%Y-%m-%dT%H:%M")
            .to_string()
    })
    .unwrap_or_default()
}

impl JobFormVm {
    pub fn blank() -> Self {
        Self {
            status: JobStatus::ToApply.as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn from_record(job: &JobRecord, clock: &ViewClock) -> Self {
        Self {
            id: Some(job.id.clone()),
            company: job.company.clone(),
            role: job.role.clone(),
            status: job.status.clone(),
            location: job.location.clone().unwrap_or_default(),
            salary: job.salary.clone().unwrap_or_default(),
            url: job.url.clone().unwrap_or_default(),
            notes: job.notes.clone().unwrap_or_default(),
            applied_date: input_value(job.applied_date, clock),
            interview_date: input_value(job.interview_date, clock),
            error: None,
        }
    }
}

pub fn job_form_page(vm: &JobFormVm) -> Markup {
    let (heading, action) = match &vm.id {
        Some(id) => ("Edit application", format!("/jobs/{id}")),
        None => ("New application", "/jobs".to_string()),
    };

    desktop_layout(
        heading,
        NavItem::Applications,
        html! {
            main class="container" {
                h1 { (heading) }

                @if let Some(err) = &vm.error {
                    p class="form-error" role="alert" { (err) }
                }

                form action=(action) method="post" class="job-form" {
                    label { "Company" input type="text" name="company" value=(vm.company) required; }
                    label { "Role" input type="text" name="role" value=(vm.role) required; }
                    label {
                        "Status"
                        select name="status" {
                            @for status in JobStatus::ALL {
                                option value=(status.as_str()) selected[vm.status == status.as_str()] { (status.title()) }
                            }
                        }
                    }
                    label { "Location" input type="text" name="location" value=(vm.location); }
                    label { "Salary" input type="text" name="salary" value=(vm.salary); }
                    label { "Job URL" input type="url" name="url" value=(vm.url) placeholder="https://"; }
                    label { "Applied" input type="datetime-local" name="applied_date" value=(vm.applied_date); }
                    label { "Interview" input type="datetime-local" name="interview_date" value=(vm.interview_date); }
                    label { "Notes" textarea name="notes" rows="4" { (vm.notes) } }
                    button type="submit" { "Save" }
                    a href="/applications" { "Cancel" }
                }

                @if let Some(id) = &vm.id {
                    form action=(format!("/jobs/{id}/delete")) method="post"
                         onsubmit="return confirm('Delete this application?')" {
                        button type="submit" class="danger" { "Delete application" }
                    }
                }
            }
        },
    )
}
