use crate::domain::JobRecord;
use maud::{html, Markup};

/// Colored pill for a job's status. Unknown stored values get a neutral pill.
pub fn status_badge(job: &JobRecord) -> Markup {
    let class = match job.known_status() {
        Some(s) => format!("badge badge-{}", s.as_str()),
        None => "badge badge-unknown".to_string(),
    };
    html! {
        span class=(class) { (job.status_label()) }
    }
}
