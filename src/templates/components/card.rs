use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Single headline number with an optional caption underneath.
pub fn stat_card(label: &str, value: &str, hint: Option<&str>) -> Markup {
    html! {
        div class="card stat" {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
            @if let Some(hint) = hint {
                p class="stat-hint" { (hint) }
            }
        }
    }
}
