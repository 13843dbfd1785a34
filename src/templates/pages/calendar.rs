use crate::domain::calendar::{
    next_month, previous_month, CalendarGrid, EventKind, WEEKDAY_HEADERS,
};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

fn month_link(year: i32, month: u32) -> String {
    format!("/calendar?year={year}&month={month}")
}

pub fn calendar_page(grid: &CalendarGrid, upcoming_interviews: usize) -> Markup {
    let (prev_y, prev_m) = previous_month(grid.year, grid.month);
    let (next_y, next_m) = next_month(grid.year, grid.month);

    desktop_layout(
        "Calendar",
        NavItem::Calendar,
        html! {
            main class="container" {
                div class="calendar-header" {
                    a href=(month_link(prev_y, prev_m)) { "‹ Prev" }
                    h1 { (grid.title()) }
                    a href=(month_link(next_y, next_m)) { "Next ›" }
                    a href="/calendar" class="btn" { "Today" }
                }
                p class="muted" {
                    (grid.event_count(EventKind::Interview)) " interviews and "
                    (grid.event_count(EventKind::Applied)) " applications shown, "
                    (upcoming_interviews) " upcoming interviews"
                }

                table class="calendar" {
                    thead {
                        tr { @for day in WEEKDAY_HEADERS { th { (day) } } }
                    }
                    tbody {
                        @for week in grid.weeks() {
                            tr {
                                @for day in week {
                                    td.day.other-month[!day.is_current_month].today[day.is_today] {
                                        span class="day-number" { (day.date.format("%-d")) }
                                        @for event in &day.events {
                                            a href=(format!("/jobs/{}/edit", event.job_id))
                                              class=(match event.kind {
                                                  EventKind::Interview => "event event-interview",
                                                  EventKind::Applied => "event event-applied",
                                              })
                                              title=[event.notes.as_deref()] {
                                                (event.title) " · " (event.company)
                                            }
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
