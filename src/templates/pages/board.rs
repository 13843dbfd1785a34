use crate::domain::board::{Board, BoardCard};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

fn board_link(query: &str, limit: usize) -> String {
    let qs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .append_pair("limit", &limit.to_string())
        .finish();
    format!("/board?{qs}")
}

fn card_markup(card: &BoardCard) -> Markup {
    html! {
        a class="board-card" href=(format!("/jobs/{}/edit", card.id)) {
            span class="avatar" { (card.avatar) }
            div {
                strong { (card.company) }
                p { (card.role) }
                @if let Some(salary) = &card.salary { p class="muted" { (salary) } }
                @if let Some(location) = &card.location { p class="muted" { (location) } }
                @match card.days_ago {
                    Some(0) => p class="muted" { "Applied today" },
                    Some(1) => p class="muted" { "Applied 1 day ago" },
                    Some(days) => p class="muted" { "Applied " (days) " days ago" },
                    None => {},
                }
            }
        }
    }
}

/// `step` is how many more cards per column "Show more" reveals.
pub fn board_page(board: &Board, step: usize) -> Markup {
    desktop_layout(
        "Board",
        NavItem::Board,
        html! {
            main class="container" {
                h1 { "Board" }

                form action="/board" method="get" class="filters" {
                    input type="search" name="q" value=(board.query) placeholder="Search company or role";
                    input type="hidden" name="limit" value=(board.show_limit);
                    button type="submit" { "Search" }
                    span class="muted" { (board.matched()) " matching" }
                }

                div class="board" {
                    @for column in &board.columns {
                        section class=(format!("board-column column-{}", column.status.as_str())) {
                            h3 { (column.title) " " span class="count" { (column.total) } }
                            @for card in &column.cards {
                                (card_markup(card))
                            }
                            @if column.hidden() > 0 {
                                p class="muted" { "+" (column.hidden()) " more" }
                            }
                        }
                    }
                }

                @if board.has_more() {
                    a class="btn" href=(board_link(&board.query, board.show_limit + step)) { "Show more" }
                    a class="btn" href=(board_link(&board.query, board.show_all_limit())) { "Show all" }
                }
            }
        },
    )
}
