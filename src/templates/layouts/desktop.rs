use maud::{html, Markup, DOCTYPE};

/// Top-level sections shown in the header nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Applications,
    Board,
    Calendar,
    Import,
}

impl NavItem {
    const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Applications,
        NavItem::Board,
        NavItem::Calendar,
        NavItem::Import,
    ];

    fn href(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/dashboard",
            NavItem::Applications => "/applications",
            NavItem::Board => "/board",
            NavItem::Calendar => "/calendar",
            NavItem::Import => "/import",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Applications => "Applications",
            NavItem::Board => "Board",
            NavItem::Calendar => "Calendar",
            NavItem::Import => "Import",
        }
    }
}

pub fn desktop_layout(title: &str, active: NavItem, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Job Tracker" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-briefcase"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M3 9a2 2 0 0 1 2 -2h14a2 2 0 0 1 2 2v9a2 2 0 0 1 -2 2h-14a2 2 0 0 1 -2 -2l0 -9" {}
                      path d="M8 7v-2a2 2 0 0 1 2 -2h4a2 2 0 0 1 2 2v2" {}
                  }
                  h3 { "Job Tracker" }
                  nav {
                      ul {
                          @for item in NavItem::ALL {
                              li {
                                  a href=(item.href()) class=[(item == active).then_some("active")] {
                                      (item.label())
                                  }
                              }
                          }
                      }
                  }

                  a href="/jobs/new" class="text-base font-medium hover:text-blue-600" { "+ Add job" }
              }
                (content)
            }
        }
    }
}
