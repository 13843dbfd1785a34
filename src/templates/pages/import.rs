use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup, PreEscaped};

/// Outcome shown after an upload.
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

pub fn import_page(summary: Option<&ImportSummary>) -> Markup {
    desktop_layout(
        "Import",
        NavItem::Import,
        html! {
            main class="container" {
                h1 { "Import from LinkedIn" }

                @if let Some(s) = summary {
                    p class="import-result" role="status" {
                        "Imported " strong { (s.imported) } " applications"
                        @if s.skipped > 0 { ", skipped " (s.skipped) " rows without a company or title" }
                        ". " a href="/applications" { "View applications" }
                    }
                }

                p {
                    "Upload the ZIP archive from LinkedIn's "
                    em { "Get a copy of your data" }
                    " page, or the Applied_Jobs.csv file inside it. Every row is added with status Applied."
                }

                form id="import-form" {
                    input type="file" id="import-file" accept=".zip,.csv" required;
                    button type="submit" { "Import" }
                }
                p id="import-status" class="muted" {}

                // The body is posted raw; the server sniffs ZIP vs CSV.
                script {
                    (PreEscaped(r#"
                    document.getElementById('import-form').addEventListener('submit', async (e) => {
                      e.preventDefault();
                      const file = document.getElementById('import-file').files[0];
                      if (!file) return;
                      const status = document.getElementById('import-status');
                      status.textContent = 'Importing…';
                      try {
                        const resp = await fetch('/import', { method: 'POST', body: file });
                        // Success and error pages are both full HTML documents.
                        document.open();
                        document.write(await resp.text());
                        document.close();
                      } catch (err) {
                        status.textContent = 'Import failed: ' + err.message;
                      }
                    });
                    "#))
                }
            }
        },
    )
}
