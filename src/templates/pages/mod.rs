pub mod applications;
pub mod board;
pub mod calendar;
pub mod dashboard;
pub mod import;
pub mod job_form;

pub use applications::{applications_page, ApplicationsVm};
pub use board::board_page;
pub use calendar::calendar_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use import::{import_page, ImportSummary};
pub use job_form::{job_form_page, JobFormVm};
