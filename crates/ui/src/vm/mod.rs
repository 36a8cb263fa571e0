mod dashboard_vm;
mod login_vm;

pub use dashboard_vm::{
    DashboardVm, MarkVm, OverallVm, RingVm, SubjectCardVm, map_dashboard, map_subject_card,
};
pub use login_vm::{LoginFormVm, ModeTabVm, map_login_form};
