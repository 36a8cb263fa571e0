use portal_core::attendance::format_percent;
use portal_core::{Band, RingSpec, StudentRecord, Subject};

/// Pre-computed SVG values for one progress ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingVm {
    pub size: f64,
    pub center: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    pub dash_offset: f64,
    pub label: String,
    pub band_class: &'static str,
}

impl RingVm {
    #[must_use]
    pub fn new(ring: RingSpec, percent: f64, label: String, band: Band) -> Self {
        let geometry = ring.geometry(percent);
        Self {
            size: ring.size,
            center: ring.center(),
            radius: geometry.radius,
            stroke_width: ring.stroke_width,
            circumference: geometry.circumference,
            dash_offset: geometry.dash_offset,
            label,
            band_class: band.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectCardVm {
    /// Position in the backend's subject list; stable render key.
    pub key: usize,
    pub name: String,
    pub ring: RingVm,
    pub marks: Vec<MarkVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverallVm {
    pub label: String,
    pub band_class: &'static str,
    pub standing_label: &'static str,
    pub standing_icon: &'static str,
    pub ring: RingVm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub name: String,
    pub roll_number: String,
    pub overall: OverallVm,
    pub subjects: Vec<SubjectCardVm>,
}

/// Derive every dashboard value from the record. Nothing is cached between renders.
#[must_use]
pub fn map_dashboard(student: &StudentRecord) -> DashboardVm {
    let ring = RingSpec::default();
    let overall = student.overall();

    DashboardVm {
        name: student.name().to_owned(),
        roll_number: student.roll_number().to_owned(),
        overall: OverallVm {
            band_class: overall.band.as_str(),
            standing_label: overall.standing.label(),
            standing_icon: overall.standing.icon(),
            ring: RingVm::new(ring, overall.value, overall.label.clone(), overall.band),
            label: overall.label,
        },
        subjects: student
            .subjects()
            .iter()
            .enumerate()
            .map(|(key, subject)| map_subject_card(key, subject, ring))
            .collect(),
    }
}

#[must_use]
pub fn map_subject_card(key: usize, subject: &Subject, ring: RingSpec) -> SubjectCardVm {
    let percent = subject.attendance_percent();
    SubjectCardVm {
        key,
        name: subject.name.clone(),
        ring: RingVm::new(ring, percent, format_percent(percent), subject.band()),
        marks: subject
            .marks
            .display()
            .into_iter()
            .map(|(label, value)| MarkVm {
                label,
                value: value.to_owned(),
            })
            .collect(),
    }
}
