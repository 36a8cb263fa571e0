use crate::attendance::{self, Band};

/// Internal assessment marks for one subject. Empty strings mean "not graded yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marks {
    pub assignment: String,
    pub internal1: String,
    pub internal2: String,
}

impl Marks {
    #[must_use]
    pub fn new(
        assignment: impl Into<String>,
        internal1: impl Into<String>,
        internal2: impl Into<String>,
    ) -> Self {
        Self {
            assignment: assignment.into(),
            internal1: internal1.into(),
            internal2: internal2.into(),
        }
    }

    /// Labelled display values, in card order.
    #[must_use]
    pub fn display(&self) -> [(&'static str, &str); 3] {
        [
            ("ASSG", mark_or_dash(&self.assignment)),
            ("INT 1", mark_or_dash(&self.internal1)),
            ("INT 2", mark_or_dash(&self.internal2)),
        ]
    }
}

/// Display value for a mark: the trimmed text, or `-` when blank.
#[must_use]
pub fn mark_or_dash(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { "-" } else { trimmed }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    /// Attendance as sent by the backend, e.g. `"82%"`.
    pub attendance: String,
    pub marks: Marks,
}

impl Subject {
    #[must_use]
    pub fn new(name: impl Into<String>, attendance: impl Into<String>, marks: Marks) -> Self {
        Self {
            name: name.into(),
            attendance: attendance.into(),
            marks,
        }
    }

    /// Parsed attendance, clamped to `[0, 100]`.
    #[must_use]
    pub fn attendance_percent(&self) -> f64 {
        attendance::parse_percent(&self.attendance)
    }

    #[must_use]
    pub fn band(&self) -> Band {
        Band::of(self.attendance_percent())
    }
}

/// The signed-in student's record, exactly as returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    roll_number: String,
    name: String,
    subjects: Vec<Subject>,
}

impl StudentRecord {
    #[must_use]
    pub fn new(
        roll_number: impl Into<String>,
        name: impl Into<String>,
        subjects: Vec<Subject>,
    ) -> Self {
        Self {
            roll_number: roll_number.into(),
            name: name.into(),
            subjects,
        }
    }

    #[must_use]
    pub fn roll_number(&self) -> &str {
        &self.roll_number
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subjects in backend response order.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn overall(&self) -> attendance::OverallAttendance {
        attendance::overall(&self.subjects)
    }
}
