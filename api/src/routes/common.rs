//! Reference projections shared across route groups.
//!
//! When an issue (or a student's selections) is returned, the referenced
//! documents are expanded to these limited summaries rather than the full
//! records.

use db::models::{lecturer, student};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub school_id: String,
}

impl From<student::Model> for StudentSummary {
    fn from(student: student::Model) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            school_id: student.school_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LecturerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
}

impl From<lecturer::Model> for LecturerSummary {
    fn from(lecturer: lecturer::Model) -> Self {
        Self {
            id: lecturer.id,
            name: lecturer.name,
            email: lecturer.email,
            course: lecturer.course,
        }
    }
}

/// The party recorded on a resolved issue; projects a lecturer to name/email.
#[derive(Debug, Clone, Serialize)]
pub struct ResolverSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<lecturer::Model> for ResolverSummary {
    fn from(lecturer: lecturer::Model) -> Self {
        Self {
            id: lecturer.id,
            name: lecturer.name,
            email: lecturer.email,
        }
    }
}
