use doctor_cell::DoctorDirectory;

use crate::models::{BookingSelection, ConfirmationField, ConfirmationSummary};

pub const FIELD_DOCTOR: &str = "Doctor";
pub const FIELD_SPECIALTY: &str = "Specialty";
pub const FIELD_DATE: &str = "Date";
pub const FIELD_TIME: &str = "Time";
pub const FIELD_TYPE: &str = "Type";

/// Builds the review-step summary from a selection.
///
/// Ids are resolved to display names. Anything unset or unknown renders as
/// an empty value; assembling never fails.
pub struct ConfirmationAssembler;

impl ConfirmationAssembler {
    pub fn assemble(selection: &BookingSelection, directory: &DoctorDirectory) -> ConfirmationSummary {
        let doctor = selection
            .doctor_id
            .as_deref()
            .and_then(|id| directory.doctor(id))
            .map(|d| d.name.clone());

        let specialty = selection
            .specialty_id
            .as_deref()
            .and_then(|id| directory.specialty(id))
            .map(|s| s.display_name.clone());

        let fields = [
            (FIELD_DOCTOR, doctor),
            (FIELD_SPECIALTY, specialty),
            (FIELD_DATE, selection.date_label.clone()),
            (FIELD_TIME, selection.time_label.clone()),
            (FIELD_TYPE, Some(selection.visit_type.to_string())),
        ]
        .into_iter()
        .map(|(label, value)| ConfirmationField {
            label: label.to_string(),
            value: value.unwrap_or_default(),
        })
        .collect();

        ConfirmationSummary {
            fields,
            visit_type_label: selection.visit_type.display_label().to_string(),
            notes: selection.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisitType;

    #[test]
    fn empty_selection_renders_placeholders() {
        let summary = ConfirmationAssembler::assemble(&BookingSelection::default(), &DoctorDirectory::standard());

        let labels: Vec<&str> = summary.fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Doctor", "Specialty", "Date", "Time", "Type"]);
        assert_eq!(summary.value(FIELD_DOCTOR), Some(""));
        assert_eq!(summary.value(FIELD_SPECIALTY), Some(""));
        assert_eq!(summary.value(FIELD_TYPE), Some("video"));
    }

    #[test]
    fn unknown_ids_render_empty() {
        let selection = BookingSelection {
            specialty_id: Some("dentist".to_string()),
            doctor_id: Some("99".to_string()),
            visit_type: VisitType::InPerson,
            ..BookingSelection::default()
        };
        let summary = ConfirmationAssembler::assemble(&selection, &DoctorDirectory::standard());

        assert_eq!(summary.value(FIELD_DOCTOR), Some(""));
        assert_eq!(summary.value(FIELD_SPECIALTY), Some(""));
        assert_eq!(summary.value(FIELD_TYPE), Some("in-person"));
        assert_eq!(summary.visit_type_label, "In-Person");
    }
}
