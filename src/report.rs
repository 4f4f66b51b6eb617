//! Structured reading of scanned ultrasound reports.
//!
//! OCR output of a report is read line by line. Each line is matched against a fixed
//! list of labels and the first label found decides which field the line fills, so
//! a line such as `Dr. A. Rao MBBS` is a doctor's name, never a qualification.

use serde::Serialize;

/// Patient block of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatientDetails {
    /// Patient name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Laboratory number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_no: Option<String>,
    /// Unique health identifier
    #[serde(rename = "UHID", skip_serializing_if = "Option::is_none")]
    pub uhid: Option<String>,
    /// Age as printed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Gender as printed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Referring or prescribing doctor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<String>,
}

/// Dates of the examination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestDetails {
    /// Order date as printed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    /// Report date as printed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
}

/// One organ's finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Free text following the organ label
    pub details: String,
}

/// Per-organ findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UltrasoundFindings {
    /// `LIVER:` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liver: Option<Finding>,
    /// `SPLEEN:` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spleen: Option<Finding>,
    /// `KIDNEYS:` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kidneys: Option<Finding>,
    /// `PROSTATE:` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prostate: Option<Finding>,
}

/// Signing doctor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorDetails {
    /// Full line carrying the `Dr.` title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full line carrying the degree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    /// Registration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
}

/// A report read from OCR text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Patient block
    pub patient_details: PatientDetails,
    /// Examination dates
    pub test_details: TestDetails,
    /// Organ findings
    pub ultrasound_findings: UltrasoundFindings,
    /// Signing doctor
    pub doctor_details: DoctorDetails,
    /// Impression paragraph
    pub impression: String,
    /// Trailing note
    pub remarks: String,
}

/// Text between the first and second occurrence of `key`, trimmed.
fn after(line: &str, key: &str) -> String {
    line.split(key).nth(1).unwrap_or("").trim().to_string()
}

fn finding(line: &str, key: &str) -> Option<Finding> {
    Some(Finding {
        details: after(line, key),
    })
}

/// Parse OCR text into a [`Report`].
pub fn parse_report(text: &str) -> Report {
    let mut report = Report::default();

    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        let patient = &mut report.patient_details;
        let findings = &mut report.ultrasound_findings;
        let doctor = &mut report.doctor_details;

        if line.contains("Patient Name") {
            patient.name = Some(after(line, "Patient Name"));
        } else if line.contains("Lab No") {
            patient.lab_no = Some(after(line, "Lab No"));
        } else if line.contains("UHID") {
            patient.uhid = Some(after(line, "UHID"));
        } else if line.contains("Age/Gender") {
            let rest = after(line, "Age/Gender");
            let (age, gender) = rest.split_once('/').unwrap_or((rest.as_str(), ""));
            patient.age = Some(age.trim().to_string());
            patient.gender = Some(gender.trim().to_string());
        } else if line.contains("Referred/Presc. By") {
            patient.referred_by = Some(after(line, "Referred/Presc. By"));
        } else if line.contains("Order Date") {
            report.test_details.order_date = Some(after(line, "Order Date"));
        } else if line.contains("Report Date") {
            report.test_details.report_date = Some(after(line, "Report Date"));
        } else if line.contains("LIVER:") {
            findings.liver = finding(line, "LIVER:");
        } else if line.contains("SPLEEN:") {
            findings.spleen = finding(line, "SPLEEN:");
        } else if line.contains("KIDNEYS:") {
            findings.kidneys = finding(line, "KIDNEYS:");
        } else if line.contains("PROSTATE:") {
            findings.prostate = finding(line, "PROSTATE:");
        } else if line.contains("IMPRESSION:") {
            report.impression = after(line, "IMPRESSION:");
        } else if line.contains("Dr.") {
            doctor.name = Some(line.to_string());
        } else if line.contains("MBBS") || line.contains("DNB") {
            doctor.qualification = Some(line.to_string());
        } else if line.contains("Reg. No") {
            doctor.registration_no = Some(after(line, "Reg. No"));
        } else if line.contains("Note:") {
            report.remarks = after(line, "Note:");
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
CITY DIAGNOSTICS
Patient Name  Ravi Kumar
Lab No  L-20931
UHID  UH778812
Age/Gender  54 Y / Male
Referred/Presc. By  Dr. S. Mehta
Order Date  12/03/2024
Report Date  13/03/2024

LIVER: Normal in size and echotexture.
SPLEEN: Normal.
KIDNEYS: Both kidneys normal in size.
PROSTATE: Mildly enlarged.
IMPRESSION: Grade I prostatomegaly.
Dr. Anita Rao
MBBS, DNB (Radiology)
Reg. No 44512
Note: Clinical correlation advised.
";

    #[test]
    fn test_parse_full_report() {
        let report = parse_report(SAMPLE);

        let p = &report.patient_details;
        assert_eq!(p.name.as_deref(), Some("Ravi Kumar"));
        assert_eq!(p.lab_no.as_deref(), Some("L-20931"));
        assert_eq!(p.uhid.as_deref(), Some("UH778812"));
        assert_eq!(p.age.as_deref(), Some("54 Y"));
        assert_eq!(p.gender.as_deref(), Some("Male"));
        assert_eq!(p.referred_by.as_deref(), Some("Dr. S. Mehta"));

        assert_eq!(report.test_details.order_date.as_deref(), Some("12/03/2024"));
        assert_eq!(report.test_details.report_date.as_deref(), Some("13/03/2024"));

        let f = &report.ultrasound_findings;
        assert_eq!(f.liver.as_ref().unwrap().details, "Normal in size and echotexture.");
        assert_eq!(f.spleen.as_ref().unwrap().details, "Normal.");
        assert_eq!(f.kidneys.as_ref().unwrap().details, "Both kidneys normal in size.");
        assert_eq!(f.prostate.as_ref().unwrap().details, "Mildly enlarged.");

        assert_eq!(report.impression, "Grade I prostatomegaly.");
        assert_eq!(report.doctor_details.name.as_deref(), Some("Dr. Anita Rao"));
        assert_eq!(
            report.doctor_details.qualification.as_deref(),
            Some("MBBS, DNB (Radiology)")
        );
        assert_eq!(report.doctor_details.registration_no.as_deref(), Some("44512"));
        assert_eq!(report.remarks, "Clinical correlation advised.");
    }

    #[test]
    fn test_first_matching_label_wins() {
        // "Referred/Presc. By" line also contains "Dr." but is claimed first
        let report = parse_report("Referred/Presc. By Dr. Mehta");
        assert_eq!(report.patient_details.referred_by.as_deref(), Some("Dr. Mehta"));
        assert!(report.doctor_details.name.is_none());

        // a doctor line carrying a degree is still the name
        let report = parse_report("Dr. Anita Rao MBBS");
        assert_eq!(report.doctor_details.name.as_deref(), Some("Dr. Anita Rao MBBS"));
        assert!(report.doctor_details.qualification.is_none());
    }

    #[test]
    fn test_later_lines_overwrite() {
        let report = parse_report("IMPRESSION: first\nIMPRESSION: second");
        assert_eq!(report.impression, "second");
    }

    #[test]
    fn test_age_without_gender() {
        let report = parse_report("Age/Gender 61");
        assert_eq!(report.patient_details.age.as_deref(), Some("61"));
        assert_eq!(report.patient_details.gender.as_deref(), Some(""));
    }

    #[test]
    fn test_unlabelled_text() {
        let report = parse_report("Hello world\n\n   \nanother line\n");
        assert_eq!(report, Report::default());
    }

    #[test]
    fn test_json_omits_unseen_fields() {
        let report = parse_report("UHID 42\nNote: fasting");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["patient_details"], serde_json::json!({ "UHID": "42" }));
        assert_eq!(json["test_details"], serde_json::json!({}));
        assert_eq!(json["ultrasound_findings"], serde_json::json!({}));
        assert_eq!(json["doctor_details"], serde_json::json!({}));
        assert_eq!(json["impression"], "");
        assert_eq!(json["remarks"], "fasting");
    }

    #[test]
    fn test_finding_serializes_with_details_key() {
        let report = parse_report("LIVER: fatty");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ultrasound_findings"]["liver"]["details"], "fatty");
    }
}
