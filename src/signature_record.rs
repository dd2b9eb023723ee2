use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Date format used on the stamp (`dd.MM.yyyy HH:mm:ss`).
pub const STAMP_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
/// All stamp times are shown in Moscow time.
pub const STAMP_TIME_ZONE: &str = "GMT +3";

/// The certificate that was used to create the signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateInfo {
    pub organization_name: String,
    pub first_name: String,
    pub surname: String,
    /// Patronymic.
    pub last_name: String,
    pub serial_number: String,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
}

/// The text shown on one signature stamp.
/// Every field is already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    organization_name: String,
    employee_full_name: String,
    certificate_serial: String,
    validity_period_text: String,
    signing_time_text: String,
    signature_timestamp_text: String,
}

impl SignatureRecord {
    pub fn new(
        certificate: &CertificateInfo,
        signing_time: Option<NaiveDateTime>,
        signature_timestamp: Option<NaiveDateTime>,
    ) -> Self {
        SignatureRecord {
            organization_name: certificate.organization_name.clone(),
            employee_full_name: format!(
                "{} {} {}",
                certificate.surname, certificate.first_name, certificate.last_name
            ),
            certificate_serial: certificate.serial_number.clone(),
            validity_period_text: format!(
                "{} - {} {}",
                certificate.valid_from.format(STAMP_DATE_FORMAT),
                certificate.valid_to.format(STAMP_DATE_FORMAT),
                STAMP_TIME_ZONE
            ),
            signing_time_text: format_optional_time(signing_time),
            signature_timestamp_text: format_optional_time(signature_timestamp),
        }
    }

    /// Build a record from text that is already formatted.
    pub fn from_parts(
        organization_name: &str,
        employee_full_name: &str,
        certificate_serial: &str,
        validity_period_text: &str,
        signing_time_text: &str,
        signature_timestamp_text: &str,
    ) -> Self {
        SignatureRecord {
            organization_name: organization_name.to_owned(),
            employee_full_name: employee_full_name.to_owned(),
            certificate_serial: certificate_serial.to_owned(),
            validity_period_text: validity_period_text.to_owned(),
            signing_time_text: signing_time_text.to_owned(),
            signature_timestamp_text: signature_timestamp_text.to_owned(),
        }
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn employee_full_name(&self) -> &str {
        &self.employee_full_name
    }

    pub fn certificate_serial(&self) -> &str {
        &self.certificate_serial
    }

    pub fn validity_period_text(&self) -> &str {
        &self.validity_period_text
    }

    /// Empty when the signing time is unknown.
    pub fn signing_time_text(&self) -> &str {
        &self.signing_time_text
    }

    /// Empty when the signature was not certified by a time stamp.
    pub fn signature_timestamp_text(&self) -> &str {
        &self.signature_timestamp_text
    }
}

fn format_optional_time(time: Option<NaiveDateTime>) -> String {
    time.map(|time| format!("{} {}", time.format(STAMP_DATE_FORMAT), STAMP_TIME_ZONE))
        .unwrap_or_default()
}
