//! Device status — the compliance snapshot reported for a device.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Whether a device currently meets policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
}

/// Compliance status plus the metadata reported alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub status: ComplianceStatus,
    pub last_seen: Timestamp,
    pub os_version: String,
    /// Why the device is out of policy. Omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DeviceStatus {
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_non_compliant_status_with_reason() {
        let status: DeviceStatus = serde_json::from_value(serde_json::json!({
            "status": "non-compliant",
            "reason": "Pending OS Update",
            "last_seen": "2025-05-17T08:30:00Z",
            "os_version": "Android 14",
        }))
        .unwrap();

        assert!(!status.is_compliant());
        assert_eq!(status.reason.as_deref(), Some("Pending OS Update"));
    }

    #[test]
    fn should_omit_reason_when_absent() {
        let status = DeviceStatus {
            status: ComplianceStatus::Compliant,
            last_seen: "2025-05-17T10:00:00Z".parse().unwrap(),
            os_version: "Windows 11 Enterprise 23H2".to_string(),
            reason: None,
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "compliant",
                "last_seen": "2025-05-17T10:00:00Z",
                "os_version": "Windows 11 Enterprise 23H2",
            })
        );
    }

    #[test]
    fn should_reject_unknown_compliance_value() {
        let result = serde_json::from_str::<ComplianceStatus>("\"unknown\"");
        assert!(result.is_err());
    }
}
