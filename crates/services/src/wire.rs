//! Request query and response body shapes for the portal backend.

use portal_core::{AuthMode, AuthRequest, BackendReply, Marks, StudentRecord, Subject};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::ContractRevision;

/// Query string for `GET <api-url>?action=..&roll=..`.
#[derive(Debug, Serialize)]
pub(crate) struct AuthQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<AuthMode>,
    roll: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pass: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl<'a> AuthQuery<'a> {
    pub(crate) fn new(request: &'a AuthRequest, contract: ContractRevision) -> Self {
        match contract {
            ContractRevision::Current => Self {
                action: Some(request.mode()),
                roll: request.roll_number(),
                pass: request.password(),
                email: request.email(),
            },
            ContractRevision::Legacy => Self {
                action: None,
                roll: request.roll_number(),
                pass: request.password(),
                email: None,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    found: Option<bool>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    error: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    message: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    roll_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    name: Option<String>,
    #[serde(default)]
    subjects: Option<Vec<SubjectDto>>,
}

#[derive(Debug, Deserialize)]
struct SubjectDto {
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    attendance: String,
    #[serde(default)]
    marks: Option<MarksDto>,
}

#[derive(Debug, Default, Deserialize)]
struct MarksDto {
    #[serde(default, deserialize_with = "lenient_string")]
    assg: String,
    #[serde(default, deserialize_with = "lenient_string")]
    int1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    int2: String,
}

impl AuthResponse {
    /// Interpret the body for the request that produced it.
    pub(crate) fn into_reply(self, request: &AuthRequest, contract: ContractRevision) -> BackendReply {
        let error = self.error.filter(|text| !text.trim().is_empty());
        let succeeded = match contract {
            ContractRevision::Current => self.success.unwrap_or(false),
            ContractRevision::Legacy => self.found.unwrap_or(false) && error.is_none(),
        };

        if !succeeded {
            return BackendReply::Rejected { error };
        }

        match request.mode() {
            AuthMode::Login => {
                let subjects = self
                    .subjects
                    .unwrap_or_default()
                    .into_iter()
                    .map(SubjectDto::into_subject)
                    .collect();
                let roll_number = self
                    .roll_no
                    .filter(|roll| !roll.trim().is_empty())
                    .unwrap_or_else(|| request.roll_number().to_owned());
                BackendReply::LoggedIn(StudentRecord::new(
                    roll_number,
                    self.name.unwrap_or_default(),
                    subjects,
                ))
            }
            AuthMode::Register | AuthMode::Forgot => BackendReply::Accepted {
                message: self.message,
            },
        }
    }
}

impl SubjectDto {
    fn into_subject(self) -> Subject {
        let marks = self.marks.unwrap_or_default();
        Subject::new(
            self.name,
            self.attendance,
            Marks::new(marks.assg, marks.int1, marks.int2),
        )
    }
}

// Apps Script cells may serialize as strings, numbers or null.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::Credentials;

    fn login_request() -> AuthRequest {
        Credentials::new("141730", "pw")
            .validate(AuthMode::Login)
            .unwrap()
    }

    fn parse(body: &str) -> AuthResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn current_login_success_builds_record() {
        let body = r#"{"success":true,"rollNo":"141730","name":"Asha","subjects":[
            {"name":"Maths","attendance":"82%","marks":{"assg":"9","int1":"18","int2":""}}]}"#;
        let reply = parse(body).into_reply(&login_request(), ContractRevision::Current);

        let BackendReply::LoggedIn(student) = reply else {
            panic!("expected login, got {reply:?}");
        };
        assert_eq!(student.roll_number(), "141730");
        assert_eq!(student.name(), "Asha");
        assert_eq!(student.subjects().len(), 1);
        assert_eq!(student.subjects()[0].marks, Marks::new("9", "18", ""));
    }

    #[test]
    fn numeric_and_null_cells_are_accepted() {
        let body = r#"{"success":true,"rollNo":141730,"name":"Asha","subjects":[
            {"name":"Maths","attendance":82,"marks":{"assg":9,"int1":null}}]}"#;
        let reply = parse(body).into_reply(&login_request(), ContractRevision::Current);

        let BackendReply::LoggedIn(student) = reply else {
            panic!("expected login, got {reply:?}");
        };
        assert_eq!(student.roll_number(), "141730");
        let maths = &student.subjects()[0];
        assert_eq!(maths.attendance, "82");
        assert_eq!(maths.marks, Marks::new("9", "", ""));
    }

    #[test]
    fn current_failure_carries_error() {
        let reply = parse(r#"{"success":false,"error":"Invalid credentials"}"#)
            .into_reply(&login_request(), ContractRevision::Current);
        assert_eq!(
            reply,
            BackendReply::Rejected {
                error: Some("Invalid credentials".into())
            }
        );
    }

    #[test]
    fn current_contract_ignores_found_flag() {
        let reply = parse(r#"{"found":true,"name":"Asha"}"#)
            .into_reply(&login_request(), ContractRevision::Current);
        assert_eq!(reply, BackendReply::Rejected { error: None });
    }

    #[test]
    fn legacy_contract_reads_found_and_error() {
        let ok = parse(r#"{"found":true,"rollNo":"141730","name":"Asha","subjects":[]}"#)
            .into_reply(&login_request(), ContractRevision::Legacy);
        assert!(matches!(ok, BackendReply::LoggedIn(_)));

        let errored = parse(r#"{"found":true,"error":"sheet locked"}"#)
            .into_reply(&login_request(), ContractRevision::Legacy);
        assert_eq!(
            errored,
            BackendReply::Rejected {
                error: Some("sheet locked".into())
            }
        );
    }

    #[test]
    fn register_success_carries_message() {
        let mut creds = Credentials::new("141730", "pw");
        creds.confirm_password = "pw".into();
        let request = creds.validate(AuthMode::Register).unwrap();

        let reply = parse(r#"{"success":true,"message":"Registered"}"#)
            .into_reply(&request, ContractRevision::Current);
        assert_eq!(
            reply,
            BackendReply::Accepted {
                message: Some("Registered".into())
            }
        );
    }

    #[test]
    fn legacy_query_omits_action_and_email() {
        let mut creds = Credentials::new("141730", "pw");
        creds.confirm_password = "pw".into();
        creds.email = "asha@example.com".into();
        let request = creds.validate(AuthMode::Register).unwrap();

        let current = AuthQuery::new(&request, ContractRevision::Current);
        assert_eq!(current.action, Some(AuthMode::Register));
        assert_eq!(current.email, Some("asha@example.com"));

        let legacy = AuthQuery::new(&request, ContractRevision::Legacy);
        assert_eq!(legacy.action, None);
        assert_eq!(legacy.email, None);
        assert_eq!(legacy.pass, Some("pw"));
    }
}
