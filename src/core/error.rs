use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidValue,

    ValidationInvalidInput,
    ValidationInvalidArgument,
    ValidationInvalidJson,

    ScopeNoProject,
    ScopeNoComposition,

    HostOperationFailed,
    HostTransactionState,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationInvalidInput => "validation.invalid_input",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::ScopeNoProject => "scope.no_project",
            ErrorCode::ScopeNoComposition => "scope.no_composition",

            ErrorCode::HostOperationFailed => "host.operation_failed",
            ErrorCode::HostTransactionState => "host.transaction_state",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }

    /// True for the "requested scope is unavailable" family.
    pub fn is_no_scope(&self) -> bool {
        matches!(self, ErrorCode::ScopeNoProject | ErrorCode::ScopeNoComposition)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoCompositionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_item: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostOperationFailedDetails {
    pub target_id: String,
    pub target_name: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    /// Find text was empty. Reported before any host access.
    pub fn invalid_input(field: impl Into<String>) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: "must not be empty".to_string(),
            id: None,
            tried: None,
        });

        Self::new(
            ErrorCode::ValidationInvalidInput,
            "Please enter text to find",
            details,
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            id,
            tried,
        });

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
    }

    pub fn validation_invalid_json(err: serde_json::Error, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn no_project() -> Self {
        Self::new(
            ErrorCode::ScopeNoProject,
            "No project open",
            Value::Object(serde_json::Map::new()),
        )
        .with_hint("Pass --project <PATH> or run 'findreplace config set-project <PATH>'")
    }

    pub fn no_composition(active_item: Option<String>) -> Self {
        let details = to_details(NoCompositionDetails { active_item });

        Self::new(
            ErrorCode::ScopeNoComposition,
            "No active composition found",
            details,
        )
        .with_hint("Run 'findreplace project activate <ID|NAME>' to select a composition")
    }

    pub fn host_operation_failed(
        target_id: impl Into<String>,
        target_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let error = error.into();
        let details = to_details(HostOperationFailedDetails {
            target_id: target_id.into(),
            target_name: target_name.into(),
            error: error.clone(),
        });

        Self::new(ErrorCode::HostOperationFailed, error, details)
    }

    pub fn host_transaction_state(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::HostTransactionState,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::internal_unexpected(message)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
