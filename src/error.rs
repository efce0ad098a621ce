use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use snafu::Snafu;
use std::num::{ParseFloatError, ParseIntError};

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    Migrate { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse database port {:?}", original))]
    ParsePort {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Missing value for `{}`", field))]
    MissingField { field: &'static str },
    #[snafu(display(
        "Unable to parse GPA {:?}, please go back and enter a correct number for the GPA",
        original
    ))]
    ParseGpa {
        source: ParseFloatError,
        original: String,
    },
    #[snafu(display(
        "GPA {:?} is too large to store, please go back and enter a correct number for the GPA",
        original
    ))]
    GpaOutOfRange { original: String },
    #[snafu(display(
        "Unable to parse ID {:?}, please go back and enter a correct ID number",
        original
    ))]
    ParseId {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: i32 },
    #[snafu(display("Method {} is not allowed here", method))]
    MethodNotAllowed { method: Method },
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input
        const NN: StatusCode = StatusCode::NOT_ACCEPTABLE; //not a number

        match self {
            Self::OpenDatabase { .. } | Self::Migrate { .. } | Self::MakeQuery { .. } => ISE,
            Self::BadEnvVar { .. } | Self::ParsePort { .. } => ISE,
            Self::MissingField { .. } => BI,
            Self::ParseGpa { .. } | Self::GpaOutOfRange { .. } | Self::ParseId { .. } => NN,
            Self::MissingStudent { .. } => NF,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(%self, %status_code, "Rejected request");
        }

        let reason = status_code.canonical_reason().unwrap_or("Error");
        (status_code, format!("{reason}: {self}")).into_response()
    }
}
