use crate::{
    data::parse_id,
    error::{
        GpaOutOfRangeSnafu, MissingFieldSnafu, ParseGpaSnafu, RosterError, RosterResult,
    },
};
use axum::{
    Form,
    extract::{FromRequest, Request},
};
use snafu::{ResultExt, ensure};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub id: i32,
    #[sqlx(rename = "firstname")]
    pub first_name: String,
    #[sqlx(rename = "lastname")]
    pub last_name: String,
    pub department: String,
    pub gpa: f32,
}

/// A student that hasn't been given an ID by the database yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub gpa: f32,
}

impl NewStudent {
    pub fn with_id(self, id: i32) -> Student {
        let Self {
            first_name,
            last_name,
            department,
            gpa,
        } = self;

        Student {
            id,
            first_name,
            last_name,
            department,
            gpa,
        }
    }
}

/// Raw form input for both the add and update forms. Absent fields come through as empty strings.
#[derive(Debug, Default, Clone)]
pub struct StudentForm {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub department: String,
    pub gpa: String,
}

impl StudentForm {
    /// Only the first value of a repeated key counts. Unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        let mut seen = [false; 5];

        for (key, value) in pairs {
            let (index, slot) = match key.as_str() {
                "id" => (0, &mut form.id),
                "firstname" => (1, &mut form.firstname),
                "lastname" => (2, &mut form.lastname),
                "department" => (3, &mut form.department),
                "gpa" => (4, &mut form.gpa),
                _ => continue,
            };
            if !seen[index] {
                seen[index] = true;
                *slot = value;
            }
        }

        form
    }

    fn ensure_fields_present(&self) -> RosterResult<()> {
        for (field, value) in [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("department", &self.department),
            ("gpa", &self.gpa),
        ] {
            ensure!(!value.is_empty(), MissingFieldSnafu { field });
        }
        Ok(())
    }

    fn parse_gpa(&self) -> RosterResult<f32> {
        let gpa: f32 = self.gpa.parse().context(ParseGpaSnafu {
            original: self.gpa.as_str(),
        })?;

        // anything past f32::MAX rounds to infinity, only a spelled-out infinity may produce one
        if gpa.is_infinite() {
            let unsigned = self.gpa.trim_start_matches(['+', '-']).to_ascii_lowercase();
            ensure!(
                unsigned == "inf" || unsigned == "infinity",
                GpaOutOfRangeSnafu {
                    original: self.gpa.as_str()
                }
            );
        }

        Ok(gpa)
    }

    /// Validates the add form. Any `id` sent along is ignored, the database assigns one.
    pub fn into_new_student(self) -> RosterResult<NewStudent> {
        self.ensure_fields_present()?;
        let gpa = self.parse_gpa()?;

        let Self {
            firstname,
            lastname,
            department,
            ..
        } = self;

        Ok(NewStudent {
            first_name: firstname,
            last_name: lastname,
            department,
            gpa,
        })
    }

    /// Validates the update form, which must also carry the `id` of the student being overwritten.
    pub fn into_existing_student(self) -> RosterResult<Student> {
        self.ensure_fields_present()?;
        ensure!(!self.id.is_empty(), MissingFieldSnafu { field: "id" });

        let gpa = self.parse_gpa()?;
        let id = parse_id(&self.id)?;

        let Self {
            firstname,
            lastname,
            department,
            ..
        } = self;

        Ok(Student {
            id,
            first_name: firstname,
            last_name: lastname,
            department,
            gpa,
        })
    }
}

/// A body that isn't a readable urlencoded form is treated as an empty one, so it fails validation
/// with a missing field instead of a framework rejection.
impl<S: Send + Sync> FromRequest<S> for StudentForm {
    type Rejection = RosterError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => pairs,
            Err(rejection) => {
                debug!(%rejection, "Unreadable form body, treating as empty");
                Vec::new()
            }
        };

        Ok(Self::from_pairs(pairs))
    }
}
