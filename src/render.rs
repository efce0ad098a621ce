use crate::{
    data::student::Student,
    maud_conveniences::{
        escape, form_element, form_submit_button, link_button, render_table, simple_form_element,
        title,
    },
};
use maud::{DOCTYPE, Markup, html};

/// Every page the app can show, along with what it needs to show it.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    StudentList(&'a [Student]),
    ShowStudent(&'a Student),
    CreateForm,
    Created(&'a Student),
    UpdateForm(&'a Student),
    Updated(&'a Student),
}

impl View<'_> {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StudentList(_) => "students",
            Self::ShowStudent(_) => "show",
            Self::CreateForm => "create",
            Self::Created(_) => "created",
            Self::UpdateForm(_) => "update",
            Self::Updated(_) => "updated",
        }
    }
}

pub trait Renderer: Clone + Send + Sync + 'static {
    fn render(&self, view: View<'_>) -> Markup;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MaudRenderer;

impl Renderer for MaudRenderer {
    fn render(&self, view: View<'_>) -> Markup {
        trace!(view = view.name(), "Rendering");

        let body = match view {
            View::StudentList(students) => student_list(students),
            View::ShowStudent(student) => student_details("Student", student),
            View::CreateForm => student_form("Add New Student", "/students/add/process", None),
            View::Created(student) => student_details("Student Added", student),
            View::UpdateForm(student) => {
                student_form("Update Student", "/students/update/process", Some(student))
            }
            View::Updated(student) => student_details("Student Updated", student),
        };

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Roster" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white" {
                    nav class="mb-6 flex flex-row space-x-4" {
                        (link_button("/students", "All Students"))
                        (link_button("/students/add", "Add Student"))
                    }
                    div class="bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full" {
                        (body)
                    }
                }
            }
        }
    }
}

fn student_list(students: &[Student]) -> Markup {
    render_table(
        "Students",
        ["ID", "First Name", "Last Name", "Department", "GPA", ""],
        students
            .iter()
            .map(|student| {
                let id = student.id;
                [
                    escape(id),
                    escape(&student.first_name),
                    escape(&student.last_name),
                    escape(&student.department),
                    escape(student.gpa.to_string()),
                    html! {
                        div class="flex flex-row space-x-2" {
                            a href={"/students/show?id=" (id)} class="hover:text-blue-600 underline" {"View"}
                            a href={"/students/update?id=" (id)} class="hover:text-blue-600 underline" {"Update"}
                            a href={"/students/delete/process?id=" (id)} class="hover:text-red-600 underline" {"Delete"}
                        }
                    },
                ]
            })
            .collect(),
    )
}

fn student_details(heading: &'static str, student: &Student) -> Markup {
    html! {
        (title(heading))
        div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8" {
            @for (label, value) in [
                ("ID:", student.id.to_string()),
                ("First Name:", student.first_name.clone()),
                ("Last Name:", student.last_name.clone()),
                ("Department:", student.department.clone()),
                ("GPA:", student.gpa.to_string()),
            ] {
                div {
                    p class="text-gray-300 text-sm" {(label)}
                    p class="text-gray-100 text-lg" {(value)}
                }
            }
        }
        a href={"/students/update?id=" (student.id)} class="hover:text-blue-600 underline" {"Update this student"}
    }
}

fn student_form(heading: &'static str, action: &'static str, existing: Option<&Student>) -> Markup {
    let gpa = existing.map(|student| student.gpa.to_string());

    html! {
        (title(heading))
        form method="post" action=(action) class="p-4" {
            @if let Some(student) = existing {
                (form_element("id", "ID", html! {
                    input readonly type="text" id="id" name="id" value=(student.id) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight bg-gray-600 border-gray-600" {}
                }))
            }
            (simple_form_element("firstname", "First Name", true, None, existing.map(|s| s.first_name.as_str())))
            (simple_form_element("lastname", "Last Name", true, None, existing.map(|s| s.last_name.as_str())))
            (simple_form_element("department", "Department", true, None, existing.map(|s| s.department.as_str())))
            (simple_form_element("gpa", "GPA", true, None, gpa.as_deref()))
            (form_submit_button(Some(if existing.is_some() { "Update Student" } else { "Add Student" })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Student {
        Student {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            department: "Math".into(),
            gpa: 4.0,
        }
    }

    #[test]
    fn list_links_every_student() {
        let grace = Student {
            id: 2,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            department: "CS".into(),
            gpa: 3.9,
        };
        let page = MaudRenderer.render(View::StudentList(&[ada(), grace])).into_string();

        assert!(page.contains("Lovelace"));
        assert!(page.contains("Hopper"));
        assert!(page.contains("/students/show?id=2"));
        assert!(page.contains("/students/delete/process?id=1"));
    }

    #[test]
    fn values_are_escaped() {
        let student = Student {
            first_name: "<b>Ada</b>".into(),
            ..ada()
        };
        let page = MaudRenderer.render(View::ShowStudent(&student)).into_string();

        assert!(page.contains("&lt;b&gt;Ada&lt;/b&gt;"));
        assert!(!page.contains("<b>Ada"));
    }

    #[test]
    fn create_form_is_empty_and_posts_to_process() {
        let page = MaudRenderer.render(View::CreateForm).into_string();

        assert!(page.contains(r#"action="/students/add/process""#));
        assert!(page.contains(r#"name="firstname""#));
        assert!(!page.contains(r#"name="id""#));
    }

    #[test]
    fn update_form_is_prefilled() {
        let page = MaudRenderer.render(View::UpdateForm(&ada())).into_string();

        assert!(page.contains(r#"action="/students/update/process""#));
        assert!(page.contains(r#"value="Lovelace""#));
        assert!(page.contains(r#"name="id""#));
        assert!(page.contains(r#"value="1""#));
    }

    #[test]
    fn view_names_are_distinct() {
        let student = ada();
        let names = [
            View::StudentList(&[]).name(),
            View::ShowStudent(&student).name(),
            View::CreateForm.name(),
            View::Created(&student).name(),
            View::UpdateForm(&student).name(),
            View::Updated(&student).name(),
        ];
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }
}
