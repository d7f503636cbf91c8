//! Tests for the role variants built on top of Person
//!
//! Each single-role variant appends exactly one segment to the base details,
//! and the student-professor writes every field once.

use roster_models::{
    CourseList, Details, Employee, Graded, Person, PersonRecord, Professor, Student,
    StudentProfessor, Teaching,
};

#[test]
fn test_student_appends_grade() {
    let student = Student::new("Ana", 20, "TA", "A");
    let base = Person::new("Ana", 20, "TA").get_details();

    assert_eq!(student.get_details(), "Name: Ana, Age: 20, Job: TA, Grade: A");
    assert_eq!(student.get_details(), format!("{base}, Grade: A"));
    assert_eq!(student.grade(), "A");
}

#[test]
fn test_professor_appends_courses() {
    let professor = Professor::new("Lee", 45, "Prof", vec!["CS101", "CS202"]);
    let base = professor.person().get_details();

    assert_eq!(
        professor.get_details(),
        "Name: Lee, Age: 45, Job: Prof, Courses: ['CS101', 'CS202']"
    );
    assert_eq!(
        professor.get_details(),
        format!("{base}, Courses: ['CS101', 'CS202']")
    );
    assert_eq!(professor.courses().as_slice(), ["CS101", "CS202"]);
}

#[test]
fn test_professor_courses_keep_order_and_duplicates() {
    let courses: CourseList = ["CS202", "CS101", "CS202"].into_iter().collect();
    let professor = Professor::new("Lee", 45, "Prof", courses);

    assert_eq!(professor.courses().len(), 3, "Duplicates should be kept");
    assert!(
        professor
            .get_details()
            .ends_with("Courses: ['CS202', 'CS101', 'CS202']"),
        "Courses should render in the order given"
    );
}

#[test]
fn test_professor_course_quoting() {
    let professor = Professor::new("Lee", 45, "Prof", ["Fermat's theorem"]);
    assert_eq!(
        professor.get_details(),
        "Name: Lee, Age: 45, Job: Prof, Courses: [\"Fermat's theorem\"]"
    );
}

#[test]
fn test_employee_appends_department() {
    let employee = Employee::new("Sam", 38, "Engineer", "R&D");
    assert_eq!(
        employee.get_details(),
        "Name: Sam, Age: 38, Job: Engineer, Department: R&D"
    );
    assert_eq!(employee.department(), "R&D");
}

#[test]
fn test_student_professor_details() {
    let sp = StudentProfessor::new("Kim", 30, "TA-Prof", ["ML"], "B");
    assert_eq!(
        sp.get_details(),
        "Name: Kim, Age: 30, Job: TA-Prof, Courses: ['ML'], Grade: B"
    );
    assert_eq!(sp.grade(), "B");
    assert_eq!(sp.courses().len(), 1);
    assert_eq!(sp.name(), "Kim");
}

#[test]
fn test_student_professor_fields_appear_once_in_order() {
    let details = StudentProfessor::new("Kim", 30, "TA-Prof", ["ML", "AI"], "B").get_details();
    let keys = ["Name: ", "Age: ", "Job: ", "Courses: ", "Grade: "];

    let mut last = 0;
    for key in keys {
        assert_eq!(details.matches(key).count(), 1, "{key} should appear exactly once");
        let position = details.find(key).unwrap_or_default();
        assert!(position >= last, "{key} should follow the previous field");
        last = position;
    }
}

#[test]
fn test_variants_from_existing_person() {
    let person = Person::new("Ana", 20, "TA");
    let student = Student::from_person(person.clone(), "A");
    let employee = Employee::from_person(person.clone(), "Library");

    assert_eq!(student.person(), &person);
    assert_eq!(employee.into_person(), person);
}

#[test]
fn test_capabilities_are_shared() {
    fn grades(items: &[&dyn Graded]) -> Vec<String> {
        items.iter().map(|g| format!("{}={}", g.name(), g.grade())).collect()
    }

    let student = Student::new("Ana", 20, "TA", "A");
    let sp = StudentProfessor::new("Kim", 30, "TA-Prof", ["ML"], "B");
    assert_eq!(grades(&[&student, &sp]), ["Ana=A", "Kim=B"]);
}

#[test]
fn test_professor_courses_escape_invisible_characters() {
    let professor = Professor::new(
        "Lee",
        45,
        "Prof",
        ["a\u{a0}b", "z\u{200b}w", "p\u{2028}q", "\u{f0000}"],
    );
    assert_eq!(
        professor.get_details(),
        "Name: Lee, Age: 45, Job: Prof, Courses: ['a\\xa0b', 'z\\u200bw', 'p\\u2028q', '\\U000f0000']",
        "Non-printable characters should be written as escapes"
    );
}
