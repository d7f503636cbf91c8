//! Tests for the Member union and the Roster collection

use roster_models::{
    Details, EntityError, Employee, Member, MemberKind, Person, PersonRecord, Professor, Roster,
    Student, StudentProfessor,
};

/// Helper function to create a roster with one member of each kind
fn create_test_roster() -> Roster {
    vec![
        Member::from(Person::new("Bo", 50, "Cook")),
        Member::from(Student::new("Ana", 20, "TA", "A")),
        Member::from(Professor::new("Lee", 45, "Prof", ["CS101", "CS202"])),
        Member::from(Employee::new("Sam", 38, "Engineer", "R&D")),
        Member::from(StudentProfessor::new("Kim", 30, "TA-Prof", ["ML"], "B")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_member_round_trip() {
    let sp = StudentProfessor::new("Kim", 30, "TA-Prof", ["ML"], "B");
    let member = Member::from(sp.clone());

    assert_eq!(member.kind(), MemberKind::StudentProfessor);
    assert_eq!(member.to_string(), sp.get_details());
    assert_eq!(StudentProfessor::try_from(member), Ok(sp));
}

#[test]
fn test_member_mismatch_reports_both_kinds() {
    let member = Member::from(Professor::new("Lee", 45, "Prof", ["CS101"]));
    let err = Student::try_from(member).unwrap_err();

    assert_eq!(
        err,
        EntityError::VariantMismatch {
            expected: MemberKind::Student,
            found: MemberKind::Professor,
        }
    );
    assert_eq!(
        err.to_string(),
        "Variant mismatch: expected Student but found Professor"
    );
}

#[test]
fn test_roster_details_in_insertion_order() {
    let roster = create_test_roster();
    assert_eq!(
        roster.details(),
        [
            "Name: Bo, Age: 50, Job: Cook",
            "Name: Ana, Age: 20, Job: TA, Grade: A",
            "Name: Lee, Age: 45, Job: Prof, Courses: ['CS101', 'CS202']",
            "Name: Sam, Age: 38, Job: Engineer, Department: R&D",
            "Name: Kim, Age: 30, Job: TA-Prof, Courses: ['ML'], Grade: B",
        ]
    );
}

#[test]
fn test_roster_queries() {
    let roster = create_test_roster();

    assert_eq!(roster.len(), 5);
    assert!(!roster.is_empty());
    assert_eq!(roster.get(1).map(Member::kind), Some(MemberKind::Student));
    assert!(roster.get(5).is_none());

    let employees = roster.of_kind(MemberKind::Employee);
    assert_eq!(employees.len(), 1, "Should have 1 employee");
    assert_eq!(employees[0].name(), "Sam");

    let adults_over_40 = roster.filter(|m| m.age() > 40);
    assert_eq!(adults_over_40.len(), 2, "Bo and Lee are over 40");

    assert_eq!(roster.graded().len(), 2);
    assert_eq!(roster.teaching().len(), 2);
}

#[test]
fn test_roster_lookup_by_name() {
    let roster = create_test_roster();

    let member = roster.find_by_name("Lee");
    assert_eq!(member.map(Member::kind), Ok(MemberKind::Professor));

    assert_eq!(
        roster.find_by_name("Nobody").unwrap_err(),
        EntityError::NotFound("Nobody".to_string())
    );
}

#[test]
fn test_empty_roster() {
    let roster = Roster::default();
    assert!(roster.is_empty());
    assert!(roster.details().is_empty());
    assert!(roster.graded().is_empty());
}
