use log::info;
use roster_models::{
    Details, Employee, Location, Member, Person, Professor, Roster, Student, StudentProfessor,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let roster: Roster = [
        Member::from(Person::new("Bo", 50, "Cook")),
        Student::new("Ana", 20, "TA", "A").into(),
        Professor::new("Lee", 45, "Prof", ["CS101", "CS202"]).into(),
        Employee::new("Sam", 38, "Engineer", "R&D").into(),
        StudentProfessor::new("Kim", 30, "TA-Prof", ["ML"], "B").into(),
    ]
    .into_iter()
    .collect();

    info!("Roster has {} members", roster.len());
    for member in &roster {
        info!("{:<16} {}", member.kind().to_string(), member.get_details());
    }

    let kim = StudentProfessor::try_from(roster.find_by_name("Kim")?.clone())?;
    info!("Narrowed back to StudentProfessor: {kim}");

    let mut location = Location::new("Lab", 10.5, 20.25);
    info!("{} is at {:?}", location.name(), location.get_coordinates());
    location.set_name("Lab2");
    info!("{} is at {:?}", location.name(), location.get_coordinates());

    Ok(())
}
