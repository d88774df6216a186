use campus_registrar::utils::{logger, validation::Validate};
use campus_registrar::{
    academic_standing, compute_gpa, enroll, CampusConfig, CampusMember, CliConfig, Course,
    Department, Faculty, Grade, Person, Responsibilities, Result, SecureStudentRecord, Staff,
    Student,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting campus-registrar CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let (campus_name, mut departments) = match load_campus(config.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Campus configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    println!("--- University Management System ---");
    println!("Campus: {}", campus_name);

    // The walkthrough cast stays the same regardless of which campus
    // description was loaded.
    let mut alan = Student::undergraduate(
        Person::new("S201", "Alan Turing", "1912-06-23")?,
        "CS",
        3,
    );
    let ada = Faculty::professor(
        Person::new("F101", "Ada Lovelace", "1815-12-10")?,
        "Computer Science",
    );
    let grace = Faculty::lecturer(
        Person::new("F102", "Grace Hopper", "1906-12-09")?,
        "Computer Science",
    );
    let charles = Faculty::teaching_assistant(
        Person::new("F103", "Charles Babbage", "1791-12-26")?,
        "Computer Science",
        "CS101",
    );
    let bob = Staff::new(
        Person::new("ST301", "Bob Admin", "1980-05-15")?,
        "Admissions",
        "Administrator",
    );

    println!("\n--- Course Enrollment Process ---");
    match departments.first_mut() {
        Some(department) => enrollment_walk(&mut alan, department),
        None => println!("No departments configured, skipping enrollment."),
    }

    println!(
        "\n{}'s GPA: {:.2}",
        alan.name(),
        compute_gpa(alan.transcript())
    );
    println!(
        "{}'s Academic Status: {}",
        alan.name(),
        academic_standing(alan.transcript())
    );

    println!("\n--- Demonstrating Polymorphism ---");
    let members = vec![
        CampusMember::Faculty(ada),
        CampusMember::Faculty(grace),
        CampusMember::Faculty(charles),
        CampusMember::Student(alan.clone()),
        CampusMember::Staff(bob),
    ];
    for member in &members {
        println!("\nName: {} ({})", member.name(), member.kind());
        println!("Responsibilities:");
        for responsibility in member.responsibilities() {
            println!("- {}", responsibility);
        }
        if let Some(workload) = member.workload() {
            println!("Workload: {}", workload);
        }
    }

    println!("\n--- Demonstrating Encapsulation ---");
    let mut secure_record = SecureStudentRecord::new(&alan, 3.8)?;
    println!(
        "Secure record for {} has GPA: {}",
        secure_record.student_name(),
        secure_record.gpa()
    );
    if let Err(e) = secure_record.set_gpa(5.0) {
        println!("Error setting invalid GPA: {}", e);
    }

    if config.json {
        println!("\n{}", campus_summary(&campus_name, &departments, &alan)?);
    }

    println!("\n--- System Demonstration Complete ---");
    tracing::info!("✅ Campus walkthrough completed");

    Ok(())
}

fn load_campus(path: Option<&str>) -> Result<(String, Vec<Department>)> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading campus description from {}", path);
            let campus = CampusConfig::from_file(path)?;
            campus.validate()?;
            Ok((campus.campus_name().to_string(), campus.to_departments()))
        }
        None => {
            tracing::info!("No --config given, using the built-in sample campus");
            Ok(("Sample University".to_string(), vec![sample_department()]))
        }
    }
}

fn sample_department() -> Department {
    let mut department = Department::new("Computer Science");
    department.add_course(Course::new("CS101", "Intro to Programming", 3));
    department
        .add_course(Course::new("CS201", "Data Structures", 3).with_prerequisites(["CS101"]));
    department
}

/// Walks the catalog twice. Gated courses are attempted before their
/// prerequisites, so the first pass fails them; grades then complete the
/// open enrollments and the second pass picks up what was blocked.
fn enrollment_walk(student: &mut Student, department: &mut Department) {
    let (gated, open): (Vec<_>, Vec<_>) = department
        .course_ids()
        .into_iter()
        .partition(|id| match department.course(id) {
            Some(course) => !course.prerequisites().is_empty(),
            None => false,
        });

    for course_id in gated.iter().chain(&open) {
        if let Some(course) = department.course_mut(course_id) {
            enroll(student, course);
        }
    }

    for course_id in student.transcript().course_ids() {
        if student.assign_grade(&course_id, Grade::A) {
            println!("{} completed with grade 'A'", course_id);
        }
    }

    for course_id in gated.iter().chain(&open) {
        if student.transcript().has_course(course_id) {
            continue;
        }
        if let Some(course) = department.course_mut(course_id) {
            enroll(student, course);
        }
    }
}

fn campus_summary(
    campus_name: &str,
    departments: &[Department],
    student: &Student,
) -> Result<String> {
    let courses: Vec<serde_json::Value> = departments
        .iter()
        .flat_map(|department| {
            department.courses().map(|course| {
                serde_json::json!({
                    "id": course.id(),
                    "name": course.name(),
                    "credits": course.credits(),
                    "enrolled": course.enrolled_count(),
                    "capacity": course.capacity(),
                })
            })
        })
        .collect();

    let summary = serde_json::json!({
        "campus": campus_name,
        "courses": courses,
        "student": {
            "id": student.id(),
            "name": student.name(),
            "transcript": student.transcript(),
            "gpa": compute_gpa(student.transcript()),
            "standing": academic_standing(student.transcript()).to_string(),
        },
    });

    Ok(serde_json::to_string_pretty(&summary)?)
}
