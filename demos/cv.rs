use chrono::NaiveDate;
use std::env;
use vitae::{Education, Resume, ResumeRenderer, WorkExperience};

fn sample_resume() -> Resume {
    Resume {
        first_name: "Анна".to_string(),
        middle_name: Some("Сергеевна".to_string()),
        last_name: "Иванова".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1992, 4, 17),
        phone_number: Some("+7 900 123-45-67".to_string()),
        email: Some("anna@example.com".to_string()),
        position: "Ведущий инженер".to_string(),
        employment: Some("Полная занятость".to_string()),
        desired_salary: Some(180_000),
        work_schedule: Some("Полный день".to_string()),
        is_ready_for_trips: Some(true),
        city: "Санкт-Петербург".to_string(),
        can_relocate: Some(false),
        citizenship: Some("РФ".to_string()),
        gender: Some("Женский".to_string()),
        has_children: Some(false),
        languages: Some("Русский, Английский".to_string()),
        driver_licenses: Some("B".to_string()),
        has_medical_book: Some(false),
        personal_qualities: Some("Ответственность, внимательность".to_string()),
        photo: None,
        work_experiences: vec![
            WorkExperience {
                organization: "ООО Ромашка".to_string(),
                position: "Разработчик".to_string(),
                start_date: NaiveDate::from_ymd_opt(2015, 1, 10).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2018, 6, 30),
                responsibilities: Some("Разработка и сопровождение сервисов".to_string()),
            },
            WorkExperience {
                organization: "АО ТехноСофт".to_string(),
                position: "Старший разработчик".to_string(),
                start_date: NaiveDate::from_ymd_opt(2018, 7, 1).unwrap(),
                end_date: None,
                responsibilities: Some("Проектирование архитектуры".to_string()),
            },
        ],
        educations: vec![Education {
            institution: "СПбГУ".to_string(),
            faculty: Some("Факультет ПМ-ПУ".to_string()),
            specialty: "Программная инженерия".to_string(),
            graduation_year: 2014,
            study_form: Some("Очная".to_string()),
        }],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    println!("Running CV/Resume Example...");

    let renderer = ResumeRenderer::new();
    let resume = sample_resume();

    for theme in renderer.available_themes() {
        let output_path = format!("cv_{theme}.pdf");
        let pdf = renderer.render(&resume, theme)?;
        std::fs::write(&output_path, pdf)?;
        println!("✓ Generated {}", output_path);
    }

    println!("\nSuccess!");
    Ok(())
}
