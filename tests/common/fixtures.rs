use chrono::NaiveDate;
use vitae::{Education, Resume, WorkExperience};

/// The smallest record the API layer would accept.
pub fn minimal_resume() -> Resume {
    Resume {
        first_name: "Иван".to_string(),
        last_name: "Петров".to_string(),
        position: "Инженер".to_string(),
        city: "Москва".to_string(),
        ..Default::default()
    }
}

/// A résumé with every optional field populated.
#[allow(dead_code)]
pub fn full_resume() -> Resume {
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
        has_children: Some(true),
        languages: Some("Русский, Английский".to_string()),
        driver_licenses: Some("B".to_string()),
        has_medical_book: Some(false),
        personal_qualities: Some("Ответственность, внимательность".to_string()),
        photo: None,
        work_experiences: vec![work_entry(1), open_ended_work_entry()],
        educations: vec![education_entry(1)],
    }
}

pub fn work_entry(index: usize) -> WorkExperience {
    WorkExperience {
        organization: format!("Организация №{index:02}"),
        position: "Разработчик".to_string(),
        start_date: NaiveDate::from_ymd_opt(2015, 1, 10).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2018, 6, 30),
        responsibilities: Some(format!("Задачи №{index:02}")),
    }
}

#[allow(dead_code)]
pub fn open_ended_work_entry() -> WorkExperience {
    WorkExperience {
        organization: "ООО Ромашка".to_string(),
        position: "Старший разработчик".to_string(),
        start_date: NaiveDate::from_ymd_opt(2018, 7, 1).unwrap(),
        end_date: None,
        responsibilities: Some("Проектирование и ведение сервисов".to_string()),
    }
}

pub fn education_entry(index: usize) -> Education {
    Education {
        institution: format!("Университет №{index:02}"),
        faculty: Some("Факультет информатики".to_string()),
        specialty: "Программная инженерия".to_string(),
        graduation_year: 2014,
        study_form: Some("Очная".to_string()),
    }
}

/// Deterministic PNG bytes that decode successfully.
#[allow(dead_code)]
pub fn png_photo_bytes() -> Vec<u8> {
    let mut png = Vec::new();
    let img = image::RgbImage::from_fn(8, 8, |x, y| {
        image::Rgb([(x * 30) as u8, (y * 30) as u8, 120])
    });
    img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .expect("encoding a fixture image cannot fail");
    png
}
