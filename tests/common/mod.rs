// Shared fixtures for collabnet integration tests
#![allow(dead_code)]

use collabnet::{split_genres, CreditRecord, Dataset, Person, Role, Work, WorkId};

pub fn credit(work: &str, person: &str, role: &str) -> CreditRecord {
    let (title, work_type, year, genres) = match work {
        "w1" => ("Harbor Lights", "film", Some(2001), "Drama/Comedy"),
        "w2" => ("Second Tide", "film", Some(2005), "Drama"),
        "w3" => ("Night Shift", "series", Some(2010), "Crime"),
        "w4" => ("Twin Names", "film", None, "Documentary"),
        _ => ("Untitled", "film", None, ""),
    };
    CreditRecord {
        work_id: WorkId::new(work),
        person_id: person.into(),
        role: Role::new(role),
        credit_order: None,
        work_title: title.to_string(),
        work_type: work_type.to_string(),
        work_year: year,
        work_genres: split_genres(genres, "/"),
    }
}

/// Works-table row agreeing with what [`credit`] denormalizes for `id`.
pub fn work(id: &str) -> Work {
    let metadata = credit(id, "", "").work_metadata();
    Work {
        id: WorkId::new(id),
        title: metadata.title,
        work_type: metadata.work_type,
        year: metadata.year,
        genres: metadata.genres,
    }
}

/// Small film credits table.
///
/// Ana (1) acts with Ben (2) on w1 and w2, is directed by Cara (3) on w1 and
/// directs Dev (4) on w3. People 5 and 6 are both named "A" and share w4.
pub fn film_dataset() -> Dataset {
    let people = vec![
        Person::new("1", "Ana Ruiz", "Harbor Lights"),
        Person::new("2", "Ben Cole", "Second Tide"),
        Person::new("3", "Cara Diaz", ""),
        Person::new("4", "Dev Patel", "Night Shift"),
        Person::new("5", "A", ""),
        Person::new("6", "A", ""),
    ];
    let credits = vec![
        credit("w1", "1", "actor"),
        credit("w1", "2", "actor"),
        credit("w1", "3", "director"),
        credit("w2", "1", "actor"),
        credit("w2", "1", "producer"),
        credit("w2", "2", "actor"),
        credit("w3", "1", "director"),
        credit("w3", "4", "actor"),
        credit("w4", "5", "actor"),
        credit("w4", "6", "actor"),
    ];
    let works = ["w1", "w2", "w3", "w4"].into_iter().map(work).collect();
    Dataset::new(people, credits, works)
}
