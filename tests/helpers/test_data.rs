//! Test data helpers for building API payloads

use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

/// A staff user as returned by `/api/me`
pub fn user_json(id: &str, role: &str) -> Value {
    let name: String = Name().fake();
    json!({
        "_id": id,
        "name": name,
        "email": format!("{}@pcbpoint.in", id),
        "phone": random_phone(),
        "role": role
    })
}

/// A student row for `/api/detail/students`
pub fn student_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "class": "12",
        "platform": "Unacademy",
        "contact": { "student": random_phone(), "parent": random_phone() }
    })
}

/// A valid Indian mobile number
pub fn random_phone() -> String {
    let rest: u32 = (10_000_000..99_999_999).fake();
    format!("98{}", rest)
}

/// Two subjects with three topics, one completed
pub fn syllabus_json() -> Value {
    json!({
        "subjects": [
            {
                "name": "Physics",
                "chapters": [{
                    "name": "Optics",
                    "topics": [
                        { "id": "t1", "name": "Lenses", "completed": true },
                        { "id": "t2", "name": "Mirrors", "completed": false }
                    ]
                }]
            },
            {
                "name": "Chemistry",
                "chapters": [{
                    "name": "Organic",
                    "topics": [{ "id": "t3", "name": "Alkanes" }]
                }]
            }
        ]
    })
}
