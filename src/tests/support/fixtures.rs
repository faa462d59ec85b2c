use serde_json::{json, Value};

pub fn project(id: &str, title: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "image": format!("https://cdn.test/{id}.png"),
        "link": "https://github.com/eklemis",
        "tags": tags,
        "featured": true
    })
}

pub fn blog_post(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "summary": "short",
        "content": "# Heading\n\nBody",
        "image": "",
        "tags": ["rust", "web"],
        "createdAt": "2025-03-05T08:49:45Z"
    })
}

pub fn experience(id: &str, current: bool) -> Value {
    json!({
        "id": id,
        "company": "Acme",
        "position": "Engineer",
        "startDate": "2021-01",
        "endDate": if current { Value::Null } else { json!("2023-06") },
        "description": "Built things",
        "current": current
    })
}

/// A current position as stored by consoles that sent `""` for the end date.
pub fn current_experience_blank_end(id: &str) -> Value {
    let mut exp = experience(id, true);
    exp["endDate"] = json!("");
    exp
}

pub fn message(id: &str, read: bool) -> Value {
    json!({
        "id": id,
        "name": "Jane",
        "email": "jane@example.com",
        "message": "Hello",
        "read": read,
        "createdAt": "2025-03-05T08:49:45Z"
    })
}
