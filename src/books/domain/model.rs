use chrono::NaiveDateTime;

// BookRecord is one catalog entry as the store returned it. Records are built by
// book stores only and relayed untouched by the lookup service.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BookRecord {
    name: String,
    author: String,
    published: NaiveDateTime,
}

impl BookRecord {
    pub fn new(name: &str, author: &str, published: NaiveDateTime) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            published,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn published(&self) -> NaiveDateTime {
        self.published
    }
}
