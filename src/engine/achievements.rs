use serde::{Deserialize, Serialize};

pub const NEURAL_LINK_TITLE: &str = "Neural Link Established";
pub const NEURAL_LINK_DESCRIPTION: &str =
    "You've successfully initiated your first neural connection.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 timestamp of when it was earned.
    #[serde(default)]
    pub date: String,
}

/// Append-only achievement list, unique by title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AchievementLog {
    records: Vec<AchievementRecord>,
}

impl AchievementLog {
    pub fn new(records: Vec<AchievementRecord>) -> Self {
        let mut log = Self::default();
        for record in records {
            log.push(record);
        }
        log
    }

    pub fn records(&self) -> &[AchievementRecord] {
        &self.records
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.iter().any(|r| r.title == title)
    }

    /// Returns false when an achievement with the same title already exists.
    pub fn record(&mut self, title: &str, description: &str, date_iso: &str) -> bool {
        self.push(AchievementRecord {
            title: title.to_string(),
            description: description.to_string(),
            date: date_iso.to_string(),
        })
    }

    fn push(&mut self, record: AchievementRecord) -> bool {
        if self.contains(&record.title) {
            return false;
        }
        self.records.push(record);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_titles_are_ignored() {
        let mut log = AchievementLog::default();
        assert!(log.record(NEURAL_LINK_TITLE, NEURAL_LINK_DESCRIPTION, "2024-01-01T00:00:00.000Z"));
        assert!(!log.record(NEURAL_LINK_TITLE, "other", "2024-02-01T00:00:00.000Z"));
        assert_eq!(log.records().len(), 1);
        assert_eq!(log.records()[0].date, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn loading_dedupes_stored_duplicates() {
        let raw = r#"[
            {"title":"A","description":"x","date":"d1"},
            {"title":"A","description":"y","date":"d2"},
            {"title":"B","description":"z","date":"d3"}
        ]"#;
        let records: Vec<AchievementRecord> = serde_json::from_str(raw).unwrap();
        let log = AchievementLog::new(records);
        let titles: Vec<_> = log.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }
}
