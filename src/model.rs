//! Student records and the closed vocabularies of the portfolio form
//!
//! Serde renames reproduce the JSON written by the original web app, so a
//! LocalStorage dataset created by an earlier deployment deserializes
//! unchanged (camelCase field names, Chinese variant strings).

use serde::{Deserialize, Serialize};

/// School year levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 幼幼班 (2-3 year olds)
    #[serde(rename = "幼幼班")]
    Nursery,
    /// 小班
    #[serde(rename = "小班")]
    Junior,
    /// 中班
    #[serde(rename = "中班")]
    Middle,
    /// 大班
    #[serde(rename = "大班")]
    Senior,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Nursery, Grade::Junior, Grade::Middle, Grade::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Nursery => "幼幼班",
            Grade::Junior => "小班",
            Grade::Middle => "中班",
            Grade::Senior => "大班",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }
}

/// Class names (one fruit per class, six classes per grade)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassName {
    #[serde(rename = "蘋果")]
    Apple,
    #[serde(rename = "香蕉")]
    Banana,
    #[serde(rename = "櫻桃")]
    Cherry,
    #[serde(rename = "葡萄")]
    Grape,
    #[serde(rename = "草莓")]
    Strawberry,
    #[serde(rename = "檸檬")]
    Lemon,
}

impl ClassName {
    pub const ALL: [ClassName; 6] = [
        ClassName::Apple,
        ClassName::Banana,
        ClassName::Cherry,
        ClassName::Grape,
        ClassName::Strawberry,
        ClassName::Lemon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::Apple => "蘋果",
            ClassName::Banana => "香蕉",
            ClassName::Cherry => "櫻桃",
            ClassName::Grape => "葡萄",
            ClassName::Strawberry => "草莓",
            ClassName::Lemon => "檸檬",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "boy")]
    Boy,
    #[serde(rename = "girl")]
    Girl,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
        }
    }
}

/// Kind of portfolio artifact a record links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Word,
    #[serde(rename = "PPT")]
    Ppt,
    Canva,
    Excel,
    /// 照片 (photo)
    #[serde(rename = "照片")]
    Photo,
    /// 影片 (video)
    #[serde(rename = "影片")]
    Video,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::Word,
        ContentType::Ppt,
        ContentType::Canva,
        ContentType::Excel,
        ContentType::Photo,
        ContentType::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Word => "Word",
            ContentType::Ppt => "PPT",
            ContentType::Canva => "Canva",
            ContentType::Excel => "Excel",
            ContentType::Photo => "照片",
            ContentType::Video => "影片",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// One student's portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique id, generated from creation-time millis (best effort, no
    /// collision check)
    pub id: String,
    pub name: String,
    pub grade: Grade,
    pub class_name: ClassName,
    pub gender: Gender,
    pub content_type: ContentType,
    /// File link, NAS path, or embedded data URL
    pub link: String,
    pub description: String,
    /// Creation time, epoch milliseconds
    pub timestamp: i64,
}

/// What the admin form submits; id and timestamp are assigned at insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub name: String,
    pub grade: Grade,
    pub class_name: ClassName,
    pub gender: Gender,
    pub content_type: ContentType,
    pub link: String,
    pub description: String,
}

impl StudentForm {
    /// Promote form data to a full record with the given id and timestamp
    pub fn into_student(self, id: String, timestamp: i64) -> Student {
        Student {
            id,
            name: self.name,
            grade: self.grade,
            class_name: self.class_name,
            gender: self.gender,
            content_type: self.content_type,
            link: self.link,
            description: self.description,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_round_trip() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_str(grade.as_str()), Some(grade));
        }
        assert_eq!(Grade::from_str("大大班"), None);
    }

    #[test]
    fn test_content_type_round_trip() {
        for ct in ContentType::ALL {
            assert_eq!(ContentType::from_str(ct.as_str()), Some(ct));
        }
        assert_eq!(ContentType::from_str("word"), None);
    }

    #[test]
    fn test_student_json_matches_original_layout() {
        let student = Student {
            id: "1700000000000".to_string(),
            name: "王小明".to_string(),
            grade: Grade::Junior,
            class_name: ClassName::Apple,
            gender: Gender::Boy,
            content_type: ContentType::Photo,
            link: "#".to_string(),
            description: "測試".to_string(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&student).unwrap();
        assert!(json.contains("\"className\":\"蘋果\""));
        assert!(json.contains("\"contentType\":\"照片\""));
        assert!(json.contains("\"grade\":\"小班\""));
        assert!(json.contains("\"gender\":\"boy\""));
    }

    #[test]
    fn test_student_parses_original_blob() {
        // Shape produced by the previous deployment of the gallery
        let json = r#"{
            "id": "42",
            "name": "陳小美",
            "grade": "大班",
            "className": "檸檬",
            "gender": "girl",
            "contentType": "影片",
            "link": "https://example.com/v.mp4",
            "description": "唱遊課的表演",
            "timestamp": 1699999999999
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.grade, Grade::Senior);
        assert_eq!(student.class_name, ClassName::Lemon);
        assert_eq!(student.content_type, ContentType::Video);
        assert_eq!(student.gender, Gender::Girl);
    }

    #[test]
    fn test_form_promotion() {
        let form = StudentForm {
            name: "Test".to_string(),
            grade: Grade::Middle,
            class_name: ClassName::Grape,
            gender: Gender::Girl,
            content_type: ContentType::Canva,
            link: "x".to_string(),
            description: "y".to_string(),
        };
        let student = form.clone().into_student("123".to_string(), 123);
        assert_eq!(student.id, "123");
        assert_eq!(student.timestamp, 123);
        assert_eq!(student.name, form.name);
        assert_eq!(student.class_name, form.class_name);
    }
}
