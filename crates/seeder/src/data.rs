//! Literal sample data: the course catalog and its lessons.
//!
//! Records are written as JSON literals and lifted into field lists;
//! `createdAt`/`updatedAt` timestamps are attached at run start since JSON
//! cannot carry them.

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset};
use firedoc::{fields_from_json, Value};
use serde_json::json;

/// One document to write: collection, document id, field list.
pub struct SeedRecord {
    pub collection: &'static str,
    pub doc_id: String,
    pub fields: Vec<(String, Value)>,
}

/// Lifts a JSON object literal into a seed record. The `id` field names the
/// document and stays in the body as well, matching what the store expects
/// from this dataset.
pub fn record(
    collection: &'static str,
    now: DateTime<FixedOffset>,
    body: serde_json::Value,
) -> Result<SeedRecord> {
    let mut fields = fields_from_json(body)?;
    let doc_id = fields
        .iter()
        .find(|(k, _)| k == "id")
        .and_then(|(_, v)| match v {
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .ok_or_else(|| anyhow!("seed record for `{}` missing a string `id` field", collection))?;
    fields.push(("createdAt".to_string(), Value::Timestamp(now)));
    fields.push(("updatedAt".to_string(), Value::Timestamp(now)));
    Ok(SeedRecord {
        collection,
        doc_id,
        fields,
    })
}

pub fn courses(now: DateTime<FixedOffset>) -> Result<Vec<SeedRecord>> {
    let bodies = vec![
        json!({
            "id": "flutter_basics",
            "title": "Flutter Development Fundamentals",
            "description": "Learn the basics of Flutter development from scratch. This comprehensive course covers widgets, state management, navigation, and more.",
            "instructor": "Dr. Sarah Ahmed",
            "thumbnailUrl": "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=400",
            "category": "Mobile Development",
            "duration": 480,
            "totalLessons": 12,
            "rating": 4.8,
            "enrolledCount": 1250,
            "difficulty": "beginner",
            "tags": ["Flutter", "Dart", "Mobile", "Cross-platform"],
            "isPublished": true
        }),
        json!({
            "id": "react_advanced",
            "title": "Advanced React Patterns",
            "description": "Master advanced React concepts including hooks, context, performance optimization, and modern development patterns.",
            "instructor": "Prof. Michael Johnson",
            "thumbnailUrl": "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400",
            "category": "Web Development",
            "duration": 600,
            "totalLessons": 15,
            "rating": 4.9,
            "enrolledCount": 890,
            "difficulty": "intermediate",
            "tags": ["React", "JavaScript", "Hooks", "Performance"],
            "isPublished": true
        }),
        json!({
            "id": "python_ml",
            "title": "Machine Learning with Python",
            "description": "Complete guide to machine learning using Python, covering algorithms, data preprocessing, model evaluation, and deployment.",
            "instructor": "Dr. Aisha Khan",
            "thumbnailUrl": "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=400",
            "category": "Data Science",
            "duration": 720,
            "totalLessons": 18,
            "rating": 4.7,
            "enrolledCount": 2100,
            "difficulty": "intermediate",
            "tags": ["Python", "Machine Learning", "Data Science", "AI"],
            "isPublished": true
        }),
        json!({
            "id": "aws_cloud",
            "title": "AWS Cloud Architecture",
            "description": "Learn to design and implement scalable cloud solutions using Amazon Web Services.",
            "instructor": "Eng. David Wilson",
            "thumbnailUrl": "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=400",
            "category": "Cloud Computing",
            "duration": 540,
            "totalLessons": 14,
            "rating": 4.6,
            "enrolledCount": 750,
            "difficulty": "advanced",
            "tags": ["AWS", "Cloud", "DevOps", "Architecture"],
            "isPublished": true
        }),
        json!({
            "id": "ui_ux_design",
            "title": "UI/UX Design Principles",
            "description": "Master the fundamentals of user interface and user experience design with practical projects.",
            "instructor": "Designer Lisa Chen",
            "thumbnailUrl": "https://images.unsplash.com/photo-1558655146-d09347e92766?w=400",
            "category": "Design",
            "duration": 360,
            "totalLessons": 10,
            "rating": 4.5,
            "enrolledCount": 980,
            "difficulty": "beginner",
            "tags": ["UI Design", "UX Design", "Figma", "Prototyping"],
            "isPublished": true
        }),
        json!({
            "id": "nodejs_backend",
            "title": "Node.js Backend Development",
            "description": "Build scalable backend applications with Node.js, Express, and MongoDB.",
            "instructor": "Dev. Robert Brown",
            "thumbnailUrl": "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=400",
            "category": "Backend Development",
            "duration": 660,
            "totalLessons": 16,
            "rating": 4.7,
            "enrolledCount": 1150,
            "difficulty": "intermediate",
            "tags": ["Node.js", "Express", "MongoDB", "API"],
            "isPublished": true
        }),
        json!({
            "id": "devops_cicd",
            "title": "DevOps & CI/CD Pipeline",
            "description": "Learn to automate software deployment with CI/CD pipelines using Jenkins, Docker, and Kubernetes.",
            "instructor": "DevOps Engineer James Martinez",
            "thumbnailUrl": "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=400",
            "category": "DevOps",
            "duration": 540,
            "totalLessons": 13,
            "rating": 4.6,
            "enrolledCount": 680,
            "difficulty": "advanced",
            "tags": ["DevOps", "CI/CD", "Docker", "Kubernetes", "Jenkins"],
            "isPublished": true
        }),
        json!({
            "id": "blockchain_basics",
            "title": "Blockchain Fundamentals",
            "description": "Understand blockchain technology, smart contracts, and decentralized applications.",
            "instructor": "Dr. Emma Thompson",
            "thumbnailUrl": "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=400",
            "category": "Blockchain",
            "duration": 480,
            "totalLessons": 12,
            "rating": 4.4,
            "enrolledCount": 520,
            "difficulty": "beginner",
            "tags": ["Blockchain", "Ethereum", "Smart Contracts", "Web3"],
            "isPublished": true
        }),
        json!({
            "id": "angular_advanced",
            "title": "Advanced Angular Development",
            "description": "Master advanced Angular features including lazy loading, RxJS, and enterprise patterns.",
            "instructor": "Prof. Kevin Lee",
            "thumbnailUrl": "https://images.unsplash.com/photo-1593288942460-e321b92f744d?w=400",
            "category": "Web Development",
            "duration": 600,
            "totalLessons": 15,
            "rating": 4.8,
            "enrolledCount": 950,
            "difficulty": "intermediate",
            "tags": ["Angular", "TypeScript", "RxJS", "Enterprise"],
            "isPublished": true
        }),
        json!({
            "id": "data_analytics",
            "title": "Data Analytics with Python",
            "description": "Learn data analysis, visualization, and insights using Python, pandas, and matplotlib.",
            "instructor": "Dr. Maria Garcia",
            "thumbnailUrl": "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400",
            "category": "Data Science",
            "duration": 420,
            "totalLessons": 11,
            "rating": 4.5,
            "enrolledCount": 1100,
            "difficulty": "beginner",
            "tags": ["Python", "Pandas", "Data Visualization", "Analytics"],
            "isPublished": true
        }),
    ];
    bodies
        .into_iter()
        .map(|body| record("courses", now, body))
        .collect()
}

pub fn lessons(now: DateTime<FixedOffset>) -> Result<Vec<SeedRecord>> {
    let bodies = vec![
        // Flutter basics
        json!({
            "id": "flutter_intro",
            "courseId": "flutter_basics",
            "title": "Introduction to Flutter",
            "description": "Get started with Flutter development environment and understand the basics.",
            "type": "video",
            "order": 1,
            "duration": 30,
            "videoUrl": "https://youtu.be/VPvVD8t02U8?si=RPYAJhMp8Ez3-REE",
            "isPublished": true,
            "isFree": true,
            "attachments": []
        }),
        json!({
            "id": "flutter_quiz_lesson",
            "courseId": "flutter_basics",
            "title": "Flutter Quiz Assessment",
            "description": "Test your understanding of Flutter fundamentals with this quiz.",
            "type": "quiz",
            "order": 4,
            "duration": 15,
            "quizId": "flutter_quiz",
            "isPublished": true,
            "isFree": true,
            "attachments": []
        }),
        json!({
            "id": "flutter_widgets",
            "courseId": "flutter_basics",
            "title": "Understanding Widgets",
            "description": "Learn about Flutter widgets and how to use them effectively.",
            "type": "video",
            "order": 2,
            "duration": 45,
            "videoUrl": "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            "isPublished": true,
            "isFree": false,
            "attachments": []
        }),
        json!({
            "id": "flutter_state",
            "courseId": "flutter_basics",
            "title": "State Management in Flutter",
            "description": "Master state management patterns in Flutter applications.",
            "type": "video",
            "order": 3,
            "duration": 60,
            "videoUrl": "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
            "isPublished": true,
            "isFree": false,
            "attachments": []
        }),
        // React advanced
        json!({
            "id": "react_hooks",
            "courseId": "react_advanced",
            "title": "Advanced React Hooks",
            "description": "Deep dive into custom hooks and advanced hook patterns.",
            "type": "video",
            "order": 1,
            "duration": 50,
            "videoUrl": "https://youtu.be/dCLhUialKPQ?si=C5iRtUi9nMFN_T4-",
            "isPublished": true,
            "isFree": true,
            "attachments": []
        }),
        json!({
            "id": "react_performance",
            "courseId": "react_advanced",
            "title": "Performance Optimization",
            "description": "Learn techniques to optimize React application performance.",
            "type": "video",
            "order": 2,
            "duration": 55,
            "videoUrl": "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            "isPublished": true,
            "isFree": false,
            "attachments": []
        }),
        // Python ML
        json!({
            "id": "ml_intro",
            "courseId": "python_ml",
            "title": "Introduction to Machine Learning",
            "description": "Understanding the fundamentals of machine learning.",
            "type": "video",
            "order": 1,
            "duration": 40,
            "videoUrl": "https://youtu.be/hDKCxebp88A?si=72DaJGe5JxMhrhOB",
            "isPublished": true,
            "isFree": true,
            "attachments": []
        }),
        json!({
            "id": "ml_models",
            "courseId": "python_ml",
            "title": "Building ML Models",
            "description": "Learn to build and train machine learning models.",
            "type": "video",
            "order": 2,
            "duration": 65,
            "videoUrl": "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
            "isPublished": true,
            "isFree": false,
            "attachments": []
        }),
        // AWS cloud
        json!({
            "id": "aws_ec2",
            "courseId": "aws_cloud",
            "title": "AWS EC2 Fundamentals",
            "description": "Learn about AWS EC2 instances and configuration.",
            "type": "video",
            "order": 1,
            "duration": 50,
            "videoUrl": "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            "isPublished": true,
            "isFree": true,
            "attachments": []
        }),
        // UI/UX
        json!({
            "id": "ux_research",
            "courseId": "ui_ux_design",
            "title": "UX Research Methods",
            "description": "Learn essential UX research techniques and methodologies.",
            "type": "video",
            "order": 1,
            "duration": 45,
            "videoUrl": "https://youtu.be/truRwcI7-kg?si=pKTi6MIGBxEr8ju8",
            "isPublished": true,
            "isFree": true,
            "attachments": []
        }),
        // Node.js
        json!({
            "id": "node_intro",
            "courseId": "nodejs_backend",
            "title": "Introduction to Node.js",
            "description": "Get started with Node.js and npm packages.",
            "type": "video",
            "order": 1,
            "duration": 40,
            "videoUrl": "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
            "isPublished": true,
            "isFree": true,
            "attachments": []
        }),
        json!({
            "id": "express_api",
            "courseId": "nodejs_backend",
            "title": "Building REST APIs with Express",
            "description": "Create RESTful APIs using Express framework.",
            "type": "video",
            "order": 2,
            "duration": 60,
            "videoUrl": "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            "isPublished": true,
            "isFree": false,
            "attachments": []
        }),
    ];
    bodies
        .into_iter()
        .map(|body| record("lessons", now, body))
        .collect()
}
