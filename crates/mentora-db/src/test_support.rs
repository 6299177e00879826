//! Shared test utilities for mentora-db unit tests.

pub(crate) mod helpers {
    use mentora_core::Semester;
    use mentora_core::entities::{Mentee, Mentor};

    use crate::MentoraDb;
    use crate::repos::mentee::NewMentee;
    use crate::service::MentoraService;

    /// In-memory service with a fresh schema.
    pub async fn test_service() -> MentoraService {
        let db = MentoraDb::open_local(":memory:").await.unwrap();
        MentoraService::from_db(db)
    }

    pub async fn seed_mentor(svc: &MentoraService, name: &str) -> Mentor {
        svc.create_mentor(name, None).await.unwrap()
    }

    pub async fn seed_mentee(
        svc: &MentoraService,
        enrollment_no: &str,
        semester: u8,
        mentor_id: Option<&str>,
    ) -> Mentee {
        svc.create_mentee(&NewMentee {
            name: format!("Student {enrollment_no}"),
            enrollment_no: enrollment_no.to_string(),
            semester: Semester::new(semester).unwrap(),
            mentor_id: mentor_id.map(String::from),
        })
        .await
        .unwrap()
    }
}
