//! Startup seed data
//!
//! The portal ships with a fixed demo dataset: four users (one per role),
//! the employee directory, the criteria catalog, the policy catalog, and a
//! few documents and evaluations already in flight. Everything is volatile;
//! a restart reseeds from scratch.

use chrono::NaiveDate;
use shared::{EvaluationCategory, Role};

use crate::db::PortalStore;
use crate::db::models::{
    CriteriaScore, Department, Document, DocumentStatus, Employee, Evaluation,
    EvaluationCriterion, EvaluationStatus, Policy, User,
};

/// Development password shared by all seeded users
pub const SEED_PASSWORD: &str = "password123";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Populate an empty store with the demo dataset
///
/// # Panics
///
/// Panics when password hashing fails; the server cannot start without a
/// usable credential store.
pub fn seed(store: &PortalStore) {
    seed_users(store);
    seed_departments(store);
    seed_employees(store);
    seed_criteria(store);
    seed_policies(store);
    seed_documents(store);
    seed_evaluations(store);

    tracing::debug!(
        password = SEED_PASSWORD,
        "Seeded demo users; all accounts share the development password"
    );
}

fn seed_users(store: &PortalStore) {
    let hash = User::hash_password(SEED_PASSWORD).expect("Failed to hash seed password");

    let users = vec![
        User {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@hrmetric.com".to_string(),
            password_hash: hash.clone(),
            role: Role::Admin,
            avatar: "https://i.pravatar.cc/150?img=67".to_string(),
        },
        User {
            id: 2,
            name: "Budi Santoso".to_string(),
            email: "budi@hrmetric.com".to_string(),
            password_hash: hash.clone(),
            role: Role::Manager,
            avatar: "https://i.pravatar.cc/150?img=68".to_string(),
        },
        User {
            id: 3,
            name: "Siti Rahayu".to_string(),
            email: "siti@hrmetric.com".to_string(),
            password_hash: hash.clone(),
            role: Role::Karyawan,
            avatar: "https://i.pravatar.cc/150?img=47".to_string(),
        },
        User {
            id: 4,
            name: "Ahmad Direktur".to_string(),
            email: "ahmad@hrmetric.com".to_string(),
            password_hash: hash,
            role: Role::Pemimpin,
            avatar: "https://i.pravatar.cc/150?img=60".to_string(),
        },
    ];

    store.claim_id("user", users.len() as u64);
    *store.users.write() = users;
}

fn seed_departments(store: &PortalStore) {
    let departments = vec![
        Department {
            id: 1,
            name: "Pemasaran".to_string(),
            description: "Pemasaran dan hubungan pelanggan".to_string(),
        },
        Department {
            id: 2,
            name: "Keuangan".to_string(),
            description: "Keuangan dan akuntansi".to_string(),
        },
        Department {
            id: 3,
            name: "SDM".to_string(),
            description: "Sumber daya manusia".to_string(),
        },
        Department {
            id: 4,
            name: "Teknologi Informasi".to_string(),
            description: "Pengembangan dan infrastruktur TI".to_string(),
        },
    ];

    store.claim_id("department", departments.len() as u64);
    *store.departments.write() = departments;
}

fn seed_employees(store: &PortalStore) {
    let employees = vec![
        Employee {
            id: 1,
            name: "Budi Santoso".to_string(),
            position: "Manager Pemasaran".to_string(),
            department: "Pemasaran".to_string(),
            hire_date: date(2020, 5, 15),
            avatar: "https://i.pravatar.cc/150?img=1".to_string(),
            performance: 92,
            personality: 87,
        },
        Employee {
            id: 2,
            name: "Siti Rahayu".to_string(),
            position: "Analis Keuangan".to_string(),
            department: "Keuangan".to_string(),
            hire_date: date(2021, 2, 10),
            avatar: "https://i.pravatar.cc/150?img=5".to_string(),
            performance: 88,
            personality: 90,
        },
        Employee {
            id: 3,
            name: "Dewi Lestari".to_string(),
            position: "Staf SDM".to_string(),
            department: "SDM".to_string(),
            hire_date: date(2022, 8, 1),
            avatar: "https://i.pravatar.cc/150?img=32".to_string(),
            performance: 78,
            personality: 82,
        },
        Employee {
            id: 4,
            name: "Agus Wijaya".to_string(),
            position: "Programmer".to_string(),
            department: "Teknologi Informasi".to_string(),
            hire_date: date(2019, 11, 4),
            avatar: "https://i.pravatar.cc/150?img=12".to_string(),
            performance: 85,
            personality: 79,
        },
    ];

    store.claim_id("employee", employees.len() as u64);
    *store.employees.write() = employees;
}

fn seed_criteria(store: &PortalStore) {
    let criteria = vec![
        EvaluationCriterion {
            id: 1,
            name: "Kedisiplinan".to_string(),
            description: "Ketepatan waktu dan kepatuhan pada aturan".to_string(),
            category: EvaluationCategory::Performance,
            weight: 20,
        },
        EvaluationCriterion {
            id: 2,
            name: "Kualitas Kerja".to_string(),
            description: "Ketelitian dan hasil pekerjaan".to_string(),
            category: EvaluationCategory::Performance,
            weight: 30,
        },
        EvaluationCriterion {
            id: 3,
            name: "Kerjasama Tim".to_string(),
            description: "Kemampuan bekerja dengan rekan".to_string(),
            category: EvaluationCategory::Personality,
            weight: 25,
        },
        EvaluationCriterion {
            id: 4,
            name: "Inisiatif".to_string(),
            description: "Kemampuan mengambil inisiatif dan solusi".to_string(),
            category: EvaluationCategory::Personality,
            weight: 25,
        },
    ];

    store.claim_id("criterion", criteria.len() as u64);
    *store.criteria.write() = criteria;
}

fn seed_policies(store: &PortalStore) {
    let policies = vec![
        Policy {
            id: 1,
            title: "Promosi Karyawan".to_string(),
            category: "SDM".to_string(),
            description: "Kebijakan promosi karyawan berdasarkan penilaian kinerja dan kepribadian yang selaras dengan nilai perusahaan.".to_string(),
            last_updated: date(2023, 10, 15),
        },
        Policy {
            id: 2,
            title: "Pengembangan Karir".to_string(),
            category: "SDM".to_string(),
            description: "Kebijakan pengembangan karir karyawan melalui pelatihan dan pendidikan lanjutan.".to_string(),
            last_updated: date(2023, 9, 22),
        },
        Policy {
            id: 3,
            title: "Penilaian Kinerja".to_string(),
            category: "Manajemen".to_string(),
            description: "Prosedur dan standar penilaian kinerja karyawan secara berkala.".to_string(),
            last_updated: date(2023, 11, 5),
        },
        Policy {
            id: 4,
            title: "Kode Etik".to_string(),
            category: "Umum".to_string(),
            description: "Kode etik dan perilaku karyawan dalam lingkungan kerja dan representasi perusahaan.".to_string(),
            last_updated: date(2023, 8, 30),
        },
        Policy {
            id: 5,
            title: "Target Perusahaan".to_string(),
            category: "Manajemen".to_string(),
            description: "Target strategis perusahaan untuk tahun berjalan dan indikator kesuksesan.".to_string(),
            last_updated: date(2024, 1, 10),
        },
        Policy {
            id: 6,
            title: "Insentif & Bonus".to_string(),
            category: "Keuangan".to_string(),
            description: "Kebijakan pemberian insentif dan bonus berdasarkan pencapaian target individual dan tim.".to_string(),
            last_updated: date(2023, 12, 12),
        },
    ];

    store.claim_id("policy", policies.len() as u64);
    *store.policies.write() = policies;
}

fn seed_documents(store: &PortalStore) {
    let documents = vec![
        Document {
            id: 1,
            title: "Laporan Kinerja Q1 2023".to_string(),
            description: "Laporan kinerja triwulan pertama".to_string(),
            file_name: "report1.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            upload_date: date(2023, 4, 15),
            uploaded_by: 3,
            employee_id: 2,
            category: "Laporan".to_string(),
            status: DocumentStatus::Approved,
            comments: Some("Laporan lengkap dan terperinci".to_string()),
        },
        Document {
            id: 2,
            title: "Evaluasi Proyek Marketing".to_string(),
            description: "Evaluasi hasil proyek pemasaran semester ini".to_string(),
            file_name: "eval1.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            upload_date: date(2023, 6, 22),
            uploaded_by: 2,
            employee_id: 1,
            category: "Evaluasi".to_string(),
            status: DocumentStatus::Pending,
            comments: None,
        },
    ];

    store.claim_id("document", documents.len() as u64);
    *store.documents.write() = documents;
}

fn seed_evaluations(store: &PortalStore) {
    // Composite scores on the seeded employees match the latest of these
    // records under the weighted-average formula.
    let evaluations = vec![
        Evaluation {
            id: 1,
            employee_id: 2,
            manager_id: 2,
            date: date(2023, 12, 15),
            status: EvaluationStatus::Pending,
            criteria_scores: vec![
                CriteriaScore { criteria_id: 1, score: 85 },
                CriteriaScore { criteria_id: 2, score: 90 },
                CriteriaScore { criteria_id: 3, score: 88 },
                CriteriaScore { criteria_id: 4, score: 92 },
            ],
            overall_comment: Some(
                "Kinerja sangat baik, perlu peningkatan kedisiplinan".to_string(),
            ),
            approved_by: None,
            approved_date: None,
        },
        Evaluation {
            id: 2,
            employee_id: 1,
            manager_id: 2,
            date: date(2023, 11, 20),
            status: EvaluationStatus::Approved,
            criteria_scores: vec![
                CriteriaScore { criteria_id: 1, score: 95 },
                CriteriaScore { criteria_id: 2, score: 90 },
                CriteriaScore { criteria_id: 3, score: 89 },
                CriteriaScore { criteria_id: 4, score: 85 },
            ],
            overall_comment: Some("Kemampuan kepemimpinan yang baik".to_string()),
            approved_by: Some(4),
            approved_date: Some(date(2023, 11, 25)),
        },
    ];

    store.claim_id("evaluation", evaluations.len() as u64);
    *store.evaluations.write() = evaluations;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{EmployeeRepository, UserRepository};
    use std::sync::Arc;

    #[test]
    fn seed_populates_every_collection() {
        let store = Arc::new(PortalStore::new());
        seed(&store);

        assert_eq!(store.users.read().len(), 4);
        assert_eq!(store.employees.read().len(), 4);
        assert_eq!(store.criteria.read().len(), 4);
        assert_eq!(store.departments.read().len(), 4);
        assert_eq!(store.policies.read().len(), 6);
        assert_eq!(store.documents.read().len(), 2);
        assert_eq!(store.evaluations.read().len(), 2);
    }

    #[test]
    fn seeded_ids_do_not_collide_with_new_rows() {
        let store = Arc::new(PortalStore::new());
        seed(&store);

        let repo = EmployeeRepository::new(store.clone());
        let created = repo
            .create(crate::db::models::EmployeeCreate {
                name: "Rina Kusuma".to_string(),
                position: "Desainer".to_string(),
                department: "Pemasaran".to_string(),
                hire_date: date(2024, 1, 8),
                avatar: None,
                performance: None,
                personality: None,
            })
            .unwrap();
        assert_eq!(created.id, 5);
    }

    #[test]
    fn seeded_users_authenticate_with_dev_password() {
        let store = Arc::new(PortalStore::new());
        seed(&store);

        let users = UserRepository::new(store);
        let admin = users.find_by_email("admin@hrmetric.com").unwrap();
        assert!(admin.verify_password(SEED_PASSWORD).unwrap());
        assert!(!admin.verify_password("wrong").unwrap());
    }
}
