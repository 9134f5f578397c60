//! Built-in directory seed

use super::{Role, UserRecord};

/// The fixed accounts every fresh install starts with, one per role.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            email: "super@apexlms.com".to_string(),
            role: Role::Superadmin,
            name: "System Admin".to_string(),
        },
        UserRecord {
            id: 2,
            email: "admin@apexlms.com".to_string(),
            role: Role::Admin,
            name: "Instructor Bob".to_string(),
        },
        UserRecord {
            id: 3,
            email: "student@apexlms.com".to_string(),
            role: Role::Learner,
            name: "Alice Student".to_string(),
        },
    ]
}
