//! Shared record shapes for model tests.

#![allow(dead_code)]

use recordkit_model::record_fields;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Audit columns embedded into several records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    pub created_by: String,
    pub created_at: i64,
}

/// Shape of an inbound member payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub age: Option<u32>,
    pub phone: String,
    pub level: i32,
    pub remark: String,
    pub audit: Audit,
}

/// Shape of a persisted member row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberRow {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub phone: Option<String>,
    pub level: i64,
    pub created_by: String,
    pub created_at: i64,
}

record_fields!(Audit { created_by, created_at });
record_fields!(MemberForm {
    name,
    age: optional,
    phone,
    level,
    remark,
    audit: embedded,
});
record_fields!(MemberRow {
    id: read_only,
    name,
    age,
    phone: optional,
    level,
    created_by,
    created_at,
});

/// A record with nested containers, for deep-copy tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub coach: Option<String>,
    pub tags: Vec<String>,
    pub seats: HashMap<String, u32>,
    pub fee: f64,
    pub audit: Audit,
}

pub fn form() -> MemberForm {
    MemberForm {
        name: "Zhang Wei".to_string(),
        age: Some(31),
        phone: "13800138000".to_string(),
        level: 3,
        remark: "vip".to_string(),
        audit: Audit {
            created_by: "desk-2".to_string(),
            created_at: 1_700_000_000,
        },
    }
}

pub fn row() -> MemberRow {
    MemberRow {
        id: 42,
        name: "old".to_string(),
        age: 20,
        phone: None,
        level: 9,
        created_by: "import".to_string(),
        created_at: 1,
    }
}
