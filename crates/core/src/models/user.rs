//! Account roles
//!
//! Accounts start as `User` and are promoted through review workflows to
//! `Critic` or `ProductionCompany`; `Admin` is assigned manually.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Critic,
    ProductionCompany,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Critic => "critic",
            Role::ProductionCompany => "production_company",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "critic" => Some(Role::Critic),
            "production_company" => Some(Role::ProductionCompany),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}
