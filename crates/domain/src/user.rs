//! Active-user rows.

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One row of the active-user query.
///
/// Keys serialize exactly as the source columns are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User code (login)
    pub cd_usuario: String,

    /// Full name
    pub nm_usuario: String,

    /// National ID (CPF), stored as text
    pub cpf: String,

    /// Whether the user still has to change the first-login password (`S`/`N`)
    pub sn_senha_plogin: Option<String>,

    /// Active flag (`S`/`N`)
    pub sn_ativo: String,
}

impl UserRecord {
    /// Value of a single field, as it would appear in the serialized row.
    pub fn field(&self, field: UserField) -> Value {
        match field {
            UserField::Code => Value::from(self.cd_usuario.as_str()),
            UserField::Name => Value::from(self.nm_usuario.as_str()),
            UserField::Cpf => Value::from(self.cpf.as_str()),
            UserField::FirstLogin => self
                .sn_senha_plogin
                .as_deref()
                .map_or(Value::Null, Value::from),
            UserField::Active => Value::from(self.sn_ativo.as_str()),
        }
    }

    /// Exact national-ID match. No normalization is applied.
    pub fn has_cpf(&self, cpf: &str) -> bool {
        self.cpf == cpf
    }
}

/// Allow-list of user fields that can be projected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    /// `cd_usuario`
    Code,
    /// `nm_usuario`
    Name,
    /// `cpf`
    Cpf,
    /// `sn_senha_plogin`
    FirstLogin,
    /// `sn_ativo`
    Active,
}

impl UserField {
    /// Every projectable field, in column order.
    pub const ALL: [UserField; 5] = [
        Self::Code,
        Self::Name,
        Self::Cpf,
        Self::FirstLogin,
        Self::Active,
    ];

    /// Column name as it appears in rows and in the URL.
    pub fn column(self) -> &'static str {
        match self {
            Self::Code => "cd_usuario",
            Self::Name => "nm_usuario",
            Self::Cpf => "cpf",
            Self::FirstLogin => "sn_senha_plogin",
            Self::Active => "sn_ativo",
        }
    }
}

impl FromStr for UserField {
    type Err = DomainError;

    /// Column names match case-insensitively (`NM_USUARIO` is accepted).
    fn from_str(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.column().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownUserField(s.to_string()))
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
