//! Fluent builder pattern for constructing test rows.

use chrono::{NaiveDate, NaiveDateTime};
use hospital_query_domain::{PatientRecord, UserRecord};

/// Builder for creating UserRecord test instances
#[derive(Clone)]
pub struct UserRecordBuilder {
    cd_usuario: String,
    nm_usuario: String,
    cpf: String,
    sn_senha_plogin: Option<String>,
    sn_ativo: String,
}

impl UserRecordBuilder {
    pub fn new() -> Self {
        Self {
            cd_usuario: "TESTE.USUARIO".to_string(),
            nm_usuario: "USUARIO DE TESTE".to_string(),
            cpf: "00000000191".to_string(),
            sn_senha_plogin: Some("N".to_string()),
            sn_ativo: "S".to_string(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.cd_usuario = code.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.nm_usuario = name.into();
        self
    }

    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = cpf.into();
        self
    }

    /// Mark the user as still having to change the first-login password.
    pub fn pending_first_login(mut self) -> Self {
        self.sn_senha_plogin = Some("S".to_string());
        self
    }

    pub fn without_first_login_flag(mut self) -> Self {
        self.sn_senha_plogin = None;
        self
    }

    pub fn build(self) -> UserRecord {
        UserRecord {
            cd_usuario: self.cd_usuario,
            nm_usuario: self.nm_usuario,
            cpf: self.cpf,
            sn_senha_plogin: self.sn_senha_plogin,
            sn_ativo: self.sn_ativo,
        }
    }
}

impl Default for UserRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating PatientRecord test instances
#[derive(Clone)]
pub struct PatientRecordBuilder {
    cd_paciente: i64,
    nm_paciente: String,
    dt_nascimento: Option<NaiveDateTime>,
    nr_cpf: Option<String>,
    tp_sexo: Option<String>,
    cd_atendimento: i64,
    dt_atendimento: NaiveDateTime,
    ds_leito: String,
    cd_leito: i64,
}

impl PatientRecordBuilder {
    pub fn new() -> Self {
        Self {
            cd_paciente: 1,
            nm_paciente: "PACIENTE DE TESTE".to_string(),
            dt_nascimento: at_midnight(1970, 1, 1),
            nr_cpf: None,
            tp_sexo: Some("F".to_string()),
            cd_atendimento: 1,
            dt_atendimento: at_midnight(2024, 1, 1).unwrap_or_default(),
            ds_leito: "LEITO 1".to_string(),
            cd_leito: 1,
        }
    }

    pub fn with_patient(mut self, code: i64, name: impl Into<String>) -> Self {
        self.cd_paciente = code;
        self.nm_paciente = name.into();
        self
    }

    pub fn with_encounter(mut self, code: i64) -> Self {
        self.cd_atendimento = code;
        self
    }

    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.nr_cpf = Some(cpf.into());
        self
    }

    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.tp_sexo = Some(sex.into());
        self
    }

    pub fn born_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.dt_nascimento = at_midnight(year, month, day);
        self
    }

    pub fn admitted_on(mut self, year: i32, month: u32, day: u32) -> Self {
        if let Some(date) = at_midnight(year, month, day) {
            self.dt_atendimento = date;
        }
        self
    }

    /// Place the patient in bed `code`, described as `LEITO <code>`.
    pub fn in_bed(mut self, code: i64) -> Self {
        self.cd_leito = code;
        self.ds_leito = format!("LEITO {}", code);
        self
    }

    pub fn build(self) -> PatientRecord {
        PatientRecord {
            cd_paciente: self.cd_paciente,
            nm_paciente: self.nm_paciente,
            dt_nascimento: self.dt_nascimento,
            nr_cpf: self.nr_cpf,
            tp_sexo: self.tp_sexo,
            cd_atendimento: self.cd_atendimento,
            dt_atendimento: self.dt_atendimento,
            ds_leito: self.ds_leito,
            cd_leito: self.cd_leito,
        }
    }
}

impl Default for PatientRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn at_midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
}
